use crate::{error::ModelError, model::Model};
use std::sync::{
    Arc, LazyLock, RwLock,
    atomic::{AtomicU64, Ordering},
};

///
/// MODEL
/// the process-wide installed model
///

static MODEL: LazyLock<RwLock<Option<Arc<Model>>>> = LazyLock::new(|| RwLock::new(None));

static GENERATION: AtomicU64 = AtomicU64::new(0);

/// Validate and install a model, atomically replacing the current one.
///
/// Readers hold `Arc` snapshots, so a rebuild can never interleave old and
/// new slot assignments for one observer: a snapshot is entirely one
/// generation, caches included.
pub fn install_model(mut model: Model) -> Result<Arc<Model>, ModelError> {
    model.validate()?;
    model.generation = GENERATION.fetch_add(1, Ordering::Relaxed) + 1;

    let model = Arc::new(model);
    let mut guard = MODEL
        .write()
        .expect("model RwLock poisoned while acquiring write lock");
    *guard = Some(Arc::clone(&model));

    Ok(model)
}

/// Snapshot of the currently installed model, if any.
pub fn current_model() -> Option<Arc<Model>> {
    MODEL
        .read()
        .expect("model RwLock poisoned while acquiring read lock")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityDef;

    // one test: the registry is process-global state
    #[test]
    fn install_validates_swaps_and_bumps_the_generation() {
        let first = install_model(Model::new().with_entity(EntityDef::new("Order")))
            .expect("valid model installs");
        assert!(first.generation() > 0);

        let second = install_model(Model::new().with_entity(EntityDef::new("Order")))
            .expect("valid model installs");
        assert!(second.generation() > first.generation());

        // a rejected install leaves the previous snapshot in place
        let bad = Model::new().with_entity(EntityDef::new("Order").with_base("Missing"));
        assert!(install_model(bad).is_err());

        let current = current_model().expect("a model is installed");
        assert_eq!(current.generation(), second.generation());
    }
}
