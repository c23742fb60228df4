//! Descriptor model: the entity inheritance forest and its members.

pub mod entity;
pub mod member;
pub mod registry;
pub mod validate;

pub use entity::EntityDef;
pub use member::{AccessorPair, Backing, FieldLocator, MemberRef, Navigation, Property};
pub use registry::{current_model, install_model};

use crate::error::ModelError;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// Model
///
/// Owns every entity descriptor, keyed by entity ident. Cross-references
/// (base types, navigation targets) are keys resolved on demand; derived
/// types are found by scanning, so the forest needs no back-pointers.
///

#[derive(Debug, Default, Serialize)]
pub struct Model {
    entities: BTreeMap<String, EntityDef>,

    /// Stamped by the registry on install; 0 for uninstalled models.
    #[serde(skip)]
    pub(crate) generation: u64,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entity(mut self, entity: EntityDef) -> Self {
        self.insert(entity);
        self
    }

    /// Register an entity, replacing any previous descriptor with the same
    /// ident.
    pub fn insert(&mut self, entity: EntityDef) {
        self.entities.insert(entity.ident.clone(), entity);
    }

    #[must_use]
    pub fn entity(&self, ident: &str) -> Option<&EntityDef> {
        self.entities.get(ident)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityDef> {
        self.entities.values()
    }

    /// Entities with no base type; index assignment starts from these.
    pub fn roots(&self) -> impl Iterator<Item = &EntityDef> {
        self.entities().filter(|e| e.base.is_none())
    }

    /// Directly derived entities, in ident order (deterministic walk).
    pub fn directly_derived<'a>(
        &'a self,
        ident: &'a str,
    ) -> impl Iterator<Item = &'a EntityDef> {
        self.entities()
            .filter(move |e| e.base.as_deref() == Some(ident))
    }

    #[must_use]
    pub fn base_of(&self, entity: &EntityDef) -> Option<&EntityDef> {
        self.entity(entity.base.as_deref()?)
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        validate::validate_model(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::Property;

    fn sample() -> Model {
        Model::new()
            .with_entity(
                EntityDef::new("Animal").with_property(Property::new("name", "String")),
            )
            .with_entity(EntityDef::new("Cat").with_base("Animal"))
            .with_entity(EntityDef::new("Dog").with_base("Animal"))
    }

    #[test]
    fn roots_are_entities_without_a_base() {
        let model = sample();
        let roots: Vec<_> = model.roots().map(|e| e.ident.as_str()).collect();

        assert_eq!(roots, vec!["Animal"]);
    }

    #[test]
    fn directly_derived_scans_by_base_ident() {
        let model = sample();
        let derived: Vec<_> = model
            .directly_derived("Animal")
            .map(|e| e.ident.as_str())
            .collect();

        assert_eq!(derived, vec!["Cat", "Dog"]);
        assert_eq!(model.directly_derived("Cat").count(), 0);
    }

    #[test]
    fn attaching_a_member_records_the_declaring_entity() {
        let model = sample();
        let animal = model.entity("Animal").expect("Animal is registered");
        let member = animal.member("name").expect("name is declared");

        assert_eq!(member.declaring(), "Animal");
    }
}
