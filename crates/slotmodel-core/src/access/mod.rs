//! Member access resolution: which physical location backs construct,
//! write, and read operations for each member.

pub(crate) mod resolve;

use crate::{error::ResolveError, types::AccessIntent};
use serde::Serialize;
use std::sync::OnceLock;

///
/// AccessLocation
///
/// A concrete storage location the runtime can use for one operation:
/// either the backing field or one half of a declared accessor pair.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum AccessLocation {
    Field { ident: String },
    Getter { ident: String },
    Setter { ident: String },
}

impl AccessLocation {
    #[must_use]
    pub fn ident(&self) -> &str {
        match self {
            Self::Field { ident } | Self::Getter { ident } | Self::Setter { ident } => ident,
        }
    }
}

/// Outcome of resolving one member for one intent.
///
/// `Ok(None)` is the explicit "no location" success reserved for
/// collection-valued navigations without a physical backing; those are
/// materialized by mutating the returned collection in place.
pub type AccessResult = Result<Option<AccessLocation>, ResolveError>;

///
/// AccessCache
///
/// Per-intent write-once cells. Resolution is a pure function of the
/// member metadata and the access mode, so a lost race fills the cell with
/// an identical value.
///

#[derive(Debug, Default)]
pub(crate) struct AccessCache {
    construction: OnceLock<AccessResult>,
    set: OnceLock<AccessResult>,
    get: OnceLock<AccessResult>,
}

impl AccessCache {
    pub(crate) fn get_or_resolve(
        &self,
        intent: AccessIntent,
        resolve: impl FnOnce() -> AccessResult,
    ) -> &AccessResult {
        self.cell(intent).get_or_init(resolve)
    }

    const fn cell(&self, intent: AccessIntent) -> &OnceLock<AccessResult> {
        match intent {
            AccessIntent::Construction => &self.construction,
            AccessIntent::Set => &self.set,
            AccessIntent::Get => &self.get,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_cells_are_independent_per_intent() {
        let cache = AccessCache::default();

        let field = || {
            Ok(Some(AccessLocation::Field {
                ident: "_name".to_string(),
            }))
        };
        let none = || Ok(None);

        assert_eq!(
            cache.get_or_resolve(AccessIntent::Set, field),
            &Ok(Some(AccessLocation::Field {
                ident: "_name".to_string()
            }))
        );
        assert_eq!(cache.get_or_resolve(AccessIntent::Get, none), &Ok(None));

        // a second resolve for a filled intent never runs
        let poisoned = || unreachable!("cache must not re-resolve");
        assert!(
            cache
                .get_or_resolve(AccessIntent::Set, poisoned)
                .as_ref()
                .is_ok_and(Option::is_some)
        );
    }
}
