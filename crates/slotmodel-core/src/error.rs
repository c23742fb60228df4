use crate::types::AccessMode;
use thiserror::Error as ThisError;

///
/// ResolveError
///
/// A member could not be mapped to a physical storage location for the
/// requested intent. Each variant carries enough context to render an
/// actionable diagnostic without re-deriving it from the model.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error(
        "no backing field could be found for member '{member}' on entity '{entity}' and the '{mode}' access mode requires one"
    )]
    NoBackingField {
        member: String,
        entity: String,
        mode: AccessMode,
    },

    #[error("field '{field}' on entity '{entity}' is read-only and cannot be written")]
    ReadonlyField { field: String, entity: String },

    #[error("member '{member}' on entity '{entity}' has neither a usable field nor a setter")]
    NoFieldOrSetter { member: String, entity: String },

    #[error("member '{member}' on entity '{entity}' has neither a usable field nor a getter")]
    NoFieldOrGetter { member: String, entity: String },

    #[error(
        "member '{member}' on entity '{entity}' declares no accessor pair and the '{mode}' access mode requires one"
    )]
    NoProperty {
        member: String,
        entity: String,
        mode: AccessMode,
    },

    #[error(
        "member '{member}' on entity '{entity}' has no setter and the '{mode}' access mode forbids the field fallback"
    )]
    NoSetter {
        member: String,
        entity: String,
        mode: AccessMode,
    },

    #[error(
        "member '{member}' on entity '{entity}' has no getter and the '{mode}' access mode forbids the field fallback"
    )]
    NoGetter {
        member: String,
        entity: String,
        mode: AccessMode,
    },
}

///
/// ModelError
///
/// Structural problems detected when a model is installed. The index
/// assignor itself has no failure path; everything it relies on is
/// enforced here first.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("entity '{entity}' declares unknown base entity '{base}'")]
    UnknownBaseEntity { entity: String, base: String },

    #[error("navigation '{navigation}' on entity '{entity}' targets unknown entity '{target}'")]
    UnknownNavigationTarget {
        entity: String,
        navigation: String,
        target: String,
    },

    #[error("base chain of entity '{entity}' contains a cycle")]
    CyclicHierarchy { entity: String },

    #[error("member '{member}' is declared more than once on entity '{entity}'")]
    DuplicateMember { entity: String, member: String },

    #[error("member '{member}' on entity '{entity}' shadows a member declared on ancestor '{ancestor}'")]
    ShadowedMember {
        entity: String,
        member: String,
        ancestor: String,
    },

    #[error("unknown entity '{entity}'")]
    UnknownEntity { entity: String },
}
