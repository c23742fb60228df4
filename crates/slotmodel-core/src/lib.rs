//! Core metadata engine for SlotModel: entity type descriptors, dense slot
//! index assignment over inheritance hierarchies, and member-to-storage
//! access resolution.
#![warn(unreachable_pub)]

pub mod access;
pub mod error;
pub mod index;
pub mod model;
pub mod types;

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] error::ModelError),

    #[error(transparent)]
    Resolve(#[from] error::ResolveError),
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors and the engine entry points are imported from their modules.
///

pub mod prelude {
    pub use crate::{
        access::AccessLocation,
        index::{SlotCounts, SlotIndexes},
        model::{
            EntityDef, Model,
            member::{AccessorPair, Backing, FieldLocator, MemberRef, Navigation, Property},
        },
        types::{AccessIntent, AccessMode, Cardinality, ChangeTracking},
    };
}
