use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

impl Cardinality {
    /// `Many` relationships are materialized as collections and are exempt
    /// from several backing-location requirements.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// ChangeTracking
///
/// How the runtime detects changes to instances of an entity. Every
/// strategy other than `Snapshot` relies on the entity raising its own
/// notifications.
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum ChangeTracking {
    ChangedNotifications,
    ChangingAndChangedNotifications,
    ChangingAndChangedNotificationsWithOriginalValues,
    #[default]
    Snapshot,
}

impl ChangeTracking {
    #[must_use]
    pub const fn is_notifying(self) -> bool {
        !matches!(self, Self::Snapshot)
    }
}

///
/// AccessMode
///
/// Per-member policy for choosing the physical location behind construct,
/// read, and write operations. `Unspecified` is a real variant rather than
/// an absent option so the resolver matches exhaustively over all modes.
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
#[remain::sorted]
pub enum AccessMode {
    Field,
    FieldDuringConstruction,
    Property,
    #[default]
    Unspecified,
}

///
/// AccessIntent
///
/// The operation a resolved location must support. `Construction` and
/// `Set` are both writes; they differ only in which fallbacks apply.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum AccessIntent {
    Construction,
    Set,
    Get,
}

impl AccessIntent {
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Construction | Self::Set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_many_is_a_collection() {
        assert!(Cardinality::Many.is_collection());
        assert!(!Cardinality::One.is_collection());
        assert!(!Cardinality::Opt.is_collection());
    }

    #[test]
    fn every_non_snapshot_strategy_notifies() {
        assert!(!ChangeTracking::Snapshot.is_notifying());
        assert!(ChangeTracking::ChangedNotifications.is_notifying());
        assert!(ChangeTracking::ChangingAndChangedNotifications.is_notifying());
        assert!(ChangeTracking::ChangingAndChangedNotificationsWithOriginalValues.is_notifying());
    }

    #[test]
    fn construction_and_set_are_writes() {
        assert!(AccessIntent::Construction.is_write());
        assert!(AccessIntent::Set.is_write());
        assert!(!AccessIntent::Get.is_write());
    }

    #[test]
    fn access_mode_defaults_to_unspecified() {
        assert_eq!(AccessMode::default(), AccessMode::Unspecified);
    }
}
