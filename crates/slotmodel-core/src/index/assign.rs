use crate::{
    index::{SlotCounters, SlotCounts, SlotIndexes},
    model::{EntityDef, Model, member::Navigation, member::Property},
};
use tracing::{debug, trace};

/// Assign slot records to every member declared on `root` and all of its
/// descendants.
///
/// Idempotent: records are written into write-once cells and the
/// computation is deterministic for a stable declaration order, so invoking
/// this redundantly (or racing it from several threads) is harmless.
pub fn assign_indexes(model: &Model, root: &EntityDef) {
    debug!(root = %root.ident, "assigning slot indexes");
    assign_subtree(model, root, seed_counters(model, root), None);
}

/// Assign the subtree exactly as [`assign_indexes`] does, and return the
/// record of the member named `target` declared somewhere within it.
///
/// A single member lookup still has to size the whole hierarchy; the
/// counters for any one member depend on everything assigned before it.
pub fn calculate_indexes(
    model: &Model,
    entity: &EntityDef,
    target: &str,
) -> Option<SlotIndexes> {
    assign_subtree(model, entity, seed_counters(model, entity), Some(target))
}

// Aggregate counts at one entity's boundary: base counts advanced by the
// entity's own declared members. Called through the entity's write-once
// cell; recursion through the base is strictly base-before-derived.
pub(crate) fn entity_counts(model: &Model, entity: &EntityDef) -> SlotCounts {
    let mut counters = seed_counters(model, entity);

    for property in entity.declared_properties() {
        counters = property_step(counters, property).1;
    }

    let notifying = entity.change_tracking.is_notifying();
    for navigation in entity.declared_navigations() {
        counters = navigation_step(counters, navigation, notifying).1;
    }

    counters.into_counts()
}

// Derived-type slots append after all base-type slots: the starting
// counters are the base entity's aggregate counts. Entities with no (or an
// unresolvable) base start from zero; unresolvable bases are precluded by
// install-time validation.
fn seed_counters(model: &Model, entity: &EntityDef) -> SlotCounters {
    model
        .base_of(entity)
        .map_or_else(SlotCounters::default, |base| {
            SlotCounters::seeded(*base.counts(model))
        })
}

// Walk the subtree top-down. Each derived branch receives the counters by
// value as they stood after this entity's declared members, so siblings
// start from the common base counts and never observe each other.
fn assign_subtree(
    model: &Model,
    entity: &EntityDef,
    counters: SlotCounters,
    target: Option<&str>,
) -> Option<SlotIndexes> {
    let (after, mut found) = assign_declared(entity, counters, target);

    for derived in model.directly_derived(&entity.ident) {
        let hit = assign_subtree(model, derived, after, target);
        found = found.or(hit);
    }

    found
}

// Assign records to the entity's declared members in declaration order:
// scalar properties first, then navigations.
fn assign_declared(
    entity: &EntityDef,
    mut counters: SlotCounters,
    target: Option<&str>,
) -> (SlotCounters, Option<SlotIndexes>) {
    let mut found = None;

    for property in entity.declared_properties() {
        let (indexes, advanced) = property_step(counters, property);
        counters = advanced;
        trace!(entity = %entity.ident, member = %property.ident, index = indexes.index, "slot record");

        property.indexes.set(indexes).ok();
        if target == Some(property.ident.as_str()) {
            found = Some(indexes);
        }
    }

    let notifying = entity.change_tracking.is_notifying();
    for navigation in entity.declared_navigations() {
        let (indexes, advanced) = navigation_step(counters, navigation, notifying);
        counters = advanced;
        trace!(entity = %entity.ident, member = %navigation.ident, index = indexes.index, "slot record");

        navigation.indexes.set(indexes).ok();
        if target == Some(navigation.ident.as_str()) {
            found = Some(indexes);
        }
    }

    (counters, found)
}

// One fold step for a scalar property: a slot in every space whose
// predicate holds, advancing exactly those counters.
fn property_step(counters: SlotCounters, property: &Property) -> (SlotIndexes, SlotCounters) {
    let indexes = SlotIndexes {
        index: counters.index,
        original_value: property
            .requires_original_value
            .then_some(counters.original_value),
        shadow: property.shadow.then_some(counters.shadow),
        relationship: property
            .key_or_foreign_key
            .then_some(counters.relationship),
        store_generation: property
            .store_generated
            .then_some(counters.store_generation),
    };

    let advanced = SlotCounters {
        index: counters.index + 1,
        original_value: counters.original_value + usize::from(property.requires_original_value),
        shadow: counters.shadow + usize::from(property.shadow),
        relationship: counters.relationship + usize::from(property.key_or_foreign_key),
        store_generation: counters.store_generation + usize::from(property.store_generated),
    };

    (indexes, advanced)
}

// One fold step for a navigation. Navigations only ever occupy the overall
// and relationship spaces, and a collection navigation under a notifying
// strategy skips the relationship slot too: the entity's own notifications
// carry what the slot would have tracked.
fn navigation_step(
    counters: SlotCounters,
    navigation: &Navigation,
    notifying: bool,
) -> (SlotIndexes, SlotCounters) {
    let tracked = !(navigation.is_collection() && notifying);

    let indexes = SlotIndexes {
        index: counters.index,
        original_value: None,
        shadow: None,
        relationship: tracked.then_some(counters.relationship),
        store_generation: None,
    };

    let advanced = SlotCounters {
        index: counters.index + 1,
        relationship: counters.relationship + usize::from(tracked),
        ..counters
    };

    (indexes, advanced)
}
