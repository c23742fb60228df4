use crate::{
    index::{SlotCounts, assign},
    model::{
        Model,
        member::{MemberRef, Navigation, Property},
    },
    types::ChangeTracking,
};
use serde::Serialize;
use std::sync::OnceLock;

///
/// EntityDef
///
/// One node in the inheritance forest. Declared members are owned in
/// declaration order; the base reference and derived types are looked up
/// through the model on demand.
///

#[derive(Debug, Serialize)]
pub struct EntityDef {
    pub ident: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    pub change_tracking: ChangeTracking,
    pub properties: Vec<Property>,
    pub navigations: Vec<Navigation>,

    #[serde(skip)]
    pub(crate) counts: OnceLock<SlotCounts>,
}

impl EntityDef {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            base: None,
            change_tracking: ChangeTracking::default(),
            properties: Vec::new(),
            navigations: Vec::new(),
            counts: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub const fn with_change_tracking(mut self, strategy: ChangeTracking) -> Self {
        self.change_tracking = strategy;
        self
    }

    #[must_use]
    pub fn with_property(mut self, mut property: Property) -> Self {
        property.declaring = self.ident.clone();
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, mut navigation: Navigation) -> Self {
        navigation.declaring = self.ident.clone();
        self.navigations.push(navigation);
        self
    }

    // declared accessors, in declaration order

    #[must_use]
    pub fn declared_properties(&self) -> &[Property] {
        &self.properties
    }

    #[must_use]
    pub fn declared_navigations(&self) -> &[Navigation] {
        &self.navigations
    }

    /// All declared members: scalar properties first, then navigations.
    pub fn declared_members(&self) -> impl Iterator<Item = MemberRef<'_>> {
        self.properties
            .iter()
            .map(MemberRef::Property)
            .chain(self.navigations.iter().map(MemberRef::Navigation))
    }

    #[must_use]
    pub fn member(&self, ident: &str) -> Option<MemberRef<'_>> {
        self.declared_members().find(|m| m.ident() == ident)
    }

    /// Aggregate slot-space sizes at this entity's boundary, inherited
    /// members included. Computed lazily and cached write-once.
    pub fn counts<'a>(&'a self, model: &'a Model) -> &'a SlotCounts {
        self.counts
            .get_or_init(|| assign::entity_counts(model, self))
    }
}
