use crate::{
    access::{AccessCache, AccessResult, resolve},
    index::{self, SlotIndexes},
    model::Model,
    types::{AccessIntent, AccessMode, Cardinality},
};
use serde::Serialize;
use std::sync::OnceLock;

///
/// FieldLocator
///
/// A declared backing field. `read_only` marks fields that are immutable
/// after initialization and therefore unusable for non-construction writes.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldLocator {
    pub ident: String,
    pub read_only: bool,
}

impl FieldLocator {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            read_only: false,
        }
    }

    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

///
/// AccessorPair
///
/// The declared accessor surface of a member. A pair can exist with either
/// half missing (getter-only or setter-only declarations).
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccessorPair {
    pub ident: String,
    pub getter: bool,
    pub setter: bool,
}

impl AccessorPair {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            getter: true,
            setter: true,
        }
    }

    #[must_use]
    pub const fn getter_only(mut self) -> Self {
        self.setter = false;
        self
    }

    #[must_use]
    pub const fn setter_only(mut self) -> Self {
        self.getter = false;
        self
    }
}

///
/// Backing
///
/// Physical storage declarations and the access-mode policy for one
/// member. The default is a shadow backing: no field, no accessors.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Backing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldLocator>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessors: Option<AccessorPair>,

    pub access_mode: AccessMode,
}

///
/// Property
///
/// Declared scalar property descriptor.
///

#[derive(Debug, Serialize)]
pub struct Property {
    pub ident: String,
    /// Ident of the declaring entity; filled when the property is attached.
    pub declaring: String,
    /// Host type path, for diagnostics.
    pub ty: String,
    pub shadow: bool,
    pub requires_original_value: bool,
    pub store_generated: bool,
    pub key_or_foreign_key: bool,
    pub backing: Backing,

    #[serde(skip)]
    pub(crate) indexes: OnceLock<SlotIndexes>,
    #[serde(skip)]
    pub(crate) access: AccessCache,
}

impl Property {
    pub fn new(ident: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            declaring: String::new(),
            ty: ty.into(),
            shadow: false,
            requires_original_value: false,
            store_generated: false,
            key_or_foreign_key: false,
            backing: Backing::default(),
            indexes: OnceLock::new(),
            access: AccessCache::default(),
        }
    }

    #[must_use]
    pub fn shadow(mut self) -> Self {
        self.shadow = true;
        self
    }

    #[must_use]
    pub fn requires_original_value(mut self) -> Self {
        self.requires_original_value = true;
        self
    }

    #[must_use]
    pub fn store_generated(mut self) -> Self {
        self.store_generated = true;
        self
    }

    #[must_use]
    pub fn key_or_foreign_key(mut self) -> Self {
        self.key_or_foreign_key = true;
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldLocator) -> Self {
        self.backing.field = Some(field);
        self
    }

    #[must_use]
    pub fn accessors(mut self, accessors: AccessorPair) -> Self {
        self.backing.accessors = Some(accessors);
        self
    }

    #[must_use]
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.backing.access_mode = mode;
        self
    }
}

///
/// Navigation
///
/// Declared relationship descriptor. `target` is the key of the related
/// entity in the model; `Many` cardinality marks a collection navigation.
///

#[derive(Debug, Serialize)]
pub struct Navigation {
    pub ident: String,
    /// Ident of the declaring entity; filled when the navigation is attached.
    pub declaring: String,
    pub target: String,
    pub cardinality: Cardinality,
    pub backing: Backing,

    #[serde(skip)]
    pub(crate) indexes: OnceLock<SlotIndexes>,
    #[serde(skip)]
    pub(crate) access: AccessCache,
}

impl Navigation {
    pub fn new(ident: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            declaring: String::new(),
            target: target.into(),
            cardinality: Cardinality::One,
            backing: Backing::default(),
            indexes: OnceLock::new(),
            access: AccessCache::default(),
        }
    }

    #[must_use]
    pub const fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldLocator) -> Self {
        self.backing.field = Some(field);
        self
    }

    #[must_use]
    pub fn accessors(mut self, accessors: AccessorPair) -> Self {
        self.backing.accessors = Some(accessors);
        self
    }

    #[must_use]
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.backing.access_mode = mode;
        self
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.cardinality.is_collection()
    }
}

///
/// MemberRef
///
/// Uniform view over the two member variants; everything downstream of
/// declaration (indexing, resolution, caching) goes through this.
///

#[derive(Clone, Copy, Debug)]
pub enum MemberRef<'a> {
    Property(&'a Property),
    Navigation(&'a Navigation),
}

impl<'a> MemberRef<'a> {
    #[must_use]
    pub fn ident(&self) -> &'a str {
        match self {
            Self::Property(p) => &p.ident,
            Self::Navigation(n) => &n.ident,
        }
    }

    #[must_use]
    pub fn declaring(&self) -> &'a str {
        match self {
            Self::Property(p) => &p.declaring,
            Self::Navigation(n) => &n.declaring,
        }
    }

    #[must_use]
    pub fn backing(&self) -> &'a Backing {
        match self {
            Self::Property(p) => &p.backing,
            Self::Navigation(n) => &n.backing,
        }
    }

    /// True only for `Many`-cardinality navigations; scalar properties are
    /// never collections.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        match self {
            Self::Property(_) => false,
            Self::Navigation(n) => n.is_collection(),
        }
    }

    pub(crate) const fn indexes_cell(&self) -> &'a OnceLock<SlotIndexes> {
        match self {
            Self::Property(p) => &p.indexes,
            Self::Navigation(n) => &n.indexes,
        }
    }

    pub(crate) const fn access_cache(&self) -> &'a AccessCache {
        match self {
            Self::Property(p) => &p.access,
            Self::Navigation(n) => &n.access,
        }
    }

    /// Slot assignment for this member, computing it on first use.
    ///
    /// Computation sizes the declaring entity's whole subtree (seeded from
    /// its base counts), so a single lookup still yields hierarchy-wide
    /// consistent indices. Returns `None` only if the declaring entity is
    /// not part of `model`.
    pub fn slot_indexes(&self, model: &Model) -> Option<SlotIndexes> {
        if let Some(indexes) = self.indexes_cell().get() {
            return Some(*indexes);
        }

        let entity = model.entity(self.declaring())?;
        index::calculate_indexes(model, entity, self.ident())
    }

    /// Physical location for the requested intent, resolving and caching on
    /// first use. Identical inputs always reproduce the identical result.
    pub fn resolve_location(&self, intent: AccessIntent) -> AccessResult {
        self.access_cache()
            .get_or_resolve(intent, || resolve::resolve(*self, intent))
            .clone()
    }
}
