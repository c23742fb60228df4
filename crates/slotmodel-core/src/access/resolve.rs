use crate::{
    access::{AccessLocation, AccessResult},
    error::ResolveError,
    model::member::MemberRef,
    types::{AccessIntent, AccessMode},
};
use tracing::trace;

// Resolve the physical location backing `member` for `intent`.
//
// Pure: the outcome depends only on the member's declared backing and the
// access mode, never on the hierarchy, so the per-intent caches can hold it
// forever.
pub(crate) fn resolve(member: MemberRef<'_>, intent: AccessIntent) -> AccessResult {
    let mode = member.backing().access_mode;
    trace!(member = %member.ident(), entity = %member.declaring(), %mode, %intent, "resolving access location");

    match mode {
        AccessMode::Unspecified => resolve_default(member, intent, false),
        AccessMode::FieldDuringConstruction => resolve_default(member, intent, true),
        AccessMode::Field => resolve_field_only(member, intent),
        AccessMode::Property => resolve_property_only(member, intent),
    }
}

// The unset and field-during-construction modes share one branch. The mode
// only matters while constructing: it turns a read-only or missing field
// into a hard failure instead of falling through to the write rules.
fn resolve_default(
    member: MemberRef<'_>,
    intent: AccessIntent,
    field_during_construction: bool,
) -> AccessResult {
    let backing = member.backing();
    let collection = member.is_collection();

    if intent == AccessIntent::Construction {
        if let Some(field) = &backing.field {
            if !field.read_only {
                return Ok(Some(AccessLocation::Field {
                    ident: field.ident.clone(),
                }));
            }
            if field_during_construction {
                if collection {
                    return Ok(None);
                }
                return Err(ResolveError::ReadonlyField {
                    field: field.ident.clone(),
                    entity: member.declaring().to_string(),
                });
            }
        } else if field_during_construction {
            if collection {
                return Ok(None);
            }
            return Err(ResolveError::NoBackingField {
                member: member.ident().to_string(),
                entity: member.declaring().to_string(),
                mode: AccessMode::FieldDuringConstruction,
            });
        }
        // unset mode: construction falls through to the write rules
    }

    if intent.is_write() {
        if let Some(accessors) = &backing.accessors
            && accessors.setter
        {
            return Ok(Some(AccessLocation::Setter {
                ident: accessors.ident.clone(),
            }));
        }

        if let Some(field) = &backing.field {
            if !field.read_only {
                return Ok(Some(AccessLocation::Field {
                    ident: field.ident.clone(),
                }));
            }
            if !collection {
                return Err(ResolveError::ReadonlyField {
                    field: field.ident.clone(),
                    entity: member.declaring().to_string(),
                });
            }
        }

        if collection {
            return Ok(None);
        }
        return Err(ResolveError::NoFieldOrSetter {
            member: member.ident().to_string(),
            entity: member.declaring().to_string(),
        });
    }

    // reads accept a getter or any field, read-only included
    if let Some(accessors) = &backing.accessors
        && accessors.getter
    {
        return Ok(Some(AccessLocation::Getter {
            ident: accessors.ident.clone(),
        }));
    }

    if let Some(field) = &backing.field {
        return Ok(Some(AccessLocation::Field {
            ident: field.ident.clone(),
        }));
    }

    Err(ResolveError::NoFieldOrGetter {
        member: member.ident().to_string(),
        entity: member.declaring().to_string(),
    })
}

// Field mode: every intent goes through the field. Collections keep their
// write exemptions; reads always require the field to exist.
fn resolve_field_only(member: MemberRef<'_>, intent: AccessIntent) -> AccessResult {
    let collection = member.is_collection();

    let Some(field) = &member.backing().field else {
        if intent.is_write() && collection {
            return Ok(None);
        }
        return Err(ResolveError::NoBackingField {
            member: member.ident().to_string(),
            entity: member.declaring().to_string(),
            mode: AccessMode::Field,
        });
    };

    if intent.is_write() && field.read_only {
        if collection {
            return Ok(None);
        }
        return Err(ResolveError::ReadonlyField {
            field: field.ident.clone(),
            entity: member.declaring().to_string(),
        });
    }

    Ok(Some(AccessLocation::Field {
        ident: field.ident.clone(),
    }))
}

// Property mode: the field never participates, even as a fallback.
fn resolve_property_only(member: MemberRef<'_>, intent: AccessIntent) -> AccessResult {
    let Some(accessors) = &member.backing().accessors else {
        return Err(ResolveError::NoProperty {
            member: member.ident().to_string(),
            entity: member.declaring().to_string(),
            mode: AccessMode::Property,
        });
    };

    if intent.is_write() {
        if accessors.setter {
            return Ok(Some(AccessLocation::Setter {
                ident: accessors.ident.clone(),
            }));
        }
        if member.is_collection() {
            return Ok(None);
        }
        return Err(ResolveError::NoSetter {
            member: member.ident().to_string(),
            entity: member.declaring().to_string(),
            mode: AccessMode::Property,
        });
    }

    if accessors.getter {
        return Ok(Some(AccessLocation::Getter {
            ident: accessors.ident.clone(),
        }));
    }

    Err(ResolveError::NoGetter {
        member: member.ident().to_string(),
        entity: member.declaring().to_string(),
        mode: AccessMode::Property,
    })
}
