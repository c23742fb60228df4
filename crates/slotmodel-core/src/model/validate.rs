use crate::{
    error::ModelError,
    model::{EntityDef, Model},
};
use std::collections::BTreeSet;

// Validate the structural preconditions the index assignor relies on:
// resolvable references, an acyclic base graph, and hierarchy-wide unique
// member idents.
pub fn validate_model(model: &Model) -> Result<(), ModelError> {
    // Phase 1: every cross-reference resolves.
    for entity in model.entities() {
        if let Some(base) = entity.base.as_deref()
            && model.entity(base).is_none()
        {
            return Err(ModelError::UnknownBaseEntity {
                entity: entity.ident.clone(),
                base: base.to_string(),
            });
        }

        for navigation in entity.declared_navigations() {
            if model.entity(&navigation.target).is_none() {
                return Err(ModelError::UnknownNavigationTarget {
                    entity: entity.ident.clone(),
                    navigation: navigation.ident.clone(),
                    target: navigation.target.clone(),
                });
            }
        }
    }

    // Phase 2: the base graph is acyclic.
    for entity in model.entities() {
        check_base_chain(model, entity)?;
    }

    // Phase 3: declared idents are unique and never shadow an ancestor's.
    for entity in model.entities() {
        check_member_idents(model, entity)?;
    }

    Ok(())
}

// Walk the base chain upward with a visiting set; a revisit is a cycle.
fn check_base_chain(model: &Model, entity: &EntityDef) -> Result<(), ModelError> {
    let mut visiting = BTreeSet::new();
    let mut current = entity;

    while let Some(base) = model.base_of(current) {
        if !visiting.insert(base.ident.as_str()) || base.ident == entity.ident {
            return Err(ModelError::CyclicHierarchy {
                entity: entity.ident.clone(),
            });
        }
        current = base;
    }

    Ok(())
}

// Declared member idents must be distinct within the entity and distinct
// from every ancestor's declared idents.
fn check_member_idents(model: &Model, entity: &EntityDef) -> Result<(), ModelError> {
    let mut seen = BTreeSet::new();
    for member in entity.declared_members() {
        if !seen.insert(member.ident()) {
            return Err(ModelError::DuplicateMember {
                entity: entity.ident.clone(),
                member: member.ident().to_string(),
            });
        }
    }

    let mut ancestor = model.base_of(entity);
    while let Some(base) = ancestor {
        for member in base.declared_members() {
            if seen.contains(member.ident()) {
                return Err(ModelError::ShadowedMember {
                    entity: entity.ident.clone(),
                    member: member.ident().to_string(),
                    ancestor: base.ident.clone(),
                });
            }
        }
        ancestor = model.base_of(base);
    }

    Ok(())
}
