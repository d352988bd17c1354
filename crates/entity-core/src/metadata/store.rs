//! Process-wide descriptor registry and metadata accessors.
//!
//! Descriptors are registered once, at first use of an entity type, and
//! are immutable afterwards. Mutation and reads are temporally separated
//! by the per-entity `Lazy` statics, the lock only guards the map itself.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use super::kind::FieldKindTag;
use super::types::{EntityDescriptor, FieldMetadata};
use crate::entity::Entity;

/// Errors raised by the metadata store and accessors.
///
/// All of these indicate a missing or wrong registration, a programming
/// error rather than a runtime condition, and are fatal to the calling
/// operation.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error(
        "no metadata registered for property `{property}` of entity `{entity}` \
         (entity snapshot: {snapshot})"
    )]
    FieldNotFound {
        entity: &'static str,
        property: String,
        snapshot: String,
    },

    #[error("entity `{0}` is not registered in the metadata store")]
    EntityNotRegistered(String),

    #[error("unknown field kind `{0}`")]
    UnknownKind(String),
}

static STORE: Lazy<RwLock<HashMap<&'static str, &'static EntityDescriptor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// The process-wide entity descriptor registry.
pub struct MetadataStore;

impl MetadataStore {
    /// Register the descriptor for an entity type.
    ///
    /// Called once per entity, from the entity's `Lazy` descriptor static.
    /// The descriptor is leaked into `'static`: registered once, immutable
    /// for the lifetime of the process. Registering a name twice is a
    /// programming error and panics.
    pub fn define(entity_name: &'static str, fields: Vec<FieldMetadata>) -> &'static EntityDescriptor {
        let mut store = STORE.write().expect("metadata store lock poisoned");
        if store.contains_key(entity_name) {
            // Release the lock before panicking, the store must not be
            // poisoned.
            drop(store);
            panic!("entity `{entity_name}` is already registered in the metadata store");
        }

        let descriptor: &'static EntityDescriptor = Box::leak(Box::new(EntityDescriptor {
            entity_name,
            fields,
        }));
        store.insert(entity_name, descriptor);
        debug!(
            entity = entity_name,
            fields = descriptor.fields.len(),
            "registered entity descriptor"
        );

        descriptor
    }

    /// Look up a descriptor by entity name, for dynamic consumers.
    pub fn get(entity_name: &str) -> Result<&'static EntityDescriptor, MetadataError> {
        STORE
            .read()
            .expect("metadata store lock poisoned")
            .get(entity_name)
            .copied()
            .ok_or_else(|| MetadataError::EntityNotRegistered(entity_name.to_string()))
    }

    /// Names of every registered entity, sorted.
    pub fn entity_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = STORE
            .read()
            .expect("metadata store lock poisoned")
            .keys()
            .copied()
            .collect();
        names.sort_unstable();
        names
    }
}

/// Full metadata of one property of `entity`.
///
/// Absence means the property was never registered, which is a bug in the
/// entity's descriptor. The error carries a JSON snapshot of the instance
/// to make the failing call site obvious.
pub fn field_metadata_of<E: Entity>(
    entity: &E,
    key: &str,
) -> Result<&'static FieldMetadata, MetadataError> {
    E::descriptor()
        .field(key)
        .ok_or_else(|| MetadataError::FieldNotFound {
            entity: E::entity_name(),
            property: key.to_string(),
            snapshot: snapshot_of(entity),
        })
}

/// Kind discriminant of one property of `entity`.
pub fn field_kind_of<E: Entity>(entity: &E, key: &str) -> Result<FieldKindTag, MetadataError> {
    field_metadata_of(entity, key).map(|meta| meta.tag())
}

fn snapshot_of<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
}
