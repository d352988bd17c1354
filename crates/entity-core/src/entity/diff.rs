//! Structural diffing and dirty checking against a prior snapshot.
//!
//! Comparison is by value on the serialized JSON form, including nested
//! objects and arrays. The diff of an entity against its snapshot is the
//! minimal update payload.

use serde_json::{Map, Value};
use tracing::warn;

use super::construct::EntityError;
use super::Entity;

/// Serialized object form of an entity. A type that does not serialize to
/// a JSON object yields an empty map, which every caller treats as "no
/// properties".
pub(crate) fn entity_object<E: Entity>(entity: &E) -> Map<String, Value> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            warn!(
                entity = E::entity_name(),
                "entity did not serialize to a JSON object"
            );
            Map::new()
        }
    }
}

/// Declared properties whose current value differs structurally from the
/// snapshot, mapped to their current values.
pub fn difference<E: Entity>(entity: &E, prior: &E) -> Map<String, Value> {
    let current = entity_object(entity);
    let snapshot = entity_object(prior);
    let null = Value::Null;

    let mut changed = Map::new();
    for field in &E::descriptor().fields {
        let now = current.get(field.name).unwrap_or(&null);
        let before = snapshot.get(field.name).unwrap_or(&null);
        if now != before {
            changed.insert(field.name.to_string(), now.clone());
        }
    }

    changed
}

/// Whether the entity differs from its snapshot. No snapshot means not
/// dirty.
pub fn dirty<E: Entity>(entity: &E, prior: Option<&E>) -> bool {
    match prior {
        None => false,
        Some(prior) => !difference(entity, prior).is_empty(),
    }
}

/// Copy every property value of the snapshot onto `entity`, in place. The
/// key set is driven by the snapshot's own keys.
pub fn reset_changes<E: Entity>(entity: &mut E, prior: &E) -> Result<(), EntityError> {
    let mut current = entity_object(entity);
    for (key, value) in entity_object(prior) {
        current.insert(key, value);
    }

    *entity =
        serde_json::from_value(Value::Object(current)).map_err(|source| EntityError::Reset {
            entity: E::entity_name(),
            source,
        })?;
    Ok(())
}
