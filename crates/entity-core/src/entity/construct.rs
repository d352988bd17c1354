//! Descriptor-driven entity construction.
//!
//! Construction is a pure function over the registered descriptor and the
//! plain input data, in two phases: normalize the input into a complete
//! JSON object, then deserialize the typed entity from it. Nested entity
//! fields recurse through their own descriptors.

use serde_json::{Map, Value};
use thiserror::Error;

use super::Entity;
use crate::metadata::{EntityDescriptor, FieldKind};

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("failed to build entity `{entity}` from constructed data: {source}")]
    Build {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to re-apply snapshot values onto entity `{entity}`: {source}")]
    Reset {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Normalize plain input data into a complete JSON object for `descriptor`.
///
/// For every declared field:
/// - `Object`: recurse into the nested descriptor with the input value for
///   that key, also when the key is absent, so nested objects come out
///   constructed-but-empty.
/// - `Array` of entities: construct each input element through the item
///   descriptor. A missing or non-array input becomes `[]`, never null.
/// - Chip arrays: the input value verbatim, missing or null becomes `[]`.
/// - Everything else: the input value verbatim; a missing key stays
///   missing.
///
/// Input keys not declared in the descriptor are dropped.
pub fn construct(descriptor: &EntityDescriptor, data: Option<&Value>) -> Value {
    let input = data.and_then(Value::as_object);
    let mut out = Map::with_capacity(descriptor.fields.len());

    for field in &descriptor.fields {
        let given = input.and_then(|map| map.get(field.name));

        match &field.kind {
            FieldKind::Object(nested) => {
                out.insert(field.name.to_string(), construct(nested(), given));
            }
            FieldKind::Array(spec) => {
                let items: Vec<Value> = given
                    .and_then(Value::as_array)
                    .map(|elements| {
                        elements
                            .iter()
                            .map(|element| construct((spec.item)(), Some(element)))
                            .collect()
                    })
                    .unwrap_or_default();
                out.insert(field.name.to_string(), Value::Array(items));
            }
            FieldKind::ArrayStringChips(_) | FieldKind::ArrayStringAutocompleteChips { .. } => {
                let value = match given {
                    None | Some(Value::Null) => Value::Array(Vec::new()),
                    Some(other) => other.clone(),
                };
                out.insert(field.name.to_string(), value);
            }
            _ => {
                if let Some(value) = given {
                    out.insert(field.name.to_string(), value.clone());
                }
            }
        }
    }

    Value::Object(out)
}

/// Typed construction: normalize, then deserialize into `E`.
pub fn build_entity<E: Entity>(data: Option<Value>) -> Result<E, EntityError> {
    let constructed = construct(E::descriptor(), data.as_ref());
    serde_json::from_value(constructed).map_err(|source| EntityError::Build {
        entity: E::entity_name(),
        source,
    })
}
