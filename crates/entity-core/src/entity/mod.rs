//! The entity trait, identifiers, and the construction and diff engines.

mod construct;
mod diff;

pub use construct::{build_entity, construct, EntityError};
pub use diff::{difference, dirty, reset_changes};

pub(crate) use diff::entity_object;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::metadata::EntityDescriptor;

/// A data-model type driven by registered field metadata.
///
/// Entities round-trip as plain JSON: every engine in this crate works on
/// the serialized form, guided by the descriptor. The descriptor is
/// supplied by a `Lazy` static per implementing type that registers with
/// [`crate::metadata::MetadataStore`].
pub trait Entity: Serialize + DeserializeOwned {
    fn descriptor() -> &'static EntityDescriptor;

    /// Unique identifier of this instance.
    fn id(&self) -> &str;

    fn entity_name() -> &'static str {
        Self::descriptor().entity_name
    }

    /// Construct a typed instance from optional plain input data.
    fn build(data: Option<Value>) -> Result<Self, EntityError> {
        build_entity::<Self>(data)
    }

    /// Blank instance for create flows, same construction rules as
    /// [`Entity::build`] with no input.
    fn empty() -> Result<Self, EntityError> {
        Self::build(None)
    }
}

/// Fresh UUID-v4 string identifier.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
