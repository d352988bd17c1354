//! Persistence collaborator surface.
//!
//! The core owns the request payloads (what gets sent on create and
//! update), transport belongs to the implementor of [`EntityService`].

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::entity::{difference, entity_object, Entity};

/// Body of a create request: every declared field except those flagged
/// `omit_for_create`.
pub fn create_payload<E: Entity>(entity: &E) -> Map<String, Value> {
    let object = entity_object(entity);

    let mut payload = Map::new();
    for field in &E::descriptor().fields {
        if field.omit_for_create {
            continue;
        }
        if let Some(value) = object.get(field.name) {
            payload.insert(field.name.to_string(), value.clone());
        }
    }
    payload
}

/// Body of an update request: the structural diff against the snapshot,
/// minus fields flagged `omit_for_update`.
pub fn update_payload<E: Entity>(entity: &E, prior: &E) -> Map<String, Value> {
    let mut changed = difference(entity, prior);
    for field in &E::descriptor().fields {
        if field.omit_for_update {
            changed.remove(field.name);
        }
    }
    changed
}

/// CRUD persistence for one entity type, typically HTTP-backed. The core
/// never performs I/O itself; implementors own transport, timeouts, and
/// retries.
#[async_trait]
pub trait EntityService: Send + Sync {
    type Entity: Entity + Send + Sync;

    async fn create(&self, payload: Map<String, Value>) -> anyhow::Result<Self::Entity>;

    async fn read(&self) -> anyhow::Result<Vec<Self::Entity>>;

    async fn update(&self, id: &str, payload: Map<String, Value>) -> anyhow::Result<Self::Entity>;

    async fn delete(&self, id: &str) -> anyhow::Result<()>;

    /// Create from an entity instance, honoring the omission flags.
    async fn create_entity(&self, entity: &Self::Entity) -> anyhow::Result<Self::Entity> {
        self.create(create_payload(entity)).await
    }

    /// Update with the minimal payload against the prior snapshot.
    async fn update_entity(
        &self,
        entity: &Self::Entity,
        prior: &Self::Entity,
    ) -> anyhow::Result<Self::Entity> {
        self.update(entity.id(), update_payload(entity, prior)).await
    }
}
