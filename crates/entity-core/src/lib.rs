//! Metadata-driven CRUD core.
//!
//! Data-model types are described once with field-level metadata (display
//! labels, validation rules, responsive column widths, create/update
//! omission flags). The library then derives the operations a generated
//! CRUD surface needs: construction of typed entities from plain JSON,
//! create/update validation, dirty checking and minimal update payloads,
//! display ordering, and layered configuration defaults for tables and
//! dialogs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use entity_core::entity::Entity;
//! use entity_core::metadata::{self, EntityDescriptor, MetadataStore};
//! use entity_core::validation::{is_entity_valid, ValidationMode};
//!
//! static DESCRIPTOR: Lazy<&'static EntityDescriptor> = Lazy::new(|| {
//!     MetadataStore::define("Organization", vec![
//!         metadata::string("id").hidden().omit_for_create(),
//!         metadata::string("name").display_name("Name").min_length(3).order(0),
//!         metadata::number("employees").display_name("Employees").min(0.0),
//!     ])
//! });
//!
//! impl Entity for Organization {
//!     fn descriptor() -> &'static EntityDescriptor { *DESCRIPTOR }
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let org = Organization::build(Some(input_json))?;
//! assert!(is_entity_valid(&org, ValidationMode::Create));
//! ```

pub mod config;
pub mod entity;
pub mod layout;
pub mod metadata;
pub mod service;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
