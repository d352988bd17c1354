//! Field metadata, entity descriptors, and the process-wide metadata store.
//!
//! Metadata is attached per entity type, once, at first use of the type
//! (a `Lazy` static per entity that calls [`MetadataStore::define`]). The
//! store is immutable afterwards; every engine in this crate reads from it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use entity_core::metadata::{self, MetadataStore};
//!
//! let descriptor = MetadataStore::define("Address", vec![
//!     metadata::string("street").display_name("Street").min_length(3),
//!     metadata::string("zip").display_name("Zip code").pattern(r"^\d{5}$"),
//! ]);
//!
//! for field in &descriptor.fields {
//!     println!("{}: {}", field.name, field.display_name);
//! }
//! ```

mod fields;
mod kind;
mod rules;
mod store;
mod types;

pub use fields::{
    array, array_string_autocomplete_chips, array_string_chips, boolean, date, number, object,
    string, string_autocomplete, string_textbox,
};
pub use kind::{ArraySpec, BooleanStyle, DisplayColumn, FieldKind, FieldKindTag};
pub use rules::{DateRules, NumberRules, StringRules};
pub use store::{field_kind_of, field_metadata_of, MetadataError, MetadataStore};
pub use types::{ColumnWidths, DescriptorThunk, EntityDescriptor, FieldMetadata};
