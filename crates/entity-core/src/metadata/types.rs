//! Core metadata types: per-field configuration and entity descriptors.
//!
//! All names are `'static` string literals, registered once per entity
//! type and read for the lifetime of the process.

use super::kind::{FieldKind, FieldKindTag};

/// Resolves the descriptor of a nested entity on demand.
pub type DescriptorThunk = fn() -> &'static EntityDescriptor;

/// Responsive column spans on a 12-column grid, per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub lg: u8,
    pub md: u8,
    pub sm: u8,
}

impl ColumnWidths {
    pub const fn new(lg: u8, md: u8, sm: u8) -> Self {
        Self { lg, md, sm }
    }
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self::new(6, 6, 12)
    }
}

/// Configuration of a single entity property.
///
/// Built through the constructor functions in [`crate::metadata`]
/// (`string`, `number`, `object`, ...) and their chainable setters.
#[derive(Debug, Clone)]
pub struct FieldMetadata {
    pub name: &'static str,
    /// Label shown in tables, forms, and validation messages.
    pub display_name: &'static str,
    /// Whether the field appears in generated tables and forms.
    pub display: bool,
    pub required: bool,
    /// Suppress the field from create request payloads.
    pub omit_for_create: bool,
    /// Suppress the field from update request payloads.
    pub omit_for_update: bool,
    pub widths: ColumnWidths,
    /// Display position. `None` sorts after every ordered field.
    pub order: Option<u32>,
    pub kind: FieldKind,
}

impl FieldMetadata {
    pub(crate) fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            display_name: name,
            display: true,
            required: true,
            omit_for_create: false,
            omit_for_update: false,
            widths: ColumnWidths::default(),
            order: None,
            kind,
        }
    }

    pub fn tag(&self) -> FieldKindTag {
        self.kind.tag()
    }

    pub fn display_name(mut self, value: &'static str) -> Self {
        self.display_name = value;
        self
    }

    /// Exclude the field from generated tables and forms.
    pub fn hidden(mut self) -> Self {
        self.display = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn omit_for_create(mut self) -> Self {
        self.omit_for_create = true;
        self
    }

    pub fn omit_for_update(mut self) -> Self {
        self.omit_for_update = true;
        self
    }

    /// Column spans per breakpoint, each between 1 and 12.
    pub fn widths(mut self, lg: u8, md: u8, sm: u8) -> Self {
        for span in [lg, md, sm] {
            assert!(
                (1..=12).contains(&span),
                "column span {span} for field `{}` is outside 1..=12",
                self.name
            );
        }
        self.widths = ColumnWidths::new(lg, md, sm);
        self
    }

    pub fn order(mut self, value: u32) -> Self {
        self.order = Some(value);
        self
    }
}

/// The full metadata set of one entity type, in declaration order.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub entity_name: &'static str,
    pub fields: Vec<FieldMetadata>,
}

impl EntityDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }
}
