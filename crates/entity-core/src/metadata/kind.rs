//! Field kind discriminants and per-kind metadata payloads.

use serde::{Deserialize, Serialize};

use super::rules::{DateRules, NumberRules, StringRules};
use super::store::MetadataError;
use super::types::DescriptorThunk;

/// Bare discriminant of a field kind.
///
/// This is the tag used to pick the validation and construction branch for
/// a property. In compiled code the tagged [`FieldKind`] union is matched
/// exhaustively; the string form exists for serialized configuration and
/// tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKindTag {
    String,
    StringAutocomplete,
    StringTextbox,
    Number,
    Date,
    Boolean,
    Object,
    Array,
    ArrayStringChips,
    ArrayStringAutocompleteChips,
}

impl FieldKindTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringAutocomplete => "string_autocomplete",
            Self::StringTextbox => "string_textbox",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::ArrayStringChips => "array_string_chips",
            Self::ArrayStringAutocompleteChips => "array_string_autocomplete_chips",
        }
    }

    /// Parse a tag arriving from a dynamic source (serialized config,
    /// tooling). An unrecognized value is an error, never silently mapped.
    pub fn parse(value: &str) -> Result<Self, MetadataError> {
        match value {
            "string" => Ok(Self::String),
            "string_autocomplete" => Ok(Self::StringAutocomplete),
            "string_textbox" => Ok(Self::StringTextbox),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "array_string_chips" => Ok(Self::ArrayStringChips),
            "array_string_autocomplete_chips" => Ok(Self::ArrayStringAutocompleteChips),
            other => Err(MetadataError::UnknownKind(other.to_string())),
        }
    }
}

/// Display widget for boolean fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanStyle {
    #[default]
    Checkbox,
    Toggle,
    Dropdown,
}

/// Column shown in the embedded table of an entity-array field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColumn {
    pub header: &'static str,
    /// Field keys of the item entity rendered in this column.
    pub keys: &'static [&'static str],
}

/// Entity-array payload: the item entity and its embedded table layout.
#[derive(Debug, Clone)]
pub struct ArraySpec {
    pub item: DescriptorThunk,
    pub display_columns: &'static [DisplayColumn],
}

/// Tagged per-kind metadata payload.
///
/// Nested entities are held as a descriptor thunk rather than a type
/// reference, so descriptors can refer to each other without forcing an
/// initialization order.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String(StringRules),
    StringAutocomplete {
        rules: StringRules,
        suggestions: &'static [&'static str],
    },
    /// Multi-line string. Length rules apply, patterns never do.
    StringTextbox(StringRules),
    Number(NumberRules),
    Date(DateRules),
    Boolean(BooleanStyle),
    Object(DescriptorThunk),
    Array(ArraySpec),
    ArrayStringChips(StringRules),
    ArrayStringAutocompleteChips {
        rules: StringRules,
        suggestions: &'static [&'static str],
    },
}

impl FieldKind {
    pub fn tag(&self) -> FieldKindTag {
        match self {
            Self::String(_) => FieldKindTag::String,
            Self::StringAutocomplete { .. } => FieldKindTag::StringAutocomplete,
            Self::StringTextbox(_) => FieldKindTag::StringTextbox,
            Self::Number(_) => FieldKindTag::Number,
            Self::Date(_) => FieldKindTag::Date,
            Self::Boolean(_) => FieldKindTag::Boolean,
            Self::Object(_) => FieldKindTag::Object,
            Self::Array(_) => FieldKindTag::Array,
            Self::ArrayStringChips(_) => FieldKindTag::ArrayStringChips,
            Self::ArrayStringAutocompleteChips { .. } => FieldKindTag::ArrayStringAutocompleteChips,
        }
    }

    /// Whether construction normalizes a missing value to an empty array.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Self::Array(_) | Self::ArrayStringChips(_) | Self::ArrayStringAutocompleteChips { .. }
        )
    }
}
