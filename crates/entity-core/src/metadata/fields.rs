//! Constructor functions for field metadata, one per field kind.
//!
//! These are the registration surface: an entity descriptor is a list of
//! these values, refined through the chainable setters.
//!
//! ```rust,ignore
//! MetadataStore::define("Person", vec![
//!     string("name").display_name("Full name").min_length(5).max_length(10),
//!     number("age").display_name("Age").min(0.0).max(150.0),
//!     object("address", Address::descriptor).display_name("Address"),
//! ]);
//! ```

use chrono::NaiveDate;
use regex::Regex;

use super::kind::{ArraySpec, BooleanStyle, DisplayColumn, FieldKind};
use super::rules::{DateRules, NumberRules, StringRules};
use super::types::{DescriptorThunk, FieldMetadata};

pub fn string(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::String(StringRules::default()))
}

/// Single-line string with a fixed suggestion list.
pub fn string_autocomplete(
    name: &'static str,
    suggestions: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata::new(
        name,
        FieldKind::StringAutocomplete {
            rules: StringRules::default(),
            suggestions,
        },
    )
}

/// Multi-line string. Length rules apply, patterns do not.
pub fn string_textbox(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::StringTextbox(StringRules::default()))
}

pub fn number(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::Number(NumberRules::default()))
}

/// Date carried as an ISO 8601 string ("YYYY-MM-DD" or RFC 3339).
pub fn date(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::Date(DateRules::default()))
}

pub fn boolean(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::Boolean(BooleanStyle::default()))
}

/// Nested entity, constructed recursively through its own descriptor.
pub fn object(name: &'static str, descriptor: DescriptorThunk) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::Object(descriptor))
}

/// Array of nested entities, rendered as an embedded table.
pub fn array(
    name: &'static str,
    item: DescriptorThunk,
    display_columns: &'static [DisplayColumn],
) -> FieldMetadata {
    FieldMetadata::new(
        name,
        FieldKind::Array(ArraySpec {
            item,
            display_columns,
        }),
    )
}

/// Array of free-form strings, entered as chips.
pub fn array_string_chips(name: &'static str) -> FieldMetadata {
    FieldMetadata::new(name, FieldKind::ArrayStringChips(StringRules::default()))
}

/// Array of strings entered as chips with a suggestion list.
pub fn array_string_autocomplete_chips(
    name: &'static str,
    suggestions: &'static [&'static str],
) -> FieldMetadata {
    FieldMetadata::new(
        name,
        FieldKind::ArrayStringAutocompleteChips {
            rules: StringRules::default(),
            suggestions,
        },
    )
}

// ============================================================================
// Kind-specific setters
// ============================================================================

impl FieldMetadata {
    fn string_rules_mut(&mut self, setter: &str) -> &mut StringRules {
        match &mut self.kind {
            FieldKind::String(rules)
            | FieldKind::StringTextbox(rules)
            | FieldKind::ArrayStringChips(rules)
            | FieldKind::StringAutocomplete { rules, .. }
            | FieldKind::ArrayStringAutocompleteChips { rules, .. } => rules,
            other => panic!(
                "`{setter}` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
    }

    pub fn min_length(mut self, value: usize) -> Self {
        self.string_rules_mut("min_length").min_length = Some(value);
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.string_rules_mut("max_length").max_length = Some(value);
        self
    }

    /// Regex the value must match. Compiled here, once, at registration;
    /// an invalid pattern is a registration bug. Textbox fields never
    /// apply patterns and reject this setter.
    pub fn pattern(mut self, value: &str) -> Self {
        if matches!(self.kind, FieldKind::StringTextbox(_)) {
            panic!("`pattern` does not apply to string_textbox field `{}`", self.name);
        }
        let compiled = Regex::new(value)
            .unwrap_or_else(|err| panic!("invalid pattern for field `{}`: {err}", self.name));
        self.string_rules_mut("pattern").pattern = Some(compiled);
        self
    }

    pub fn min(mut self, value: f64) -> Self {
        match &mut self.kind {
            FieldKind::Number(rules) => rules.min = Some(value),
            other => panic!(
                "`min` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
        self
    }

    pub fn max(mut self, value: f64) -> Self {
        match &mut self.kind {
            FieldKind::Number(rules) => rules.max = Some(value),
            other => panic!(
                "`max` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
        self
    }

    pub fn min_date(mut self, value: NaiveDate) -> Self {
        match &mut self.kind {
            FieldKind::Date(rules) => rules.min = Some(value),
            other => panic!(
                "`min_date` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
        self
    }

    pub fn max_date(mut self, value: NaiveDate) -> Self {
        match &mut self.kind {
            FieldKind::Date(rules) => rules.max = Some(value),
            other => panic!(
                "`max_date` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
        self
    }

    pub fn style(mut self, value: BooleanStyle) -> Self {
        match &mut self.kind {
            FieldKind::Boolean(style) => *style = value,
            other => panic!(
                "`style` does not apply to {} field `{}`",
                other.tag().as_str(),
                self.name
            ),
        }
        self
    }
}
