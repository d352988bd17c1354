//! Create/update validation of entities against their metadata.
//!
//! Validation folds a per-field rule over every declared property of an
//! entity, on the serialized JSON form. The result is a report of
//! human-readable messages keyed by field path; the boolean validity used
//! by forms is a projection of that report.
//!
//! Per field, given the mode:
//! 1. A field omitted for the current mode is valid unconditionally.
//! 2. A required field with no value is invalid. "No value" means JSON
//!    null or a missing key, and for the string kinds also an empty or
//!    whitespace-only string. Numeric `0` and boolean `false` are values.
//! 3. Kind-specific rules run only when a value is present. Nested
//!    entities recurse with the same mode; arrays check non-emptiness
//!    when required.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use tracing::warn;

use crate::entity::Entity;
use crate::metadata::{
    field_metadata_of, EntityDescriptor, FieldKind, FieldKindTag, FieldMetadata, MetadataError,
};

/// The flow a validation run is for. Omission flags are interpreted
/// against this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Validation messages collected per field path. Nested entity fields use
/// dotted paths ("address.street").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn messages_for(&self, path: &str) -> &[String] {
        self.errors.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    fn push(&mut self, path: &str, message: String) {
        self.errors.entry(path.to_string()).or_default().push(message);
    }

    fn absorb(&mut self, prefix: &str, nested: ValidationReport) {
        for (path, messages) in nested.errors {
            self.errors
                .entry(format!("{prefix}.{path}"))
                .or_default()
                .extend(messages);
        }
    }
}

/// Validate every declared property of `entity` for the given mode.
pub fn validate_entity<E: Entity>(entity: &E, mode: ValidationMode) -> ValidationReport {
    let value = serde_json::to_value(entity).unwrap_or(Value::Null);
    validate_value(E::descriptor(), &value, mode)
}

/// Whether the entity passes validation for the given mode.
pub fn is_entity_valid<E: Entity>(entity: &E, mode: ValidationMode) -> bool {
    validate_entity(entity, mode).is_valid()
}

/// Validate a single property. Fails when the property has no registered
/// metadata.
pub fn is_property_valid<E: Entity>(
    entity: &E,
    key: &str,
    mode: ValidationMode,
) -> Result<bool, MetadataError> {
    let meta = field_metadata_of(entity, key)?;
    let value = serde_json::to_value(entity).unwrap_or(Value::Null);
    let field_value = value.as_object().and_then(|object| object.get(key));

    let mut report = ValidationReport::default();
    validate_field(meta, field_value, mode, meta.name, &mut report);
    Ok(report.is_valid())
}

/// Validate a plain JSON value against a descriptor. This is the dynamic
/// entry point the typed functions delegate to.
pub fn validate_value(
    descriptor: &EntityDescriptor,
    value: &Value,
    mode: ValidationMode,
) -> ValidationReport {
    let object = value.as_object();
    let mut report = ValidationReport::default();

    for field in &descriptor.fields {
        let field_value = object.and_then(|map| map.get(field.name));
        validate_field(field, field_value, mode, field.name, &mut report);
    }

    report
}

fn validate_field(
    meta: &FieldMetadata,
    value: Option<&Value>,
    mode: ValidationMode,
    path: &str,
    report: &mut ValidationReport,
) {
    let omitted = match mode {
        ValidationMode::Create => meta.omit_for_create,
        ValidationMode::Update => meta.omit_for_update,
    };
    if omitted {
        return;
    }

    let label = meta.display_name;

    if is_missing(meta, value) {
        if meta.required {
            report.push(path, format!("{label} must not be empty"));
        }
        return;
    }
    let Some(value) = value else { return };

    match &meta.kind {
        FieldKind::String(rules)
        | FieldKind::StringAutocomplete { rules, .. }
        | FieldKind::StringTextbox(rules) => match value.as_str() {
            Some(text) => {
                if let Err(message) = rules.check(text, label) {
                    report.push(path, message);
                }
            }
            None => shape_mismatch(meta, path, report),
        },
        FieldKind::Number(rules) => match value.as_f64() {
            Some(number) => {
                if let Err(message) = rules.check(number, label) {
                    report.push(path, message);
                }
            }
            None => shape_mismatch(meta, path, report),
        },
        FieldKind::Date(rules) => match value.as_str().and_then(parse_date) {
            Some(parsed) => {
                if let Err(message) = rules.check(parsed, label) {
                    report.push(path, message);
                }
            }
            None => report.push(path, format!("{label} is not a valid date")),
        },
        FieldKind::Boolean(_) => {
            if !value.is_boolean() {
                shape_mismatch(meta, path, report);
            }
        }
        FieldKind::Object(nested) => {
            report.absorb(path, validate_value(nested(), value, mode));
        }
        FieldKind::Array(_)
        | FieldKind::ArrayStringChips(_)
        | FieldKind::ArrayStringAutocompleteChips { .. } => match value.as_array() {
            Some(items) => {
                if meta.required && items.is_empty() {
                    report.push(path, format!("{label} must contain at least one entry"));
                }
            }
            None => shape_mismatch(meta, path, report),
        },
    }
}

fn is_missing(meta: &FieldMetadata, value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => is_string_kind(meta.tag()) && text.trim().is_empty(),
        Some(_) => false,
    }
}

fn is_string_kind(tag: FieldKindTag) -> bool {
    matches!(
        tag,
        FieldKindTag::String | FieldKindTag::StringAutocomplete | FieldKindTag::StringTextbox
    )
}

fn shape_mismatch(meta: &FieldMetadata, path: &str, report: &mut ValidationReport) {
    warn!(
        field = meta.name,
        kind = meta.tag().as_str(),
        "value does not match the field kind"
    );
    report.push(
        path,
        format!("{} has an unexpected value type", meta.display_name),
    );
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(text)
        .map(|moment| moment.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(text, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_person, Person};
    use serde_json::json;

    fn valid_for_create(person: &Person) -> bool {
        is_entity_valid(person, ValidationMode::Create)
    }

    #[test]
    fn test_sample_person_is_valid_for_both_modes() {
        let person = sample_person();
        assert!(is_entity_valid(&person, ValidationMode::Create));
        assert!(is_entity_valid(&person, ValidationMode::Update));
    }

    #[test]
    fn test_string_length_boundaries() {
        let mut person = sample_person();

        person.name = "abcd".to_string();
        assert!(!valid_for_create(&person));

        person.name = "abcde".to_string();
        assert!(valid_for_create(&person));

        person.name = "abcdefghij".to_string();
        assert!(valid_for_create(&person));

        person.name = "abcdefghijk".to_string();
        assert!(!valid_for_create(&person));
    }

    #[test]
    fn test_required_string_rejects_blank_values() {
        let mut person = sample_person();

        person.name = String::new();
        assert!(!valid_for_create(&person));

        person.name = "   ".to_string();
        assert!(!valid_for_create(&person));
    }

    #[test]
    fn test_optional_field_may_be_blank() {
        let mut person = sample_person();
        person.nickname = None;
        assert!(valid_for_create(&person));

        person.bio = String::new();
        assert!(valid_for_create(&person));
    }

    #[test]
    fn test_pattern_violation() {
        let mut person = sample_person();
        person.nickname = Some("Not Lowercase".to_string());

        let report = validate_entity(&person, ValidationMode::Create);
        assert_eq!(
            report.messages_for("nickname"),
            ["nickname has an invalid format"]
        );
    }

    #[test]
    fn test_number_boundaries_and_zero() {
        let mut person = sample_person();

        person.age = Some(0.0);
        assert!(valid_for_create(&person), "zero is a present value");

        person.age = Some(150.0);
        assert!(valid_for_create(&person));

        person.age = Some(-1.0);
        assert!(!valid_for_create(&person));

        person.age = Some(150.5);
        assert!(!valid_for_create(&person));

        person.age = None;
        assert!(!valid_for_create(&person), "age is required");
    }

    #[test]
    fn test_omission_flags_follow_the_mode() {
        let mut person = sample_person();
        person.id = String::new();

        // id is omitted for create, required for update.
        assert!(is_entity_valid(&person, ValidationMode::Create));
        assert!(!is_entity_valid(&person, ValidationMode::Update));
    }

    #[test]
    fn test_nested_entity_recursion_uses_dotted_paths() {
        let mut person = sample_person();
        person.address.street = "ab".to_string();
        person.address.zip = "123".to_string();

        let report = validate_entity(&person, ValidationMode::Create);
        assert!(!report.is_valid());
        assert_eq!(
            report.messages_for("address.street"),
            ["Street must contain at least 3 characters"]
        );
        assert_eq!(
            report.messages_for("address.zip"),
            ["Zip code has an invalid format"]
        );
    }

    #[test]
    fn test_required_entity_array_must_not_be_empty() {
        let mut person = sample_person();
        person.contacts.clear();

        let report = validate_entity(&person, ValidationMode::Create);
        assert_eq!(
            report.messages_for("contacts"),
            ["Contacts must contain at least one entry"]
        );

        person = sample_person();
        assert!(valid_for_create(&person));
    }

    #[test]
    fn test_optional_chip_array_may_be_empty() {
        let mut person = sample_person();
        person.tags.clear();
        assert!(valid_for_create(&person));
    }

    #[test]
    fn test_date_bounds_and_parse_failures() {
        let mut person = sample_person();

        person.joined = Some("2000-01-01".to_string());
        assert!(valid_for_create(&person));

        person.joined = Some("1999-12-31".to_string());
        assert!(!valid_for_create(&person));

        person.joined = Some("2031-01-01".to_string());
        assert!(!valid_for_create(&person));

        person.joined = Some("2020-05-01T10:30:00Z".to_string());
        assert!(valid_for_create(&person));

        person.joined = Some("not-a-date".to_string());
        let report = validate_entity(&person, ValidationMode::Create);
        assert_eq!(report.messages_for("joined"), ["Joined is not a valid date"]);
    }

    #[test]
    fn test_boolean_false_is_a_present_value() {
        let mut person = sample_person();
        person.verified = false;
        assert!(valid_for_create(&person));
    }

    #[test]
    fn test_empty_entity_reports_every_violated_field() {
        let person = Person::empty().unwrap();
        let report = validate_entity(&person, ValidationMode::Create);

        let paths: Vec<&str> = report.errors().keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            ["address.street", "address.zip", "age", "contacts", "name"]
        );
    }

    #[test]
    fn test_autocomplete_kinds_validate_like_their_plain_counterparts() {
        use crate::metadata::{array_string_autocomplete_chips, string_autocomplete, MetadataStore};

        let descriptor = MetadataStore::define(
            "ValidationAutocompleteEntity",
            vec![
                string_autocomplete("country", &["Germany", "France"]).min_length(2),
                array_string_autocomplete_chips("codes", &["a", "b"]),
            ],
        );

        let report = validate_value(
            descriptor,
            &json!({ "country": "G", "codes": [] }),
            ValidationMode::Create,
        );
        assert_eq!(
            report.messages_for("country"),
            ["country must contain at least 2 characters"]
        );
        assert_eq!(
            report.messages_for("codes"),
            ["codes must contain at least one entry"]
        );

        let report = validate_value(
            descriptor,
            &json!({ "country": "Germany", "codes": ["a"] }),
            ValidationMode::Create,
        );
        assert!(report.is_valid());
    }

    #[test]
    fn test_dynamic_value_with_wrong_shape() {
        let value = json!({
            "id": "p-7",
            "name": "Amadeus",
            "age": "not a number",
            "contacts": [{}],
        });

        let report = validate_value(Person::descriptor(), &value, ValidationMode::Create);
        assert_eq!(
            report.messages_for("age"),
            ["Age has an unexpected value type"]
        );
    }

    #[test]
    fn test_is_property_valid() {
        let person = sample_person();

        assert!(is_property_valid(&person, "name", ValidationMode::Create).unwrap());

        let mut broken = person.clone();
        broken.name = "x".to_string();
        assert!(!is_property_valid(&broken, "name", ValidationMode::Create).unwrap());

        let err = is_property_valid(&person, "unknown", ValidationMode::Create).unwrap_err();
        assert!(matches!(err, MetadataError::FieldNotFound { .. }));
    }
}
