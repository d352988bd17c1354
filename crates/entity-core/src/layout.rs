//! Display ordering and responsive column widths.

use std::cmp::Ordering;

use crate::entity::Entity;
use crate::metadata::{field_metadata_of, EntityDescriptor, FieldMetadata, MetadataError};

/// Responsive breakpoint of the consuming grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Lg,
    Md,
    Sm,
}

/// Three-way comparison of two fields by display order, usable with a
/// stable sort. Unordered fields sort after ordered ones and compare
/// equal among themselves, so a stable sort keeps their declaration
/// order.
pub fn compare_fields(a: &FieldMetadata, b: &FieldMetadata) -> Ordering {
    match (a.order, b.order) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(left), Some(right)) => left.cmp(&right),
    }
}

/// Key-based variant of [`compare_fields`]. Fails when either key has no
/// registered metadata.
pub fn compare_order<E: Entity>(entity: &E, a: &str, b: &str) -> Result<Ordering, MetadataError> {
    let left = field_metadata_of(entity, a)?;
    let right = field_metadata_of(entity, b)?;
    Ok(compare_fields(left, right))
}

/// Every field of the descriptor in display order.
pub fn ordered_fields(descriptor: &EntityDescriptor) -> Vec<&FieldMetadata> {
    let mut fields: Vec<&FieldMetadata> = descriptor.fields.iter().collect();
    fields.sort_by(|a, b| compare_fields(a, b));
    fields
}

pub fn ordered_keys(descriptor: &EntityDescriptor) -> Vec<&'static str> {
    ordered_fields(descriptor)
        .into_iter()
        .map(|field| field.name)
        .collect()
}

/// Fields a generated table or form iterates: displayed ones, in display
/// order.
pub fn visible_fields(descriptor: &EntityDescriptor) -> Vec<&FieldMetadata> {
    ordered_fields(descriptor)
        .into_iter()
        .filter(|field| field.display)
        .collect()
}

/// Column span of one property at the given breakpoint.
pub fn width_of<E: Entity>(
    entity: &E,
    key: &str,
    breakpoint: Breakpoint,
) -> Result<u8, MetadataError> {
    let meta = field_metadata_of(entity, key)?;
    Ok(match breakpoint {
        Breakpoint::Lg => meta.widths.lg,
        Breakpoint::Md => meta.widths.md,
        Breakpoint::Sm => meta.widths.sm,
    })
}
