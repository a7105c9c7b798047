//! Capability traits implemented by business types.
//!
//! Instead of the engines introspecting arbitrary structs, a business type
//! states its own field layout. The trait methods must return fields in
//! declaration order; that order is the contract the engines preserve.

use crate::value::{Field, FieldValue};

/// A business record convertible into an approval event.
///
/// Tags on the returned fields use the approval tag grammar
/// (`control=...;id=...`) or a reserved pseudo-tag (`creator`, `template`).
pub trait ApplyRecord {
    /// The record's fields, in declaration order.
    fn apply_fields(&self) -> Vec<Field>;

    /// The record as a dynamic value, for APIs that take [`FieldValue`].
    fn record_value(&self) -> FieldValue {
        FieldValue::Record(self.apply_fields())
    }
}

impl<T: ApplyRecord + ?Sized> ApplyRecord for &T {
    fn apply_fields(&self) -> Vec<Field> {
        (**self).apply_fields()
    }
}

impl<T: ApplyRecord + ?Sized> ApplyRecord for Box<T> {
    fn apply_fields(&self) -> Vec<Field> {
        (**self).apply_fields()
    }
}

/// A business record convertible into one spreadsheet row.
///
/// Tags on the returned fields are plain header labels; a tag of `-`
/// excludes the field from the sheet entirely.
pub trait GridRecord {
    /// The record's fields, in declaration (column) order.
    fn grid_fields(&self) -> Vec<Field>;
}

impl<T: GridRecord + ?Sized> GridRecord for &T {
    fn grid_fields(&self) -> Vec<Field> {
        (**self).grid_fields()
    }
}

impl<T: GridRecord + ?Sized> GridRecord for Box<T> {
    fn grid_fields(&self) -> Vec<Field> {
        (**self).grid_fields()
    }
}

/// Builds the `List`-of-`Record` value a table-controlled field carries.
pub fn apply_rows<T: ApplyRecord>(rows: &[T]) -> FieldValue {
    FieldValue::List(rows.iter().map(|row| row.record_value()).collect())
}
