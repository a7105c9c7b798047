//! Dynamic field values and descriptors.
//!
//! [`FieldValue`] is the runtime representation of one business-struct field:
//! a closed set of scalar shapes plus lists and nested records. [`Field`]
//! pairs a value with its declared name and optional annotation tag. Together
//! they stand in for runtime reflection: a business type emits its fields as
//! descriptors once, and the engines interpret them.

use chrono::{DateTime, Utc};

/// Runtime value of a single business field.
///
/// `List` carries homogeneous sequences (selector options, file ids, table
/// rows); `Record` carries one nested structural record (a table row's
/// fields). Everything else is a scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    List(Vec<FieldValue>),
    Record(Vec<Field>),
}

impl FieldValue {
    /// Returns the text content if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Renders a scalar as display text.
    ///
    /// `Text` is returned verbatim, numbers in base 10, floats in their
    /// shortest round-trip form, timestamps as RFC 3339. Compound shapes
    /// render empty: they have no single scalar reading.
    pub fn scalar_text(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Int(n) => n.to_string(),
            FieldValue::UInt(n) => n.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Timestamp(t) => t.to_rfc3339(),
            FieldValue::List(_) | FieldValue::Record(_) => String::new(),
        }
    }

    /// Whether this value is its shape's zero value.
    ///
    /// Used by handlers that suppress unset optional fields (file, selector).
    /// A timestamp is never zero: absence is expressed by omitting the field.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Int(n) => *n == 0,
            FieldValue::UInt(n) => *n == 0,
            FieldValue::Float(f) => *f == 0.0,
            FieldValue::Bool(b) => !b,
            FieldValue::Timestamp(_) => false,
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Record(fields) => fields.is_empty(),
        }
    }

    /// Builds a `List` of `Text` values, the common shape for multi-selector
    /// and file-id fields.
    pub fn text_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(items.into_iter().map(|s| FieldValue::Text(s.into())).collect())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::UInt(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

/// One described business field: declared name, optional annotation tag, and
/// runtime value.
///
/// The approval engine skips untagged fields; the grid converter includes
/// them under their declared name. Descriptor order is the declaration order
/// contract both engines preserve.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub tag: Option<String>,
    pub value: FieldValue,
}

impl Field {
    /// An untagged field.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            value: value.into(),
        }
    }

    /// A field carrying an annotation tag.
    pub fn tagged(
        name: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: Some(tag.into()),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_text_renders_each_scalar_shape() {
        assert_eq!(FieldValue::Text("abc".into()).scalar_text(), "abc");
        assert_eq!(FieldValue::Int(-7).scalar_text(), "-7");
        assert_eq!(FieldValue::UInt(7).scalar_text(), "7");
        assert_eq!(FieldValue::Float(75000.5).scalar_text(), "75000.5");
        assert_eq!(FieldValue::Bool(true).scalar_text(), "true");
    }

    #[test]
    fn as_text_only_matches_text_values() {
        assert_eq!(FieldValue::Text("abc".into()).as_text(), Some("abc"));
        assert_eq!(FieldValue::Int(3).as_text(), None);
    }

    #[test]
    fn scalar_text_is_empty_for_compound_shapes() {
        assert_eq!(FieldValue::List(vec![]).scalar_text(), "");
        assert_eq!(FieldValue::Record(vec![]).scalar_text(), "");
    }

    #[test]
    fn zero_values_are_detected_per_shape() {
        assert!(FieldValue::Text(String::new()).is_zero());
        assert!(FieldValue::List(vec![]).is_zero());
        assert!(FieldValue::Int(0).is_zero());
        assert!(!FieldValue::Text("x".into()).is_zero());
        assert!(!FieldValue::text_list(["a"]).is_zero());
        assert!(!FieldValue::Timestamp(Utc::now()).is_zero());
    }

    #[test]
    fn text_list_preserves_element_order() {
        let list = FieldValue::text_list(["a", "b", "c"]);
        let FieldValue::List(items) = list else {
            panic!("expected a list");
        };
        let keys: Vec<_> = items.iter().map(FieldValue::scalar_text).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}
