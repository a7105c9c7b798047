//! Control kinds understood by the approval conversion engine.

use std::fmt;

/// The handler-selecting identifier attached to a tagged field.
///
/// The built-in kinds cover the controls the OA template editor emits; any
/// other name round-trips through `Custom` so caller-registered handlers can
/// extend the set without this enum changing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Text,
    Textarea,
    Number,
    Money,
    Date,
    Selector,
    Contact,
    File,
    Table,
    Custom(String),
}

impl ControlKind {
    /// Parses a control name. Total: unknown names become `Custom`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Text" => ControlKind::Text,
            "Textarea" => ControlKind::Textarea,
            "Number" => ControlKind::Number,
            "Money" => ControlKind::Money,
            "Date" => ControlKind::Date,
            "Selector" => ControlKind::Selector,
            "Contact" => ControlKind::Contact,
            "File" => ControlKind::File,
            "Table" => ControlKind::Table,
            other => ControlKind::Custom(other.to_owned()),
        }
    }

    /// The wire name of this kind.
    pub fn name(&self) -> &str {
        match self {
            ControlKind::Text => "Text",
            ControlKind::Textarea => "Textarea",
            ControlKind::Number => "Number",
            ControlKind::Money => "Money",
            ControlKind::Date => "Date",
            ControlKind::Selector => "Selector",
            ControlKind::Contact => "Contact",
            ControlKind::File => "File",
            ControlKind::Table => "Table",
            ControlKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_builtin_names() {
        for name in [
            "Text", "Textarea", "Number", "Money", "Date", "Selector", "Contact", "File", "Table",
        ] {
            let kind = ControlKind::from_name(name);
            assert!(!matches!(kind, ControlKind::Custom(_)), "{name} should be built in");
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn unknown_names_become_custom() {
        let kind = ControlKind::from_name("Signature");
        assert_eq!(kind, ControlKind::Custom("Signature".to_owned()));
        assert_eq!(kind.name(), "Signature");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!(matches!(ControlKind::from_name("text"), ControlKind::Custom(_)));
    }
}
