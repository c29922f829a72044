//! Field input kinds
//!
//! The set of kinds is open: anything the browser accepts as an `<input type>` can be stored.
//! Only `textarea`, `select` and `checkbox` change the shape of the rendered control; every
//! other kind renders as a single-line input tagged with its own name.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Select,
    Checkbox,
    Email,
    Number,
    Date,
    /// Any other input kind, stored verbatim
    Other(String),
}

impl FieldType {
    /// Kinds offered by the field editor's type picker, in display order
    pub const KNOWN: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Email,
        FieldType::Number,
        FieldType::Date,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Other(name) => name,
        }
    }

    /// Parse a kind name. Blank input falls back to `text`.
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "" | "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "checkbox" => FieldType::Checkbox,
            "email" => FieldType::Email,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            other => FieldType::Other(other.to_string()),
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, FieldType::Select)
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, FieldType::Checkbox)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType::parse(name)
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        FieldType::parse(&name)
    }
}

impl From<FieldType> for String {
    fn from(kind: FieldType) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("text", FieldType::Text)]
    #[case("textarea", FieldType::Textarea)]
    #[case("select", FieldType::Select)]
    #[case("checkbox", FieldType::Checkbox)]
    #[case("email", FieldType::Email)]
    #[case("number", FieldType::Number)]
    #[case("date", FieldType::Date)]
    #[case("tel", FieldType::Other("tel".to_string()))]
    #[case("", FieldType::Text)]
    fn parses_kind_names(#[case] name: &str, #[case] expected: FieldType) {
        assert_eq!(FieldType::parse(name), expected);
    }

    #[test]
    fn known_kinds_round_trip_through_their_names() {
        for kind in FieldType::KNOWN {
            assert_eq!(FieldType::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&FieldType::Other("color".into())).unwrap();
        assert_eq!(json, "\"color\"");
        let kind: FieldType = serde_json::from_str("\"select\"").unwrap();
        assert_eq!(kind, FieldType::Select);
    }
}
