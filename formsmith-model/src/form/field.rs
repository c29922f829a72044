//! Field element
//!
//! A field describes one input control. Which attributes matter depends on the kind:
//!
//! | Kind       | placeholder        | options   |
//! |------------|--------------------|-----------|
//! | `select`   | ignored            | the choices, in order |
//! | `checkbox` | caption after box  | ignored   |
//! | other      | placeholder text   | ignored   |
//!
//! `options` is always present, possibly empty, whatever the kind.

use super::id::FieldId;
use super::kind::FieldType;
use super::options::parse_options;
use serde::{Deserialize, Serialize};

/// Label given to freshly added fields
pub const NEW_FIELD_LABEL: &str = "New Field";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(skip)]
    id: FieldId,
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldType,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl Field {
    /// A field with the builder's fixed defaults: a plain, optional text input
    pub fn new() -> Self {
        Self::with_label(NEW_FIELD_LABEL)
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Field {
            id: FieldId::new(),
            label: label.into(),
            kind: FieldType::Text,
            placeholder: String::new(),
            options: Vec::new(),
            required: false,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn of_kind(mut self, kind: impl Into<FieldType>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Label as shown to the person filling in the form, `*` appended when required
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{}*", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Replace every editable attribute. The id is untouched.
    pub fn apply(&mut self, patch: FieldPatch) {
        self.label = patch.label;
        self.kind = patch.kind;
        self.placeholder = patch.placeholder;
        self.options = patch.options;
        self.required = patch.required;
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete replacement for a field's editable attributes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldPatch {
    pub label: String,
    pub kind: FieldType,
    pub placeholder: String,
    pub options: Vec<String>,
    pub required: bool,
}

impl FieldPatch {
    /// Build a patch from raw editor values; `options_text` goes through [`parse_options`]
    pub fn from_raw(
        label: impl Into<String>,
        kind: impl Into<FieldType>,
        placeholder: impl Into<String>,
        options_text: &str,
        required: bool,
    ) -> Self {
        FieldPatch {
            label: label.into(),
            kind: kind.into(),
            placeholder: placeholder.into(),
            options: parse_options(options_text),
            required,
        }
    }
}
