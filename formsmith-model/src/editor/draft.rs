//! Staged editor values

use crate::form::{join_options, Field, FieldPatch, FieldType};
use serde::Deserialize;

/// Editor-local copy of a field's attributes, options kept as the raw multi-line block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDraft {
    pub label: String,
    pub kind: FieldType,
    pub placeholder: String,
    pub options_text: String,
    pub required: bool,
}

impl FieldDraft {
    pub fn from_field(field: &Field) -> Self {
        FieldDraft {
            label: field.label.clone(),
            kind: field.kind.clone(),
            placeholder: field.placeholder.clone(),
            options_text: join_options(&field.options),
            required: field.required,
        }
    }

    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Label(label) => self.label = label,
            DraftEdit::Kind(kind) => self.kind = kind,
            DraftEdit::Placeholder(placeholder) => self.placeholder = placeholder,
            DraftEdit::Options(text) => self.options_text = text,
            DraftEdit::Required(required) => self.required = required,
        }
    }

    pub fn to_patch(&self) -> FieldPatch {
        FieldPatch::from_raw(
            self.label.clone(),
            self.kind.clone(),
            self.placeholder.clone(),
            &self.options_text,
            self.required,
        )
    }

    /// Which auxiliary inputs the editor shows for the draft's current kind
    pub fn auxiliary_inputs(&self) -> AuxiliaryInputs {
        AuxiliaryInputs::for_kind(&self.kind)
    }
}

/// One edit to a single editor control
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "kebab-case")]
pub enum DraftEdit {
    Label(String),
    Kind(FieldType),
    Placeholder(String),
    Options(String),
    Required(bool),
}

/// Visibility of the kind-dependent editor inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxiliaryInputs {
    /// The multi-line options block
    pub options: bool,
    /// The placeholder input, which doubles as the caption for checkboxes
    pub placeholder: bool,
}

impl AuxiliaryInputs {
    pub fn for_kind(kind: &FieldType) -> Self {
        let select = kind.is_select();
        AuxiliaryInputs {
            options: select,
            placeholder: !select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldType::Select, true, false)]
    #[case(FieldType::Checkbox, false, true)]
    #[case(FieldType::Text, false, true)]
    #[case(FieldType::Textarea, false, true)]
    #[case(FieldType::Other("tel".into()), false, true)]
    fn auxiliary_inputs_follow_kind(
        #[case] kind: FieldType,
        #[case] options: bool,
        #[case] placeholder: bool,
    ) {
        assert_eq!(
            AuxiliaryInputs::for_kind(&kind),
            AuxiliaryInputs {
                options,
                placeholder
            }
        );
    }

    #[test]
    fn draft_round_trips_options_block() {
        let field = Field::with_label("Plan")
            .of_kind("select")
            .with_options(["A", "B"]);
        let draft = FieldDraft::from_field(&field);
        assert_eq!(draft.options_text, "A\nB");
        assert_eq!(draft.to_patch().options, vec!["A", "B"]);
    }

    #[test]
    fn edits_touch_only_their_input() {
        let mut draft = FieldDraft::from_field(&Field::new());
        draft.apply(DraftEdit::Kind(FieldType::Select));
        draft.apply(DraftEdit::Options(" A \n\nB".into()));

        assert_eq!(draft.label, "New Field");
        assert!(draft.auxiliary_inputs().options);
        assert_eq!(draft.to_patch().options, vec!["A", "B"]);
    }

    #[test]
    fn draft_edits_deserialize_from_tagged_json() {
        let edit: DraftEdit = serde_json::from_str(r#"{"input":"kind","value":"email"}"#).unwrap();
        assert_eq!(edit, DraftEdit::Kind(FieldType::Email));
        let edit: DraftEdit =
            serde_json::from_str(r#"{"input":"required","value":true}"#).unwrap();
        assert_eq!(edit, DraftEdit::Required(true));
    }
}
