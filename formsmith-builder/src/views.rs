//! Builder panels: page list, page editor, field editor
//!
//! These are the builder's own controls, not part of the form. Element positions are passed
//! back to the builder as `data-page` / `data-field` attributes, which the UI binding turns
//! into [`Action`](crate::Action)s.

use formsmith_babel::markup::{append, element, text_element, to_html, Handle};
use formsmith_babel::FormatError;
use formsmith_model::{FieldEditor, FieldType, FormDocument, Selection};

pub const SELECT_PAGE_HINT: &str = "Select a page to edit.";
pub const SELECT_FIELD_HINT: &str = "Select a field to edit it.";
pub const UNLABELED: &str = "(no label)";

pub fn page_list(doc: &FormDocument, selection: &Selection) -> Result<String, FormatError> {
    let nav = element("nav", &[("class", "fs-page-list")]);
    let selected = selection.page_index(doc);
    for (index, page) in doc.pages.iter().enumerate() {
        let class = selected_class("fs-page-button", selected == Some(index));
        let position = index.to_string();
        append(
            &nav,
            text_element(
                "button",
                &[("type", "button"), ("class", &class), ("data-page", &position)],
                &page.title,
            ),
        );
    }
    to_html(&[nav])
}

pub fn page_editor(doc: &FormDocument, selection: &Selection) -> Result<String, FormatError> {
    let Some(page_index) = selection.page_index(doc) else {
        return hint(SELECT_PAGE_HINT);
    };
    let page = &doc.pages[page_index];
    let editing = selection.field_position(doc).map(|(_, field)| field);

    let panel = element("div", &[("class", "fs-page-editor")]);
    append(
        &panel,
        text_element(
            "label",
            &[("class", "fs-label"), ("for", "pageTitleInput")],
            "Page Title",
        ),
    );
    append(
        &panel,
        element(
            "input",
            &[
                ("id", "pageTitleInput"),
                ("class", "fs-control"),
                ("value", &page.title),
            ],
        ),
    );
    append(
        &panel,
        text_element(
            "button",
            &[("type", "button"), ("id", "addFieldBtn"), ("class", "fs-button")],
            "+ Add Field",
        ),
    );

    let cards = element("div", &[("class", "fs-field-cards")]);
    for (index, field) in page.fields.iter().enumerate() {
        let class = selected_class("fs-field-card", editing == Some(index));
        let position = index.to_string();
        let card = element("div", &[("class", &class), ("data-field", &position)]);
        let label = if field.label.is_empty() {
            UNLABELED
        } else {
            field.label.as_str()
        };
        append(
            &card,
            text_element(
                "span",
                &[("class", "fs-field-summary")],
                &format!("{} ({})", label, field.kind),
            ),
        );
        append(&cards, card);
    }
    append(&panel, cards);
    to_html(&[panel])
}

pub fn field_editor(selection: &Selection) -> Result<String, FormatError> {
    let FieldEditor::Editing { draft, .. } = selection.editor() else {
        return hint(SELECT_FIELD_HINT);
    };
    let visible = draft.auxiliary_inputs();

    let panel = element("div", &[("class", "fs-field-editor")]);

    let label_row = row(None, true);
    append(&label_row, row_label("fieldLabel", "Label"));
    append(
        &label_row,
        element(
            "input",
            &[("id", "fieldLabel"), ("class", "fs-control"), ("value", &draft.label)],
        ),
    );
    append(&panel, label_row);

    let type_row = row(None, true);
    append(&type_row, row_label("fieldType", "Type"));
    append(&type_row, type_picker(&draft.kind));
    append(&panel, type_row);

    let placeholder_row = row(Some("placeholderRow"), visible.placeholder);
    let placeholder_caption = if draft.kind.is_checkbox() {
        "Caption"
    } else {
        "Placeholder"
    };
    append(
        &placeholder_row,
        row_label("fieldPlaceholder", placeholder_caption),
    );
    append(
        &placeholder_row,
        element(
            "input",
            &[
                ("id", "fieldPlaceholder"),
                ("class", "fs-control"),
                ("value", &draft.placeholder),
            ],
        ),
    );
    append(&panel, placeholder_row);

    let options_row = row(Some("selectOptionsRow"), visible.options);
    append(
        &options_row,
        row_label("fieldOptions", "Options (one per line)"),
    );
    append(
        &options_row,
        text_element(
            "textarea",
            &[("id", "fieldOptions"), ("class", "fs-control")],
            &draft.options_text,
        ),
    );
    append(&panel, options_row);

    let required_row = row(None, true);
    let mut required_attrs = vec![("type", "checkbox"), ("id", "fieldRequired")];
    if draft.required {
        required_attrs.push(("checked", ""));
    }
    append(&required_row, element("input", &required_attrs));
    append(&required_row, row_label("fieldRequired", "Required"));
    append(&panel, required_row);

    for (id, caption) in [("saveFieldBtn", "Save Field"), ("removeFieldBtn", "Remove Field")] {
        append(
            &panel,
            text_element(
                "button",
                &[("type", "button"), ("id", id), ("class", "fs-button")],
                caption,
            ),
        );
    }

    to_html(&[panel])
}

fn hint(message: &str) -> Result<String, FormatError> {
    to_html(&[text_element("p", &[("class", "fs-hint")], message)])
}

fn selected_class(base: &str, selected: bool) -> String {
    if selected {
        format!("{} fs-selected", base)
    } else {
        base.to_string()
    }
}

fn row(id: Option<&str>, visible: bool) -> Handle {
    let mut attrs = vec![("class", "fs-row")];
    if let Some(id) = id {
        attrs.push(("id", id));
    }
    if !visible {
        attrs.push(("hidden", ""));
    }
    element("div", &attrs)
}

fn row_label(target: &str, caption: &str) -> Handle {
    text_element("label", &[("class", "fs-label"), ("for", target)], caption)
}

fn type_picker(current: &FieldType) -> Handle {
    let select = element("select", &[("id", "fieldType"), ("class", "fs-control")]);
    let mut kinds = FieldType::KNOWN.to_vec();
    if !kinds.contains(current) {
        kinds.push(current.clone());
    }
    for kind in &kinds {
        let mut attrs = vec![("value", kind.as_str())];
        if kind == current {
            attrs.push(("selected", ""));
        }
        append(&select, text_element("option", &attrs, kind.as_str()));
    }
    select
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_model::DraftEdit;

    fn document() -> FormDocument {
        let mut doc = FormDocument::with_title("Signup");
        let page = doc.add_page("Contact");
        doc.add_field(page);
        doc.add_page("Plan");
        doc
    }

    #[test]
    fn page_list_marks_selected_page() {
        let doc = document();
        let mut selection = Selection::new();
        selection.select_page(&doc, 1);

        let html = page_list(&doc, &selection).unwrap();
        assert_eq!(
            html,
            r#"<nav class="fs-page-list"><button type="button" class="fs-page-button" data-page="0">Contact</button><button type="button" class="fs-page-button fs-selected" data-page="1">Plan</button></nav>"#
        );
    }

    #[test]
    fn page_editor_hints_without_selection() {
        let html = page_editor(&document(), &Selection::new()).unwrap();
        assert_eq!(html, r#"<p class="fs-hint">Select a page to edit.</p>"#);
    }

    #[test]
    fn page_editor_lists_field_cards() {
        let mut doc = document();
        doc.pages[0].fields[0].label.clear();
        let mut selection = Selection::new();
        selection.select_page(&doc, 0);
        selection.select_field(&doc, 0);

        let html = page_editor(&doc, &selection).unwrap();
        assert!(html.contains(r#"value="Contact""#));
        assert!(html.contains("+ Add Field"));
        assert!(html.contains(
            r#"<div class="fs-field-card fs-selected" data-field="0"><span class="fs-field-summary">(no label) (text)</span></div>"#
        ));
    }

    #[test]
    fn field_editor_hides_options_for_text() {
        let doc = document();
        let mut selection = Selection::new();
        selection.select_page(&doc, 0);
        selection.select_field(&doc, 0);

        let html = field_editor(&selection).unwrap();
        assert!(html.contains(r#"<div class="fs-row" id="placeholderRow"><label"#));
        assert!(html.contains(r#"<div class="fs-row" id="selectOptionsRow" hidden="">"#));
        assert!(html.contains(r#"<option value="text" selected="">text</option>"#));
    }

    #[test]
    fn field_editor_switches_inputs_for_select() {
        let doc = document();
        let mut selection = Selection::new();
        selection.select_page(&doc, 0);
        selection.select_field(&doc, 0);
        selection.edit_draft(DraftEdit::Kind(FieldType::Select));

        let html = field_editor(&selection).unwrap();
        assert!(html.contains(r#"<div class="fs-row" id="placeholderRow" hidden="">"#));
        assert!(html.contains(r#"<div class="fs-row" id="selectOptionsRow"><label"#));
    }

    #[test]
    fn field_editor_offers_unknown_kind() {
        let doc = document();
        let mut selection = Selection::new();
        selection.select_page(&doc, 0);
        selection.select_field(&doc, 0);
        selection.edit_draft(DraftEdit::Kind(FieldType::Other("tel".into())));

        let html = field_editor(&selection).unwrap();
        assert!(html.contains(r#"<option value="tel" selected="">tel</option>"#));
    }

    #[test]
    fn empty_field_editor_shows_hint() {
        let html = field_editor(&Selection::new()).unwrap();
        assert_eq!(html, r#"<p class="fs-hint">Select a field to edit it.</p>"#);
    }
}
