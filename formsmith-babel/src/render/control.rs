//! Field kind → control mapping
//!
//! | Field kind | Control                                                  |
//! |------------|----------------------------------------------------------|
//! | `textarea` | `<textarea>` with placeholder                            |
//! | `select`   | `<select>` with one `<option>` per entry, in order       |
//! | `checkbox` | `<input type="checkbox">` then the placeholder as caption |
//! | other      | `<input type="{kind}">` with placeholder                 |
//!
//! Every control carries `required` when the field is required.

use crate::markup::{append, element, text_element};
use formsmith_model::{Field, FieldType};
use markup5ever_rcdom::Handle;

/// The shape of control a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control<'a> {
    MultiLine { placeholder: &'a str },
    Choice { options: &'a [String] },
    Toggle { caption: &'a str },
    SingleLine { subtype: &'a str, placeholder: &'a str },
}

impl<'a> Control<'a> {
    pub fn for_field(field: &'a Field) -> Self {
        match &field.kind {
            FieldType::Textarea => Control::MultiLine {
                placeholder: &field.placeholder,
            },
            FieldType::Select => Control::Choice {
                options: &field.options,
            },
            FieldType::Checkbox => Control::Toggle {
                caption: &field.placeholder,
            },
            other => Control::SingleLine {
                subtype: other.as_str(),
                placeholder: &field.placeholder,
            },
        }
    }

    /// Build the control's nodes, in document order
    pub fn build(&self, required: bool) -> Vec<Handle> {
        let with_required = |mut attrs: Vec<(&'a str, &'a str)>| {
            if required {
                attrs.push(("required", ""));
            }
            attrs
        };

        match *self {
            Control::MultiLine { placeholder } => {
                let attrs = with_required(vec![
                    ("class", "fs-control"),
                    ("placeholder", placeholder),
                ]);
                vec![element("textarea", &attrs)]
            }
            Control::Choice { options } => {
                let select = element("select", &with_required(vec![("class", "fs-control")]));
                for option in options {
                    append(&select, text_element("option", &[], option));
                }
                vec![select]
            }
            Control::Toggle { caption } => {
                let attrs = with_required(vec![("type", "checkbox"), ("class", "fs-toggle")]);
                vec![
                    element("input", &attrs),
                    text_element("span", &[("class", "fs-caption")], caption),
                ]
            }
            Control::SingleLine {
                subtype,
                placeholder,
            } => {
                let attrs = with_required(vec![
                    ("type", subtype),
                    ("class", "fs-control"),
                    ("placeholder", placeholder),
                ]);
                vec![element("input", &attrs)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;
    use rstest::rstest;

    fn render(field: &Field) -> String {
        to_html(&Control::for_field(field).build(field.required)).unwrap()
    }

    #[rstest]
    #[case("text", r#"<input type="text" class="fs-control" placeholder="Jane">"#)]
    #[case("email", r#"<input type="email" class="fs-control" placeholder="Jane">"#)]
    #[case("date", r#"<input type="date" class="fs-control" placeholder="Jane">"#)]
    #[case("tel", r#"<input type="tel" class="fs-control" placeholder="Jane">"#)]
    #[case("textarea", r#"<textarea class="fs-control" placeholder="Jane"></textarea>"#)]
    fn maps_kinds_to_controls(#[case] kind: &str, #[case] expected: &str) {
        let field = Field::with_label("Name").of_kind(kind).with_placeholder("Jane");
        assert_eq!(render(&field), expected);
    }

    #[test]
    fn select_lists_options_in_order_and_ignores_placeholder() {
        let field = Field::with_label("Plan")
            .of_kind("select")
            .with_placeholder("unused")
            .with_options(["B", "A", "B"]);
        assert_eq!(
            render(&field),
            r#"<select class="fs-control"><option>B</option><option>A</option><option>B</option></select>"#
        );
    }

    #[test]
    fn checkbox_uses_placeholder_as_caption() {
        let field = Field::with_label("Terms")
            .of_kind("checkbox")
            .with_placeholder("I agree")
            .required(true);
        assert_eq!(
            render(&field),
            r#"<input type="checkbox" class="fs-toggle" required=""><span class="fs-caption">I agree</span>"#
        );
    }

    #[test]
    fn required_marks_every_control_kind() {
        for kind in FieldType::KNOWN {
            let field = Field::new().of_kind(kind).required(true);
            assert!(render(&field).contains("required=\"\""));
        }
    }

    #[test]
    fn non_select_fields_ignore_options() {
        let field = Field::new().with_options(["A"]);
        assert!(!render(&field).contains("option"));
    }
}
