//! Property tests for options parsing and field removal

use formsmith_model::form::join_options;
use formsmith_model::{parse_options, FormDocument, Selection};
use proptest::prelude::*;

proptest! {
    #[test]
    fn options_parsing_is_idempotent(raw in "[ a-zA-Z0-9\t\r\n]{0,80}") {
        let first = parse_options(&raw);
        let second = parse_options(&join_options(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parsed_options_are_trimmed_and_non_empty(raw in "[ a-z\t\n]{0,60}") {
        for option in parse_options(&raw) {
            prop_assert!(!option.is_empty());
            prop_assert_eq!(option.trim(), option.as_str());
        }
    }

    #[test]
    fn removal_shifts_only_later_fields(n in 1usize..12, pick in 0usize..12) {
        let i = pick % n;
        let mut doc = FormDocument::new();
        let page = doc.add_page("Page 1");
        for _ in 0..n {
            doc.add_field(page);
        }
        let before: Vec<_> = doc.pages[0].fields.iter().map(|f| f.id()).collect();

        let mut selection = Selection::new();
        selection.select_page(&doc, page);
        selection.select_field(&doc, i);
        prop_assert!(selection.remove(&mut doc));

        let after: Vec<_> = doc.pages[0].fields.iter().map(|f| f.id()).collect();
        prop_assert_eq!(after.len(), n - 1);
        prop_assert_eq!(&after[..i], &before[..i]);
        prop_assert_eq!(&after[i..], &before[i + 1..]);
        prop_assert!(!selection.editor().is_editing());
    }
}
