//! Choice options parsing
//!
//! Options are edited as a multi-line block, one option per line. The block is split on
//! newlines, every line is trimmed, and empty lines are dropped. Order is preserved and
//! duplicates are kept.

/// Parse a multi-line block into an ordered list of non-empty options
pub fn parse_options(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render options back into the editable block form
pub fn join_options(options: &[String]) -> String {
    options.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let parsed = parse_options("  Basic \n\n\tPro\r\n   \nEnterprise");
        assert_eq!(parsed, vec!["Basic", "Pro", "Enterprise"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(parse_options("b\na\nb"), vec!["b", "a", "b"]);
    }

    #[test]
    fn empty_block_has_no_options() {
        assert!(parse_options("").is_empty());
        assert!(parse_options("\n \n").is_empty());
    }

    #[test]
    fn join_is_newline_separated() {
        let options = vec!["A".to_string(), "B".to_string()];
        assert_eq!(join_options(&options), "A\nB");
    }
}
