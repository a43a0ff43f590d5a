/// Escape a value for embedding inside a `'...'` service message attribute.
///
/// Runs a single left-to-right pass over the input, so the `|` introduced by
/// one substitution is never escaped a second time.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 8);

    for c in value.chars() {
        match c {
            '|' => escaped.push_str("||"),
            '\'' => escaped.push_str("|'"),
            '\n' => escaped.push_str("|n"),
            '\r' => escaped.push_str("|r"),
            ']' => escaped.push_str("|]"),
            '[' => escaped.push_str("|["),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_each_special_character() {
        assert_eq!(escape("|"), "||");
        assert_eq!(escape("'"), "|'");
        assert_eq!(escape("\n"), "|n");
        assert_eq!(escape("\r"), "|r");
        assert_eq!(escape("]"), "|]");
        assert_eq!(escape("["), "|[");
    }

    #[test]
    fn test_escape_leaves_other_text_alone() {
        assert_eq!(escape("Login Flow #3 (ok) \"quoted\""), "Login Flow #3 (ok) \"quoted\"");
        assert_eq!(escape("ünïcødé ✓"), "ünïcødé ✓");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_mixed_message() {
        let message = "Failed asserting that 'a' is [b]|c\r\nnext";
        assert_eq!(
            escape(message),
            "Failed asserting that |'a|' is |[b|]||c|r|nnext"
        );
    }

    #[test]
    fn test_escape_is_a_single_pass() {
        let once = escape("a|'b");
        assert_eq!(once, "a|||'b");
        // A second pass escapes the pipes produced by the first one.
        assert_eq!(escape(&once), "a|||||||'b");
        assert_ne!(escape(&once), once);
    }

    #[test]
    fn test_escaped_text_has_no_bare_delimiters() {
        let escaped = escape("x]y[z]' |\n");
        let mut previous_was_escape = false;

        for c in escaped.chars() {
            if previous_was_escape {
                previous_was_escape = false;
                continue;
            }
            match c {
                '|' => previous_was_escape = true,
                ']' | '[' | '\'' | '\n' | '\r' => {
                    panic!("unescaped {:?} in {:?}", c, escaped)
                }
                _ => {}
            }
        }
        assert!(!previous_was_escape);
    }
}
