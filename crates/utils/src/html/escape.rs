//! Markup escaping
//!
//! Escaping is not idempotent: `&amp;` becomes `&amp;amp;`. Escape raw text
//! exactly once, never text that is already escaped.

use std::fmt::Display;

/// Reserved markup characters and their entity replacements.
pub const ESCAPE_MAP: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

fn entity_for(ch: char) -> Option<&'static str> {
    ESCAPE_MAP
        .iter()
        .find(|(reserved, _)| *reserved == ch)
        .map(|(_, entity)| *entity)
}

/// Escape the five reserved markup characters in `value`.
///
/// The value is formatted with its `Display` impl first, so numbers and other
/// displayable types are accepted as well as strings.
pub fn escape_html(value: impl Display) -> String {
    let input = value.to_string();
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match entity_for(ch) {
            Some(entity) => output.push_str(entity),
            None => output.push(ch),
        }
    }
    output
}

/// Make `value` safe for insertion into markup.
///
/// This escapes everything and delegates to [`escape_html`]. There is no
/// allow-list and no tag stripping.
pub fn sanitize_html(value: impl Display) -> String {
    escape_html(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_tags() {
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_escapes_ampersand() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escapes_quotes() {
        assert_eq!(
            escape_html("it's \"quoted\""),
            "it&#39;s &quot;quoted&quot;"
        );
    }

    #[test]
    fn test_other_characters_pass_through() {
        assert_eq!(escape_html("héllo wörld 42 / \\ ="), "héllo wörld 42 / \\ =");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_non_string_values_are_formatted() {
        assert_eq!(escape_html(42), "42");
        assert_eq!(escape_html('<'), "&lt;");
    }

    #[test]
    fn test_escaping_twice_double_escapes() {
        let once = escape_html("a & b");
        assert_eq!(escape_html(&once), "a &amp;amp; b");
    }

    #[test]
    fn test_sanitize_matches_escape() {
        let inputs = [
            "",
            "plain",
            "<script>alert('x')</script>",
            "a && b || c",
            "\"'<>&",
            "&amp; already",
        ];
        for input in inputs {
            assert_eq!(sanitize_html(input), escape_html(input), "input: {input}");
        }
    }
}
