//! CSS Block Extraction
//!
//! Balanced-brace scanning over raw CSS text. Given a position at or before
//! an opening brace, these functions find the matching closing brace by
//! counting nesting depth and hand back the body between the braces.
//!
//! The scan is byte-level and deliberately forgiving: braces inside string
//! literals or comments are counted like any other brace, so a quoted `}`
//! can terminate a block early. That matches the rest of the text-search
//! pipeline, which never tokenizes strings or comments either; the worst
//! case is a truncated or missed block, never a panic.

/// Byte range of a block body: starts right after the opening brace and ends
/// right before its matching closing brace.
pub fn block_span(css: &str, start: usize) -> Option<(usize, usize)> {
    let bytes = css.as_bytes();
    if start > bytes.len() {
        return None;
    }

    let open_brace = bytes[start..].iter().position(|&b| b == b'{')? + start;

    let mut depth = 1usize;
    let mut i = open_brace + 1;

    while i < bytes.len() && depth > 0 {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        i += 1;
    }

    if depth != 0 {
        return None;
    }

    // i is one past the closing brace; braces are ASCII so both bounds are
    // valid char boundaries
    Some((open_brace + 1, i - 1))
}

/// Extract the body of the first block at or after `start`.
///
/// Returns `None` when no opening brace follows `start` or the braces never
/// balance before end of input.
pub fn extract_block(css: &str, start: usize) -> Option<&str> {
    block_span(css, start).map(|(body_start, body_end)| &css[body_start..body_end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_block() {
        let css = ":root { --primary: red; }";
        assert_eq!(extract_block(css, 0), Some(" --primary: red; "));
    }

    #[test]
    fn test_nested_block() {
        let css = "@media screen { .a { color: red; } .b { color: blue; } }";
        let body = extract_block(css, 0).unwrap();
        assert_eq!(body, " .a { color: red; } .b { color: blue; } ");
    }

    #[test]
    fn test_start_offset_skips_earlier_blocks() {
        let css = ".a { x } .b { y }";
        let second = css.find(".b").unwrap();
        assert_eq!(extract_block(css, second), Some(" y "));
    }

    #[test]
    fn test_no_opening_brace() {
        assert_eq!(extract_block(":root", 0), None);
        assert_eq!(extract_block("", 0), None);
    }

    #[test]
    fn test_unbalanced_block() {
        assert_eq!(extract_block(":root { --a: 1;", 0), None);
        assert_eq!(extract_block("@media { .a { }", 0), None);
    }

    #[test]
    fn test_start_past_end() {
        assert_eq!(extract_block("{}", 10), None);
    }

    #[test]
    fn test_multibyte_content() {
        let css = ":root { --font-sans: \"Füße\", sans-serif; }";
        let body = extract_block(css, 0).unwrap();
        assert!(body.contains("Füße"));
    }

    #[test]
    fn test_brace_in_string_counts() {
        // Known limitation: the quoted brace closes the block early
        let css = ".a { content: \"}\"; color: red; }";
        assert_eq!(extract_block(css, 0), Some(" content: \""));
    }
}
