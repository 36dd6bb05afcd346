//! Selector Context Scanner
//!
//! Locates the selector and at-rule contexts that scope theme variables and
//! yields their block bodies. Matching is plain regex text search over the
//! whole stylesheet, not a CSS tokenizer: each pattern anchors on the
//! selector text followed by an opening brace, and the block extractor takes
//! it from there. Unbalanced blocks are skipped silently and scanning
//! continues with the next match.
//!
//! Nested contexts (`:root` inside `@layer base` or inside a
//! `prefers-color-scheme: dark` media block) are handled by the snapshot
//! builder, which re-runs the root scan on the outer block's body.

use std::sync::OnceLock;

use regex::Regex;

use crate::theme::block::{block_span, extract_block};

fn compile(pattern: &'static str, cell: &'static OnceLock<Regex>) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("valid context pattern"))
}

// The leading (?:^|[}\s]) / (?:^|[},\s]) guards keep selectors like
// `.not-dark` or `body:root` from matching.

fn root_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"(?:^|[}\s]):root\s*\{", &PATTERN)
}

fn theme_at_rule_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"@theme(?:\s+inline)?\s*\{", &PATTERN)
}

fn layer_base_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"@layer\s+base\s*\{", &PATTERN)
}

fn dark_class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"(?:^|[},\s])\.dark\s*\{", &PATTERN)
}

fn html_dark_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"html\.dark\s*\{", &PATTERN)
}

fn data_theme_dark_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r#"\[data-theme=["']dark["']\]\s*\{"#, &PATTERN)
}

fn dark_media_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compile(r"@media\s*\(\s*prefers-color-scheme\s*:\s*dark\s*\)\s*\{", &PATTERN)
}

/// Block bodies for every match of a context pattern, in document order
fn scan_blocks<'a>(css: &'a str, pattern: &Regex) -> Vec<&'a str> {
    pattern
        .find_iter(css)
        .filter_map(|found| extract_block(css, found.start()))
        .collect()
}

/// Bodies of top-level `:root` blocks
pub fn root_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, root_pattern())
}

/// Bodies of `@theme` / `@theme inline` blocks
pub fn theme_at_rule_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, theme_at_rule_pattern())
}

/// Bodies of `@layer base` blocks
pub fn layer_base_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, layer_base_pattern())
}

/// Bodies of `.dark` class blocks
pub fn dark_class_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, dark_class_pattern())
}

/// Bodies of `html.dark` blocks
pub fn html_dark_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, html_dark_pattern())
}

/// Bodies of `[data-theme="dark"]` blocks
pub fn data_theme_dark_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, data_theme_dark_pattern())
}

/// Bodies of `@media (prefers-color-scheme: dark)` blocks
pub fn dark_media_blocks(css: &str) -> Vec<&str> {
    scan_blocks(css, dark_media_pattern())
}

/// Full `@theme` blocks, header through closing brace, in document order.
///
/// These are passed through verbatim by the formatter, so the text here
/// keeps the at-rule header rather than just the body.
pub fn theme_at_rule_verbatim(css: &str) -> Vec<&str> {
    theme_at_rule_pattern()
        .find_iter(css)
        .filter_map(|found| {
            block_span(css, found.start()).map(|(_, body_end)| &css[found.start()..=body_end])
        })
        .collect()
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
