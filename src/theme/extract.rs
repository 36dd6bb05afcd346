//! Theme Extraction Pipeline
//!
//! The public one-shot entry point: raw CSS text in, formatted stylesheet
//! fragment plus counts and a human-readable trace out. Every call is
//! independent and pure; no error escapes — an input with nothing to find
//! yields an empty result, not a failure.

use serde::Serialize;

use crate::theme::formatter::format_output;
use crate::theme::snapshot::{FallbackVariables, apply_computed_fallback, extract_theme_variables};

/// Counts describing what one extraction found.
///
/// Serialized field names mirror the response shape of the original
/// extension message, so downstream consumers see the same keys.
#[derive(Debug, Clone, Copy, Serialize, Eq, PartialEq)]
pub struct ExtractionStats {
    /// Light-mode variables in the final table
    #[serde(rename = "lightCount")]
    pub light_count: usize,
    /// Dark-mode variables in the final table
    #[serde(rename = "darkCount")]
    pub dark_count: usize,
    /// Verbatim `@theme` blocks collected
    #[serde(rename = "themeBlocks")]
    pub theme_block_count: usize,
}

/// Result of one extraction: the formatted stylesheet fragment, the counts,
/// and the ordered diagnostic trace.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    /// Formatted stylesheet fragment, possibly empty
    pub css: String,
    /// Counts for the final tables
    pub stats: ExtractionStats,
    /// Human-readable trace of the steps taken, in order
    pub logs: Vec<String>,
}

/// Extract theme variables from CSS text and format them.
///
/// `fallback` supplies computed-style values to use when the text scan
/// finds no light variables; pass `None` when the caller has no rendered
/// document to inspect.
pub fn extract_theme(css_text: &str, fallback: Option<&FallbackVariables>) -> ExtractionOutcome {
    let mut logs = Vec::new();

    let mut snapshot = extract_theme_variables(css_text);
    logs.push(format!(
        "Extracted {} light mode variables from CSS",
        snapshot.light.len()
    ));
    logs.push(format!(
        "Extracted {} dark mode variables from CSS",
        snapshot.dark.len()
    ));

    if snapshot.light.is_empty() {
        if let Some(fallback) = fallback {
            logs.push("Falling back to computed styles...".to_string());
            let applied = apply_computed_fallback(&mut snapshot, fallback);
            logs.push(format!("Found {} variables via computed styles", applied));
        }
    }

    if !snapshot.theme_blocks.is_empty() {
        logs.push(format!("Found {} @theme block(s)", snapshot.theme_blocks.len()));
    }

    let stats = ExtractionStats {
        light_count: snapshot.light.len(),
        dark_count: snapshot.dark.len(),
        theme_block_count: snapshot.theme_blocks.len(),
    };
    log::debug!(
        "extraction finished: {} light, {} dark, {} theme block(s)",
        stats.light_count,
        stats.dark_count,
        stats.theme_block_count
    );

    ExtractionOutcome {
        css: format_output(&snapshot),
        stats,
        logs,
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
