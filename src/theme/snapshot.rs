//! Theme Snapshot Builder
//!
//! Merges variables from every recognized context into one light table, one
//! dark table and the list of verbatim `@theme` blocks. The precedence
//! between contexts is a fixed contract:
//!
//! Light table, later steps overwrite earlier for shared keys:
//! 1. top-level `:root` blocks, in document order
//! 2. `@theme` / `@theme inline` blocks, in document order
//! 3. `:root` blocks nested inside `@layer base`, in document order
//!
//! Dark table, same override rule:
//! 1. `.dark` class blocks, in document order
//! 2. `html.dark` blocks, in document order
//! 3. `[data-theme="dark"]` blocks, in document order
//! 4. `:root` blocks nested inside `@media (prefers-color-scheme: dark)`
//!
//! Within a single block, the variable extractor already applies
//! last-occurrence-wins, so the whole merge is "later write wins" end to
//! end.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::theme::constants::is_theme_variable;
use crate::theme::error::{IoContext, JsonContext, ThemeResult};
use crate::theme::scanner;
use crate::theme::variables::{VariableTable, extract_variables};

/// Result of one extraction pass over a stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSnapshot {
    /// Light-mode variables
    pub light: VariableTable,
    /// Dark-mode variables
    pub dark: VariableTable,
    /// Verbatim `@theme` block text, end-trimmed, in document order
    pub theme_blocks: Vec<String>,
}

/// Computed-style variable mapping supplied by the caller, used only when
/// text extraction finds nothing.
///
/// `BTreeMap` keeps the merge order deterministic regardless of the key
/// order in the source JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackVariables {
    /// Light-mode computed values
    #[serde(default)]
    pub light: BTreeMap<String, String>,
    /// Dark-mode computed values
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
}

impl FallbackVariables {
    /// Parse a fallback mapping from JSON text
    pub fn from_json_str(json: &str) -> ThemeResult<Self> {
        serde_json::from_str(json).with_json_context("Failed to parse fallback variables")
    }

    /// Load a fallback mapping from a JSON file
    pub fn load(path: &Path) -> ThemeResult<Self> {
        let json = fs::read_to_string(path)
            .with_io_context(&format!("Failed to read fallback file {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

/// Extract light/dark variable tables and `@theme` blocks from CSS text.
///
/// Purely text-based; the computed-style fallback is applied separately via
/// [`apply_computed_fallback`].
pub fn extract_theme_variables(css: &str) -> ThemeSnapshot {
    let mut light = VariableTable::new();
    let mut dark = VariableTable::new();

    for block in scanner::root_blocks(css) {
        light.merge_from(&extract_variables(block));
    }
    for block in scanner::theme_at_rule_blocks(css) {
        light.merge_from(&extract_variables(block));
    }
    for layer_block in scanner::layer_base_blocks(css) {
        for block in scanner::root_blocks(layer_block) {
            light.merge_from(&extract_variables(block));
        }
    }

    for block in scanner::dark_class_blocks(css) {
        dark.merge_from(&extract_variables(block));
    }
    for block in scanner::html_dark_blocks(css) {
        dark.merge_from(&extract_variables(block));
    }
    for block in scanner::data_theme_dark_blocks(css) {
        dark.merge_from(&extract_variables(block));
    }
    for media_block in scanner::dark_media_blocks(css) {
        for block in scanner::root_blocks(media_block) {
            dark.merge_from(&extract_variables(block));
        }
    }

    let theme_blocks = scanner::theme_at_rule_verbatim(css)
        .into_iter()
        .map(|block| block.trim().to_string())
        .collect();

    ThemeSnapshot {
        light,
        dark,
        theme_blocks,
    }
}

/// Apply a computed-style fallback mapping to a snapshot whose text scan
/// found no light variables.
///
/// The light table is replaced by the fallback light mapping, filtered to
/// allow-listed names. Fallback dark entries are merged in only when their
/// value differs from the light value for the same key. Returns the number
/// of light variables applied; does nothing and returns 0 when the light
/// table is already non-empty.
pub fn apply_computed_fallback(snapshot: &mut ThemeSnapshot, fallback: &FallbackVariables) -> usize {
    if !snapshot.light.is_empty() {
        return 0;
    }

    for (name, value) in &fallback.light {
        if is_theme_variable(name) {
            snapshot.light.insert(name.as_str(), value.as_str());
        }
    }

    for (name, value) in &fallback.dark {
        if !is_theme_variable(name) {
            continue;
        }
        if snapshot.light.get(name) != Some(value.as_str()) {
            snapshot.dark.insert(name.as_str(), value.as_str());
        }
    }

    snapshot.light.len()
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
