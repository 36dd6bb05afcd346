//! Theme Output Formatter
//!
//! Serializes a [`ThemeSnapshot`] back into a stylesheet fragment: a
//! canonically ordered `:root` block, a `.dark` block, and a token section
//! that is either the verbatim `@theme` blocks found in the source or a
//! synthesized `@theme inline` block derived from the light table.
//!
//! The output is deterministic for a given snapshot. Variables with a place
//! in the canonical order come first, in that order; the rest follow
//! lexicographically.

use crate::theme::constants::{COLOR_ROLES, SHADOW_VARIABLES, order_index};
use crate::theme::snapshot::ThemeSnapshot;
use crate::theme::variables::VariableTable;

/// Pairs of a table in canonical display order
fn sort_variables(vars: &VariableTable) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = vars.iter().collect();

    entries.sort_by(|a, b| match (order_index(a.0), order_index(b.0)) {
        (Some(a_idx), Some(b_idx)) => a_idx.cmp(&b_idx),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.0.cmp(b.0),
    });

    entries
}

/// Synthesize an `@theme inline` block from the light table: color-role
/// mappings, font passthroughs, radii derived from `--radius`, and shadow
/// passthroughs.
fn generate_theme_inline_block(light: &VariableTable) -> String {
    let mut block = String::from("@theme inline {\n");

    for role in COLOR_ROLES {
        if light.contains(&format!("--{}", role)) {
            block.push_str(&format!("  --color-{}: var(--{});\n", role, role));
        }
    }

    if light.contains("--font-sans") {
        block.push_str("\n  --font-sans: var(--font-sans);\n");
    }
    if light.contains("--font-mono") {
        block.push_str("  --font-mono: var(--font-mono);\n");
    }
    if light.contains("--font-serif") {
        block.push_str("  --font-serif: var(--font-serif);\n");
    }

    if light.contains("--radius") {
        block.push_str("\n  --radius-sm: calc(var(--radius) - 4px);\n");
        block.push_str("  --radius-md: calc(var(--radius) - 2px);\n");
        block.push_str("  --radius-lg: var(--radius);\n");
        block.push_str("  --radius-xl: calc(var(--radius) + 4px);\n");
    }

    if SHADOW_VARIABLES.iter().any(|&name| light.contains(name)) {
        block.push('\n');
        for name in SHADOW_VARIABLES {
            if light.contains(name) {
                let short = name.trim_start_matches("--");
                block.push_str(&format!("  --{}: var({});\n", short, name));
            }
        }
    }

    block.push('}');
    block
}

/// Serialize a snapshot into the final stylesheet fragment.
///
/// Empty sections are omitted entirely; an empty snapshot yields an empty
/// string. When `theme_blocks` is non-empty the token section is a verbatim
/// passthrough, otherwise it is synthesized from the light table.
pub fn format_output(snapshot: &ThemeSnapshot) -> String {
    let mut output = String::new();

    if !snapshot.light.is_empty() {
        output.push_str(":root {\n");
        for (name, value) in sort_variables(&snapshot.light) {
            output.push_str(&format!("  {}: {};\n", name, value));
        }
        output.push_str("}\n");
    }

    if !snapshot.dark.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(".dark {\n");
        for (name, value) in sort_variables(&snapshot.dark) {
            output.push_str(&format!("  {}: {};\n", name, value));
        }
        output.push_str("}\n");
    }

    if !output.is_empty() {
        output.push('\n');
    }

    if !snapshot.theme_blocks.is_empty() {
        for block in &snapshot.theme_blocks {
            output.push_str(block.trim());
            output.push('\n');
        }
    } else if !snapshot.light.is_empty() {
        output.push_str(&generate_theme_inline_block(&snapshot.light));
        output.push('\n');
    }

    output
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
