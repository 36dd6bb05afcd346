//! Theme Variable Extraction
//!
//! Parses `--name: value;` declarations out of a block body, filters them
//! against the allow-list and normalizes their values. Also defines
//! [`VariableTable`], the insertion-ordered name→value mapping every stage
//! of the pipeline merges into.
//!
//! Values are matched non-greedily up to the next literal `;`, so a value
//! containing an unescaped semicolon (e.g. a data URL) is truncated at that
//! semicolon. This is a known limitation of the text-search approach.

use std::sync::OnceLock;

use regex::Regex;

use crate::theme::constants::is_theme_variable;

/// Insertion-ordered mapping from variable name to normalized value.
///
/// Re-inserting an existing key updates its value in place, so "later write
/// wins" is an explicit operation rather than a side effect of whatever map
/// type happens to back the table. Display order is recomputed by the
/// formatter; the order kept here is write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
}

impl VariableTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a pair, overwriting the value if the key is already present
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by variable name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check whether a variable name is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of variables in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no variables
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in write order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Merge another table into this one, later write wins per key
    pub fn merge_from(&mut self, other: &VariableTable) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for VariableTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = VariableTable::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // (?s) lets the value run across newlines; the lazy quantifier stops at
    // the first semicolon
    PATTERN.get_or_init(|| Regex::new(r"(?s)--([\w-]+)\s*:\s*(.*?);").expect("valid declaration pattern"))
}

/// Extract allow-listed variable declarations from a block body.
///
/// Values are trimmed and internal whitespace runs (including newlines)
/// collapse to a single space. The last occurrence of a name within the
/// block wins.
pub fn extract_variables(block: &str) -> VariableTable {
    let mut vars = VariableTable::new();

    for captures in declaration_pattern().captures_iter(block) {
        let name = format!("--{}", &captures[1]);
        if !is_theme_variable(&name) {
            continue;
        }

        let value = collapse_whitespace(captures[2].trim());
        vars.insert(name, value);
    }

    vars
}

/// Replace every whitespace run with a single space
fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    out
}
