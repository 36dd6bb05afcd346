//! Theme Token Tables
//!
//! This module contains the fixed registries of recognized theme variables:
//! which custom properties count as design tokens, the canonical order they
//! are emitted in, and the name groups the formatter needs when it
//! synthesizes a token block. Centralizing these tables keeps every feature
//! working from the same notion of "theme variable".

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Custom properties recognized as theme variables. Declarations whose name
/// is not in this table are ignored during extraction.
pub const THEME_VARIABLES: [&str; 52] = [
    "--background",
    "--foreground",
    "--card",
    "--card-foreground",
    "--popover",
    "--popover-foreground",
    "--primary",
    "--primary-foreground",
    "--secondary",
    "--secondary-foreground",
    "--muted",
    "--muted-foreground",
    "--accent",
    "--accent-foreground",
    "--destructive",
    "--destructive-foreground",
    "--border",
    "--input",
    "--ring",
    "--radius",
    "--chart-1",
    "--chart-2",
    "--chart-3",
    "--chart-4",
    "--chart-5",
    "--sidebar",
    "--sidebar-foreground",
    "--sidebar-primary",
    "--sidebar-primary-foreground",
    "--sidebar-accent",
    "--sidebar-accent-foreground",
    "--sidebar-border",
    "--sidebar-ring",
    "--font-sans",
    "--font-serif",
    "--font-mono",
    "--shadow-2xs",
    "--shadow-xs",
    "--shadow-sm",
    "--shadow",
    "--shadow-md",
    "--shadow-lg",
    "--shadow-xl",
    "--shadow-2xl",
    "--shadow-x",
    "--shadow-y",
    "--shadow-blur",
    "--shadow-spread",
    "--shadow-opacity",
    "--shadow-color",
    "--spacing",
    "--tracking-normal",
];

/// Canonical display order for emitted variables. Names not listed here sort
/// after every listed name, lexicographically among themselves.
pub const VARIABLE_ORDER: [&str; 52] = [
    "--background",
    "--foreground",
    "--card",
    "--card-foreground",
    "--popover",
    "--popover-foreground",
    "--primary",
    "--primary-foreground",
    "--secondary",
    "--secondary-foreground",
    "--muted",
    "--muted-foreground",
    "--accent",
    "--accent-foreground",
    "--destructive",
    "--destructive-foreground",
    "--border",
    "--input",
    "--ring",
    "--chart-1",
    "--chart-2",
    "--chart-3",
    "--chart-4",
    "--chart-5",
    "--sidebar",
    "--sidebar-foreground",
    "--sidebar-primary",
    "--sidebar-primary-foreground",
    "--sidebar-accent",
    "--sidebar-accent-foreground",
    "--sidebar-border",
    "--sidebar-ring",
    "--font-sans",
    "--font-serif",
    "--font-mono",
    "--radius",
    "--shadow-x",
    "--shadow-y",
    "--shadow-blur",
    "--shadow-spread",
    "--shadow-opacity",
    "--shadow-color",
    "--shadow-2xs",
    "--shadow-xs",
    "--shadow-sm",
    "--shadow",
    "--shadow-md",
    "--shadow-lg",
    "--shadow-xl",
    "--shadow-2xl",
    "--tracking-normal",
    "--spacing",
];

/// Semantic color roles, without the `--` prefix. For each role present in
/// the light table, the synthesized token block maps `--color-<role>` to
/// `var(--<role>)`.
pub const COLOR_ROLES: [&str; 32] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "chart-1",
    "chart-2",
    "chart-3",
    "chart-4",
    "chart-5",
    "sidebar",
    "sidebar-foreground",
    "sidebar-primary",
    "sidebar-primary-foreground",
    "sidebar-accent",
    "sidebar-accent-foreground",
    "sidebar-border",
    "sidebar-ring",
];

/// Shadow scale variables, emitted as passthrough lines in the synthesized
/// token block when present.
pub const SHADOW_VARIABLES: [&str; 8] = [
    "--shadow-2xs",
    "--shadow-xs",
    "--shadow-sm",
    "--shadow",
    "--shadow-md",
    "--shadow-lg",
    "--shadow-xl",
    "--shadow-2xl",
];

/// Check whether a custom property name is a recognized theme variable
pub fn is_theme_variable(name: &str) -> bool {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| THEME_VARIABLES.iter().copied().collect())
        .contains(name)
}

/// Position of a variable in the canonical display order, if it has one
pub fn order_index(name: &str) -> Option<usize> {
    static INDEX: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();
    INDEX
        .get_or_init(|| {
            VARIABLE_ORDER
                .iter()
                .enumerate()
                .map(|(index, name)| (*name, index))
                .collect()
        })
        .get(name)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_membership() {
        assert!(is_theme_variable("--primary"));
        assert!(is_theme_variable("--shadow-2xl"));
        assert!(!is_theme_variable("--my-app-gap"));
        assert!(!is_theme_variable("primary"));
    }

    #[test]
    fn test_order_index_lookup() {
        assert_eq!(order_index("--background"), Some(0));
        assert_eq!(order_index("--foreground"), Some(1));
        assert!(order_index("--radius") > order_index("--font-mono"));
        assert_eq!(order_index("--not-a-token"), None);
    }

    #[test]
    fn test_every_ordered_name_is_allow_listed() {
        for name in VARIABLE_ORDER {
            assert!(is_theme_variable(name), "{} missing from allow-list", name);
        }
    }
}
