use crate::theme::scanner::{
    dark_class_blocks, dark_media_blocks, data_theme_dark_blocks, html_dark_blocks,
    layer_base_blocks, root_blocks, theme_at_rule_blocks, theme_at_rule_verbatim,
};

#[test]
fn test_root_at_start_of_text() {
    let blocks = root_blocks(":root{--primary:red;}");
    assert_eq!(blocks, vec!["--primary:red;"]);
}

#[test]
fn test_root_after_closing_brace_and_whitespace() {
    let css = ".btn{color:red}:root{--a:1;}\n:root { --b: 2; }";
    let blocks = root_blocks(css);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0], "--a:1;");
    assert_eq!(blocks[1], " --b: 2; ");
}

#[test]
fn test_root_requires_boundary() {
    // `body:root` has no `}`/whitespace/start boundary before the colon
    let blocks = root_blocks("body:root{--a:1;}");
    assert!(blocks.is_empty());
}

#[test]
fn test_theme_at_rule_both_forms() {
    let css = "@theme { --primary: red; } @theme inline { --accent: blue; }";
    let blocks = theme_at_rule_blocks(css);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].trim(), "--primary: red;");
    assert_eq!(blocks[1].trim(), "--accent: blue;");
}

#[test]
fn test_theme_at_rule_verbatim_keeps_header() {
    let css = "body { color: red; }\n@theme inline {\n  --primary: red;\n}\n";
    let blocks = theme_at_rule_verbatim(css);
    assert_eq!(blocks, vec!["@theme inline {\n  --primary: red;\n}"]);
}

#[test]
fn test_layer_base_block() {
    let css = "@layer base {\n  :root { --a: 1; }\n}";
    let blocks = layer_base_blocks(css);
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].contains(":root"));
}

#[test]
fn test_dark_class_boundaries() {
    let css = ".dark{--a:1;} .light,.dark { --b: 2; } }.dark{--c:3;}";
    let blocks = dark_class_blocks(css);
    assert_eq!(blocks.len(), 3);
}

#[test]
fn test_dark_class_rejects_longer_names() {
    // `.darker` and `.not-dark` must not match as dark contexts
    assert!(dark_class_blocks(".darker { --a: 1; }").is_empty());
    assert!(dark_class_blocks(".not-dark { --a: 1; }").is_empty());
}

#[test]
fn test_html_dark_selector() {
    let blocks = html_dark_blocks("html.dark { --bg: black; }");
    assert_eq!(blocks, vec![" --bg: black; "]);
}

#[test]
fn test_data_theme_quote_styles() {
    let css = "[data-theme=\"dark\"] { --a: 1; } [data-theme='dark'] { --b: 2; }";
    let blocks = data_theme_dark_blocks(css);
    assert_eq!(blocks.len(), 2);
}

#[test]
fn test_dark_media_spacing_variants() {
    let css = "@media (prefers-color-scheme: dark) { :root { --a: 1; } }\n\
               @media ( prefers-color-scheme : dark ){ :root { --b: 2; } }";
    let blocks = dark_media_blocks(css);
    assert_eq!(blocks.len(), 2);
}

#[test]
fn test_unbalanced_block_skipped_scan_continues() {
    // First :root never closes; the second one is still found because its
    // own opening brace yields a balanced block
    let css = ":root { --broken: 1; :root { --ok: 2; }";
    let blocks = root_blocks(css);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].trim(), "--ok: 2;");
}

#[test]
fn test_unbalanced_theme_block_not_collected() {
    let css = "@theme inline { --primary: red;";
    assert!(theme_at_rule_blocks(css).is_empty());
    assert!(theme_at_rule_verbatim(css).is_empty());
}

#[test]
fn test_nested_braces_stay_in_block() {
    let css = "@media (prefers-color-scheme: dark) { :root { --a: 1; } .x { color: red; } } :root { --top: 2; }";
    let media = dark_media_blocks(css);
    assert_eq!(media.len(), 1);
    assert!(media[0].contains("--a: 1;"));
    assert!(media[0].contains("color: red;"));
    assert!(!media[0].contains("--top"));
}
