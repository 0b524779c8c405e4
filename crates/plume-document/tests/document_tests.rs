//! Integration tests for the document-level inline and extract pipelines.

use std::fs;
use std::path::PathBuf;

use plume_document::{
    Document, DocumentError, ExtractOptions, ExternalOutput, inline_css, inline_css_to_dom,
    reverse_css, reverse_css_external, reverse_css_internal,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fresh scratch directory under the system temp dir.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plume-document-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_inline_moves_rules_and_keeps_media_queries() {
    init_logging();
    let html = inline_css(concat!(
        "<html><head><style>p { color: red } @media print { p { color: black } }</style></head>",
        "<body><p>x</p></body></html>",
    ))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<html><head><style>\n@media print { p { color: black } }\n</style></head>",
            r#"<body><p style="color:red">x</p></body></html>"#,
        )
    );
}

#[test]
fn test_inline_without_preserved_css_adds_no_style() {
    let html = inline_css(r#"<head><style>.a { margin: 0 }</style></head><p class="a">x</p>"#)
        .unwrap();
    assert_eq!(html, r#"<head></head><p class="a" style="margin:0">x</p>"#);
}

#[test]
fn test_inline_keeps_pseudo_class_rules() {
    let mut document = Document::parse(
        "<head><style>a:hover { color: red } a { color: blue }</style></head><a>x</a>",
    );
    let preserved = document.inline_css().unwrap();
    assert_eq!(preserved, "a:hover { color: red }");
    assert_eq!(
        document.to_html(),
        "<head><style>\na:hover { color: red }\n</style></head><a style=\"color:blue\">x</a>"
    );
}

#[test]
fn test_inline_concatenates_style_elements_in_order() {
    let tree = inline_css_to_dom(concat!(
        "<style>p { color: red }</style>",
        "<p>x</p>",
        "<style>p { color: blue; margin: 0 }</style>",
    ))
    .unwrap();
    assert!(tree.find_element("style").is_none());
    let p = tree.find_element("p").unwrap();
    assert_eq!(
        tree.as_element(p).unwrap().style(),
        Some("color:blue;margin:0")
    );
}

#[test]
fn test_inline_without_head_still_inlines() {
    let mut document = Document::parse("<style>@font-face { font-family: X } b { x: y }</style><b>x</b>");
    let preserved = document.inline_css().unwrap();
    assert_eq!(preserved, "@font-face { font-family: X }");
    assert_eq!(document.to_html(), r#"<b style="x:y">x</b>"#);
}

#[test]
fn test_inline_reads_local_stylesheet_links() {
    let dir = scratch_dir("local-link");
    fs::write(dir.join("site.css"), "p { color: green }").unwrap();

    let mut document = Document::parse(concat!(
        r#"<head><link rel="stylesheet" href="site.css?v=2"></head>"#,
        "<p>x</p>",
    ))
    .with_base_dir(&dir);
    assert_eq!(document.base_dir(), Some(dir.as_path()));
    let _ = document.inline_css().unwrap();
    assert_eq!(
        document.to_html(),
        r#"<head><link rel="stylesheet" href="site.css?v=2"></head><p style="color:green">x</p>"#
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_link_css_follows_style_css() {
    let dir = scratch_dir("link-order");
    fs::write(dir.join("late.css"), "p { color: green }").unwrap();

    let mut document = Document::parse(concat!(
        r#"<head><link rel="stylesheet" href="late.css"><style>p { color: red }</style></head>"#,
        "<p>x</p>",
    ))
    .with_base_dir(&dir);
    let _ = document.inline_css().unwrap();
    let tree = document.into_tree();
    let p = tree.find_element("p").unwrap();
    assert_eq!(tree.as_element(p).unwrap().style(), Some("color:green"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_local_stylesheet_fails() {
    let dir = scratch_dir("missing-link");
    let mut document =
        Document::parse(r#"<link rel="stylesheet" href="gone.css"><p>x</p>"#).with_base_dir(&dir);
    let err = document.inline_css().unwrap_err();
    assert!(matches!(err, DocumentError::Io { ref path, .. } if path.ends_with("gone.css")));
    assert!(err.to_string().contains("gone.css"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_relative_link_without_base_is_skipped() {
    let html = inline_css(r#"<link rel="stylesheet" href="site.css"><p>x</p>"#).unwrap();
    assert_eq!(html, r#"<link rel="stylesheet" href="site.css"><p>x</p>"#);
}

#[test]
fn test_reverse_internal_puts_existing_css_first() {
    init_logging();
    let html = reverse_css_internal(concat!(
        "<html><head><style> .a { margin: 0 } </style></head>",
        r#"<body><p style="color:red">x</p></body></html>"#,
    ))
    .unwrap();
    assert_eq!(
        html,
        concat!(
            "<html><head><style>\n.a { margin: 0 }\n\n.auto-style-1 {\n  color:red;\n}\n</style></head>",
            r#"<body><p class="auto-style-1">x</p></body></html>"#,
        )
    );
}

#[test]
fn test_reverse_ignores_blank_style_elements() {
    let mut document =
        Document::parse(r#"<head><style>   </style></head><p class="x" style="margin:0">y</p>"#);
    let css = document.extract_css();
    assert_eq!(css, ".x {\n  margin:0;\n}");
    // Nothing is injected by the extract step alone.
    assert_eq!(document.to_html(), r#"<head></head><p class="x">y</p>"#);
}

#[test]
fn test_reverse_with_nothing_to_extract_adds_nothing() {
    let mut document = Document::parse("<head></head><p>x</p>");
    assert_eq!(document.reverse_internal(), "");
    assert_eq!(document.to_html(), "<head></head><p>x</p>");
}

#[test]
fn test_reverse_css_returns_tree_with_style_in_head() {
    let tree = reverse_css(r#"<head></head><body style="margin:0"></body>"#).unwrap();
    let head = tree.find_element("head").unwrap();
    let style = tree.children(head)[0];
    assert!(tree.is_element_named(style, "style"));
    assert_eq!(tree.child_text(style), "\nbody {\n  margin:0;\n}\n");
    let body = tree.find_element("body").unwrap();
    assert_eq!(tree.as_element(body).unwrap().style(), None);
}

#[test]
fn test_reverse_external_links_default_stylesheet() {
    let output = reverse_css_external(
        r#"<html><head></head><body><div class="card" style="padding: 4px">x</div></body></html>"#,
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(
        output,
        ExternalOutput {
            html: concat!(
                r#"<html><head><link rel="stylesheet" href="styles.css"></head>"#,
                r#"<body><div class="card">x</div></body></html>"#,
            )
            .to_string(),
            css: ".card {\n  padding: 4px;\n}".to_string(),
        }
    );
}

#[test]
fn test_reverse_external_custom_href() {
    let options = ExtractOptions {
        stylesheet_href: "css/main.css".to_string(),
    };
    let output =
        reverse_css_external(r#"<head></head><p style="color:red">x</p>"#, &options).unwrap();
    assert_eq!(
        output.html,
        r#"<head><link rel="stylesheet" href="css/main.css"></head><p class="auto-style-1">x</p>"#
    );
}

#[test]
fn test_reverse_external_without_css_or_head() {
    let empty = reverse_css_external("<head></head><p>x</p>", &ExtractOptions::default()).unwrap();
    assert_eq!(empty.css, "");
    assert_eq!(empty.html, "<head></head><p>x</p>");

    let headless =
        reverse_css_external(r#"<p style="color:red">x</p>"#, &ExtractOptions::default()).unwrap();
    assert_eq!(headless.css, ".auto-style-1 {\n  color:red;\n}");
    assert_eq!(headless.html, r#"<p class="auto-style-1">x</p>"#);
}

#[test]
fn test_parsed_document_has_no_base_url() {
    let document = Document::load("<p>x</p>").unwrap();
    assert_eq!(document.base_url(), None);
    assert!(document.tree().find_element("p").is_some());
}
