//! Integration tests for extracting inline styles into a stylesheet.

use plume_css::reverse_inline_styles;
use plume_dom::DomTree;
use plume_html::{parse_html, serialize};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse `html`, extract, and return `(css, serialized html)`.
fn extract(html: &str) -> (String, String) {
    let mut tree = parse_html(html);
    let css = reverse_inline_styles(&mut tree);
    (css, serialize(&tree))
}

#[test]
fn test_unclassed_element_gets_auto_class() {
    init_logging();
    let (css, html) = extract(r#"<div style="color:red">Hello</div>"#);
    assert_eq!(css, ".auto-style-1 {\n  color:red;\n}");
    assert_eq!(html, r#"<div class="auto-style-1">Hello</div>"#);
}

#[test]
fn test_existing_class_is_used_and_kept() {
    let (css, html) = extract(r#"<div class="existing other" style="color:red">Hello</div>"#);
    assert_eq!(css, ".existing {\n  color:red;\n}");
    assert_eq!(html, r#"<div class="existing other">Hello</div>"#);
}

#[test]
fn test_equal_styles_in_any_order_share_one_rule() {
    let (css, _) = extract(concat!(
        r#"<div class="item" style="color:red;font-size:16px">A</div>"#,
        r#"<span class="item" style="font-size:16px; color:red;">B</span>"#,
    ));
    assert_eq!(css, ".item {\n  color:red;\n  font-size:16px;\n}");
}

#[test]
fn test_shared_style_lists_every_selector() {
    let (css, _) = extract(concat!(
        r#"<p class="a" style="margin:0">1</p>"#,
        r#"<p class="b" style="margin:0">2</p>"#,
        r#"<p class="c" style="padding:0">3</p>"#,
        r#"<p class="a" style="margin:0">4</p>"#,
    ));
    assert_eq!(css, ".a,\n.b {\n  margin:0;\n}\n\n.c {\n  padding:0;\n}");
}

#[test]
fn test_ancestor_class_gives_descendant_selector() {
    let (css, html) = extract(
        r#"<div class="box"><section><span style="color:blue">x</span></section></div>"#,
    );
    assert_eq!(css, ".box span {\n  color:blue;\n}");
    assert_eq!(
        html,
        r#"<div class="box"><section><span>x</span></section></div>"#
    );
}

#[test]
fn test_nearest_classed_ancestor_wins() {
    let (css, _) = extract(
        r#"<div class="outer"><div class="inner"><b style="color:blue">x</b></div></div>"#,
    );
    assert_eq!(css, ".inner b {\n  color:blue;\n}");
}

#[test]
fn test_document_tags_use_their_name() {
    let (css, html) = extract(concat!(
        r#"<html style="height:100%"><head style="display:none"></head>"#,
        r#"<body style="margin:0"></body></html>"#,
    ));
    assert_eq!(
        css,
        "html {\n  height:100%;\n}\n\nhead {\n  display:none;\n}\n\nbody {\n  margin:0;\n}"
    );
    assert_eq!(html, "<html><head></head><body></body></html>");
}

#[test]
fn test_classed_body_makes_children_descendant_selectors() {
    let (css, _) = extract(r#"<body class="page"><p style="color:red">x</p></body>"#);
    assert_eq!(css, ".page p {\n  color:red;\n}");
}

#[test]
fn test_auto_classes_are_numbered_in_tree_order() {
    let (css, html) = extract(concat!(
        r#"<div style="color:red">A</div>"#,
        r#"<div><p style="color:blue">B</p></div>"#,
        r#"<span style="color:red">C</span>"#,
    ));
    assert_eq!(
        css,
        ".auto-style-1,\n.auto-style-3 {\n  color:red;\n}\n\n.auto-style-2 {\n  color:blue;\n}"
    );
    assert_eq!(
        html,
        concat!(
            r#"<div class="auto-style-1">A</div>"#,
            r#"<div><p class="auto-style-2">B</p></div>"#,
            r#"<span class="auto-style-3">C</span>"#,
        )
    );
}

#[test]
fn test_numbering_restarts_per_extraction() {
    let (first, _) = extract(r#"<i style="color:red"></i>"#);
    let (second, _) = extract(r#"<i style="color:red"></i>"#);
    assert_eq!(first, second);
    assert!(second.starts_with(".auto-style-1 "));
}

#[test]
fn test_auto_class_makes_descendants_use_it() {
    let (css, _) = extract(r#"<div style="padding:0"><p style="margin:0">x</p></div>"#);
    assert_eq!(
        css,
        ".auto-style-1 {\n  padding:0;\n}\n\n.auto-style-1 p {\n  margin:0;\n}"
    );
}

#[test]
fn test_blank_styles_are_removed_without_rules() {
    let (css, html) = extract(r#"<div style="">Empty</div><p style="   ">x</p><i style=" ; ">y</i>"#);
    assert_eq!(css, "");
    assert_eq!(html, "<div>Empty</div><p>x</p><i>y</i>");
}

#[test]
fn test_elements_without_styles_are_untouched() {
    let html = r#"<div class="a"><p>No styles</p></div>"#;
    let (css, out) = extract(html);
    assert_eq!(css, "");
    assert_eq!(out, html);
}

#[test]
fn test_whitespace_only_class_is_treated_as_missing() {
    let (css, html) = extract(r#"<em class=" " style="color:red">x</em>"#);
    assert_eq!(css, ".auto-style-1 {\n  color:red;\n}");
    assert_eq!(html, r#"<em class="auto-style-1">x</em>"#);
}

#[test]
fn test_every_inline_style_is_consumed() {
    let mut tree = parse_html(concat!(
        r#"<div style="a:1"><p class="x" style="b:2"><span style="c:3"></span></p></div>"#,
        r#"<ul><li style="d:4"></li></ul>"#,
    ));
    let css = reverse_inline_styles(&mut tree);
    assert!(no_styles_left(&tree));
    assert_eq!(css.matches('{').count(), 4);
}

fn no_styles_left(tree: &DomTree) -> bool {
    tree.iter_all()
        .filter_map(|id| tree.as_element(id))
        .all(|element| element.style().is_none())
}
