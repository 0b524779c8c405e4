//! Integration tests for selector matching.

use plume_css::Selector;
use plume_css::selector::{SimpleSelector, match_selector};
use plume_dom::{DomTree, ElementData, NodeId};
use plume_html::parse_html;

/// Tag names of `ids`, in order.
fn tags(tree: &DomTree, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| tree.as_element(id))
        .map(|e| e.tag_name.clone())
        .collect()
}

/// Value of the `id` attribute of each element in `ids`.
fn element_ids<'a>(tree: &'a DomTree, ids: &[NodeId]) -> Vec<&'a str> {
    ids.iter()
        .filter_map(|&id| tree.as_element(id)?.id())
        .collect()
}

#[test]
fn test_descendant_excludes_siblings_outside_ancestor() {
    let tree = parse_html(r#"<div class="container"><p id="a"/><div><p id="b"/></div></div><p id="c"/>"#);
    let matched = match_selector(&tree, NodeId::ROOT, ".container p");
    assert_eq!(element_ids(&tree, &matched), vec!["a", "b"]);
}

#[test]
fn test_descendant_any_depth_and_multiple_parts() {
    let tree = parse_html(concat!(
        r#"<ul class="nav"><li><div><a id="deep" href="/"></a></div></li></ul>"#,
        r#"<div><a id="outside" href="/"></a></div>"#,
        r#"<li><a id="li-only"></a></li>"#,
    ));
    let matched = match_selector(&tree, NodeId::ROOT, ".nav li a");
    assert_eq!(element_ids(&tree, &matched), vec!["deep"]);

    let matched = match_selector(&tree, NodeId::ROOT, "ul.nav a");
    assert_eq!(element_ids(&tree, &matched), vec!["deep"]);
}

#[test]
fn test_descendant_parts_must_appear_in_order() {
    let tree = parse_html(r#"<div class="inner"><div class="outer"><span id="s"></span></div></div>"#);
    assert_eq!(match_selector(&tree, NodeId::ROOT, ".inner .outer span").len(), 1);
    assert!(match_selector(&tree, NodeId::ROOT, ".outer .inner span").is_empty());
}

#[test]
fn test_descendant_does_not_match_self() {
    let tree = parse_html(r#"<div class="box"></div>"#);
    assert!(match_selector(&tree, NodeId::ROOT, ".box div").is_empty());
}

#[test]
fn test_compound_requires_every_class() {
    let tree = parse_html(concat!(
        r#"<div id="one" class="box"></div>"#,
        r#"<div id="two" class="box primary"></div>"#,
        r#"<span id="three" class="primary  box"></span>"#,
    ));
    let matched = match_selector(&tree, NodeId::ROOT, ".box.primary");
    assert_eq!(element_ids(&tree, &matched), vec!["two", "three"]);

    let matched = match_selector(&tree, NodeId::ROOT, "div.primary");
    assert_eq!(element_ids(&tree, &matched), vec!["two"]);
}

#[test]
fn test_class_is_token_membership() {
    let tree = parse_html(r#"<p class="boxed"></p><p class="box"></p>"#);
    let matched = match_selector(&tree, NodeId::ROOT, ".box");
    assert_eq!(matched.len(), 1);
    assert_eq!(tree.as_element(matched[0]).and_then(|e| e.first_class()), Some("box"));
}

#[test]
fn test_universal_matches_every_element_in_tree_order() {
    let tree = parse_html("<div><p>text</p><!-- c --><span></span></div>");
    let matched = match_selector(&tree, NodeId::ROOT, "*");
    assert_eq!(tags(&tree, &matched), vec!["div", "p", "span"]);
}

#[test]
fn test_type_selector() {
    let tree = parse_html("<section><p></p></section><p></p><pre></pre>");
    let matched = match_selector(&tree, NodeId::ROOT, "p");
    assert_eq!(tags(&tree, &matched), vec!["p", "p"]);
}

#[test]
fn test_type_names_match_exactly() {
    let tree = parse_html(r#"<p>x</p><div class="a">y</div>"#);
    assert!(match_selector(&tree, NodeId::ROOT, "P").is_empty());
    assert!(match_selector(&tree, NodeId::ROOT, "DIV.a").is_empty());
    assert!(match_selector(&tree, NodeId::ROOT, "DIV .a").is_empty());
    assert_eq!(match_selector(&tree, NodeId::ROOT, "div.a").len(), 1);
}

#[test]
fn test_selector_list_is_a_union_in_tree_order() {
    let tree = parse_html("<h2></h2><h1></h1><p class=\"h\"></p>");
    let matched = match_selector(&tree, NodeId::ROOT, "h1, h2, .h, h1");
    assert_eq!(tags(&tree, &matched), vec!["h2", "h1", "p"]);
}

#[test]
fn test_matching_is_repeatable() {
    let tree = parse_html(r#"<div class="a"><p></p><p class="a"></p></div>"#);
    let first = match_selector(&tree, NodeId::ROOT, ".a p");
    let second = match_selector(&tree, NodeId::ROOT, ".a p");
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_unsupported_syntax_matches_nothing() {
    let tree = parse_html(r#"<ul id="list"><li title="x"></li></ul>"#);
    assert!(match_selector(&tree, NodeId::ROOT, "#list").is_empty());
    assert!(match_selector(&tree, NodeId::ROOT, "li[title]").is_empty());
}

#[test]
fn test_match_from_subtree_root() {
    let tree = parse_html("<div><p></p></div><p></p>");
    let div = tree.find_element("div").unwrap();
    assert_eq!(match_selector(&tree, div, "p").len(), 1);
}

#[test]
fn test_simple_selector_matches_element_data() {
    let mut element = ElementData::new("span");
    let _ = element.attrs.insert("class", "note wide");
    assert!(SimpleSelector::Class("wide".to_string()).matches(&element));
    assert!(SimpleSelector::Type("span".to_string()).matches(&element));
    assert!(!SimpleSelector::Type("div".to_string()).matches(&element));
    assert_eq!(
        Selector::parse("span"),
        Selector::Simple(SimpleSelector::Type("span".to_string()))
    );
}
