//! Tests for DOM tree construction, traversal and attribute handling.

use plume_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and return its `NodeId`.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.create_element(ElementData::new(tag))
}

fn alloc_with_class(tree: &mut DomTree, tag: &str, class: &str) -> NodeId {
    let mut element = ElementData::new(tag);
    let _ = element.attrs.insert("class", class);
    tree.create_element(element)
}

// ========== attributes ==========

#[test]
fn test_attributes_keep_insertion_order() {
    let mut attrs = AttributesMap::new();
    let _ = attrs.insert("style", "color:red");
    let _ = attrs.insert("class", "a");
    let _ = attrs.insert("id", "x");

    let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["style", "class", "id"]);
}

#[test]
fn test_attribute_overwrite_keeps_position() {
    let mut attrs: AttributesMap = [("class", "a"), ("id", "x")].into_iter().collect();
    let previous = attrs.insert("class", "a b");

    assert_eq!(previous.as_deref(), Some("a"));
    assert_eq!(attrs.get("class"), Some("a b"));
    assert_eq!(attrs.iter().next(), Some(("class", "a b")));
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_attribute_remove() {
    let mut attrs: AttributesMap = [("style", "color:red"), ("id", "x")].into_iter().collect();
    assert_eq!(attrs.remove("style").as_deref(), Some("color:red"));
    assert_eq!(attrs.remove("style"), None);
    assert!(!attrs.contains_key("style"));
    assert!(attrs.contains_key("id"));
}

#[test]
fn test_class_tokens_ignore_extra_whitespace() {
    let mut element = ElementData::new("div");
    let _ = element.attrs.insert("class", "  box   primary ");

    let classes: Vec<&str> = element.classes().collect();
    assert_eq!(classes, vec!["box", "primary"]);
    assert_eq!(element.first_class(), Some("box"));
    assert!(element.has_class("primary"));
    // Token membership, not substring containment
    assert!(!element.has_class("prim"));
}

#[test]
fn test_element_without_class() {
    let element = ElementData::new("p");
    assert_eq!(element.first_class(), None);
    assert_eq!(element.classes().count(), 0);
}

// ========== tree structure ==========

#[test]
fn test_append_sets_parent() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, div);
    let p = alloc_element(&mut tree, "p");
    tree.append_child(div, p);

    assert_eq!(tree.parent(p), Some(div));
    assert_eq!(tree.parent(div), Some(NodeId::ROOT));
    assert_eq!(tree.children(div), &[p]);
}

#[test]
fn test_remove_child_detaches_node() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    let c = alloc_element(&mut tree, "c");
    tree.append_child(parent, a);
    tree.append_child(parent, b);
    tree.append_child(parent, c);

    tree.remove_child(parent, b);

    assert_eq!(tree.children(parent), &[a, c]);
    assert_eq!(tree.parent(b), None);
    assert!(!tree.iter_all().any(|id| id == b));
}

#[test]
fn test_tree_order_is_preorder() {
    // <div><p><span/></p><em/></div><b/>
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    let p = alloc_element(&mut tree, "p");
    let span = alloc_element(&mut tree, "span");
    let em = alloc_element(&mut tree, "em");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(NodeId::ROOT, div);
    tree.append_child(div, p);
    tree.append_child(p, span);
    tree.append_child(div, em);
    tree.append_child(NodeId::ROOT, b);

    let order: Vec<NodeId> = tree.iter_all().collect();
    assert_eq!(order, vec![NodeId::ROOT, div, p, span, em, b]);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DomTree::new();
    let outer = alloc_with_class(&mut tree, "div", "outer");
    let inner = alloc_element(&mut tree, "div");
    let leaf = alloc_element(&mut tree, "span");
    tree.append_child(NodeId::ROOT, outer);
    tree.append_child(outer, inner);
    tree.append_child(inner, leaf);

    let ancestors: Vec<NodeId> = tree.ancestors(leaf).collect();
    assert_eq!(ancestors, vec![inner, outer, NodeId::ROOT]);
}

#[test]
fn test_find_element_and_child_text() {
    let mut tree = DomTree::new();
    let head = alloc_element(&mut tree, "head");
    tree.append_child(NodeId::ROOT, head);
    let style = alloc_element(&mut tree, "style");
    tree.append_child(head, style);
    let a = tree.create_text(".a{color:red}");
    let b = tree.create_text(".b{color:blue}");
    tree.append_child(style, a);
    tree.append_child(style, b);

    assert_eq!(tree.find_element("style"), Some(style));
    assert_eq!(tree.find_elements("head"), vec![head]);
    assert_eq!(tree.child_text(style), ".a{color:red}.b{color:blue}");
    assert!(matches!(
        tree.get(a).map(|n| &n.node_type),
        Some(NodeType::Text(_))
    ));
}

#[test]
fn test_element_serializes_attributes_in_order() {
    let mut element = ElementData::new("div");
    let _ = element.attrs.insert("id", "main");
    let _ = element.attrs.insert("class", "box");

    let json = serde_json::to_string(&element).unwrap();
    assert_eq!(json, r#"{"tag_name":"div","attrs":{"id":"main","class":"box"}}"#);
}

#[test]
fn test_subtree_serializes_nested_children() {
    let mut tree = DomTree::new();
    let p = alloc_with_class(&mut tree, "p", "x");
    let text = tree.create_text("hi");
    tree.append_child(NodeId::ROOT, p);
    tree.append_child(p, text);

    let json = serde_json::to_string(&tree.subtree(p)).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"node":{"type":"element","data":{"tag_name":"p","attrs":{"class":"x"}}},"#,
            r#""children":[{"node":{"type":"text","data":"hi"},"children":[]}]}"#
        )
    );
}
