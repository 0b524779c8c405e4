//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)
//!
//! Turns a [`DomTree`] back into markup. Text inside raw-text elements such
//! as `style` and `script` is written out verbatim.

use plume_dom::{DomTree, NodeId, NodeType};

use crate::parser::core::VOID_ELEMENTS;

/// "If the parent of current node is a style, script, xmp, iframe, noembed,
/// noframes, or plaintext element ... then append the value of current node's
/// data literally."
const RAW_TEXT_PARENTS: &[&str] = &[
    "style",
    "script",
    "xmp",
    "iframe",
    "noembed",
    "noframes",
    "plaintext",
];

/// Serialize every child of the document node.
#[must_use]
pub fn serialize(tree: &DomTree) -> String {
    let mut out = String::new();
    for &child in tree.children(NodeId::ROOT) {
        serialize_node(tree, child, &mut out);
    }
    out
}

/// Serialize a single node and its subtree (the node's "outer HTML").
#[must_use]
pub fn serialize_subtree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    serialize_node(tree, id, &mut out);
    out
}

fn serialize_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    match &node.node_type {
        NodeType::Document => {
            for &child in &node.children {
                serialize_node(tree, child, out);
            }
        }
        NodeType::Doctype(data) => {
            out.push_str("<!");
            out.push_str(data);
            out.push('>');
        }
        NodeType::Comment(data) => {
            out.push_str("<!--");
            out.push_str(data);
            out.push_str("-->");
        }
        NodeType::Text(data) => {
            let raw = node
                .parent
                .and_then(|parent| tree.as_element(parent))
                .is_some_and(|parent| RAW_TEXT_PARENTS.contains(&parent.tag_name.as_str()));
            if raw {
                out.push_str(data);
            } else {
                escape_text(data, out);
            }
        }
        NodeType::Element(element) => {
            out.push('<');
            out.push_str(&element.tag_name);
            for (name, value) in element.attrs.iter() {
                out.push(' ');
                out.push_str(name);
                // Boolean attributes are written bare.
                if !value.is_empty() {
                    out.push_str("=\"");
                    escape_attribute(value, out);
                    out.push('"');
                }
            }
            out.push('>');

            // "If current node serializes as void, then continue on to the next child node at this point."
            if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
                return;
            }
            for &child in &node.children {
                serialize_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}

/// [§ 13.3 Escaping a string](https://html.spec.whatwg.org/multipage/parsing.html#escapingString)
///
/// "Replace any occurrence of the "&" character by the string "&amp;".
/// Replace any occurrences of the U+00A0 NO-BREAK SPACE character by the string "&nbsp;".
/// If the algorithm was not invoked in the attribute mode, replace any occurrences
/// of the "<" character by the string "&lt;", and any occurrences of the ">"
/// character by the string "&gt;"."
fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// "If the algorithm was invoked in the attribute mode, replace any occurrences
/// of the """ character by the string "&quot;"."
fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
