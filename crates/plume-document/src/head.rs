//! Adding generated CSS to the document `<head>`.

use plume_dom::{DomTree, ElementData};

/// Append `<style>\n{css}\n</style>` to the first `<head>` element.
///
/// Documents without a `head` are left unchanged.
pub fn inject_style(tree: &mut DomTree, css: &str) {
    let Some(head) = tree.find_element("head") else {
        log::debug!("no head element; generated CSS not injected");
        return;
    };
    let style = tree.create_element(ElementData::new("style"));
    let text = tree.create_text(format!("\n{css}\n"));
    tree.append_child(style, text);
    tree.append_child(head, style);
}

/// Append `<link rel="stylesheet" href="{href}">` to the first `<head>` element.
///
/// Documents without a `head` are left unchanged.
pub fn inject_link(tree: &mut DomTree, href: &str) {
    let Some(head) = tree.find_element("head") else {
        log::debug!("no head element; stylesheet link not injected");
        return;
    };
    let mut link = ElementData::new("link");
    let _ = link.attrs.insert("rel", "stylesheet");
    let _ = link.attrs.insert("href", href);
    let link = tree.create_element(link);
    tree.append_child(head, link);
}
