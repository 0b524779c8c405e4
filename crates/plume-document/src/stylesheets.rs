//! CSS carried by a document in `<style>` and `<link rel="stylesheet">` elements.

use std::fs;
use std::path::Path;

use plume_common::url::resolve_url;
use plume_common::warning::warn_once;
use plume_common::{fetch_text, is_remote};
use plume_dom::{DomTree, ElementData};

use crate::DocumentError;

/// [§ 4.2.6 The style element](https://html.spec.whatwg.org/multipage/semantics.html#the-style-element)
///
/// Remove every `<style>` element from the tree and return their text
/// contents in tree order.
///
/// All style elements are found before any is removed, so removal never
/// affects which elements are visited.
pub fn take_style_elements(tree: &mut DomTree) -> Vec<String> {
    let style_elements = tree.find_elements("style");
    let mut texts = Vec::with_capacity(style_elements.len());
    for id in style_elements {
        texts.push(tree.child_text(id));
        if let Some(parent) = tree.parent(id) {
            tree.remove_child(parent, id);
        }
    }
    log::debug!("removed {} style elements", texts.len());
    texts
}

/// Remove every `<style>` element and join their trimmed, non-empty texts
/// with a blank line.
pub fn take_existing_css(tree: &mut DomTree) -> String {
    take_style_elements(tree)
        .iter()
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
///
/// "If the rel attribute's value contains the token stylesheet,
/// then the link is a stylesheet link."
///
/// Token comparison is ASCII case-insensitive.
#[must_use]
pub fn is_stylesheet_link(element: &ElementData) -> bool {
    element.tag_name == "link"
        && element.attrs.get("rel").is_some_and(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
}

/// The trimmed, non-empty `href` of every stylesheet link, in tree order.
#[must_use]
pub fn stylesheet_hrefs(tree: &DomTree) -> Vec<String> {
    tree.iter_all()
        .filter_map(|id| tree.as_element(id))
        .filter(|element| is_stylesheet_link(element))
        .filter_map(|element| element.attrs.get("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the stylesheet a link points to.
///
/// `href` is resolved against `base_url` first. A remote result is fetched;
/// anything else is read from `base_dir`. When neither applies the link is
/// reported and skipped, returning `Ok(None)`.
///
/// # Errors
///
/// Returns [`DocumentError::Fetch`] if a remote stylesheet cannot be fetched,
/// or [`DocumentError::Io`] if a local one cannot be read.
pub fn load_stylesheet(
    href: &str,
    base_url: Option<&str>,
    base_dir: Option<&Path>,
) -> Result<Option<String>, DocumentError> {
    let resolved = resolve_url(href, base_url);
    if is_remote(&resolved) {
        return Ok(Some(fetch_text(&resolved)?));
    }

    let Some(dir) = base_dir else {
        warn_once(
            "CSS",
            &format!("stylesheet '{href}' skipped: no base URL or directory to load it from"),
        );
        return Ok(None);
    };

    let path = dir.join(resolved.split(['?', '#']).next().unwrap_or_default());
    log::debug!("reading stylesheet {}", path.display());
    fs::read_to_string(&path)
        .map(Some)
        .map_err(|source| DocumentError::Io { path, source })
}

/// Remove every `<style>` element and return the CSS of the document: the
/// style texts joined by newlines, followed by each linked stylesheet.
///
/// Link elements are kept.
///
/// # Errors
///
/// Fails if a linked stylesheet cannot be loaded; see [`load_stylesheet`].
pub fn collect_css(
    tree: &mut DomTree,
    base_url: Option<&str>,
    base_dir: Option<&Path>,
) -> Result<String, DocumentError> {
    let mut css = take_style_elements(tree).join("\n");
    for href in stylesheet_hrefs(tree) {
        if let Some(text) = load_stylesheet(&href, base_url, base_dir)? {
            if !css.is_empty() {
                css.push('\n');
            }
            css.push_str(&text);
        }
    }
    Ok(css)
}
