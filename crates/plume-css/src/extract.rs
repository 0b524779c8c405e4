//! Inline-style to stylesheet conversion.
//!
//! Every element with a `style` attribute loses it. Its declarations are
//! recorded under a selector chosen for that element, and elements whose
//! declarations are equal as a set share a single rule.

use plume_dom::{DomTree, NodeId};

/// Tags that are selected by name when nothing better is available.
const DOCUMENT_TAGS: &[&str] = &["body", "html", "head"];

/// Prefix of the class names given to elements with no usable selector.
pub const AUTO_CLASS_PREFIX: &str = "auto-style-";

/// One element's extracted style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    /// The selector chosen for the element.
    pub selector: String,
    /// The element's declarations in canonical form (see [`normalize_style`]).
    pub normalized_style: String,
    /// The element the style was taken from.
    pub element: NodeId,
}

/// Canonical form of a style attribute value.
///
/// Fragments between `;` are trimmed, empty ones dropped, and the rest
/// sorted as whole `property:value` strings. Two values listing the same
/// declarations in a different order normalize to the same text.
#[must_use]
pub fn normalize_style(style: &str) -> String {
    let mut declarations: Vec<&str> = style
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .collect();
    declarations.sort_unstable();
    declarations.join(";")
}

/// Remove every inline style from `tree` and return equivalent CSS.
///
/// Elements are visited in tree order. An element's selector is, by priority:
/// 1. `.first-class` of its own class attribute
/// 2. `.ancestor-class tag` for the nearest ancestor with a class
/// 3. the bare tag name, for `body`, `html` and `head`
/// 4. a new `.auto-style-N` class, which is also added to the element
///
/// Numbering of generated classes starts at 1 on every call.
pub fn reverse_inline_styles(tree: &mut DomTree) -> String {
    let mut extractor = Extractor::default();
    extractor.walk(tree, NodeId::ROOT);
    log::debug!(
        "extracted {} inline styles ({} generated classes)",
        extractor.entries.len(),
        extractor.auto_classes
    );
    build_css(&extractor.entries)
}

/// Group `entries` by style and render one rule per distinct style.
///
/// Rules appear in the order their style was first seen. Selectors within a
/// rule keep first-seen order, without repeats, one per line.
#[must_use]
pub fn build_css(entries: &[StyleEntry]) -> String {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for entry in entries {
        let style = entry.normalized_style.as_str();
        let selector = entry.selector.as_str();
        match groups.iter_mut().find(|(existing, _)| *existing == style) {
            Some((_, selectors)) => {
                if !selectors.contains(&selector) {
                    selectors.push(selector);
                }
            }
            None => groups.push((style, vec![selector])),
        }
    }

    groups
        .iter()
        .map(|(style, selectors)| {
            let body = style
                .split(';')
                .map(|declaration| format!("  {declaration}"))
                .collect::<Vec<_>>()
                .join(";\n");
            format!("{} {{\n{body};\n}}", selectors.join(",\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Traversal state for one extraction.
#[derive(Default)]
struct Extractor {
    entries: Vec<StyleEntry>,
    auto_classes: usize,
}

impl Extractor {
    fn walk(&mut self, tree: &mut DomTree, id: NodeId) {
        if tree.as_element(id).is_some() {
            self.visit_element(tree, id);
        }
        // Children are snapshotted: visiting may mutate the tree.
        let children = tree.children(id).to_vec();
        for child in children {
            self.walk(tree, child);
        }
    }

    fn visit_element(&mut self, tree: &mut DomTree, id: NodeId) {
        let Some(style) = tree
            .as_element_mut(id)
            .and_then(|element| element.attrs.remove("style"))
        else {
            return;
        };

        let normalized_style = normalize_style(&style);
        if normalized_style.is_empty() {
            return;
        }

        let selector = self.selector_for(tree, id);
        log::debug!("{selector} <- {normalized_style}");
        self.entries.push(StyleEntry {
            selector,
            normalized_style,
            element: id,
        });
    }

    fn selector_for(&mut self, tree: &mut DomTree, id: NodeId) -> String {
        let Some(element) = tree.as_element(id) else {
            return String::new();
        };

        if let Some(class_name) = element.first_class() {
            return format!(".{class_name}");
        }

        let ancestor_class = tree
            .ancestors(id)
            .find_map(|ancestor| tree.as_element(ancestor)?.first_class());
        if let Some(class_name) = ancestor_class {
            return format!(".{class_name} {}", element.tag_name);
        }

        if DOCUMENT_TAGS.contains(&element.tag_name.as_str()) {
            return element.tag_name.clone();
        }

        self.auto_classes += 1;
        let class_name = format!("{AUTO_CLASS_PREFIX}{}", self.auto_classes);
        if let Some(element) = tree.as_element_mut(id) {
            let class_list = match element.attrs.get("class") {
                Some(existing) if !existing.trim().is_empty() => {
                    format!("{existing} {class_name}")
                }
                _ => class_name.clone(),
            };
            let _ = element.attrs.insert("class", class_list);
        }
        format!(".{class_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(selector: &str, style: &str) -> StyleEntry {
        StyleEntry {
            selector: selector.to_string(),
            normalized_style: style.to_string(),
            element: NodeId::ROOT,
        }
    }

    #[test]
    fn test_normalize_is_order_independent() {
        assert_eq!(
            normalize_style(" font-size:16px ; color:red;"),
            normalize_style("color:red;font-size:16px")
        );
        assert_eq!(normalize_style("color:red;font-size:16px"), "color:red;font-size:16px");
        assert_eq!(normalize_style(" ; ;"), "");
    }

    #[test]
    fn test_build_css_layout() {
        let css = build_css(&[
            entry(".a", "color:red;margin:0"),
            entry(".b", "padding:1px"),
            entry(".c", "color:red;margin:0"),
            entry(".a", "color:red;margin:0"),
        ]);
        assert_eq!(
            css,
            ".a,\n.c {\n  color:red;\n  margin:0;\n}\n\n.b {\n  padding:1px;\n}"
        );
    }

    #[test]
    fn test_build_css_empty() {
        assert_eq!(build_css(&[]), "");
    }
}
