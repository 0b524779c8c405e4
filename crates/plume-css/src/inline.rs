//! Stylesheet to inline-style conversion.
//!
//! Rules are applied in stylesheet order; a later rule wins a conflicting
//! property on the same element regardless of selector specificity. What
//! cannot be expressed inline (preserved at-rules and rules with pseudo-classes
//! or pseudo-elements) is returned as CSS text for the caller to keep.

use plume_dom::{DomTree, NodeId};

use crate::merge::merge_styles;
use crate::parser::{Declaration, StyleRule, Stylesheet, parse_stylesheet};
use crate::selector::match_selector;

/// At-rules copied verbatim into the preserved CSS. Other at-rules are dropped.
pub const PRESERVED_AT_RULES: &[&str] = &["font-face", "import", "keyframes", "media"];

/// Parse `css` and inline it into `tree`.
///
/// Returns the preserved CSS text. See [`apply_stylesheet`].
pub fn apply_css(tree: &mut DomTree, css: &str) -> String {
    apply_stylesheet(tree, &parse_stylesheet(css))
}

/// Inline the top-level style rules of `stylesheet` into `tree`.
///
/// The returned text holds, one per line and in this order:
/// 1. the source of every top-level at-rule named in [`PRESERVED_AT_RULES`]
/// 2. the source of every top-level style rule whose selector contains `:`
///
/// Rules nested inside an at-rule are never inlined; they survive only as
/// part of their at-rule's source.
pub fn apply_stylesheet(tree: &mut DomTree, stylesheet: &Stylesheet) -> String {
    let mut preserved: Vec<&str> = stylesheet
        .at_rules()
        .filter(|at| {
            PRESERVED_AT_RULES
                .iter()
                .any(|name| at.name.eq_ignore_ascii_case(name))
        })
        .map(|at| at.source.as_str())
        .collect();

    for rule in stylesheet.style_rules() {
        if rule.selector.contains(':') {
            preserved.push(&rule.source);
            continue;
        }
        apply_rule(tree, rule);
    }

    log::debug!("preserved {} rules that cannot be inlined", preserved.len());
    preserved.join("\n")
}

/// Merge the declarations of `rule` into every element it matches.
fn apply_rule(tree: &mut DomTree, rule: &StyleRule) {
    if rule.declarations.is_empty() {
        return;
    }
    let styles = rule
        .declarations
        .iter()
        .map(Declaration::to_inline)
        .collect::<Vec<_>>()
        .join(";");

    let matched = match_selector(tree, NodeId::ROOT, &rule.selector);
    log::debug!("'{}' matched {} elements", rule.selector, matched.len());

    for id in matched {
        let Some(element) = tree.as_element_mut(id) else {
            continue;
        };
        let merged = merge_styles(element.style().unwrap_or_default(), &styles);
        let _ = element.attrs.insert("style", merged);
    }
}
