//! Selector parsing and matching for the inlining pipeline.
//!
//! The grammar is deliberately small. A selector is classified, in this order, as:
//!
//! 1. **Descendant** - contains whitespace: `.container p`, `div .a.b span`
//! 2. **Compound** - more than one class, or a tag with one class: `.box.primary`, `div.note`
//! 3. **Simple** - `*`, `.cls` or a bare tag name
//!
//! A comma-separated selector list matches the union of its members.
//! Anything else (`#id`, `[attr]`, `>`, `+`, `~`) is not an error: it is
//! reported once and matches whatever the grammar above makes of it, which
//! is usually nothing.

use plume_common::warning::warn_once;
use plume_dom::{DomTree, ElementData, NodeId};

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
///
/// A simple selector is a single condition on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// "The universal selector is a single asterisk (*) and represents the
    /// qualified name of any element type."
    Universal,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    Class(String),

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    Type(String),
}

impl SimpleSelector {
    /// Check if this simple selector matches the given element.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            // Token membership, not substring containment.
            Self::Class(class_name) => element.has_class(class_name),
            // Exact comparison; the tree builder lower-cases tag names.
            Self::Type(name) => element.tag_name == *name,
        }
    }
}

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#compound)
///
/// An optional tag name followed by one or more class names, such as
/// `div.note` or `.box.primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// The leading tag name, if any. `*` matches any tag.
    pub tag: Option<String>,
    /// Class names that must all be present.
    pub classes: Vec<String>,
}

impl CompoundSelector {
    /// Check if this compound selector matches the given element.
    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        if let Some(tag) = &self.tag
            && tag != "*"
            && element.tag_name != *tag
        {
            return false;
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

/// A parsed selector, ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    ///
    /// Parts in source order, outermost ancestor first. Each part is a
    /// [`Selector::Compound`] or [`Selector::Simple`].
    Descendant(Vec<Self>),
    /// A tag and/or several classes.
    Compound(CompoundSelector),
    /// A single condition.
    Simple(SimpleSelector),
}

impl Selector {
    /// Classify and parse one selector (not a selector list).
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        report_unsupported(text);

        if text.contains(char::is_whitespace) {
            return Self::Descendant(text.split_whitespace().map(Self::parse_part).collect());
        }
        Self::parse_part(text)
    }

    /// Parse a selector that contains no whitespace.
    fn parse_part(text: &str) -> Self {
        let dot_count = text.matches('.').count();
        let starts_with_dot = text.starts_with('.');

        if dot_count > 1 || (dot_count == 1 && !starts_with_dot) {
            // ".box.primary" -> ["box", "primary"]; "div.note" -> ["div", "note"]
            let mut names = text.split('.').filter(|name| !name.is_empty());
            let tag = if starts_with_dot {
                None
            } else {
                names.next().map(str::to_string)
            };
            return Self::Compound(CompoundSelector {
                tag,
                classes: names.map(str::to_string).collect(),
            });
        }

        if text == "*" {
            Self::Simple(SimpleSelector::Universal)
        } else if let Some(class_name) = text.strip_prefix('.') {
            Self::Simple(SimpleSelector::Class(class_name.to_string()))
        } else {
            Self::Simple(SimpleSelector::Type(text.to_string()))
        }
    }

    /// Whether the element at `node_id` matches this selector.
    ///
    /// Non-element nodes never match.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node_id: NodeId) -> bool {
        match self {
            Self::Descendant(parts) => {
                let Some((subject, ancestors)) = parts.split_last() else {
                    return false;
                };
                subject.matches(tree, node_id) && matches_ancestors(tree, node_id, ancestors)
            }
            Self::Compound(compound) => tree
                .as_element(node_id)
                .is_some_and(|element| compound.matches(element)),
            Self::Simple(simple) => tree
                .as_element(node_id)
                .is_some_and(|element| simple.matches(element)),
        }
    }
}

/// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
/// "A selector of the form 'A B' represents an element B that is an
/// arbitrary descendant of some ancestor element A."
///
/// Walks upward from the parent of `node_id`. Each ancestor that matches the
/// innermost unconsumed part consumes it, and the walk continues above that
/// ancestor. There is no backtracking: a part is always consumed by the
/// nearest ancestor that matches it.
fn matches_ancestors(tree: &DomTree, node_id: NodeId, ancestors: &[Selector]) -> bool {
    let mut remaining = ancestors.iter().rev().peekable();
    for ancestor_id in tree.ancestors(node_id) {
        let Some(part) = remaining.peek() else {
            break;
        };
        if part.matches(tree, ancestor_id) {
            let _ = remaining.next();
        }
    }
    remaining.peek().is_none()
}

/// Find every element under `root` (inclusive) matching `selector`, in tree order.
///
/// `selector` may be a comma-separated list; an element matching several
/// members is returned once.
#[must_use]
pub fn match_selector(tree: &DomTree, root: NodeId, selector: &str) -> Vec<NodeId> {
    let selectors: Vec<Selector> = selector
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Selector::parse)
        .collect();
    if selectors.is_empty() {
        return Vec::new();
    }

    tree.descendants(root)
        .filter(|&id| selectors.iter().any(|s| s.matches(tree, id)))
        .collect()
}

/// Warn about selector syntax outside the supported grammar.
fn report_unsupported(text: &str) {
    let feature = if text.contains('>') {
        Some("child combinator")
    } else if text.contains('+') {
        Some("next-sibling combinator")
    } else if text.contains('~') {
        Some("subsequent-sibling combinator")
    } else if text.contains('[') {
        Some("attribute selector")
    } else if text.contains('#') {
        Some("id selector")
    } else {
        None
    };
    if let Some(feature) = feature {
        warn_once(
            "CSS",
            &format!("{feature} in '{text}' is not supported and will not match as written"),
        );
    }
}
