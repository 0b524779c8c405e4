//! CSS tokenizer, parser, selector matching, style merging and inline-style
//! extraction for plume.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All token types: ident, function, at-keyword, hash, string, url, number, dimension, etc.
//!   - Comment handling and escape sequences
//!   - Source spans on every token
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Top-level style rules and at-rules, with their verbatim source text
//!   - Declaration parsing, including `!important`
//!
//! - **Selectors** (a subset of [Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Universal, type and class selectors
//!   - Compound selectors (`div.note`, `.box.primary`)
//!   - The descendant combinator
//!
//! - **Inlining** - stylesheet rules merged into `style` attributes in
//!   stylesheet order
//!
//! - **Extraction** - `style` attributes turned back into a deduplicated
//!   stylesheet
//!
//! # Not Implemented
//!
//! - Child and sibling combinators, attribute and id selector matching
//! - Pseudo-class matching (such rules are preserved, not inlined)
//! - Cascade ordering by specificity or origin

/// Reverse direction: inline styles to stylesheet rules.
pub mod extract;
/// Forward direction: stylesheet rules to inline styles.
pub mod inline;
/// Merging of `style` attribute text.
pub mod merge;
/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Selector parsing and matching per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;
/// Textual specificity weight of a selector.
pub mod specificity;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;

// Re-exports for convenience
pub use extract::{StyleEntry, build_css, normalize_style, reverse_inline_styles};
pub use inline::{PRESERVED_AT_RULES, apply_css, apply_stylesheet};
pub use merge::{StyleMap, merge_styles};
pub use parser::{AtRule, CSSParser, Declaration, Rule, StyleRule, Stylesheet, parse_stylesheet};
pub use selector::{Selector, match_selector};
pub use specificity::{Specificity, calc_specificity};
pub use tokenizer::{CSSToken, CSSTokenizer};
