//! HTML tokenizer, tree builder and serializer for plume.
//!
//! # Scope
//!
//! This crate is the markup tree provider for the style pipelines:
//! - **HTML Tokenizer** ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization))
//!   - Data, RAWTEXT, RCDATA and tag states
//!   - DOCTYPE, comment and character reference handling
//!   - Attribute parsing
//!
//! - **Tree Builder** - a lenient builder that keeps the document exactly as
//!   written: no implied `html`/`head`/`body` elements are inserted, stray end
//!   tags are ignored and open elements are closed at end of input.
//!
//! - **Serializer** ([WHATWG § 13.3](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments))
//!
//! # Not Implemented
//!
//! - Insertion modes, foster parenting and the adoption agency algorithm
//! - Foreign content (SVG/MathML namespaces)

/// Tree construction from the token stream.
pub mod parser;
/// Conversion of a tree back to markup text.
pub mod serializer;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{HTMLParser, print_tree};
pub use serializer::{serialize, serialize_subtree};
pub use tokenizer::{Attribute, HTMLTokenizer, Token};

use plume_dom::DomTree;

/// Tokenize and build a tree for `html` in one step.
#[must_use]
pub fn parse_html(html: &str) -> DomTree {
    let mut tokenizer = HTMLTokenizer::new(html);
    tokenizer.run();
    HTMLParser::new(tokenizer.into_tokens()).run()
}
