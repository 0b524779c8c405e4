//! HTML tokenizer module.
//!
//! Implements the parts of [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! a lenient tree builder needs.

/// Named character reference table.
pub mod entities;
/// Token types emitted by the tokenizer.
pub mod token;
/// HTML tokenizer state machine implementation.
pub mod core;

pub use self::core::HTMLTokenizer;
pub use token::{Attribute, Token};
