//! HTML parser module for tree construction.

/// Lenient tree builder.
pub mod core;

pub use self::core::{HTMLParser, print_tree};
