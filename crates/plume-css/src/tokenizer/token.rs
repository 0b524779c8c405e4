//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! "The output of the tokenization step is a stream of zero or more of the
//! following tokens: `<ident-token>`, `<function-token>`, `<at-keyword-token>`,
//! `<hash-token>`, `<string-token>`, `<bad-string-token>`, `<url-token>`,
//! `<bad-url-token>`, `<delim-token>`, `<number-token>`, `<percentage-token>`,
//! `<dimension-token>`, `<whitespace-token>`, `<CDO-token>`, `<CDC-token>`,
//! `<colon-token>`, `<semicolon-token>`, `<comma-token>`, `<[-token>`, `<]-token>`,
//! `<(-token>`, `<)-token>`, `<{-token>`, and `<}-token>`."
//!
//! Values are never interpreted by plume, so numeric tokens keep only their
//! parsed value and no integer/number type flag.

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// CSS tokens as defined by the CSS Syntax Module Level 3 specification.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    /// "has a value composed of one or more code points"
    Ident(String),

    /// "`<function-token>`"
    /// "has a value composed of one or more code points, followed by U+0028 LEFT PARENTHESIS"
    Function(String),

    /// "`<at-keyword-token>`"
    /// "has a value composed of one or more code points, preceded by U+0040 COMMERCIAL AT (@)"
    AtKeyword(String),

    /// "`<hash-token>`"
    /// "has a value composed of one or more code points, preceded by U+0023 NUMBER SIGN (#)"
    Hash(String),

    /// "`<string-token>`"
    String(String),

    /// "`<bad-string-token>`"
    /// "represents a parsing error"
    BadString,

    /// "`<url-token>`"
    Url(String),

    /// "`<bad-url-token>`"
    BadUrl,

    /// "`<delim-token>`"
    /// "has a value composed of a single code point"
    Delim(char),

    /// "`<number-token>`"
    Number(f64),

    /// "`<percentage-token>`"
    Percentage(f64),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// "a numeric value"
        value: f64,
        /// "a unit"
        unit: String,
    },

    /// "`<whitespace-token>`"
    /// "represents one or more whitespace code points"
    Whitespace,

    /// "`<CDO-token>`" (`<!--`)
    CDO,

    /// "`<CDC-token>`" (`-->`)
    CDC,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of file - signals end of input
    EOF,
}

impl CSSToken {
    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

/// A byte range into the tokenized source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Offset of the first byte of the token.
    pub start: usize,
    /// Offset one past the last byte of the token.
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers in `source`.
    ///
    /// Returns an empty string when the span does not fall on character
    /// boundaries of `source`.
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or_default()
    }
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    /// The token.
    pub token: CSSToken,
    /// Where the token came from. Comments preceding the token are not included.
    pub span: Span,
}
