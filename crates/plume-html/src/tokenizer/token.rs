//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! "The output of the tokenization step is a series of zero or more of the
//! following tokens: DOCTYPE, start tag, end tag, comment, character,
//! end-of-file."
//!
//! Runs of character tokens are coalesced into a single [`Token::Text`].

/// An attribute on a start tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// A token handed from the tokenizer to the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A DOCTYPE declaration. `data` is the raw text between `<!` and `>`.
    Doctype {
        /// Raw declaration text, e.g. `DOCTYPE html`.
        data: String,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes."
    StartTag {
        /// "a tag name" (lower-cased)
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Attributes on end tags are dropped.
    EndTag {
        /// "a tag name" (lower-cased)
        name: String,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// A run of character data with references already decoded.
    Text {
        /// "data"
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset, and its attributes list must be empty."
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Append a character to the tag name of a start or end tag.
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { name, .. } | Self::EndTag { name } = self {
            name.push(c);
        }
    }

    /// Set the self-closing flag of a start tag.
    pub fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// Add an attribute to a start tag.
    ///
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    /// "If there is already an attribute on the token with the exact same name,
    /// then this is a duplicate-attribute parse error and the new attribute must
    /// be removed from the token."
    pub fn add_attribute(&mut self, attribute: Attribute) {
        if let Self::StartTag { attributes, .. } = self
            && !attributes.iter().any(|a| a.name == attribute.name)
        {
            attributes.push(attribute);
        }
    }
}
