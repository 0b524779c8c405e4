//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the tokenization stage."
//!
//! Only the top level of a stylesheet is structured: style rules expose their
//! selector and declarations, at-rules expose their name and prelude. Both keep
//! their verbatim source text so they can be written back out unchanged.

use crate::tokenizer::{CSSToken, CSSTokenizer, SpannedToken};

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A CSS declaration (e.g., `color: red`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property name as written.
    pub name: String,
    /// The value text, trimmed, with comments dropped, whitespace runs
    /// collapsed and any `!important` annotation removed.
    pub value: String,
    /// Whether the declaration has `!important`.
    pub important: bool,
}

impl Declaration {
    /// The declaration in `name:value` form, as used in a `style` attribute.
    #[must_use]
    pub fn to_inline(&self) -> String {
        if self.important {
            format!("{}:{} !important", self.name, self.value)
        } else {
            format!("{}:{}", self.name, self.value)
        }
    }
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
///
/// A CSS style rule (selector + declarations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The prelude text: the whole selector list, trimmed, whitespace collapsed.
    pub selector: String,
    /// The declarations in this rule block, in source order. Duplicate
    /// property names are kept.
    pub declarations: Vec<Declaration>,
    /// The rule's trimmed source text, from the first prelude token to the
    /// closing brace.
    pub source: String,
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
///
/// A CSS at-rule. The block, if any, is never decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// The at-keyword name (without the `@`).
    pub name: String,
    /// The prelude text, trimmed, whitespace collapsed.
    pub prelude: String,
    /// The verbatim source text up to and including the terminating `;` or block.
    pub source: String,
}

/// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
///
/// A CSS rule (either a style rule or an at-rule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// A style rule (qualified rule).
    Style(StyleRule),
    /// An at-rule.
    At(AtRule),
}

/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
///
/// A parsed CSS stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stylesheet {
    /// The top-level rules in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Top-level style rules in source order.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::Style(style) => Some(style),
            Rule::At(_) => None,
        })
    }

    /// Top-level at-rules in source order.
    pub fn at_rules(&self) -> impl Iterator<Item = &AtRule> {
        self.rules.iter().filter_map(|rule| match rule {
            Rule::At(at) => Some(at),
            Rule::Style(_) => None,
        })
    }
}

/// Tokenize and parse `css` in one step.
#[must_use]
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run();
    CSSParser::new(css, tokenizer.into_tokens()).parse_stylesheet()
}

/// CSS parser
pub struct CSSParser<'a> {
    /// The text the tokens were read from.
    source: &'a str,
    tokens: Vec<SpannedToken>,
    position: usize,
}

impl<'a> CSSParser<'a> {
    /// Create a new parser from the tokens of `source`.
    #[must_use]
    pub const fn new(source: &'a str, tokens: Vec<SpannedToken>) -> Self {
        Self {
            source,
            tokens,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// "To parse a stylesheet from input..."
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        // "Consume a list of rules from input, with the top-level flag set."
        let rules = self.consume_list_of_rules();
        log::debug!("parsed stylesheet with {} top-level rules", rules.len());
        Stylesheet { rules }
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    fn consume_list_of_rules(&mut self) -> Vec<Rule> {
        let mut rules = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token>" - "Do nothing."
                // "<CDO-token>" or "<CDC-token>" - "If the top-level flag is set, do nothing."
                Some(CSSToken::Whitespace | CSSToken::CDO | CSSToken::CDC) => self.advance(),

                // "<EOF-token>" - "Return the list of rules."
                None | Some(CSSToken::EOF) => return rules,

                // "<at-keyword-token>"
                // "Reconsume the current input token. Consume an at-rule, and append
                // the returned value to the list of rules."
                Some(CSSToken::AtKeyword(_)) => {
                    if let Some(at_rule) = self.consume_at_rule() {
                        rules.push(Rule::At(at_rule));
                    }
                }

                // "anything else"
                // "Reconsume the current input token. Consume a qualified rule. If
                // anything is returned, append it to the list of rules."
                Some(_) => {
                    if let Some(rule) = self.consume_qualified_rule() {
                        rules.push(Rule::Style(rule));
                    }
                }
            }
        }
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    fn consume_at_rule(&mut self) -> Option<AtRule> {
        let start = self.current_start();
        let name = match self.peek() {
            Some(CSSToken::AtKeyword(name)) => name.clone(),
            _ => return None,
        };
        self.advance();
        let prelude_start = self.position;

        loop {
            match self.peek() {
                // "<semicolon-token>" - "Return the at-rule."
                Some(CSSToken::Semicolon) => {
                    let prelude = self.text_of(prelude_start, self.position);
                    self.advance();
                    return Some(self.finish_at_rule(name, prelude, start));
                }

                // "<EOF-token>" - "This is a parse error. Return the at-rule."
                None | Some(CSSToken::EOF) => {
                    let prelude = self.text_of(prelude_start, self.position);
                    return Some(self.finish_at_rule(name, prelude, start));
                }

                // "<{-token>"
                // "Consume a simple block and assign it to the at-rule's block.
                // Return the at-rule."
                Some(CSSToken::LeftBrace) => {
                    let prelude = self.text_of(prelude_start, self.position);
                    self.consume_simple_block();
                    return Some(self.finish_at_rule(name, prelude, start));
                }

                // "anything else"
                // "Reconsume the current input token. Consume a component value.
                // Append the returned value to the at-rule's prelude."
                Some(_) => self.consume_component_value(),
            }
        }
    }

    fn finish_at_rule(&self, name: String, prelude: String, start: usize) -> AtRule {
        AtRule {
            name,
            prelude,
            source: self.source_since(start),
        }
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    fn consume_qualified_rule(&mut self) -> Option<StyleRule> {
        let start = self.current_start();
        let prelude_start = self.position;

        loop {
            match self.peek() {
                // "<EOF-token>" - "This is a parse error. Return nothing."
                None | Some(CSSToken::EOF) => {
                    log::debug!("dropping unterminated rule at byte {start}");
                    return None;
                }

                // "<{-token>"
                // "Consume a simple block and assign it to the qualified rule's block.
                // Return the qualified rule."
                Some(CSSToken::LeftBrace) => {
                    let selector = self.text_of(prelude_start, self.position);
                    self.advance(); // {

                    // [§ 5.4.5 Consume a style block's contents](https://www.w3.org/TR/css-syntax-3/#consume-style-block)
                    let declarations = self.consume_list_of_declarations();

                    if self.peek() == Some(&CSSToken::RightBrace) {
                        self.advance();
                    }

                    return Some(StyleRule {
                        selector,
                        declarations,
                        source: self.source_since(start),
                    });
                }

                // "anything else"
                // "Reconsume the current input token. Consume a component value.
                // Append the returned value to the qualified rule's prelude."
                Some(_) => self.consume_component_value(),
            }
        }
    }

    /// [§ 5.4.8 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations)
    fn consume_list_of_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                // "<whitespace-token>" or "<semicolon-token>" - "Do nothing."
                Some(CSSToken::Whitespace | CSSToken::Semicolon) => self.advance(),

                // "<EOF-token>" (or the end of the enclosing block)
                // "Return the list of declarations."
                None | Some(CSSToken::EOF | CSSToken::RightBrace) => return declarations,

                // "<at-keyword-token>"
                // "Reconsume the current input token. Consume an at-rule."
                // Nested at-rules are not surfaced.
                Some(CSSToken::AtKeyword(_)) => {
                    let _ = self.consume_at_rule();
                }

                // "<ident-token>"
                // "Consume a declaration. If anything was returned, append it to
                // the list of declarations."
                Some(CSSToken::Ident(_)) => {
                    if let Some(declaration) = self.consume_declaration() {
                        declarations.push(declaration);
                    }
                }

                // "anything else"
                // "This is a parse error. Reconsume the current input token. As long as
                // the next input token is anything other than a <semicolon-token> or
                // <EOF-token>, consume a component value and throw away the returned value."
                Some(_) => self.skip_to_declaration_end(),
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    fn consume_declaration(&mut self) -> Option<Declaration> {
        let name = match self.peek() {
            Some(CSSToken::Ident(name)) => name.clone(),
            _ => return None,
        };
        self.advance();

        // "While the next input token is a <whitespace-token>, consume the next input token."
        self.skip_whitespace();

        // "If the next input token is anything other than a <colon-token>, this is a
        // parse error. Return nothing."
        if self.peek() != Some(&CSSToken::Colon) {
            log::debug!("dropping declaration '{name}' without a colon");
            self.skip_to_declaration_end();
            return None;
        }
        self.advance(); // :

        // "As long as the next input token is anything other than an <EOF-token>,
        // consume a component value and append it to the declaration's value."
        let value_start = self.position;
        self.skip_to_declaration_end();
        let mut value_end = self.position;

        // [§ 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
        // "A declaration is important if it has a !important annotation, i.e.
        // if the last two (non-whitespace, non-comment) tokens in its value are
        // a <delim-token> with the value "!" followed by an <ident-token> with
        // a value that is an ASCII case-insensitive match for "important"."
        let important = match self.important_start(value_start, value_end) {
            Some(bang) => {
                value_end = bang;
                true
            }
            None => false,
        };

        let value = self.text_of(value_start, value_end);
        if value.is_empty() {
            log::debug!("dropping declaration '{name}' with an empty value");
            return None;
        }

        Some(Declaration {
            name,
            value,
            important,
        })
    }

    /// Index of the `!` token of a trailing `!important` in `tokens[start..end]`.
    fn important_start(&self, start: usize, end: usize) -> Option<usize> {
        let mut significant = (start..end)
            .rev()
            .filter(|&i| !self.tokens[i].token.is_whitespace());

        let ident = significant.next()?;
        let CSSToken::Ident(word) = &self.tokens[ident].token else {
            return None;
        };
        if !word.eq_ignore_ascii_case("important") {
            return None;
        }
        let bang = significant.next()?;
        (self.tokens[bang].token == CSSToken::Delim('!')).then_some(bang)
    }

    /// Skip component values up to (not including) the next `;`, `}` or EOF.
    fn skip_to_declaration_end(&mut self) {
        while !matches!(
            self.peek(),
            None | Some(CSSToken::Semicolon | CSSToken::RightBrace | CSSToken::EOF)
        ) {
            self.consume_component_value();
        }
    }

    /// [§ 5.4.9 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
    ///
    /// The value itself is not kept; its text is recovered from token spans.
    fn consume_component_value(&mut self) {
        match self.peek() {
            // "<{-token>, <[-token>, <(-token>"
            // "Consume a simple block and return it."
            Some(CSSToken::LeftBrace | CSSToken::LeftBracket | CSSToken::LeftParen) => {
                self.consume_simple_block();
            }
            // "<function-token>" - "Consume a function and return it."
            Some(CSSToken::Function(_)) => self.consume_function(),
            None | Some(CSSToken::EOF) => {}
            // "Otherwise, return the current input token."
            Some(_) => self.advance(),
        }
    }

    /// [§ 5.4.10 Consume a simple block](https://www.w3.org/TR/css-syntax-3/#consume-simple-block)
    fn consume_simple_block(&mut self) {
        let ending_token = match self.peek() {
            Some(CSSToken::LeftBrace) => CSSToken::RightBrace,
            Some(CSSToken::LeftBracket) => CSSToken::RightBracket,
            Some(CSSToken::LeftParen) => CSSToken::RightParen,
            _ => return,
        };
        self.advance();

        loop {
            match self.peek() {
                // "ending token" - "Return the block."
                Some(token) if *token == ending_token => {
                    self.advance();
                    return;
                }
                // "<EOF-token>" - "This is a parse error. Return the block."
                None | Some(CSSToken::EOF) => return,
                Some(_) => self.consume_component_value(),
            }
        }
    }

    /// [§ 5.4.11 Consume a function](https://www.w3.org/TR/css-syntax-3/#consume-function)
    fn consume_function(&mut self) {
        self.advance();
        loop {
            match self.peek() {
                // "<)-token>" - "Return the function."
                Some(CSSToken::RightParen) => {
                    self.advance();
                    return;
                }
                None | Some(CSSToken::EOF) => return,
                Some(_) => self.consume_component_value(),
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek() == Some(&CSSToken::Whitespace) {
            self.advance();
        }
    }

    /// Text of `tokens[start..end]` with comments dropped and whitespace
    /// collapsed to single spaces, trimmed.
    fn text_of(&self, start: usize, end: usize) -> String {
        let mut text = String::new();
        for spanned in &self.tokens[start..end] {
            if spanned.token.is_whitespace() {
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
            } else {
                text.push_str(spanned.span.slice(self.source));
            }
        }
        text.trim_end().to_string()
    }

    /// Verbatim source from byte `start` to the end of the last consumed token.
    fn source_since(&self, start: usize) -> String {
        let end = self
            .position
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(start, |spanned| spanned.span.end);
        self.source
            .get(start..end)
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn current_start(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.source.len(), |spanned| spanned.span.start)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position).map(|spanned| &spanned.token)
    }
}
