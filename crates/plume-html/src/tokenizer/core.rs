use super::entities;
use super::token::{Attribute, Token};

/// Elements whose content is raw text up to the matching end tag.
///
/// [§ 13.2.6.2 Parsing elements that contain only text](https://html.spec.whatwg.org/multipage/parsing.html#parsing-elements-that-contain-only-text)
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script", "xmp", "iframe", "noembed", "noframes"];

/// Elements whose content is text with character references decoded.
const RCDATA_ELEMENTS: &[&str] = &["textarea", "title"];

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// The subset of tokenizer states this tokenizer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenizerState {
    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    Data,
    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    Rcdata,
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    RawText,
    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    TagOpen,
    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    EndTagOpen,
    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    TagName,
    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    BeforeAttributeName,
    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    AttributeName,
    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    AfterAttributeName,
    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    BeforeAttributeValue,
    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    AttributeValueDoubleQuoted,
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    AttributeValueSingleQuoted,
    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    AttributeValueUnquoted,
    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    AfterAttributeValueQuoted,
    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    SelfClosingStartTag,
    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    BogusComment,
    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    Comment,
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    /// The declaration is kept as raw text rather than split into name and
    /// identifiers.
    Doctype,
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "Implementations must act as if they used the following state machine to tokenize HTML."
pub struct HTMLTokenizer {
    state: TokenizerState,
    input: Vec<char>,
    position: usize,
    current_input_character: Option<char>,
    // "Reconsume in the X state" sets this flag.
    reconsume: bool,
    at_eof: bool,
    current_token: Option<Token>,
    current_attribute: Option<Attribute>,
    /// Pending character data, flushed as one text token.
    text: String,
    /// Comment or DOCTYPE data being collected.
    buffer: String,
    /// "The last start tag token emitted" - decides the appropriate end tag
    /// in the RAWTEXT and RCDATA states.
    last_start_tag_name: Option<String>,
    tokens: Vec<Token>,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input.
    ///
    /// "The initial state is the data state."
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            state: TokenizerState::Data,
            input: input.chars().collect(),
            position: 0,
            current_input_character: None,
            reconsume: false,
            at_eof: false,
            current_token: None,
            current_attribute: None,
            text: String::new(),
            buffer: String::new(),
            last_start_tag_name: None,
            tokens: Vec::new(),
        }
    }

    /// Run the state machine to the end of input.
    pub fn run(&mut self) {
        while !self.at_eof {
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.next_input_character();
            }

            match self.state {
                TokenizerState::Data => self.handle_data_state(),
                TokenizerState::Rcdata | TokenizerState::RawText => self.handle_text_only_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(),
                TokenizerState::AttributeName => self.handle_attribute_name_state(),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state();
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state('"');
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state('\'');
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state();
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state();
                }
                TokenizerState::SelfClosingStartTag => self.handle_self_closing_start_tag_state(),
                TokenizerState::BogusComment => self.handle_bogus_comment_state(),
                TokenizerState::Comment => self.handle_comment_state(),
                TokenizerState::Doctype => self.handle_doctype_state(),
            }
        }
    }

    /// Consume the tokenizer and return the token stream.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// [§ 13.2.5.1 Data state](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    fn handle_data_state(&mut self) {
        match self.current_input_character {
            // "U+0026 AMPERSAND (&) - Set the return state to the data state.
            // Switch to the character reference state."
            Some('&') => {
                let decoded = self.consume_character_reference();
                self.text.push_str(&decoded);
            }
            // "U+003C LESS-THAN SIGN (<) - Switch to the tag open state."
            Some('<') => self.switch_to(TokenizerState::TagOpen),
            // "EOF - Emit an end-of-file token."
            None => self.emit_eof_token(),
            Some(c) => self.text.push(c),
        }
    }

    /// [§ 13.2.5.2 RCDATA state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-state)
    /// [§ 13.2.5.3 RAWTEXT state](https://html.spec.whatwg.org/multipage/parsing.html#rawtext-state)
    ///
    /// Everything up to the appropriate end tag is character data.
    fn handle_text_only_state(&mut self) {
        match self.current_input_character {
            Some('&') if self.state == TokenizerState::Rcdata => {
                let decoded = self.consume_character_reference();
                self.text.push_str(&decoded);
            }
            // "If the current end tag token is an appropriate end tag token..."
            Some('<') if self.at_appropriate_end_tag() => {
                self.position += 1; // '/'
                self.current_token = Some(Token::new_end_tag());
                self.switch_to(TokenizerState::TagName);
            }
            None => self.emit_eof_token(),
            Some(c) => self.text.push(c),
        }
    }

    /// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            // "U+0021 EXCLAMATION MARK (!) - Switch to the markup declaration open state."
            Some('!') => self.handle_markup_declaration_open(),
            // "U+002F SOLIDUS (/) - Switch to the end tag open state."
            Some('/') => self.switch_to(TokenizerState::EndTagOpen),
            // "ASCII alpha - Create a new start tag token... Reconsume in the tag name state."
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003F QUESTION MARK (?) - ... Create a comment token whose data is
            // the empty string. Reconsume in the bogus comment state."
            Some('?') => {
                self.buffer.clear();
                self.reconsume_in(TokenizerState::BogusComment);
            }
            // "Anything else - ... Emit a U+003C LESS-THAN SIGN character token.
            // Reconsume in the data state."
            _ => {
                self.text.push('<');
                self.reconsume_in(TokenizerState::Data);
            }
        }
    }

    /// [§ 13.2.5.42 Markup declaration open state](https://html.spec.whatwg.org/multipage/parsing.html#markup-declaration-open-state)
    fn handle_markup_declaration_open(&mut self) {
        self.buffer.clear();
        // "If the next few characters are two U+002D HYPHEN-MINUS characters (-),
        // consume those two characters, create a comment token whose data is the
        // empty string, and switch to the comment start state."
        if self.next_chars_are("--", false) {
            self.position += 2;
            self.switch_to(TokenizerState::Comment);
        }
        // "Otherwise, if the next seven characters are an ASCII case-insensitive
        // match for the word "DOCTYPE", consume those characters and switch to
        // the DOCTYPE state."
        else if self.next_chars_are("doctype", true) {
            self.buffer
                .extend(&self.input[self.position..self.position + 7]);
            self.position += 7;
            self.switch_to(TokenizerState::Doctype);
        }
        // "Otherwise, this is an incorrectly-opened-comment parse error. Create a
        // comment token whose data is the empty string. Switch to the bogus comment state."
        else {
            self.switch_to(TokenizerState::BogusComment);
        }
    }

    /// [§ 13.2.5.7 End tag open state](https://html.spec.whatwg.org/multipage/parsing.html#end-tag-open-state)
    fn handle_end_tag_open_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-end-tag-name parse
            // error. Switch to the data state."
            Some('>') => self.switch_to(TokenizerState::Data),
            // "EOF - Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
            // character token and an end-of-file token."
            None => {
                self.text.push_str("</");
                self.emit_eof_token();
            }
            Some(_) => {
                self.buffer.clear();
                self.reconsume_in(TokenizerState::BogusComment);
            }
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => self.switch_to(TokenizerState::SelfClosingStartTag),
            Some('>') => self.emit_current_tag(),
            // "EOF - This is an eof-in-tag parse error. Emit an end-of-file token."
            None => self.emit_eof_token(),
            // "ASCII upper alpha - Append the lowercase version..."
            Some(c) => {
                if let Some(token) = self.current_token.as_mut() {
                    token.append_to_tag_name(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// [§ 13.2.5.32 Before attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-name-state)
    fn handle_before_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            // "U+003D EQUALS SIGN (=) - ... Start a new attribute in the current tag
            // token. Set that attribute's name to the current input character."
            Some('=') => {
                self.current_attribute = Some(Attribute::new("=".to_string(), String::new()));
                self.switch_to(TokenizerState::AttributeName);
            }
            Some(_) => {
                self.current_attribute = Some(Attribute::new(String::new(), String::new()));
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.reconsume_in(TokenizerState::AfterAttributeName);
            }
            Some('/' | '>') | None => self.reconsume_in(TokenizerState::AfterAttributeName),
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some(c) => {
                if let Some(attribute) = self.current_attribute.as_mut() {
                    attribute.name.push(c.to_ascii_lowercase());
                }
            }
        }
    }

    /// [§ 13.2.5.34 After attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-name-state)
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('/') => {
                self.finish_attribute();
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('=') => self.switch_to(TokenizerState::BeforeAttributeValue),
            Some('>') => {
                self.finish_attribute();
                self.emit_current_tag();
            }
            None => self.emit_eof_token(),
            Some(_) => {
                self.finish_attribute();
                self.current_attribute = Some(Attribute::new(String::new(), String::new()));
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// [§ 13.2.5.35 Before attribute value state](https://html.spec.whatwg.org/multipage/parsing.html#before-attribute-value-state)
    fn handle_before_attribute_value_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('"') => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            Some('\'') => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            // "U+003E GREATER-THAN SIGN (>) - This is a missing-attribute-value parse
            // error. Switch to the data state. Emit the current tag token."
            Some('>') => {
                self.finish_attribute();
                self.emit_current_tag();
            }
            _ => self.reconsume_in(TokenizerState::AttributeValueUnquoted),
        }
    }

    /// [§ 13.2.5.36 Attribute value (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(double-quoted)-state)
    /// [§ 13.2.5.37 Attribute value (single-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(single-quoted)-state)
    fn handle_attribute_value_quoted_state(&mut self, quote: char) {
        match self.current_input_character {
            Some(c) if c == quote => self.switch_to(TokenizerState::AfterAttributeValueQuoted),
            Some('&') => {
                let decoded = self.consume_character_reference();
                self.append_to_attribute_value(&decoded);
            }
            None => self.emit_eof_token(),
            Some(c) => {
                if let Some(attribute) = self.current_attribute.as_mut() {
                    attribute.value.push(c);
                }
            }
        }
    }

    /// [§ 13.2.5.38 Attribute value (unquoted) state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-value-(unquoted)-state)
    fn handle_attribute_value_unquoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.finish_attribute();
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('&') => {
                let decoded = self.consume_character_reference();
                self.append_to_attribute_value(&decoded);
            }
            Some('>') => {
                self.finish_attribute();
                self.emit_current_tag();
            }
            None => self.emit_eof_token(),
            Some(c) => {
                if let Some(attribute) = self.current_attribute.as_mut() {
                    attribute.value.push(c);
                }
            }
        }
    }

    /// [§ 13.2.5.39 After attribute value (quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#after-attribute-value-(quoted)-state)
    fn handle_after_attribute_value_quoted_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                self.finish_attribute();
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            Some('/') => {
                self.finish_attribute();
                self.switch_to(TokenizerState::SelfClosingStartTag);
            }
            Some('>') => {
                self.finish_attribute();
                self.emit_current_tag();
            }
            None => self.emit_eof_token(),
            // "Anything else - This is a missing-whitespace-between-attributes parse
            // error. Reconsume in the before attribute name state."
            Some(_) => {
                self.finish_attribute();
                self.reconsume_in(TokenizerState::BeforeAttributeName);
            }
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    fn handle_self_closing_start_tag_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                if let Some(token) = self.current_token.as_mut() {
                    token.set_self_closing();
                }
                self.emit_current_tag();
            }
            None => self.emit_eof_token(),
            Some(_) => self.reconsume_in(TokenizerState::BeforeAttributeName),
        }
    }

    /// [§ 13.2.5.41 Bogus comment state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-comment-state)
    fn handle_bogus_comment_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_comment();
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.emit_comment();
                self.emit_eof_token();
            }
            Some(c) => self.buffer.push(c),
        }
    }

    /// [§ 13.2.5.45 Comment state](https://html.spec.whatwg.org/multipage/parsing.html#comment-state)
    ///
    /// The comment end states are folded in: `-->` closes the comment.
    fn handle_comment_state(&mut self) {
        match self.current_input_character {
            Some('-') if self.next_chars_are("->", false) => {
                self.position += 2;
                self.emit_comment();
                self.switch_to(TokenizerState::Data);
            }
            // "EOF - This is an eof-in-comment parse error. Emit the current comment
            // token. Emit an end-of-file token."
            None => {
                self.emit_comment();
                self.emit_eof_token();
            }
            Some(c) => self.buffer.push(c),
        }
    }

    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.flush_text();
                let data = std::mem::take(&mut self.buffer);
                self.tokens.push(Token::Doctype { data });
                self.switch_to(TokenizerState::Data);
            }
            None => {
                self.flush_text();
                let data = std::mem::take(&mut self.buffer);
                self.tokens.push(Token::Doctype { data });
                self.emit_eof_token();
            }
            Some(c) => self.buffer.push(c),
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    ///
    /// Called with the `&` already consumed. Returns the decoded text, or a
    /// literal `&` when no reference follows.
    fn consume_character_reference(&mut self) -> String {
        let rest = &self.input[self.position..];

        // "U+0023 NUMBER SIGN (#) - ... Switch to the numeric character reference state."
        if rest.first() == Some(&'#') {
            let hex = matches!(rest.get(1), Some('x' | 'X'));
            let digits_start = if hex { 2 } else { 1 };
            let radix = if hex { 16 } else { 10 };
            let digits: String = rest[digits_start..]
                .iter()
                .take_while(|c| c.is_digit(radix))
                .collect();
            if digits.is_empty() {
                // "absence-of-digits-in-numeric-character-reference parse error"
                return "&".to_string();
            }
            let mut consumed = digits_start + digits.len();
            if rest.get(consumed) == Some(&';') {
                consumed += 1;
            }
            self.position += consumed;
            let code = u32::from_str_radix(&digits, radix).unwrap_or(0xFFFD);
            return entities::numeric_reference(code).to_string();
        }

        // [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
        let name: String = rest
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() {
            return "&".to_string();
        }
        if rest.get(name.len()) == Some(&';')
            && let Some(value) = entities::lookup(&format!("{name};"))
        {
            self.position += name.len() + 1;
            return value.to_string();
        }
        if let Some(value) = entities::lookup(&name) {
            self.position += name.len();
            return value.to_string();
        }
        "&".to_string()
    }

    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this tokenizer."
    fn at_appropriate_end_tag(&self) -> bool {
        let Some(name) = self.last_start_tag_name.as_deref() else {
            return false;
        };
        if self.input.get(self.position) != Some(&'/') {
            return false;
        }
        let start = self.position + 1;
        let end = start + name.chars().count();
        let Some(candidate) = self.input.get(start..end) else {
            return false;
        };
        let matches_name = candidate
            .iter()
            .zip(name.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b));
        matches_name
            && self
                .input
                .get(end)
                .is_none_or(|&c| is_whitespace_char(c) || c == '/' || c == '>')
    }

    fn finish_attribute(&mut self) {
        if let Some(attribute) = self.current_attribute.take()
            && let Some(token) = self.current_token.as_mut()
        {
            token.add_attribute(attribute);
        }
    }

    fn append_to_attribute_value(&mut self, s: &str) {
        if let Some(attribute) = self.current_attribute.as_mut() {
            attribute.value.push_str(s);
        }
    }

    /// Emit the current tag token and pick the state its content is read in.
    fn emit_current_tag(&mut self) {
        self.flush_text();
        self.state = TokenizerState::Data;
        let Some(token) = self.current_token.take() else {
            return;
        };
        if let Token::StartTag {
            name, self_closing, ..
        } = &token
        {
            if !*self_closing {
                if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                    self.state = TokenizerState::RawText;
                } else if RCDATA_ELEMENTS.contains(&name.as_str()) {
                    self.state = TokenizerState::Rcdata;
                }
            }
            self.last_start_tag_name = Some(name.clone());
        }
        self.tokens.push(token);
    }

    fn emit_comment(&mut self) {
        self.flush_text();
        let data = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::Comment { data });
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let data = std::mem::take(&mut self.text);
            self.tokens.push(Token::Text { data });
        }
    }

    /// Emit any pending text and the end-of-file token. Incomplete tags are dropped.
    fn emit_eof_token(&mut self) {
        self.flush_text();
        self.current_token = None;
        self.tokens.push(Token::EndOfFile);
        self.at_eof = true;
    }

    fn next_chars_are(&self, expected: &str, ignore_case: bool) -> bool {
        let mut index = self.position;
        for e in expected.chars() {
            match self.input.get(index) {
                Some(&c) if c == e || (ignore_case && c.eq_ignore_ascii_case(&e)) => index += 1,
                _ => return false,
            }
        }
        true
    }

    fn next_input_character(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    const fn switch_to(&mut self, state: TokenizerState) {
        self.state = state;
    }

    const fn reconsume_in(&mut self, state: TokenizerState) {
        self.reconsume = true;
        self.state = state;
    }
}

/// "U+0009 CHARACTER TABULATION, U+000A LINE FEED, U+000C FORM FEED, U+0020 SPACE"
const fn is_whitespace_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | ' ' | '\r')
}
