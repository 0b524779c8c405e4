use super::token::{CSSToken, Span, SpannedToken};

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// CSS tokenizer following the CSS Syntax Module Level 3 specification.
/// Every token records the byte range it was consumed from.
pub struct CSSTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input, in code points
    position: usize,
    /// Current position in the input, in bytes
    byte_position: usize,
    /// Collected tokens
    tokens: Vec<SpannedToken>,
}

impl CSSTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            byte_position: 0,
            tokens: Vec::new(),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// "This section describes how to consume a token from a stream of code points.
    /// It will return a single token of any type."
    pub fn run(&mut self) {
        loop {
            // "Consume comments."
            self.consume_comments();
            let start = self.byte_position;
            let token = self.consume_token();
            let is_eof = token.is_eof();
            self.tokens.push(SpannedToken {
                token,
                span: Span::new(start, self.byte_position),
            });
            if is_eof {
                break;
            }
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SpannedToken> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[SpannedToken] {
        &self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    fn consume_token(&mut self) -> CSSToken {
        // "Consume the next input code point."
        let Some(c) = self.consume() else {
            return CSSToken::EOF;
        };

        match c {
            // "whitespace"
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            c if is_whitespace(c) => {
                self.consume_whitespace();
                CSSToken::Whitespace
            }

            // "U+0022 QUOTATION MARK (")" / "U+0027 APOSTROPHE (')"
            // "Consume a string token and return it."
            '"' | '\'' => self.consume_string_token(c),

            // "U+0023 NUMBER SIGN (#)"
            '#' => {
                // "If the next input code point is an ident code point or the next
                // two input code points are a valid escape..."
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    // "Consume an ident sequence, and set the <hash-token>'s value
                    // to the returned string."
                    CSSToken::Hash(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('#')
                }
            }

            // "U+0028 LEFT PARENTHESIS (()"
            '(' => CSSToken::LeftParen,

            // "U+0029 RIGHT PARENTHESIS ())"
            ')' => CSSToken::RightParen,

            // "U+002B PLUS SIGN (+)"
            '+' => {
                // "If the input stream starts with a number..."
                if self.would_start_number() {
                    // "Reconsume the current input code point."
                    self.reconsume();
                    // "Consume a numeric token and return it."
                    self.consume_numeric_token()
                } else {
                    CSSToken::Delim('+')
                }
            }

            // "U+002C COMMA (,)"
            ',' => CSSToken::Comma,

            // "U+002D HYPHEN-MINUS (-)"
            '-' => {
                if self.would_start_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                }
                // "Otherwise, if the next 2 input code points are U+002D U+003E (->)..."
                else if self.peek() == Some('-') && self.peek_at(1) == Some('>') {
                    self.advance(2);
                    CSSToken::CDC
                }
                // "Otherwise, if the input stream starts with an ident sequence..."
                else if self.would_start_ident_sequence_with(Some('-')) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    CSSToken::Delim('-')
                }
            }

            // "U+002E FULL STOP (.)"
            '.' => {
                if self.would_start_number() {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    CSSToken::Delim('.')
                }
            }

            // "U+003A COLON (:)"
            ':' => CSSToken::Colon,

            // "U+003B SEMICOLON (;)"
            ';' => CSSToken::Semicolon,

            // "U+003C LESS-THAN SIGN (<)"
            '<' => {
                // "If the next 3 input code points are U+0021 U+002D U+002D (!--)..."
                if self.peek() == Some('!')
                    && self.peek_at(1) == Some('-')
                    && self.peek_at(2) == Some('-')
                {
                    self.advance(3);
                    CSSToken::CDO
                } else {
                    CSSToken::Delim('<')
                }
            }

            // "U+0040 COMMERCIAL AT (@)"
            '@' => {
                // "If the next 3 input code points would start an ident sequence..."
                if self.would_start_ident_sequence() {
                    CSSToken::AtKeyword(self.consume_ident_sequence())
                } else {
                    CSSToken::Delim('@')
                }
            }

            // "U+005B LEFT SQUARE BRACKET ([)"
            '[' => CSSToken::LeftBracket,

            // "U+005C REVERSE SOLIDUS (\)"
            '\\' => {
                // "If the input stream starts with a valid escape..."
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    // "This is a parse error."
                    CSSToken::Delim('\\')
                }
            }

            // "U+005D RIGHT SQUARE BRACKET (])"
            ']' => CSSToken::RightBracket,

            // "U+007B LEFT CURLY BRACKET ({)"
            '{' => CSSToken::LeftBrace,

            // "U+007D RIGHT CURLY BRACKET (})"
            '}' => CSSToken::RightBrace,

            // "digit"
            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            // "ident-start code point"
            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            // "anything else"
            // "Return a <delim-token> with its value set to the current input code point."
            c => CSSToken::Delim(c),
        }
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// "If the next two input code points are U+002F SOLIDUS (/) followed by
    /// U+002A ASTERISK (*), consume them and all following code points up to
    /// and including the first U+002A ASTERISK (*) followed by U+002F SOLIDUS (/),
    /// or up to an EOF code point."
    fn consume_comments(&mut self) {
        while self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.advance(2);
            loop {
                match self.consume() {
                    Some('*') if self.peek() == Some('/') => {
                        self.advance(1);
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance(1);
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending_code_point: char) -> CSSToken {
        let mut value = String::new();

        loop {
            match self.consume() {
                // "ending code point" - "Return the <string-token>."
                // "EOF" - "This is a parse error. Return the <string-token>."
                Some(c) if c == ending_code_point => return CSSToken::String(value),
                None => return CSSToken::String(value),

                // "newline"
                // "This is a parse error. Reconsume the current input code point,
                // create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return CSSToken::BadString;
                }

                // "U+005C REVERSE SOLIDUS (\)"
                Some('\\') => match self.peek() {
                    // "If the next input code point is EOF, do nothing."
                    None => {}
                    // "Otherwise, if the next input code point is a newline, consume it."
                    Some('\n') => self.advance(1),
                    // "Otherwise, (the stream starts with a valid escape) consume an
                    // escaped code point and append the returned code point."
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },

                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> CSSToken {
        let value = self.consume_number();

        // "If the next 3 input code points would start an ident sequence..."
        if self.would_start_ident_sequence() {
            let unit = self.consume_ident_sequence();
            CSSToken::Dimension { value, unit }
        }
        // "Otherwise, if the next input code point is U+0025 PERCENTAGE SIGN (%)..."
        else if self.peek() == Some('%') {
            self.advance(1);
            CSSToken::Percentage(value)
        } else {
            CSSToken::Number(value)
        }
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> CSSToken {
        let string = self.consume_ident_sequence();

        // "If string's value is an ASCII case-insensitive match for 'url',
        // and the next input code point is U+0028 LEFT PARENTHESIS (()"
        if string.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            self.advance(1);
            // "While the next two input code points are whitespace, consume the next input code point."
            let mut lookahead = 0;
            while self.peek_at(lookahead).is_some_and(is_whitespace) {
                lookahead += 1;
            }
            // "If the next one or two input code points are U+0022 QUOTATION MARK,
            // U+0027 APOSTROPHE, or whitespace followed by U+0022 QUOTATION MARK or
            // U+0027 APOSTROPHE, then create a <function-token>..."
            if matches!(self.peek_at(lookahead), Some('"' | '\'')) {
                CSSToken::Function(string)
            } else {
                // "Otherwise, consume a url token, and return it."
                self.consume_url_token()
            }
        }
        // "Otherwise, if the next input code point is U+0028 LEFT PARENTHESIS (()"
        else if self.peek() == Some('(') {
            self.advance(1);
            CSSToken::Function(string)
        } else {
            CSSToken::Ident(string)
        }
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self) -> CSSToken {
        let mut value = String::new();

        // "Consume as much whitespace as possible."
        self.consume_whitespace();

        loop {
            match self.consume() {
                // "U+0029 RIGHT PARENTHESIS ())" - "Return the <url-token>."
                // "EOF" - "This is a parse error. Return the <url-token>."
                Some(')') | None => return CSSToken::Url(value),

                // "whitespace"
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    match self.peek() {
                        Some(')') => {
                            self.advance(1);
                            return CSSToken::Url(value);
                        }
                        None => return CSSToken::Url(value),
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            return CSSToken::BadUrl;
                        }
                    }
                }

                // "This is a parse error. Consume the remnants of a bad url, create a
                // <bad-url-token>, and return it."
                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return CSSToken::BadUrl;
                }

                // "U+005C REVERSE SOLIDUS (\)"
                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.consume_bad_url_remnants();
                        return CSSToken::BadUrl;
                    }
                }

                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                Some(')') | None => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();

        loop {
            match self.consume() {
                // "ident code point" - "Append the code point to result."
                Some(c) if is_ident_code_point(c) => result.push(c),

                // "the stream starts with a valid escape"
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    result.push(self.consume_escaped_code_point());
                }

                // "anything else" - "Reconsume the current input code point. Return result."
                Some(_) => {
                    self.reconsume();
                    return result;
                }

                None => return result,
            }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> f64 {
        let mut repr = String::new();

        // "If the next input code point is U+002B PLUS SIGN (+) or U+002D HYPHEN-MINUS (-),
        // consume it and append it to repr."
        if let Some(sign @ ('+' | '-')) = self.peek() {
            self.advance(1);
            repr.push(sign);
        }

        // "While the next input code point is a digit, consume it and append it to repr."
        self.consume_digits(&mut repr);

        // "If the next 2 input code points are U+002E FULL STOP (.) followed by a digit..."
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance(1);
            repr.push('.');
            self.consume_digits(&mut repr);
        }

        // "If the next 2 or 3 input code points are U+0045 LATIN CAPITAL LETTER E (E)
        // or U+0065 LATIN SMALL LETTER E (e), optionally followed by U+002D HYPHEN-MINUS (-)
        // or U+002B PLUS SIGN (+), followed by a digit..."
        if let Some(e @ ('e' | 'E')) = self.peek() {
            let sign = self.peek_at(1).filter(|&c| c == '+' || c == '-');
            let digit_offset = if sign.is_some() { 2 } else { 1 };
            if self.peek_at(digit_offset).is_some_and(|c| c.is_ascii_digit()) {
                self.advance(1);
                repr.push(e);
                if let Some(sign) = sign {
                    self.advance(1);
                    repr.push(sign);
                }
                self.consume_digits(&mut repr);
            }
        }

        // "Convert repr to a number, and set the value to the returned value."
        repr.parse().unwrap_or(0.0)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while let Some(c) = self.peek()
            && c.is_ascii_digit()
        {
            self.advance(1);
            repr.push(c);
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            // "hex digit"
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = c.to_string();
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6
                    && let Some(d) = self.peek()
                    && d.is_ascii_hexdigit()
                {
                    self.advance(1);
                    hex.push(d);
                }
                // "If the next input code point is whitespace, consume it."
                if self.peek().is_some_and(is_whitespace) {
                    self.advance(1);
                }
                // "If this number is zero, or is for a surrogate, or is greater than the
                // maximum allowed code point, return U+FFFD REPLACEMENT CHARACTER."
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|&code_point| code_point != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}')
            }
            // "EOF" - "This is a parse error. Return U+FFFD REPLACEMENT CHARACTER."
            None => '\u{FFFD}',
            // "anything else" - "Return the current input code point."
            Some(c) => c,
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    ///
    /// Checks the next three input code points.
    fn would_start_ident_sequence(&self) -> bool {
        starts_ident_sequence(self.peek(), self.peek_at(1), self.peek_at(2))
    }

    /// Checks the current input code point `current` followed by the next two.
    fn would_start_ident_sequence_with(&self, current: Option<char>) -> bool {
        starts_ident_sequence(current, self.peek(), self.peek_at(1))
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    ///
    /// Checks the current input code point (the one just consumed) followed
    /// by the next two.
    fn would_start_number(&self) -> bool {
        let current = self
            .position
            .checked_sub(1)
            .and_then(|i| self.input.get(i))
            .copied();
        starts_number(current, self.peek(), self.peek_at(1))
    }

    /// Consume and return the next character.
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        self.byte_position += c.len_utf8();
        Some(c)
    }

    /// Skip `count` characters.
    fn advance(&mut self, count: usize) {
        for _ in 0..count {
            let _ = self.consume();
        }
    }

    /// Put back the last consumed character.
    fn reconsume(&mut self) {
        if self.position > 0 {
            self.position -= 1;
            self.byte_position -= self.input[self.position].len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
///
/// "If the first code point is not U+005C REVERSE SOLIDUS (\), return false.
/// Otherwise, if the second code point is a newline, return false.
/// Otherwise, return true."
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

/// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
fn starts_ident_sequence(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        // "U+002D HYPHEN-MINUS"
        // "If the second code point is an ident-start code point or a U+002D HYPHEN-MINUS,
        // or the second and third code points are a valid escape, return true."
        Some('-') => {
            second.is_some_and(|c| is_ident_start_code_point(c) || c == '-')
                || is_valid_escape(second, third)
        }
        // "ident-start code point" - "Return true."
        Some(c) if is_ident_start_code_point(c) => true,
        // "U+005C REVERSE SOLIDUS (\)"
        // "If the first and second code points are a valid escape, return true."
        Some('\\') => is_valid_escape(first, second),
        // "anything else" - "Return false."
        _ => false,
    }
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
fn starts_number(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        // "U+002B PLUS SIGN (+)" or "U+002D HYPHEN-MINUS (-)"
        // "If the second code point is a digit, return true. Otherwise, if the second
        // code point is a U+002E FULL STOP (.) and the third code point is a digit,
        // return true."
        Some('+' | '-') => match second {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => third.is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        },
        // "U+002E FULL STOP (.)" - "If the second code point is a digit, return true."
        Some('.') => second.is_some_and(|c| c.is_ascii_digit()),
        // "digit" - "Return true."
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
///
/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
const fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
///
/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
const fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
const fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
