mod cursor;
mod stream;
mod syntax_kind;

use cursor::{Cursor, EOF_CHAR};
pub use line_index::LineCol;
pub use stream::{Token, TokenId, TokenStream};
pub use syntax_kind::SyntaxKind;
use syntax_kind::SyntaxKind::*;
use text_size::{TextRange, TextSize};

/// A token kind together with the source range it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: &'static str,
    pub range: TextRange,
}

pub struct Tokenizer<'a> {
    text: &'a str,
    cursor: Cursor<'a>,
    errors: Vec<LexError>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: Cursor::new(text), errors: Vec::new() }
    }

    fn offset(&self) -> TextSize {
        TextSize::of(self.text) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let end = self.offset();
        TextRange::new(end - self.cursor.pos_within_token(), end)
    }

    fn text(&self) -> &'a str {
        &self.text[self.range()]
    }

    fn error(&mut self, message: &'static str) {
        self.errors.push(LexError { message, range: self.range() });
    }

    /// Scans the next token, skipping any whitespace in front of it.
    ///
    /// Comments are returned as tokens. Once the input is exhausted every call
    /// returns an empty `EOF` lexeme.
    pub fn next_token(&mut self) -> Lexeme {
        self.cursor.advance_while(char::is_whitespace);
        self.cursor.reset_pos_within_token();

        let kind = self.syntax_kind();
        let range = self.range();
        self.cursor.reset_pos_within_token();

        Lexeme { kind, range }
    }

    /// Consumes the tokenizer, returning the errors seen so far.
    pub fn finish(self) -> Vec<LexError> {
        self.errors
    }

    fn syntax_kind(&mut self) -> SyntaxKind {
        match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ',' => COMMA,
            ':' => COLON,
            ';' => SEMICOLON,
            '/' if self.cursor.matches('/') => {
                self.cursor.advance_while(|c| c != '\n');
                LINE_COMMENT
            }
            '/' if self.cursor.matches('*') => {
                self.cursor.advance();
                self.block_comment()
            }
            '<' if self.cursor.matches('>') => {
                self.cursor.advance();
                self.markup()
            }
            quote @ ('"' | '\'' | '`') => self.string(quote),
            first_char @ '0'..='9' => self.number(first_char),
            'A'..='Z' | 'a'..='z' | '_' | '$' => {
                self.cursor.advance_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
                NAME
            }
            EOF_CHAR if self.cursor.pos_within_token() == TextSize::new(0) => EOF,
            first_char if is_operator(first_char) => self.operator(),
            _ => UNKNOWN,
        }
    }

    fn operator(&mut self) -> SyntaxKind {
        while is_operator(self.cursor.peek()) && !self.at_comment_start() {
            self.cursor.advance();
        }

        match self.text() {
            "=" => EQ,
            "." => DOT,
            _ => OPERATOR,
        }
    }

    fn at_comment_start(&self) -> bool {
        self.cursor.peek() == '/' && matches!(self.cursor.second(), '/' | '*')
    }

    fn block_comment(&mut self) -> SyntaxKind {
        loop {
            if self.cursor.is_eof() {
                self.error("unterminated block comment");
                break;
            }
            if self.cursor.advance() == '*' && self.cursor.matches('/') {
                self.cursor.advance();
                break;
            }
        }

        BLOCK_COMMENT
    }

    fn string(&mut self, quote: char) -> SyntaxKind {
        loop {
            if self.cursor.is_eof() || (quote != '`' && self.cursor.peek() == '\n') {
                self.error("unterminated string literal");
                break;
            }
            match self.cursor.advance() {
                '\\' => {
                    self.cursor.advance();
                }
                c if c == quote => break,
                _ => {}
            }
        }

        STRING
    }

    fn markup(&mut self) -> SyntaxKind {
        while !self.cursor.rest().starts_with("</>") {
            if self.cursor.is_eof() {
                self.error("unterminated markup fragment");
                return MARKUP_TEXT;
            }
            self.cursor.advance();
        }

        for _ in 0.."</>".len() {
            self.cursor.advance();
        }

        MARKUP_TEXT
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'b' | 'o' => {
                    self.cursor.advance();
                    self.digits(false);
                }
                'x' => {
                    self.cursor.advance();
                    self.digits(true);
                }
                '0'..='9' | '_' | '.' | 'e' | 'E' => {
                    self.digits(false);
                }
                _ => return NUMBER,
            }
        } else {
            self.digits(false);
        }

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
        }

        NUMBER
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        self.cursor.advance();
        if self.cursor.matches('-') || self.cursor.matches('+') {
            self.cursor.advance();
        }
        self.digits(false);
    }
}

fn is_operator(c: char) -> bool {
    matches!(
        c,
        '/' | '=' | '-' | '+' | '*' | '%' | '<' | '>' | '!' | '&' | '|' | '^' | '~' | '.' | '?'
    )
}
