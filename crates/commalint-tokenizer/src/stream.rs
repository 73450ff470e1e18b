//! The materialized token stream handed to the parser and the spacing pass.

use line_index::{LineCol, LineIndex};
use text_size::{TextRange, TextSize};

use crate::{LexError, Lexeme, SyntaxKind, Tokenizer};

/// Identity of a token: its position in the [`TokenStream`].
///
/// Two tokens with the same kind and text are still different tokens; code
/// that needs to remember "this particular comma" keys on the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    /// Offsets are [`TextSize`], so a document is at most `u32::MAX` bytes
    /// long, and every token covers at least one byte. Any index into a
    /// [`TokenStream`] therefore fits in a `u32`.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok(), "token index {index} out of range");
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A token with its resolved positions. Lines and columns are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub start: LineCol,
    pub end: LineCol,
}

impl Token {
    pub fn is_on_same_line(&self, other: &Self) -> bool {
        self.start.line == other.start.line
    }
}

/// Every token and comment of a document in source order.
///
/// Whitespace is not materialized; it is whatever lies between the ranges of
/// two neighbouring tokens.
pub struct TokenStream<'a> {
    text: &'a str,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_index = LineIndex::new(text);
        let mut tokenizer = Tokenizer::new(text);
        let mut tokens = Vec::new();

        loop {
            let Lexeme { kind, range } = tokenizer.next_token();
            if kind == SyntaxKind::EOF {
                break;
            }

            tokens.push(Token {
                kind,
                range,
                start: line_index.line_col(range.start()),
                end: line_index.line_col(range.end()),
            });
        }

        Self { text, tokens, errors: tokenizer.finish() }
    }

    pub fn source(&self) -> &'a str {
        self.text
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    pub fn kind(&self, id: TokenId) -> SyntaxKind {
        self.token(id).kind
    }

    pub fn text(&self, id: TokenId) -> &'a str {
        &self.text[self.token(id).range]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.tokens.iter().enumerate().map(|(index, token)| (TokenId::from_index(index), token))
    }

    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        id.index().checked_sub(1).map(TokenId::from_index)
    }

    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let next = id.index() + 1;
        (next < self.tokens.len()).then(|| TokenId::from_index(next))
    }

    /// The first non-comment token after `id`.
    pub fn next_significant(&self, id: TokenId) -> Option<TokenId> {
        let mut next = self.next(id)?;
        while self.kind(next).is_trivia() {
            next = self.next(next)?;
        }
        Some(next)
    }

    /// The range strictly between the end of `left` and the start of `right`.
    pub fn gap(&self, left: TokenId, right: TokenId) -> TextRange {
        TextRange::new(self.token(left).range.end(), self.token(right).range.start())
    }

    pub fn has_whitespace_between(&self, left: TokenId, right: TokenId) -> bool {
        self.text[self.gap(left, right)].chars().any(char::is_whitespace)
    }

    pub fn end(&self) -> TextSize {
        TextSize::of(self.text)
    }
}
