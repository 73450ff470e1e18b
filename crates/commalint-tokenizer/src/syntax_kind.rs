#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    COMMA,
    COLON,
    SEMICOLON,
    EQ,
    DOT,
    OPERATOR,

    NAME,
    NUMBER,
    STRING,
    MARKUP_TEXT,

    LINE_COMMENT,
    BLOCK_COMMENT,

    UNKNOWN,
    EOF,
}

impl SyntaxKind {
    /// Comments sit in the token stream but never take part in the grammar.
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    pub const fn is_separator(self) -> bool {
        matches!(self, Self::COMMA)
    }
}
