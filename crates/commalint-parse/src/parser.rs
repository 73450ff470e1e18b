use commalint_errors::Diagnostic;
use commalint_tokenizer::{SyntaxKind, TokenId, TokenStream};
use drop_bomb::DropBomb;
use text_size::TextRange;

use crate::{Element, ListKind, ListNode, Parse};

/// How many expressions may be open at once before the parser gives up on the
/// innermost one.
pub(crate) const MAX_DEPTH: u32 = 256;

pub(crate) struct Parser<'s> {
    stream: &'s TokenStream<'s>,
    significant: Vec<TokenId>,
    pos: usize,
    depth: u32,
    lists: Vec<ListNode>,
    errors: Vec<Diagnostic>,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(stream: &'s TokenStream<'s>) -> Self {
        let significant = stream
            .iter()
            .filter(|(_, token)| !token.kind.is_trivia())
            .map(|(id, _)| id)
            .collect();
        let errors = stream
            .errors()
            .iter()
            .map(|error| Diagnostic::error(error.message, error.range))
            .collect();

        Self { stream, significant, pos: 0, depth: 0, lists: Vec::new(), errors }
    }

    pub(crate) fn current(&self) -> Option<TokenId> {
        self.significant.get(self.pos).copied()
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.current().map_or(SyntaxKind::EOF, |id| self.stream.kind(id))
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consumes the current token. Does nothing at the end of input.
    pub(crate) fn advance(&mut self) -> Option<TokenId> {
        let id = self.current()?;
        self.pos += 1;
        Some(id)
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind, message: &str) {
        if !self.eat(kind) {
            self.error(message);
        }
    }

    pub(crate) fn error(&mut self, message: &str) {
        let range = match self.current() {
            Some(id) => self.stream.token(id).range,
            None => TextRange::empty(self.stream.end()),
        };
        self.errors.push(Diagnostic::error(message, range));
    }

    /// Runs `f` one nesting level deeper. Past [`MAX_DEPTH`] the construct at
    /// the cursor is reported and skipped up to its closing delimiter instead.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_DEPTH {
            self.error("nesting too deep");
            self.skip_nested();
            return None;
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn skip_nested(&mut self) {
        let mut open = 0u32;

        loop {
            match self.peek_kind() {
                SyntaxKind::EOF => return,
                SyntaxKind::LEFT_PAREN | SyntaxKind::LEFT_BRACKET | SyntaxKind::LEFT_BRACE => {
                    open += 1;
                }
                SyntaxKind::RIGHT_PAREN | SyntaxKind::RIGHT_BRACKET | SyntaxKind::RIGHT_BRACE => {
                    if open == 0 {
                        return;
                    }
                    open -= 1;
                }
                SyntaxKind::COMMA | SyntaxKind::SEMICOLON if open == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }

    fn last_consumed(&self) -> Option<TokenId> {
        self.pos.checked_sub(1).and_then(|index| self.significant.get(index).copied())
    }

    /// The span from `first` up to the last consumed token.
    pub(crate) fn span_from(&self, first: TokenId) -> Element {
        Element { first, last: self.last_consumed().unwrap_or(first) }
    }

    pub(crate) fn start_list(&mut self, open: TokenId) -> ListMarker {
        let index = self.lists.len();
        self.lists.push(ListNode { kind: ListKind::Array, open, elements: Vec::new() });
        ListMarker::new(index)
    }

    /// Re-tags every list opened inside `span`.
    pub(crate) fn retag_lists(&mut self, span: Element, kind: ListKind) {
        for list in self.lists.iter_mut().rev().take_while(|list| list.open >= span.first) {
            list.kind = kind;
        }
    }

    pub(crate) fn finish(self) -> Parse {
        Parse::new(self.lists, self.errors)
    }
}

/// An open list. Elements are pushed onto the node reserved by
/// [`Parser::start_list`], so nested lists keep source order.
pub(crate) struct ListMarker {
    index: usize,
    bomb: DropBomb,
}

impl ListMarker {
    fn new(index: usize) -> Self {
        Self { index, bomb: DropBomb::new("ListMarker must be completed") }
    }

    pub(crate) fn hole(&self, p: &mut Parser<'_>) {
        p.lists[self.index].elements.push(None);
    }

    pub(crate) fn element(&self, p: &mut Parser<'_>, element: Element) {
        p.lists[self.index].elements.push(Some(element));
    }

    pub(crate) fn complete(mut self) {
        self.bomb.defuse();
    }
}
