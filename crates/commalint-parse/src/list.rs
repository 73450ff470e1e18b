use std::fmt::Write as _;

use commalint_errors::Diagnostic;
use commalint_tokenizer::{TokenId, TokenStream};
use text_size::TextRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `[a, , b]` used as a value.
    Array,
    /// `[a, , b] = value`, the target of an assignment.
    Pattern,
}

/// Token span of a parsed expression, first and last token inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    pub first: TokenId,
    pub last: TokenId,
}

impl Element {
    pub fn range(self, stream: &TokenStream<'_>) -> TextRange {
        stream.token(self.first).range.cover(stream.token(self.last).range)
    }
}

/// A bracketed list whose elements may be elided.
///
/// `None` entries are holes: `[, a,, b]` has the elements
/// `[None, Some(a), None, Some(b)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListNode {
    pub kind: ListKind,
    pub open: TokenId,
    pub elements: Vec<Option<Element>>,
}

pub struct Parse {
    lists: Vec<ListNode>,
    errors: Vec<Diagnostic>,
}

impl Parse {
    pub(crate) fn new(lists: Vec<ListNode>, errors: Vec<Diagnostic>) -> Self {
        Self { lists, errors }
    }

    /// Every list in the document, ordered by their opening bracket.
    pub fn lists(&self) -> &[ListNode] {
        &self.lists
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn debug_dump(&self, stream: &TokenStream<'_>) -> String {
        let text = stream.source();
        let mut out = String::new();

        for list in &self.lists {
            let elements = list
                .elements
                .iter()
                .map(|element| match element {
                    Some(element) => &text[element.range(stream)],
                    None => "<hole>",
                })
                .collect::<Vec<_>>()
                .join(", ");
            _ = writeln!(out, "{:?}@{:?} [{elements}]", list.kind, stream.token(list.open).range);
        }

        out.push_str("Errors:\n");
        for error in &self.errors {
            _ = writeln!(out, "  {:?} {}", error.range(), error.message());
        }

        out
    }
}
