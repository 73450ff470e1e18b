use commalint_tokenizer::{TokenId, TokenStream};
use rustc_hash::FxHashMap;

/// The first token touching each line.
///
/// A token touches its start line and its end line; the first token in stream
/// order to touch a line claims it and later tokens never replace it.
#[derive(Debug, Default)]
pub struct LineLeaders {
    first: FxHashMap<u32, TokenId>,
}

impl LineLeaders {
    pub fn new(stream: &TokenStream<'_>) -> Self {
        let mut first = FxHashMap::default();

        for (id, token) in stream.iter() {
            first.entry(token.start.line).or_insert(id);
            first.entry(token.end.line).or_insert(id);
        }

        Self { first }
    }

    pub fn first_on_line(&self, line: u32) -> Option<TokenId> {
        self.first.get(&line).copied()
    }

    pub fn is_line_leading(&self, stream: &TokenStream<'_>, id: TokenId) -> bool {
        self.first_on_line(stream.token(id).start.line) == Some(id)
    }

    pub fn len(&self) -> usize {
        self.first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }
}
