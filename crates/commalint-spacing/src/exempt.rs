use commalint_parse::ListNode;
use commalint_tokenizer::{TokenId, TokenStream};
use rustc_hash::FxHashSet;

/// Collects the separators that stand in for an elided list element.
///
/// In `[ , x]` the comma follows a hole, so whatever sits before it says
/// nothing about spacing and its before-check is skipped.
#[derive(Debug, Default)]
pub struct ExemptionCollector {
    exempt: FxHashSet<TokenId>,
}

impl ExemptionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit_list(&mut self, stream: &TokenStream<'_>, list: &ListNode) {
        let mut previous = list.open;

        for element in &list.elements {
            let next = match element {
                Some(element) => stream.next_significant(element.last),
                None => {
                    let next = stream.next_significant(previous);
                    if let Some(next) = next
                        && stream.kind(next).is_separator()
                    {
                        self.exempt.insert(next);
                    }
                    next
                }
            };

            let Some(next) = next else {
                break;
            };
            previous = next;
        }
    }

    pub fn finish(self) -> ExemptSet {
        ExemptSet { tokens: self.exempt }
    }
}

/// Separators whose before-check is skipped, keyed by token identity.
#[derive(Debug, Default)]
pub struct ExemptSet {
    tokens: FxHashSet<TokenId>,
}

impl ExemptSet {
    pub fn contains(&self, id: TokenId) -> bool {
        self.tokens.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
