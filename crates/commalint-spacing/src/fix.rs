use commalint_errors::Fix;
use commalint_tokenizer::TokenStream;

use crate::{Side, SpacingConfig, Violation};

impl Violation {
    pub fn message(&self, stream: &TokenStream<'_>, config: &SpacingConfig) -> String {
        let separator = stream.text(self.anchor);

        if config.requires_space(self.side) {
            format!("A space is required {} '{separator}'.", self.side)
        } else {
            format!("There should be no space {} '{separator}'.", self.side)
        }
    }

    /// The single edit that makes this side of the separator agree with
    /// `config`.
    ///
    /// A missing space is inserted right next to the separator. Forbidden
    /// whitespace is removed by deleting everything between the separator and
    /// the adjacent token.
    pub fn fix(&self, stream: &TokenStream<'_>, config: &SpacingConfig) -> Fix {
        let separator = stream.token(self.anchor).range;

        if config.requires_space(self.side) {
            let offset = match self.side {
                Side::Before => separator.start(),
                Side::After => separator.end(),
            };
            return Fix::insert(offset, " ", format!("insert a space {}", self.side));
        }

        let gap = match self.side {
            Side::Before => stream.gap(self.adjacent, self.anchor),
            Side::After => stream.gap(self.anchor, self.adjacent),
        };
        Fix::delete(gap, format!("remove the whitespace {}", self.side))
    }
}
