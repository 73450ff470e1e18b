use commalint_tokenizer::{SyntaxKind, TokenId, TokenStream};

use crate::{ExemptSet, LineLeaders, Side, SpacingConfig};

/// A separator whose spacing on one side disagrees with the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Violation {
    /// The separator.
    pub anchor: TokenId,
    pub side: Side,
    /// The token on the offending side of the separator.
    pub adjacent: TokenId,
}

/// The flat pass over the token stream.
///
/// Built from a finished [`ExemptSet`], so every list has been visited before
/// the first separator is looked at.
pub struct SpacingValidator<'a> {
    config: SpacingConfig,
    exempt: &'a ExemptSet,
    leaders: &'a LineLeaders,
}

impl<'a> SpacingValidator<'a> {
    pub fn new(config: SpacingConfig, exempt: &'a ExemptSet, leaders: &'a LineLeaders) -> Self {
        Self { config, exempt, leaders }
    }

    pub fn validate(&self, stream: &TokenStream<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (id, token) in stream.iter() {
            if !token.kind.is_separator() {
                continue;
            }

            let left = stream
                .prev(id)
                .filter(|&left| !stream.kind(left).is_separator() && !self.exempt.contains(id));
            let right = stream.next(id).filter(|&right| !stream.kind(right).is_separator());

            if let Some(left) = left
                && stream.token(left).is_on_same_line(token)
                && stream.has_whitespace_between(left, id) != self.config.require_space_before
            {
                violations.push(Violation { anchor: id, side: Side::Before, adjacent: left });
            }

            let Some(right) = right else {
                continue;
            };

            // Never ask for the space in front of a trailing `//` comment to go.
            if stream.kind(right) == SyntaxKind::LINE_COMMENT && !self.config.require_space_after {
                continue;
            }

            if !token.is_on_same_line(stream.token(right)) {
                continue;
            }

            if self.config.exempt_line_leading_separator
                && self.leaders.is_line_leading(stream, id)
            {
                continue;
            }

            if stream.has_whitespace_between(id, right) != self.config.require_space_after {
                violations.push(Violation { anchor: id, side: Side::After, adjacent: right });
            }
        }

        violations
    }
}
