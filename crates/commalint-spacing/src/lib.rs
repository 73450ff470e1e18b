//! Whitespace around `,` separators.
//!
//! The pass runs in two phases over one document. Every list node is visited
//! first to find the separators that follow a hole ([`ExemptionCollector`]).
//! The finished [`ExemptSet`] then feeds a single scan of the token stream
//! ([`SpacingValidator`]) which reports a [`Violation`] for each side of a
//! separator whose spacing disagrees with the [`SpacingConfig`]. Every
//! violation knows how to build its own [`Fix`](commalint_errors::Fix).

mod config;
mod exempt;
mod fix;
mod leaders;
#[cfg(test)]
mod tests;
mod validate;

use commalint_errors::Diagnostic;
use commalint_parse::ListNode;
use commalint_tokenizer::TokenStream;
pub use config::{Side, SpacingConfig};
pub use exempt::{ExemptSet, ExemptionCollector};
pub use leaders::LineLeaders;
use tracing::{debug, trace};
pub use validate::{SpacingValidator, Violation};

pub struct CommaSpacing {
    config: SpacingConfig,
}

impl CommaSpacing {
    pub fn new(config: SpacingConfig) -> Self {
        Self { config }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(tokens = stream.len(), lists = lists.len()))]
    pub fn check(&self, stream: &TokenStream<'_>, lists: &[ListNode]) -> Vec<Violation> {
        let mut collector = ExemptionCollector::new();
        for list in lists {
            collector.visit_list(stream, list);
        }
        let exempt = collector.finish();

        let leaders = LineLeaders::new(stream);
        let violations = SpacingValidator::new(self.config, &exempt, &leaders).validate(stream);

        debug!(exempt = exempt.len(), violations = violations.len(), "checked comma spacing");
        violations
    }

    /// Runs [`check`](Self::check) and turns each violation into a warning
    /// carrying its fix.
    pub fn diagnostics(&self, stream: &TokenStream<'_>, lists: &[ListNode]) -> Vec<Diagnostic> {
        self.check(stream, lists)
            .into_iter()
            .map(|violation| {
                let range = stream.token(violation.anchor).range;
                trace!(?range, side = %violation.side, "comma spacing violation");

                Diagnostic::warning(violation.message(stream, &self.config), range)
                    .with_fix(violation.fix(stream, &self.config))
            })
            .collect()
    }
}
