use camino::Utf8PathBuf;
use commalint_errors::apply_fixes;
pub use commalint_errors::{Diagnostic, Severity};
use commalint_spacing::CommaSpacing;
pub use commalint_spacing::SpacingConfig;
use commalint_tokenizer::TokenStream;
pub use line_index::LineIndex;
use salsa::{Accumulator as _, Database};
use tracing::debug;

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
    pub config: SpacingConfig,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

/// Parses `file` and runs the comma-spacing pass over it.
///
/// Syntax errors are accumulated as errors, spacing violations as warnings
/// with a fix attached. A file that fails to parse is still checked.
#[salsa::tracked]
pub fn check_file(db: &dyn Database, file: File) {
    let stream = TokenStream::new(file.text(db));
    let parse = commalint_parse::parse(&stream);

    for error in parse.errors() {
        error.clone().accumulate(db);
    }

    let spacing = CommaSpacing::new(file.config(db));
    for diagnostic in spacing.diagnostics(&stream, parse.lists()) {
        diagnostic.accumulate(db);
    }
}

/// All diagnostics of `file`, ordered by position.
pub fn diagnostics(db: &dyn Database, file: File) -> Vec<Diagnostic> {
    let mut diagnostics =
        check_file::accumulated::<Diagnostic>(db, file).into_iter().cloned().collect::<Vec<_>>();
    diagnostics.sort_by_key(|diagnostic| diagnostic.range().start());
    diagnostics
}

/// Applies every fix attached to the diagnostics of `file`.
///
/// Returns the rewritten text and the number of fixes applied.
pub fn fix_file(db: &dyn Database, file: File) -> (String, usize) {
    let diagnostics = check_file::accumulated::<Diagnostic>(db, file);
    let (text, applied) =
        apply_fixes(file.text(db), diagnostics.iter().filter_map(|diagnostic| diagnostic.fix()));

    debug!(path = %file.path(db), applied, "applied fixes");
    (text, applied)
}
