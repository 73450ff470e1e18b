mod grammar;
mod list;
mod parser;

use commalint_tokenizer::TokenStream;
pub use list::{Element, ListKind, ListNode, Parse};

/// Parses a whole document, collecting its list nodes and syntax errors.
///
/// Tokenizer errors are reported first, followed by parser errors in source
/// order. Parsing always runs to the end of the stream.
pub fn parse(stream: &TokenStream<'_>) -> Parse {
    let mut parser = parser::Parser::new(stream);
    grammar::module(&mut parser);
    parser.finish()
}
