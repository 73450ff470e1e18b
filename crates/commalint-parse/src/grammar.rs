use commalint_tokenizer::SyntaxKind::{self, *};

use crate::parser::Parser;

pub(crate) mod exprs;

pub(crate) fn module(p: &mut Parser<'_>) {
    while !p.at(EOF) {
        if p.eat(SEMICOLON) {
            continue;
        }

        let before = p.current();
        exprs::sequence(p);
        p.eat(SEMICOLON);
        if p.current() == before {
            p.advance();
        }
    }
}

/// Parses `item`s separated by commas up to (not including) `ket`.
///
/// A trailing comma is accepted; a comma with nothing in front of it is not.
pub(crate) fn delimited(
    p: &mut Parser<'_>,
    ket: SyntaxKind,
    mut item: impl FnMut(&mut Parser<'_>) -> bool,
) {
    while !p.at(ket) && !p.at(EOF) {
        if p.at(COMMA) {
            p.error("unexpected ','");
            p.advance();
            continue;
        }

        let before = p.current();
        if !item(p) {
            if p.current() == before {
                p.advance();
            }
            continue;
        }

        if !p.eat(COMMA) {
            break;
        }
    }
}
