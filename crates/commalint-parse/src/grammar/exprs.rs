use commalint_tokenizer::SyntaxKind::{self, *};

use super::delimited;
use crate::parser::Parser;
use crate::{Element, ListKind};

/// `a, b, c` as a single expression.
pub(crate) fn sequence(p: &mut Parser<'_>) -> Option<Element> {
    let first = expr(p)?;

    while p.eat(COMMA) {
        expr(p);
    }

    Some(p.span_from(first.first))
}

pub(crate) fn expr(p: &mut Parser<'_>) -> Option<Element> {
    p.nested(assignment)
}

fn assignment(p: &mut Parser<'_>) -> Option<Element> {
    let lhs = binary_expr(p)?;

    if p.at(EQ) {
        p.retag_lists(lhs, ListKind::Pattern);
        p.advance();
        expr(p);
        return Some(p.span_from(lhs.first));
    }

    Some(lhs)
}

fn binary_expr(p: &mut Parser<'_>) -> Option<Element> {
    let lhs = unary_expr(p)?;

    while p.at(OPERATOR) {
        p.advance();
        // `a++` ends in an operator with nothing after it.
        if can_start_expr(p.peek_kind()) {
            unary_expr(p);
        }
    }

    Some(p.span_from(lhs.first))
}

fn unary_expr(p: &mut Parser<'_>) -> Option<Element> {
    let Some(first) = p.current().filter(|_| p.at(OPERATOR)) else {
        return postfix_expr(p);
    };

    while p.eat(OPERATOR) {}
    postfix_expr(p);
    Some(p.span_from(first))
}

fn postfix_expr(p: &mut Parser<'_>) -> Option<Element> {
    let lhs = primary_expr(p)?;

    loop {
        match p.peek_kind() {
            LEFT_PAREN => {
                p.advance();
                delimited(p, RIGHT_PAREN, |p| expr(p).is_some());
                p.expect(RIGHT_PAREN, "expected ')'");
            }
            LEFT_BRACKET => {
                p.advance();
                sequence(p);
                p.expect(RIGHT_BRACKET, "expected ']'");
            }
            DOT => {
                p.advance();
                p.expect(NAME, "expected property name");
            }
            _ => break,
        }
    }

    Some(p.span_from(lhs.first))
}

fn primary_expr(p: &mut Parser<'_>) -> Option<Element> {
    match p.peek_kind() {
        NAME | NUMBER | STRING | MARKUP_TEXT => {
            let first = p.advance()?;
            Some(Element { first, last: first })
        }
        LEFT_PAREN => {
            let first = p.advance()?;
            delimited(p, RIGHT_PAREN, |p| expr(p).is_some());
            p.expect(RIGHT_PAREN, "expected ')'");
            Some(p.span_from(first))
        }
        LEFT_BRACKET => array(p),
        LEFT_BRACE => object(p),
        kind => {
            p.error("expected expression");
            if !is_recovery(kind) {
                p.advance();
            }
            None
        }
    }
}

/// `[a, , b]`. A comma that directly follows the opening bracket or another
/// comma leaves a hole.
fn array(p: &mut Parser<'_>) -> Option<Element> {
    let open = p.advance()?;
    let m = p.start_list(open);

    while !p.at(RIGHT_BRACKET) && !p.at(EOF) {
        if p.at(COMMA) {
            m.hole(p);
            p.advance();
            continue;
        }

        let before = p.current();
        match expr(p) {
            Some(element) => m.element(p, element),
            None => {
                if p.current() == before {
                    p.advance();
                }
                continue;
            }
        }

        if !p.eat(COMMA) {
            break;
        }
    }

    p.expect(RIGHT_BRACKET, "expected ']'");
    m.complete();
    Some(p.span_from(open))
}

fn object(p: &mut Parser<'_>) -> Option<Element> {
    let first = p.advance()?;
    delimited(p, RIGHT_BRACE, property);
    p.expect(RIGHT_BRACE, "expected '}'");
    Some(p.span_from(first))
}

fn property(p: &mut Parser<'_>) -> bool {
    match p.peek_kind() {
        // `...rest`
        OPERATOR => expr(p).is_some(),
        NAME | STRING | NUMBER => {
            p.advance();
            if p.eat(COLON) {
                expr(p);
            }
            true
        }
        _ => {
            p.error("expected property");
            false
        }
    }
}

fn can_start_expr(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        NAME | NUMBER | STRING | MARKUP_TEXT | OPERATOR | LEFT_PAREN | LEFT_BRACKET | LEFT_BRACE
    )
}

fn is_recovery(kind: SyntaxKind) -> bool {
    matches!(kind, RIGHT_PAREN | RIGHT_BRACKET | RIGHT_BRACE | COMMA | SEMICOLON | EOF)
}
