//! Arithmetic expressions.
//!
//! Two binary tiers sit on top of the primary rule: additive (`+ -`) and
//! multiplicative (`* / %`). Each tier opens a marker before its first
//! operand. When an operator follows, the tier parses the next operand,
//! completes the marker as a binary node and immediately precedes it, so the
//! node just built becomes the left operand of whatever comes next. The
//! result is a left-leaning tree built in a single left-to-right pass.

use crate::SyntaxKind;
use crate::parser::Parser;

const ADDITIVE: &[SyntaxKind] = &[SyntaxKind::T_PLUS, SyntaxKind::T_MINUS];
const MULTIPLICATIVE: &[SyntaxKind] = &[
    SyntaxKind::T_STAR,
    SyntaxKind::T_SLASH,
    SyntaxKind::T_PERCENT,
];

pub(super) fn expr(p: &mut Parser<'_>) -> bool {
    additive(p)
}

fn additive(p: &mut Parser<'_>) -> bool {
    binary_tier(p, ADDITIVE, multiplicative)
}

fn multiplicative(p: &mut Parser<'_>) -> bool {
    binary_tier(p, MULTIPLICATIVE, primary)
}

fn binary_tier(
    p: &mut Parser<'_>,
    operators: &[SyntaxKind],
    operand: fn(&mut Parser<'_>) -> bool,
) -> bool {
    let mut m = p.mark();
    if !operand(p) {
        m.abandon(p);
        return false;
    }
    while p.at_any(operators) {
        p.advance();
        operand(p);
        m = m.done(p, SyntaxKind::N_BIN_EXPR).precede(p);
    }
    m.abandon(p);
    true
}

/// An integer literal or a `$name` variable reference.
fn primary(p: &mut Parser<'_>) -> bool {
    let kind = match p.current() {
        Some(SyntaxKind::T_NUMBER) => SyntaxKind::N_INT_LIT_EXPR,
        Some(SyntaxKind::T_DOLLAR) => SyntaxKind::N_VAR_EXPR,
        _ => return false,
    };
    let m = p.mark();
    p.advance();
    if kind == SyntaxKind::N_VAR_EXPR {
        p.eat(SyntaxKind::T_IDENT);
    }
    let _ = m.done(p, kind);
    true
}
