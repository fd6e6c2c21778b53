/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Arithmetic expression grammar.
//!
//! ```text
//! Expr   ::= Term "+" Expr | Term "-" Expr | "-" Expr | Term
//! Term   ::= Factor "*" Term | Factor
//! Factor ::= Integer | Identifier | "(" Expr ")"
//! ```
//!
//! Every binary operator associates to the right: the right operand is a
//! recursive parse of the whole rule, so `x - y - z` is `x - (y - z)`.

use crate::ast::Expr;
use crate::combinator::text::{identifier, signed_integer, symbol, token};
use crate::combinator::{
    delimited, lazy, map, not_followed_by, or_else, peek, preceded, pure, sequence, Parser,
};

/// Integer literal with an optional leading `-`.
pub fn integer() -> Parser<Expr> {
    map(token(signed_integer()), Expr::Const)
}

/// Variable reference.
pub fn variable() -> Parser<Expr> {
    map(identifier(), Expr::Var)
}

/// Integer, identifier, or parenthesised expression.
pub fn factor() -> Parser<Expr> {
    let parenthesized = delimited(symbol("("), lazy(expr), symbol(")"));
    or_else(integer(), or_else(variable(), parenthesized))
}

/// Right-associative product of factors.
pub fn term() -> Parser<Expr> {
    let product = preceded(symbol("*"), lazy(term));
    // `Factor "*" Term | Factor` share the leading factor, parsed once.
    sequence(factor(), move |left| {
        or_else(with_left(&product, &left, Expr::times), pure(left))
    })
}

/// Full arithmetic expression.
///
/// The rule is tried in order, but the leading `Term` is parsed once:
/// - input not starting with `-`: `Term`, then an optional `+ Expr`/`- Expr`;
/// - input starting with `-` where a `Term` parses (a negative literal
///   heads it): `+ Expr`/`- Expr` after it, else the `"-" Expr` reading of
///   the same text, else the `Term` itself;
/// - otherwise `"-" Expr`.
pub fn expr() -> Parser<Expr> {
    let sum = preceded(symbol("+"), lazy(expr));
    let difference = preceded(symbol("-"), lazy(expr));
    let operator = move |left: &Expr| {
        with_left(&sum, left, Expr::plus).or(with_left(&difference, left, Expr::minus))
    };
    let signed_operator = operator.clone();

    let unsigned = preceded(
        not_followed_by(symbol("-")),
        term().and_then(move |left| operator(&left).or(pure(left))),
    );
    let signed = preceded(
        peek(symbol("-")),
        term().and_then(move |left| {
            let fallback = match negate_leading_literal(&left) {
                Some(inner) => Expr::negate(inner),
                None => left.clone(),
            };
            signed_operator(&left).or(pure(fallback))
        }),
    );
    let negated = preceded(symbol("-"), lazy(expr)).map(Expr::negate);
    unsigned.or(signed).or(negated)
}

/// The operand `"-" Expr` would read from the text of `term`, when `term`
/// begins with a negative literal and is not followed by `+`/`-`.
///
/// Both readings consume the same input; only the sign of the head literal
/// moves. `None` when that literal has no positive counterpart (`i64::MIN`),
/// in which case `"-" Expr` fails and the plain `Term` stands.
fn negate_leading_literal(term: &Expr) -> Option<Expr> {
    match term {
        Expr::Const(value) => value.checked_neg().map(Expr::Const),
        Expr::Times(head, rest) => Some(Expr::times(
            negate_leading_literal(head)?,
            (**rest).clone(),
        )),
        _ => None,
    }
}

/// Parses the right operand with `right` and combines it with `left`.
pub(super) fn with_left<L, R, T>(right: &Parser<R>, left: &L, build: fn(L, R) -> T) -> Parser<T>
where
    L: Clone + Send + Sync + 'static,
    R: 'static,
    T: Clone + Send + Sync + 'static,
{
    let left = left.clone();
    map(right.clone(), move |right| build(left.clone(), right))
}
