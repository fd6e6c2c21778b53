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

//! Equation and boolean constraint grammar.
//!
//! ```text
//! Equ     ::= Expr "=" Expr
//! Bool    ::= Disj "or" Bool | Disj
//! Disj    ::= Conj "and" Disj | Conj
//! Conj    ::= Relat | "(" Bool ")"
//! Relat   ::= Expr ("<" | ">") Expr
//! ```
//!
//! `and` binds tighter than `or` because `Disj` is built from `Conj`; both
//! associate to the right. `<=`, `>=` and `!=` are not part of the language.

use crate::ast::Constraint;
use crate::combinator::text::{keyword, symbol};
use crate::combinator::{delimited, lazy, or_else, preceded, pure, sequence, Parser};

use super::expr::{expr, with_left};

/// `left = right`.
pub fn equation() -> Parser<Constraint> {
    let right = preceded(symbol("="), expr());
    sequence(expr(), move |left| with_left(&right, &left, Constraint::Equal))
}

/// `left < right` or `left > right`.
pub fn relation() -> Parser<Constraint> {
    let less = preceded(symbol("<"), expr());
    let greater = preceded(symbol(">"), expr());
    sequence(expr(), move |left| {
        or_else(
            with_left(&less, &left, Constraint::LessThan),
            with_left(&greater, &left, Constraint::GreaterThan),
        )
    })
}

/// A relation or a parenthesised boolean expression.
pub fn conjunction() -> Parser<Constraint> {
    let grouped = delimited(symbol("("), lazy(bool_expr), symbol(")"));
    or_else(relation(), grouped)
}

/// Right-associative `and` chain.
pub fn disjunction() -> Parser<Constraint> {
    let rest = preceded(keyword("and"), lazy(disjunction));
    sequence(conjunction(), move |left| {
        or_else(with_left(&rest, &left, Constraint::and), pure(left))
    })
}

/// Right-associative `or` chain of `and` chains.
pub fn bool_expr() -> Parser<Constraint> {
    let rest = preceded(keyword("or"), lazy(bool_expr));
    sequence(disjunction(), move |left| {
        or_else(with_left(&rest, &left, Constraint::or), pure(left))
    })
}
