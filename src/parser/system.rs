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

//! Clause lists and the top-level program rule.
//!
//! ```text
//! Program ::= "Solve" EqSys ("such" "that" BoolSys)? "."
//! EqSys   ::= Equ ("," EqSys)?
//! BoolSys ::= Bool ("," BoolSys)?
//! ```

use crate::ast::{Constraint, Program};
use crate::combinator::text::{keyword, symbol};
use crate::combinator::{map, optional, preceded, separated_list1, sequence, terminated, Parser};

use super::constraints::{bool_expr, equation};

/// Comma-separated equations, in source order.
pub fn equation_system() -> Parser<Vec<Constraint>> {
    separated_list1(equation(), symbol(","))
}

/// Comma-separated boolean expressions, in source order.
pub fn bool_system() -> Parser<Vec<Constraint>> {
    separated_list1(bool_expr(), symbol(","))
}

/// `Solve <equations> [such that <constraints>].`
pub fn program() -> Parser<Program> {
    let such_that = preceded(keyword("such"), preceded(keyword("that"), bool_system()));
    let body = sequence(preceded(keyword("Solve"), equation_system()), move |equations| {
        map(optional(such_that.clone()), move |constraints| Program {
            equations: equations.clone(),
            constraints: constraints.unwrap_or_default(),
        })
    });
    terminated(body, symbol("."))
}
