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

//! Grammar for the `Solve ... such that ...` language.
//!
//! Each rule is a function returning a fresh [`Parser`] built only from the
//! combinator engine. Rules that refer to themselves, or to a rule that in
//! turn refers back to them, go through [`lazy`](crate::combinator::lazy).
//!
//! The `parse_*` entry points require the whole input to be consumed
//! (trailing whitespace aside) and map failure to [`SyntaxError`].

mod constraints;
mod expr;
mod system;

use crate::ast::{Constraint, Expr, Program};
use crate::combinator::Parser;
use crate::diagnostics::SyntaxError;
use tracing::debug;

pub use self::constraints::{bool_expr, conjunction, disjunction, equation, relation};
pub use self::expr::{expr, factor, integer, term, variable};
pub use self::system::{bool_system, equation_system, program};

/// Parses a full program.
pub fn parse_program(source: &str) -> Result<Program, SyntaxError> {
    debug!(bytes = source.len(), "parsing program");
    let result = parse_all(&program(), source);
    match &result {
        Ok(parsed) => debug!(
            equations = parsed.equations.len(),
            constraints = parsed.constraints.len(),
            "program parsed"
        ),
        Err(err) => debug!(%err, "program rejected"),
    }
    result
}

/// Parses a single arithmetic expression.
pub fn parse_expr(source: &str) -> Result<Expr, SyntaxError> {
    parse_all(&expr(), source)
}

/// Parses a single boolean expression (`such that` clause syntax).
pub fn parse_constraint(source: &str) -> Result<Constraint, SyntaxError> {
    parse_all(&bool_expr(), source)
}

/// Runs `parser` and rejects any non-whitespace leftover.
pub fn parse_all<T: 'static>(parser: &Parser<T>, source: &str) -> Result<T, SyntaxError> {
    let Some((value, rest)) = parser.parse(source) else {
        return Err(SyntaxError::NoMatch);
    };
    let rest = rest.trim_start();
    if !rest.is_empty() {
        return Err(SyntaxError::TrailingInput {
            rest: rest.to_string(),
        });
    }
    Ok(value)
}
