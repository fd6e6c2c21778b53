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

//! Parser combinators and grammar for a small equation/constraint language.
//!
//! ```text
//! Solve x + y = 10, x - y = 2 such that x > 0, y > 0.
//! ```
//!
//! This crate provides:
//! - A generic, backtracking parser-combinator engine over `&str` with
//!   monadic sequencing ([`combinator`]).
//! - The grammar for the language, built only from those combinators
//!   ([`parser`]).
//! - An immutable AST ([`Expr`], [`Constraint`], [`Program`]) with free
//!   variable sets and a canonical printed form.
//! - Lowering into an external constraint solver through the
//!   [`compiler::Backend`] trait, with an SMT-LIB 2 backend.
//! - Direct evaluation under an explicit assignment ([`Env`]).
//!
//! # Pipeline
//!
//! 1. Parse source into a [`Program`] (whole input must be consumed).
//! 2. Lower every equation and constraint into a solver backend.
//! 3. The solver (outside this crate) searches for a satisfying assignment.
//!
//! # Associativity
//!
//! All binary operators associate to the right, `x - y - z` being
//! `x - (y - z)`. Unary minus is sugar for `0 - e`.

mod ast;
pub mod cli;
pub mod combinator;
pub mod compiler;
mod diagnostics;
mod model;
pub mod parser;

pub use ast::{Constraint, Expr, Program};
pub use diagnostics::SyntaxError;
pub use model::{ClauseCheck, Env, EvalError};
pub use parser::{parse_constraint, parse_expr, parse_program};

use compiler::SmtLib;

/// Parses a program and renders it as an SMT-LIB 2 script.
///
/// # Errors
///
/// Returns [`SyntaxError`] when the source is not a complete program.
pub fn compile_smtlib(source: &str) -> Result<String, SyntaxError> {
    let program = parse_program(source)?;
    let mut smt = SmtLib::new();
    program.lower_into(&mut smt);
    Ok(smt.script())
}

/// Parses a program and evaluates every clause under `env`.
pub fn check_program(source: &str, env: &Env) -> Result<Vec<ClauseCheck>, CheckError> {
    let program = parse_program(source)?;
    Ok(program.check(env)?)
}

/// Failure of [`check_program`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// The source is not a valid program.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A clause could not be evaluated.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[cfg(test)]
mod tests;
