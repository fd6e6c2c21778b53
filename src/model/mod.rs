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

//! Checking a program against a concrete assignment.
//!
//! The assignment is an explicit, immutable [`Env`] passed by reference; no
//! evaluation state is shared between calls.

mod errors;
mod eval;

use crate::ast::{Constraint, Program};
use std::collections::BTreeMap;

pub use errors::EvalError;

/// Variable assignment.
pub type Env = BTreeMap<String, i64>;

/// Outcome of one clause under an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseCheck {
    /// The checked clause.
    pub clause: Constraint,
    /// Whether it holds.
    pub holds: bool,
}

impl Program {
    /// Evaluates every clause in source order (equations first).
    pub fn check(&self, env: &Env) -> Result<Vec<ClauseCheck>, EvalError> {
        self.clauses()
            .map(|clause| {
                Ok(ClauseCheck {
                    clause: clause.clone(),
                    holds: clause.holds(env)?,
                })
            })
            .collect()
    }

    /// Returns whether every clause holds.
    pub fn is_satisfied_by(&self, env: &Env) -> Result<bool, EvalError> {
        for clause in self.clauses() {
            if !clause.holds(env)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
