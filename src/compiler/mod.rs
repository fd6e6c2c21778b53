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

//! Lowering from the parsed AST into a constraint-solver representation.
//!
//! The solver itself is an external collaborator. It is reached through the
//! [`Backend`] trait, which only needs integer constants, named integer
//! variables, `+ - *`, `= < >`, `and`/`or`, and a way to assert a clause.
//! Asserting every clause of a [`Program`] hands the solver their
//! conjunction.

mod smtlib;

pub use smtlib::SmtLib;

use crate::ast::{Constraint, Expr, Program};
use tracing::trace;

/// Target of AST lowering.
pub trait Backend {
    /// Integer-valued term.
    type Term;
    /// Boolean-valued formula.
    type Formula;

    /// Integer constant.
    fn int(&mut self, value: i64) -> Self::Term;
    /// Named integer variable.
    fn var(&mut self, name: &str) -> Self::Term;
    /// `left + right`.
    fn add(&mut self, left: Self::Term, right: Self::Term) -> Self::Term;
    /// `left - right`.
    fn sub(&mut self, left: Self::Term, right: Self::Term) -> Self::Term;
    /// `left * right`.
    fn mul(&mut self, left: Self::Term, right: Self::Term) -> Self::Term;
    /// `left = right`.
    fn eq(&mut self, left: Self::Term, right: Self::Term) -> Self::Formula;
    /// `left < right`.
    fn lt(&mut self, left: Self::Term, right: Self::Term) -> Self::Formula;
    /// `left > right`.
    fn gt(&mut self, left: Self::Term, right: Self::Term) -> Self::Formula;
    /// Conjunction.
    fn and(&mut self, left: Self::Formula, right: Self::Formula) -> Self::Formula;
    /// Disjunction.
    fn or(&mut self, left: Self::Formula, right: Self::Formula) -> Self::Formula;
    /// Adds `clause` to the set the solver must satisfy.
    fn assert(&mut self, clause: Self::Formula);
}

impl Expr {
    /// Lowers this expression into a backend term.
    pub fn lower<B: Backend>(&self, backend: &mut B) -> B::Term {
        match self {
            Expr::Const(value) => backend.int(*value),
            Expr::Var(name) => backend.var(name),
            Expr::Plus(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.add(l, r)
            }
            Expr::Minus(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.sub(l, r)
            }
            Expr::Times(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.mul(l, r)
            }
        }
    }
}

impl Constraint {
    /// Lowers this constraint into a backend formula.
    pub fn lower<B: Backend>(&self, backend: &mut B) -> B::Formula {
        match self {
            Constraint::Equal(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.eq(l, r)
            }
            Constraint::LessThan(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.lt(l, r)
            }
            Constraint::GreaterThan(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.gt(l, r)
            }
            Constraint::And(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.and(l, r)
            }
            Constraint::Or(l, r) => {
                let (l, r) = (l.lower(backend), r.lower(backend));
                backend.or(l, r)
            }
        }
    }
}

impl Program {
    /// Asserts every equation, then every constraint, in source order.
    pub fn lower_into<B: Backend>(&self, backend: &mut B) {
        let mut count = 0usize;
        for clause in self.clauses() {
            let formula = clause.lower(backend);
            backend.assert(formula);
            count += 1;
        }
        trace!(clauses = count, "program lowered");
    }
}
