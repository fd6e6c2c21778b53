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

//! AST definitions for the `Solve ... such that ...` language.
//!
//! Nodes are built bottom-up by the grammar as combinators succeed and are
//! never mutated afterwards. `Display` renders a canonical, fully
//! parenthesised form that parses back to the same tree.

use std::collections::BTreeSet;
use std::fmt;

/// Integer arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Integer literal.
    Const(i64),
    /// Named integer variable.
    Var(String),
    /// Addition (`+`).
    Plus(Box<Expr>, Box<Expr>),
    /// Subtraction (`-`). Unary minus is `Minus(Const(0), e)`.
    Minus(Box<Expr>, Box<Expr>),
    /// Multiplication (`*`).
    Times(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a variable reference.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    /// Creates `left + right`.
    pub fn plus(left: Expr, right: Expr) -> Self {
        Expr::Plus(Box::new(left), Box::new(right))
    }

    /// Creates `left - right`.
    pub fn minus(left: Expr, right: Expr) -> Self {
        Expr::Minus(Box::new(left), Box::new(right))
    }

    /// Creates `left * right`.
    pub fn times(left: Expr, right: Expr) -> Self {
        Expr::Times(Box::new(left), Box::new(right))
    }

    /// Unary negation, desugared to `0 - inner`.
    pub fn negate(inner: Expr) -> Self {
        Expr::minus(Expr::Const(0), inner)
    }

    /// Free variable names, sorted.
    pub fn vars(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_vars(&mut out);
        out
    }

    pub(crate) fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(name) => {
                out.insert(name.clone());
            }
            Expr::Plus(l, r) | Expr::Minus(l, r) | Expr::Times(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{value}"),
            Expr::Var(name) => f.write_str(name),
            Expr::Plus(l, r) => write!(f, "({l} + {r})"),
            Expr::Minus(l, r) => write!(f, "({l} - {r})"),
            Expr::Times(l, r) => write!(f, "({l} * {r})"),
        }
    }
}

/// Boolean constraint over integer expressions.
///
/// Equations (`Equal`) only come from the equation list of a program; the
/// `such that` clause produces relations combined with `and`/`or`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// `left = right`.
    Equal(Expr, Expr),
    /// `left < right`.
    LessThan(Expr, Expr),
    /// `left > right`.
    GreaterThan(Expr, Expr),
    /// Conjunction.
    And(Box<Constraint>, Box<Constraint>),
    /// Disjunction.
    Or(Box<Constraint>, Box<Constraint>),
}

impl Constraint {
    /// Creates `left and right`.
    pub fn and(left: Constraint, right: Constraint) -> Self {
        Constraint::And(Box::new(left), Box::new(right))
    }

    /// Creates `left or right`.
    pub fn or(left: Constraint, right: Constraint) -> Self {
        Constraint::Or(Box::new(left), Box::new(right))
    }

    /// Free variable names, sorted.
    pub fn vars(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_vars(&mut out);
        out
    }

    pub(crate) fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Constraint::Equal(l, r) | Constraint::LessThan(l, r) | Constraint::GreaterThan(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
            Constraint::And(l, r) | Constraint::Or(l, r) => {
                l.collect_vars(out);
                r.collect_vars(out);
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Equal(l, r) => write!(f, "{l} = {r}"),
            Constraint::LessThan(l, r) => write!(f, "{l} < {r}"),
            Constraint::GreaterThan(l, r) => write!(f, "{l} > {r}"),
            Constraint::And(l, r) => write!(f, "({l} and {r})"),
            Constraint::Or(l, r) => write!(f, "({l} or {r})"),
        }
    }
}

/// Full parsed program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Equations in source order; every entry is [`Constraint::Equal`].
    pub equations: Vec<Constraint>,
    /// `such that` constraints in source order (empty when absent).
    pub constraints: Vec<Constraint>,
}

impl Program {
    /// Free variable names across every clause, sorted.
    pub fn vars(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for clause in self.clauses() {
            clause.collect_vars(&mut out);
        }
        out
    }

    /// Equations followed by constraints, in source order.
    pub fn clauses(&self) -> impl Iterator<Item = &Constraint> {
        self.equations.iter().chain(self.constraints.iter())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Solve ")?;
        write_list(f, &self.equations)?;
        if !self.constraints.is_empty() {
            f.write_str(" such that ")?;
            write_list(f, &self.constraints)?;
        }
        f.write_str(".")
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, clauses: &[Constraint]) -> fmt::Result {
    for (idx, clause) in clauses.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{clause}")?;
    }
    Ok(())
}
