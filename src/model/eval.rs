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

//! Direct evaluation of expressions and constraints.

use crate::ast::{Constraint, Expr};

use super::{Env, EvalError};

impl Expr {
    /// Evaluates this expression with checked `i64` arithmetic.
    pub fn eval(&self, env: &Env) -> Result<i64, EvalError> {
        match self {
            Expr::Const(value) => Ok(*value),
            Expr::Var(name) => env
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Plus(l, r) => self.apply(l, r, env, i64::checked_add),
            Expr::Minus(l, r) => self.apply(l, r, env, i64::checked_sub),
            Expr::Times(l, r) => self.apply(l, r, env, i64::checked_mul),
        }
    }

    fn apply(
        &self,
        left: &Expr,
        right: &Expr,
        env: &Env,
        op: fn(i64, i64) -> Option<i64>,
    ) -> Result<i64, EvalError> {
        let (left, right) = (left.eval(env)?, right.eval(env)?);
        op(left, right).ok_or_else(|| EvalError::Overflow(self.to_string()))
    }
}

impl Constraint {
    /// Evaluates this constraint. `and`/`or` short-circuit left to right.
    pub fn holds(&self, env: &Env) -> Result<bool, EvalError> {
        match self {
            Constraint::Equal(l, r) => Ok(l.eval(env)? == r.eval(env)?),
            Constraint::LessThan(l, r) => Ok(l.eval(env)? < r.eval(env)?),
            Constraint::GreaterThan(l, r) => Ok(l.eval(env)? > r.eval(env)?),
            Constraint::And(l, r) => Ok(l.holds(env)? && r.holds(env)?),
            Constraint::Or(l, r) => Ok(l.holds(env)? || r.holds(env)?),
        }
    }
}
