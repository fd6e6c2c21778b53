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

//! SMT-LIB 2 text backend.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use super::Backend;

/// Symbols that clash with SMT-LIB reserved words or core/integer functions.
const RESERVED: &[&str] = &[
    "abs", "and", "as", "assert", "distinct", "div", "exists", "false", "forall", "ite", "let",
    "match", "mod", "not", "or", "par", "true", "xor",
];

/// Builds an SMT-LIB 2 script over integer variables.
///
/// Every variable seen while lowering is declared as `Int`, in sorted order.
#[derive(Debug, Clone, Default)]
pub struct SmtLib {
    declared: BTreeSet<String>,
    assertions: Vec<String>,
}

impl SmtLib {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders declarations, assertions, `(check-sat)` and `(get-model)`.
    pub fn script(&self) -> String {
        let mut out = String::new();
        for name in &self.declared {
            let _ = writeln!(out, "(declare-const {} Int)", escape_symbol(name));
        }
        for assertion in &self.assertions {
            let _ = writeln!(out, "{assertion}");
        }
        out.push_str("(check-sat)\n(get-model)\n");
        out
    }
}

/// Quotes `name` when it would be read as a reserved symbol.
pub fn escape_symbol(name: &str) -> String {
    if RESERVED.contains(&name) {
        format!("|{name}|")
    } else {
        name.to_string()
    }
}

impl Backend for SmtLib {
    type Term = String;
    type Formula = String;

    fn int(&mut self, value: i64) -> String {
        // SMT-LIB has no negative numerals.
        if value < 0 {
            format!("(- {})", value.unsigned_abs())
        } else {
            value.to_string()
        }
    }

    fn var(&mut self, name: &str) -> String {
        self.declared.insert(name.to_string());
        escape_symbol(name)
    }

    fn add(&mut self, left: String, right: String) -> String {
        format!("(+ {left} {right})")
    }

    fn sub(&mut self, left: String, right: String) -> String {
        format!("(- {left} {right})")
    }

    fn mul(&mut self, left: String, right: String) -> String {
        format!("(* {left} {right})")
    }

    fn eq(&mut self, left: String, right: String) -> String {
        format!("(= {left} {right})")
    }

    fn lt(&mut self, left: String, right: String) -> String {
        format!("(< {left} {right})")
    }

    fn gt(&mut self, left: String, right: String) -> String {
        format!("(> {left} {right})")
    }

    fn and(&mut self, left: String, right: String) -> String {
        format!("(and {left} {right})")
    }

    fn or(&mut self, left: String, right: String) -> String {
        format!("(or {left} {right})")
    }

    fn assert(&mut self, clause: String) {
        self.assertions.push(format!("(assert {clause})"));
    }
}
