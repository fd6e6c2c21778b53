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

//! Syntax errors surfaced at the crate boundary.
//!
//! Inside the grammar a failed parse is just `None`. Only the top-level entry
//! points turn that into a [`SyntaxError`]. No line/column is computed: the
//! combinator engine carries no positions.

use thiserror::Error;

const PREVIEW_CHARS: usize = 24;

/// Input rejected by the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The top-level parser failed.
    #[error("input does not match the language")]
    NoMatch,
    /// The top-level parser succeeded but left non-whitespace input behind.
    #[error("input does not match the language: unexpected trailing input `{}`", preview(.rest))]
    TrailingInput {
        /// Unconsumed input, leading whitespace stripped.
        rest: String,
    },
}

/// Shortens long trailing input for display.
fn preview(rest: &str) -> String {
    if rest.chars().count() <= PREVIEW_CHARS {
        return rest.to_string();
    }
    let head: String = rest.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_input_preview_is_truncated() {
        let err = SyntaxError::TrailingInput {
            rest: "x".repeat(40),
        };
        let text = err.to_string();
        assert!(text.starts_with("input does not match the language"));
        assert!(text.ends_with("...`"));
        assert!(text.contains(&"x".repeat(PREVIEW_CHARS)));
        assert!(!text.contains(&"x".repeat(PREVIEW_CHARS + 1)));
    }

    #[test]
    fn short_trailing_input_is_shown_verbatim() {
        let err = SyntaxError::TrailingInput {
            rest: "= 1.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "input does not match the language: unexpected trailing input `= 1.`"
        );
    }
}
