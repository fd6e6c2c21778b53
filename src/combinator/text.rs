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

//! Character-level parsers, trivia handling and tokens.
//!
//! Everything here is derived from the primitives in the parent module.

use super::{
    fail, item, lazy, map, not_followed_by, optional, or_else, pure, sequence, terminated, Parser,
};

/// Consumes one character satisfying `predicate`.
pub fn satisfy<P>(predicate: P) -> Parser<char>
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    sequence(item(), move |c| if predicate(c) { pure(c) } else { fail() })
}

/// Consumes exactly the character `expected`.
pub fn char(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Consumes one ASCII decimal digit.
pub fn digit() -> Parser<char> {
    satisfy(|c| c.is_ascii_digit())
}

/// One or more characters, accumulated into a `String`.
pub fn many1_chars(parser: Parser<char>) -> Parser<String> {
    let rest = many0_chars(parser.clone());
    sequence(parser, move |first| {
        map(rest.clone(), move |tail: String| {
            let mut text = String::with_capacity(first.len_utf8() + tail.len());
            text.push(first);
            text.push_str(&tail);
            text
        })
    })
}

/// Zero or more characters, accumulated into a `String`. Never fails.
pub fn many0_chars(parser: Parser<char>) -> Parser<String> {
    let more = lazy(move || many1_chars(parser.clone()));
    or_else(more, pure(String::new()))
}

/// A maximal run of digits as a non-negative integer.
///
/// Leading zeros are accepted and dropped (`"00089"` is 89). A run that does
/// not fit in an `i64` fails.
pub fn natural() -> Parser<i64> {
    sequence(many1_chars(digit()), |digits| match digits.parse::<i64>() {
        Ok(n) => pure(n),
        Err(_) => fail(),
    })
}

/// A digit run with an optional leading `-`.
///
/// The sign is read together with the digits, so `i64::MIN` is accepted.
pub fn signed_integer() -> Parser<i64> {
    sequence(optional(char('-')), |sign| {
        sequence(many1_chars(digit()), move |digits| {
            let text = match sign {
                Some(_) => format!("-{digits}"),
                None => digits,
            };
            match text.parse::<i64>() {
                Ok(n) => pure(n),
                Err(_) => fail(),
            }
        })
    })
}

/// Skips zero or more whitespace characters, newlines included.
pub fn spaces() -> Parser<()> {
    map(many0_chars(satisfy(|c: char| c.is_whitespace())), |_| ())
}

/// Runs `parser` with surrounding whitespace discarded.
pub fn token<T>(parser: Parser<T>) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    sequence(spaces(), move |_| terminated(parser.clone(), spaces()))
}

/// Matches `literal` character by character.
///
/// The empty literal always succeeds without consuming input.
pub fn string_literal(literal: &str) -> Parser<String> {
    let mut chars = literal.chars();
    let Some(first) = chars.next() else {
        return pure(String::new());
    };
    let rest = string_literal(chars.as_str());
    sequence(char(first), move |c| {
        map(rest.clone(), move |tail: String| {
            let mut text = String::with_capacity(c.len_utf8() + tail.len());
            text.push(c);
            text.push_str(&tail);
            text
        })
    })
}

/// A literal token: `literal` with surrounding whitespace discarded.
pub fn symbol(literal: &str) -> Parser<String> {
    token(string_literal(literal))
}

/// A keyword token: like [`symbol`], but it may not run into an identifier
/// character, so `or` does not match the start of `order`.
pub fn keyword(word: &str) -> Parser<String> {
    token(terminated(
        string_literal(word),
        not_followed_by(satisfy(|c| c.is_ascii_alphanumeric())),
    ))
}

/// A lowercase ASCII letter followed by ASCII letters or digits, as a token.
pub fn identifier() -> Parser<String> {
    let word = sequence(satisfy(|c| c.is_ascii_lowercase()), |first| {
        map(
            many0_chars(satisfy(|c| c.is_ascii_alphanumeric())),
            move |rest: String| format!("{first}{rest}"),
        )
    });
    token(word)
}
