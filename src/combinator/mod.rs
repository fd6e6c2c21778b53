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

//! Backtracking parser combinators over `&str`.
//!
//! The engine has three primitives (`item`, `pure`, `fail`) and two ways to
//! combine parsers:
//! - [`sequence`] runs a parser and feeds its value to a function that picks
//!   the parser for the remaining input ("bind").
//! - [`or_else`] tries a second parser on the *original* input when the first
//!   one fails.
//!
//! A parse either fails (`None`) or yields exactly one value and the
//! unconsumed suffix. There is no error detail and no position tracking.
//!
//! Parsers are immutable values behind an `Arc`, so cloning is cheap and the
//! same parser can be shared across threads.

pub mod text;

use std::sync::Arc;

/// Result of running a parser: the value and the unconsumed input on success.
pub type ParseResult<'i, T> = Option<(T, &'i str)>;

type ParseFn<T> = dyn for<'i> Fn(&'i str) -> ParseResult<'i, T> + Send + Sync;

/// An immutable, composable parser producing values of type `T`.
pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Parser { .. }")
    }
}

impl<T: 'static> Parser<T> {
    /// Wraps a parse function.
    pub fn new<F>(run: F) -> Self
    where
        F: for<'i> Fn(&'i str) -> ParseResult<'i, T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Runs the parser on `input`.
    pub fn parse<'i>(&self, input: &'i str) -> ParseResult<'i, T> {
        (self.run)(input)
    }

    /// Method form of [`sequence`].
    pub fn and_then<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        sequence(self, f)
    }

    /// Method form of [`or_else`].
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        or_else(self, other)
    }

    /// Method form of [`map`].
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: Clone + Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map(self, f)
    }
}

/// Consumes exactly one character. Fails on empty input.
pub fn item() -> Parser<char> {
    Parser::new(|input| {
        let mut chars = input.chars();
        let c = chars.next()?;
        Some((c, chars.as_str()))
    })
}

/// Always succeeds with `value`, consuming nothing.
pub fn pure<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| Some((value.clone(), input)))
}

/// Always fails.
pub fn fail<T: 'static>() -> Parser<T> {
    Parser::new(|_| None)
}

/// Runs `parser`, then runs the parser chosen by `and_then` on the remainder.
///
/// Failure of either step fails the whole sequence.
pub fn sequence<T, U, F>(parser: Parser<T>, and_then: F) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Parser<U> + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let (value, rest) = parser.parse(input)?;
        and_then(value).parse(rest)
    })
}

/// Runs `first`; if it fails, runs `second` on the same input.
pub fn or_else<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    Parser::new(move |input| first.parse(input).or_else(|| second.parse(input)))
}

/// Defers building a parser until it runs.
///
/// Recursive and forward-referencing grammar rules go through `lazy` so that
/// constructing a rule never recurses into itself.
pub fn lazy<T, F>(build: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    Parser::new(move |input| build().parse(input))
}

/// Succeeds without consuming input iff `parser` succeeds here.
pub fn peek<T: 'static>(parser: Parser<T>) -> Parser<()> {
    Parser::new(move |input| parser.parse(input).map(|_| ((), input)))
}

/// Succeeds without consuming input iff `parser` fails here.
pub fn not_followed_by<T: 'static>(parser: Parser<T>) -> Parser<()> {
    Parser::new(move |input| match parser.parse(input) {
        Some(_) => None,
        None => Some(((), input)),
    })
}

/// Transforms the value of a successful parse.
pub fn map<T, U, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    T: 'static,
    U: Clone + Send + Sync + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    sequence(parser, move |value| pure(f(value)))
}

/// Runs `first` then `second`, keeping the value of `second`.
pub fn preceded<A, T>(first: Parser<A>, second: Parser<T>) -> Parser<T>
where
    A: 'static,
    T: 'static,
{
    sequence(first, move |_| second.clone())
}

/// Runs `first` then `second`, keeping the value of `first`.
pub fn terminated<T, B>(first: Parser<T>, second: Parser<B>) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
    B: 'static,
{
    sequence(first, move |value| {
        let value = value.clone();
        map(second.clone(), move |_| value.clone())
    })
}

/// Runs `open`, `inner`, `close` in order, keeping the value of `inner`.
pub fn delimited<A, T, B>(open: Parser<A>, inner: Parser<T>, close: Parser<B>) -> Parser<T>
where
    A: 'static,
    T: Clone + Send + Sync + 'static,
    B: 'static,
{
    preceded(open, terminated(inner, close))
}

/// Zero-or-one occurrence. Never fails.
pub fn optional<T>(parser: Parser<T>) -> Parser<Option<T>>
where
    T: Clone + Send + Sync + 'static,
{
    or_else(map(parser, Some), pure(None))
}

/// One or more `parser` matches, greedy, in source order.
pub fn many1<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    let rest = many0(parser.clone());
    parser.and_then(move |first| rest.clone().map(move |tail: Vec<T>| cons(first.clone(), tail)))
}

/// Zero or more `parser` matches, greedy. Never fails.
pub fn many0<T>(parser: Parser<T>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
{
    lazy(move || many1(parser.clone())).or(pure(Vec::new()))
}

/// One or more `item`s separated by `separator`, in source order.
///
/// A dangling separator is left unconsumed.
pub fn separated_list1<T, S>(item: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: Clone + Send + Sync + 'static,
    S: 'static,
{
    let rest = many0(preceded(separator, item.clone()));
    item.and_then(move |first| rest.clone().map(move |tail: Vec<T>| cons(first.clone(), tail)))
}

fn cons<T>(head: T, tail: Vec<T>) -> Vec<T> {
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head);
    items.extend(tail);
    items
}
