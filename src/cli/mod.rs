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

//! Command dispatch for the `solve-dsl` binary.
//!
//! File I/O and output formatting live here so the library core stays pure.
//!
//! Parser recursion depth grows with input length, so every command runs on
//! a worker thread whose stack is sized from the source, and sources above
//! [`MAX_SOURCE_BYTES`] are refused.

pub mod args;

use crate::compiler::SmtLib;
use crate::diagnostics::SyntaxError;
use crate::model::{Env, EvalError};
use crate::parser::parse_program;
use crate::Program;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::{fs, panic, thread};
use thiserror::Error;
use tracing::{debug, info};

use self::args::{CliArgs, Command};

/// Largest program source the CLI accepts.
pub const MAX_SOURCE_BYTES: usize = 128 * 1024;

const BASE_STACK_BYTES: usize = 8 * 1024 * 1024;
const STACK_BYTES_PER_SOURCE_BYTE: usize = 8 * 1024;

/// Failures reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The source file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The source file is larger than [`MAX_SOURCE_BYTES`].
    #[error("'{path}' is {bytes} bytes; programs are limited to {limit} bytes")]
    TooLarge {
        /// Path as given on the command line.
        path: String,
        /// Size of the file.
        bytes: usize,
        /// The accepted maximum.
        limit: usize,
    },
    /// The source file is not a valid program.
    #[error("{path}: {source}")]
    Syntax {
        /// Path as given on the command line.
        path: String,
        /// Parse failure.
        #[source]
        source: SyntaxError,
    },
    /// Evaluation under the given assignment failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The worker thread could not be started.
    #[error("failed to start the parser thread: {0}")]
    Worker(#[source] io::Error),
    /// Writing the output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs one command, writing results to `out`.
///
/// Returns `Ok(false)` when `check` finds a clause that does not hold.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<bool, CliError> {
    let path = args.command.file();
    let label = path.display().to_string();
    let source = read_source(path, &label)?;
    let (report, all_hold) =
        with_parser_stack(source.len(), || execute(&args.command, &label, &source))?;
    out.write_all(report.as_bytes())?;
    Ok(all_hold)
}

/// Parses `source` and renders the command's output.
fn execute(command: &Command, label: &str, source: &str) -> Result<(String, bool), CliError> {
    let program = parse_program(source).map_err(|source| CliError::Syntax {
        path: label.to_string(),
        source,
    })?;
    let mut report = String::new();
    let all_hold = match command {
        Command::Parse { .. } => {
            let _ = writeln!(report, "{program}");
            true
        }
        Command::Smt { .. } => {
            report = smt_script(&program);
            true
        }
        Command::Check { assign, .. } => {
            let env: Env = assign.iter().cloned().collect();
            let checks = program.check(&env)?;
            let mut all_hold = true;
            for check in &checks {
                let status = if check.holds { "holds" } else { "fails" };
                let _ = writeln!(report, "{status}: {}", check.clause);
                all_hold &= check.holds;
            }
            info!(clauses = checks.len(), all_hold, "check finished");
            all_hold
        }
    };
    Ok((report, all_hold))
}

fn smt_script(program: &Program) -> String {
    let mut smt = SmtLib::new();
    program.lower_into(&mut smt);
    smt.script()
}

/// Reads a program file, refusing anything above [`MAX_SOURCE_BYTES`].
fn read_source(path: &Path, label: &str) -> Result<String, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: label.to_string(),
        source,
    })?;
    if source.len() > MAX_SOURCE_BYTES {
        return Err(CliError::TooLarge {
            path: label.to_string(),
            bytes: source.len(),
            limit: MAX_SOURCE_BYTES,
        });
    }
    Ok(source)
}

/// Runs `task` on a thread with stack room for a source of `source_len` bytes.
fn with_parser_stack<T, F>(source_len: usize, task: F) -> Result<T, CliError>
where
    T: Send,
    F: FnOnce() -> Result<T, CliError> + Send,
{
    let stack_size = source_len
        .saturating_mul(STACK_BYTES_PER_SOURCE_BYTE)
        .saturating_add(BASE_STACK_BYTES);
    debug!(source_len, stack_size, "starting parser thread");
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("solve-dsl-parser".to_string())
            .stack_size(stack_size)
            .spawn_scoped(scope, task)
            .map_err(CliError::Worker)?;
        handle
            .join()
            .unwrap_or_else(|payload| panic::resume_unwind(payload))
    })
}
