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

//! Command-line arguments for the `solve-dsl` binary.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "solve-dsl",
    version,
    about = "Parse `Solve ... such that ...` programs and hand them to a solver."
)]
pub struct CliArgs {
    /// Raise log verbosity (`-v` debug, `-vv` trace). Overrides `RUST_LOG`.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a program and print it in canonical form.
    Parse {
        /// Program source file.
        file: PathBuf,
    },
    /// Print an SMT-LIB 2 script for a program.
    Smt {
        /// Program source file.
        file: PathBuf,
    },
    /// Evaluate every clause of a program under an assignment.
    Check {
        /// Program source file.
        file: PathBuf,
        /// Variable assignment, `name=value`. Repeatable.
        #[arg(short, long = "assign", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        assign: Vec<(String, i64)>,
    },
}

impl Command {
    /// The program file every subcommand reads.
    pub fn file(&self) -> &Path {
        match self {
            Command::Parse { file } | Command::Smt { file } | Command::Check { file, .. } => file,
        }
    }
}

/// Parses one `name=value` pair.
fn parse_assignment(raw: &str) -> Result<(String, i64), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got '{raw}'"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|err| format!("invalid integer in '{raw}': {err}"))?;
    Ok((name.to_string(), value))
}
