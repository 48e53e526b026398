//! CLI support for bitexp
//!
//! Provides programmatic access to the `bitexp` command so generator tooling can
//! reuse the same checks without spawning a process.

mod check;
mod docs;

pub use check::{CheckOptions, CheckReport, execute_check, format_error, parse_assignment};
pub use docs::{get_doc_topic, get_docs_overview, DocTopic};

use std::io;

use thiserror::Error;

use crate::ExpressionError;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Formula rejected by the lexer or parser
    #[error("{0}")]
    Expression(#[from] ExpressionError),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// `--var`/`--func` value without `=`
    #[error("Invalid mapping '{0}' (expected NAME=TEXT)")]
    InvalidMapping(String),
    /// No formula argument and nothing on stdin
    #[error("No formula provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,
    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'bitexp docs' to see available topics.")]
    UnknownTopic(String),
}
