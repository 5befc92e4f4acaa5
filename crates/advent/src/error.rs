//! Error types for puzzle runs.
//!
//! This module provides the main error type [`AdventError`] which wraps
//! everything that can go wrong between reading an input file and printing
//! an answer.

use std::io;

use thiserror::Error;

use advent_core::{
    SolveError,
    puzzle::{Day, Part},
};
use advent_parser::ParseError;

/// The main error type for puzzle runs.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the input text next to the diagnostics so the
/// labelled spans can be rendered as source snippets.
#[derive(Debug, Error)]
pub enum AdventError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{day} {part}: {source}")]
    Solve {
        day: Day,
        part: Part,
        #[source]
        source: SolveError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdventError {
    /// Create a new `Parse` error with the associated input text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
