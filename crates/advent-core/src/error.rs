//! Errors raised while solving a puzzle whose input parsed successfully.

use thiserror::Error;

/// Input was well formed but cannot produce an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("a dial of size {size} cannot start at position {start}")]
    InvalidDial { size: u64, start: u64 },

    #[error("battery bank {bank} holds {available} batteries but {required} must be turned on")]
    BankTooSmall {
        bank: usize,
        available: usize,
        required: usize,
    },

    #[error("grid row {row} is {found} cells wide, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("problem {problem} needs exactly one operator, found {found}")]
    BadOperator { problem: usize, found: usize },

    #[error("need at least {required} junction boxes, found {available}")]
    NotEnoughJunctionBoxes { required: usize, available: usize },

    #[error("only {available} circuits exist, cannot take the {requested} largest")]
    NotEnoughCircuits { requested: usize, available: usize },

    #[error("need at least {required} red tiles, found {available}")]
    NotEnoughTiles { required: usize, available: usize },

    #[error("red tiles {from} and {to} share neither a row nor a column")]
    DiagonalEdge { from: usize, to: usize },

    #[error("answer does not fit in 64 bits")]
    Overflow,
}
