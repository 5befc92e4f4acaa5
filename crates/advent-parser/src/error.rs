//! Error and diagnostic system for puzzle input parsing.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! Every problem found in an input file becomes a [`Diagnostic`]. Parsers
//! keep going after a bad line so that one run reports every bad line;
//! the diagnostics are then returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use advent_parser::error::{Diagnostic, ErrorCode};
//! # use advent_parser::Span;
//!
//! let diag = Diagnostic::error("range start `20` is greater than its end `10`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(0..5), "reversed range")
//!     .with_help("write the smaller ID first: `10-20`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
