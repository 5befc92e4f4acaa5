//! Core types and solvers for the Advent puzzle workspace.
//!
//! Each puzzle day lives in its own module holding the domain model the
//! input is parsed into and the algorithms answering both parts. Parsing
//! text into these types is the job of the `advent-parser` crate.

pub mod cafeteria;
pub mod compactor;
pub mod dial;
pub mod gift_shop;
pub mod laboratory;
pub mod lobby;
pub mod playground;
pub mod printing;
pub mod puzzle;
pub mod theater;

mod error;

pub use error::SolveError;
