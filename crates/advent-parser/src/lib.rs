//! # Advent Parser
//!
//! Parsers that turn raw puzzle input text into the domain types of
//! [`advent_core`]. Each input format gets its own `parse_*` function.
//!
//! Parsing does not stop at the first bad line: every problem found in a
//! file is collected and returned together as a [`ParseError`] whose
//! [`Diagnostic`]s carry error codes, labelled spans and help text.
//!
//! ## Usage
//!
//! ```
//! # use advent_parser::{parse_rotations, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let rotations = parse_rotations("L68\nL30\nR48\n")?;
//!     assert_eq!(rotations.len(), 3);
//!     Ok(())
//! }
//! ```

mod banks;
pub mod error;
mod id_ranges;
mod inventory;
mod junction_boxes;
mod lexer;
mod manifold;
mod paper_grid;
mod red_tiles;
mod rotations;
mod source;
mod span;
mod worksheet;

pub use banks::parse_battery_banks;
pub use error::{Diagnostic, ParseError};
pub use id_ranges::parse_id_ranges;
pub use inventory::parse_inventory;
pub use junction_boxes::parse_junction_boxes;
pub use manifold::parse_manifold;
pub use paper_grid::parse_paper_grid;
pub use red_tiles::parse_red_tiles;
pub use rotations::parse_rotations;
pub use span::Span;
pub use worksheet::parse_worksheet;
