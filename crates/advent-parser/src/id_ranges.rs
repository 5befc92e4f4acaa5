//! Product ID ranges: comma separated `start-end` pairs.
//!
//! Whitespace and line breaks around entries are ignored and a trailing
//! comma is allowed.

use advent_core::gift_shop::IdRange;
use log::debug;

use crate::{
    error::{DiagnosticCollector, ParseError},
    lexer::{check_range, number_range, parse_fragment},
    source::{Line, empty_input},
};

/// Split `source` on commas, keeping each entry's offset.
fn entries(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0;
    source.split(',').map(move |text| {
        let entry = Line::new(start, text).trimmed();
        start += text.len() + 1;
        entry
    })
}

/// Parse the product ID ranges of the gift shop database.
pub fn parse_id_ranges(source: &str) -> Result<Vec<IdRange>, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut ranges = Vec::new();

    for entry in entries(source).filter(|entry| !entry.is_blank()) {
        let parsed = parse_fragment(entry, number_range)
            .and_then(|(start, end)| check_range(start, end, entry.span()));
        match parsed {
            Ok((start, end)) => ranges.push(IdRange::new(start, end)),
            Err(diag) => diagnostics.emit(diag),
        }
    }
    if ranges.is_empty() && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("ID ranges"));
    }

    debug!(ranges = ranges.len(); "Parsed ID ranges");
    diagnostics.finish_with(ranges)
}
