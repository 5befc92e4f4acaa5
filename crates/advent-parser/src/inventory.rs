//! Ingredient database: fresh ID ranges, a blank line, then available IDs.

use advent_core::cafeteria::{FreshRange, Inventory};
use log::debug;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{check_range, number, number_range, parse_fragment},
    source::{empty_input, lines},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    FreshRanges,
    AvailableIds,
}

/// Parse the cafeteria database.
///
/// Without a blank separator line every line is read as a fresh range and
/// no IDs are available.
pub fn parse_inventory(source: &str) -> Result<Inventory, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut fresh = Vec::new();
    let mut available = Vec::new();
    let mut section = Section::FreshRanges;
    let mut seen_data = false;
    let mut after_gap = false;

    for line in lines(source) {
        if line.is_blank() {
            after_gap = seen_data;
            continue;
        }
        if after_gap {
            after_gap = false;
            if section == Section::AvailableIds {
                diagnostics.emit(
                    Diagnostic::error("unexpected third section")
                        .with_code(ErrorCode::E103)
                        .with_label(line.span(), ErrorCode::E103.description())
                        .with_help("fresh ranges come first, then a blank line and the IDs"),
                );
                break;
            }
            section = Section::AvailableIds;
        }
        seen_data = true;

        let line = line.trimmed();
        match section {
            Section::FreshRanges => match parse_fragment(line, number_range)
                .and_then(|(start, end)| check_range(start, end, line.span()))
            {
                Ok((start, end)) => fresh.push(FreshRange::new(start, end)),
                Err(diag) => diagnostics.emit(diag),
            },
            Section::AvailableIds => match parse_fragment(line, number) {
                Ok(id) => available.push(id),
                Err(diag) => diagnostics.emit(diag),
            },
        }
    }
    if !seen_data {
        diagnostics.emit(empty_input("fresh ID ranges"));
    }

    debug!(fresh = fresh.len(), available = available.len(); "Parsed inventory");
    diagnostics.finish_with(Inventory::new(fresh, available))
}
