//! Tachyon manifold diagram: `S` marks the beam source, `^` a splitter.

use std::collections::BTreeSet;

use advent_core::laboratory::TachyonManifold;
use log::debug;
use winnow::{Parser, combinator::repeat, token::one_of};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, line_end, parse_fragment},
    source::{Line, empty_input, lines, ragged_row},
    span::Span,
};

const CELL: Expected = Expected::new(ErrorCode::E001, "expected `.`, `^` or `S`")
    .with_help("`S` is the beam source, `^` a splitter and `.` empty space");

fn row(input: &mut Input<'_>) -> IResult<Vec<char>> {
    let cells = repeat(1.., one_of(['.', '^', 'S']).context(CELL)).parse_next(input)?;
    line_end(input, CELL)?;
    Ok(cells)
}

/// Parse the laboratory manifold diagram. Blank lines are skipped.
///
/// Splitters on or above the source row are never reached and are dropped.
pub fn parse_manifold(source: &str) -> Result<TachyonManifold, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut rows: Vec<Vec<char>> = Vec::new();
    let mut first: Option<Line<'_>> = None;
    // (row, column, span) of every `S`
    let mut sources: Vec<(usize, usize, Span)> = Vec::new();

    for line in lines(source).filter(|line| !line.is_blank()) {
        let line = line.trimmed();
        let cells = match parse_fragment(line, row) {
            Ok(cells) => cells,
            Err(diag) => {
                diagnostics.emit(diag);
                continue;
            }
        };
        let first = *first.get_or_insert(line);
        let width = first.text().chars().count();
        if cells.len() != width {
            diagnostics.emit(ragged_row(line, first, width));
            continue;
        }
        for (col, _) in cells.iter().enumerate().filter(|(_, cell)| **cell == 'S') {
            sources.push((rows.len(), col, line.span_at(col..col + 1)));
        }
        rows.push(cells);
    }

    let Some(first) = first else {
        if !diagnostics.has_errors() {
            diagnostics.emit(empty_input("manifold rows"));
        }
        return Err(diagnostics.into_error());
    };

    match sources[..] {
        [] => diagnostics.emit(
            Diagnostic::error("manifold has no beam source")
                .with_code(ErrorCode::E201)
                .with_label(first.span(), "expected an `S` in the manifold")
                .with_help("mark where the beam enters with `S`"),
        ),
        [(_, _, original), (_, _, duplicate), ..] => diagnostics.emit(
            Diagnostic::error("manifold has more than one beam source")
                .with_code(ErrorCode::E202)
                .with_label(duplicate, "second source")
                .with_secondary_label(original, "first source")
                .with_help("a manifold has exactly one `S`"),
        ),
        [_] => {}
    }
    if diagnostics.has_errors() {
        return Err(diagnostics.into_error());
    }

    let width = first.text().chars().count();
    let (source_row, source_col) = sources
        .first()
        .map(|(row, col, _)| (*row, *col))
        .unwrap_or_default();
    let splitters: Vec<BTreeSet<usize>> = rows
        .iter()
        .skip(source_row + 1)
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == '^')
                .map(|(col, _)| col)
                .collect()
        })
        .collect();

    debug!(width, depth = splitters.len(), source = source_col; "Parsed manifold");
    diagnostics.finish_with(TachyonManifold::new(width, source_col, splitters))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifold() {
        let manifold = parse_manifold("..S..\n.....\n..^..\n.^.^.\n").unwrap();

        assert_eq!(manifold.width(), 5);
        assert_eq!(manifold.source(), 2);

        let report = manifold.fire().unwrap();
        assert_eq!(report.splits(), 3);
        assert_eq!(report.timelines(), 4);
    }

    #[test]
    fn test_missing_source() {
        let err = parse_manifold("...\n.^.\n").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E201));
        assert_eq!(diag.labels()[0].span(), Span::new(0..3));
    }

    #[test]
    fn test_duplicate_source() {
        let err = parse_manifold(".S.\n.^S\n").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E202));
        assert_eq!(diag.labels()[0].span(), Span::new(6..7));
        assert_eq!(diag.labels()[1].span(), Span::new(1..2));
    }

    #[test]
    fn test_ragged_manifold() {
        let err = parse_manifold(".S.\n..\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_unknown_cell() {
        let err = parse_manifold(".S.\n.|.\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].message(), "expected `.`, `^` or `S`");
    }
}
