//! Paper roll grid: rows of `@` (roll) and `.` (empty floor).

use advent_core::{SolveError, printing::PaperRollGrid};
use log::debug;
use winnow::{Parser, combinator::repeat, token::one_of};

use crate::{
    error::{DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, line_end, parse_fragment},
    source::{Line, empty_input, lines, ragged_row},
};

const CELL: Expected = Expected::new(ErrorCode::E001, "expected `@` or `.`")
    .with_help("`@` marks a roll of paper and `.` an empty spot");

fn row(input: &mut Input<'_>) -> IResult<Vec<bool>> {
    let cells = repeat(1.., one_of(['@', '.']).map(|c| c == '@').context(CELL))
        .parse_next(input)?;
    line_end(input, CELL)?;
    Ok(cells)
}

/// Parse the printing department floor plan. Blank lines are skipped.
pub fn parse_paper_grid(source: &str) -> Result<PaperRollGrid, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut grid = PaperRollGrid::new();
    let mut first: Option<Line<'_>> = None;

    for line in lines(source).filter(|line| !line.is_blank()) {
        let line = line.trimmed();
        let cells = match parse_fragment(line, row) {
            Ok(cells) => cells,
            Err(diag) => {
                diagnostics.emit(diag);
                continue;
            }
        };
        if let Err(SolveError::RaggedGrid { expected, .. }) = grid.push_row(cells) {
            let first = first.unwrap_or(line);
            diagnostics.emit(ragged_row(line, first, expected));
        } else {
            first.get_or_insert(line);
        }
    }
    if grid.height() == 0 && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("grid rows"));
    }

    debug!(height = grid.height(), width = grid.width(); "Parsed paper roll grid");
    diagnostics.finish_with(grid)
}
