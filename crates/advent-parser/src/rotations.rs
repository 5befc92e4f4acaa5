//! Dial rotations: one `L<clicks>` or `R<clicks>` per line.

use advent_core::dial::{Direction, Rotation};
use log::debug;
use winnow::{Parser, token::one_of};

use crate::{
    error::{DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, number, parse_fragment},
    source::{empty_input, lines},
};

const LINE_FORMAT: &str = "each line is a direction followed by a click count, like `L68`";

fn direction(input: &mut Input<'_>) -> IResult<Direction> {
    one_of(['L', 'R'])
        .map(|c| match c {
            'L' => Direction::Left,
            _ => Direction::Right,
        })
        .context(Expected::new(ErrorCode::E001, "expected `L` or `R`").with_help(LINE_FORMAT))
        .parse_next(input)
}

fn rotation(input: &mut Input<'_>) -> IResult<Rotation> {
    let direction = direction.parse_next(input)?;
    let clicks = number.parse_next(input)?;
    Ok(Rotation::new(direction, clicks))
}

/// Parse the rotation sequence for the dial. Blank lines are skipped.
pub fn parse_rotations(source: &str) -> Result<Vec<Rotation>, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut rotations = Vec::new();

    for line in lines(source).filter(|line| !line.is_blank()) {
        match parse_fragment(line.trimmed(), rotation) {
            Ok(rotation) => rotations.push(rotation),
            Err(diag) => diagnostics.emit(diag),
        }
    }
    if rotations.is_empty() && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("rotations"));
    }

    debug!(rotations = rotations.len(); "Parsed rotations");
    diagnostics.finish_with(rotations)
}
