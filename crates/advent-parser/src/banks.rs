//! Battery banks: one string of joltage digits per line.

use advent_core::lobby::BatteryBank;
use log::debug;
use winnow::{Parser, combinator::repeat, token::one_of};

use crate::{
    error::{DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, line_end, parse_fragment},
    source::{empty_input, lines},
};

const JOLTAGE: Expected = Expected::new(ErrorCode::E001, "expected a joltage digit")
    .with_help("battery joltages are the digits `1` to `9`");

fn joltage(input: &mut Input<'_>) -> IResult<u8> {
    one_of('1'..='9')
        .map(|c: char| c as u8 - b'0')
        .context(JOLTAGE)
        .parse_next(input)
}

fn bank(input: &mut Input<'_>) -> IResult<BatteryBank> {
    let joltages: Vec<u8> = repeat(1.., joltage).parse_next(input)?;
    line_end(input, JOLTAGE)?;
    Ok(BatteryBank::new(joltages))
}

/// Parse the battery banks of the lobby. Blank lines are skipped.
pub fn parse_battery_banks(source: &str) -> Result<Vec<BatteryBank>, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut banks = Vec::new();

    for line in lines(source).filter(|line| !line.is_blank()) {
        match parse_fragment(line.trimmed(), bank) {
            Ok(bank) => banks.push(bank),
            Err(diag) => diagnostics.emit(diag),
        }
    }
    if banks.is_empty() && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("battery banks"));
    }

    debug!(banks = banks.len(); "Parsed battery banks");
    diagnostics.finish_with(banks)
}
