//! Cephalopod math worksheet: rows of numbers over one row of operators.
//!
//! Column positions matter here, so lines are never trimmed.

use advent_core::compactor::Worksheet;
use log::debug;
use winnow::{Parser, token::take_while};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, line_end, parse_fragment},
    source::{Line, empty_input, lines},
};

const NUMBER_ROW: Expected = Expected::new(ErrorCode::E001, "expected a digit or a space")
    .with_help("worksheet rows above the operators hold only digits and spaces");

const OPERATOR_ROW: Expected = Expected::new(ErrorCode::E001, "expected `+`, `*` or a space")
    .with_help("the last worksheet row holds one `+` or `*` per problem");

fn number_row(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., |c: char| c.is_ascii_digit() || c == ' ')
        .void()
        .parse_next(input)?;
    line_end(input, NUMBER_ROW)
}

fn operator_row(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., [' ', '+', '*']).void().parse_next(input)?;
    line_end(input, OPERATOR_ROW)
}

fn missing_operators(line: Line<'_>) -> Diagnostic {
    Diagnostic::error("worksheet has no operator row")
        .with_code(ErrorCode::E102)
        .with_label(line.span(), "expected `+` and `*` operators on this line")
        .with_help("the last worksheet row holds one `+` or `*` per problem")
}

/// Parse the trash compactor math worksheet.
pub fn parse_worksheet(source: &str) -> Result<Worksheet, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut rows: Vec<Line<'_>> = lines(source).collect();
    while rows.last().is_some_and(Line::is_blank) {
        rows.pop();
    }

    let Some(operators) = rows.pop() else {
        return Err(empty_input("worksheet rows").into());
    };

    for row in &rows {
        if let Err(diag) = parse_fragment(*row, number_row) {
            diagnostics.emit(diag);
        }
    }
    if operators.text().chars().any(|c| c.is_ascii_digit()) {
        diagnostics.emit(missing_operators(operators));
    } else if let Err(diag) = parse_fragment(operators, operator_row) {
        diagnostics.emit(diag);
    } else if !operators.text().contains(['+', '*']) {
        diagnostics.emit(missing_operators(operators));
    } else if rows.iter().all(Line::is_blank) {
        diagnostics.emit(empty_input("number rows"));
    }

    let number_rows: Vec<&str> = rows.iter().map(Line::text).collect();
    debug!(rows = number_rows.len(); "Parsed worksheet");
    diagnostics.finish_with(Worksheet::new(&number_rows, operators.text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    #[test]
    fn test_parse_worksheet_keeps_alignment() {
        let source = "123 328\n 45 64 \n*   +  \n\n";
        let worksheet = parse_worksheet(source).unwrap();

        assert_eq!(
            worksheet,
            Worksheet::new(&["123 328", " 45 64 "], "*   +  ")
        );
    }

    #[test]
    fn test_missing_operator_row() {
        let err = parse_worksheet("1 2\n3 4\n").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.code(), Some(ErrorCode::E102));
        assert_eq!(diag.labels()[0].span(), Span::new(4..7));
    }

    #[test]
    fn test_blank_operator_row() {
        let err = parse_worksheet("1 2\n   \n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_bad_character_in_number_row() {
        let err = parse_worksheet("1 x\n* +\n").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(diag.message(), "expected a digit or a space");
        assert_eq!(diag.labels()[0].span(), Span::new(2..3));
    }

    #[test]
    fn test_bad_operator() {
        let err = parse_worksheet("1 2\n* -\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].message(), "expected `+`, `*` or a space");
    }

    #[test]
    fn test_only_operators() {
        let err = parse_worksheet("* +\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_worksheet("\n").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }
}
