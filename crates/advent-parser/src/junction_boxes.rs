//! Junction box positions: one `x,y,z` triple per line.

use std::collections::HashMap;

use advent_core::playground::JunctionBox;
use log::debug;
use winnow::Parser;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, number, parse_fragment},
    source::{empty_input, lines},
    span::Span,
};

const COMMA: Expected = Expected::new(ErrorCode::E001, "expected `,` between coordinates")
    .with_help("junction boxes are written `x,y,z`, like `162,817,812`");

fn junction_box(input: &mut Input<'_>) -> IResult<JunctionBox> {
    let x = number.parse_next(input)?;
    ','.context(COMMA).parse_next(input)?;
    let y = number.parse_next(input)?;
    ','.context(COMMA).parse_next(input)?;
    let z = number.parse_next(input)?;
    Ok(JunctionBox::new(x, y, z))
}

/// Parse the junction box positions. Blank lines are skipped.
///
/// A box listed twice is kept and reported as a warning.
pub fn parse_junction_boxes(source: &str) -> Result<Vec<JunctionBox>, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut boxes = Vec::new();
    let mut seen: HashMap<JunctionBox, Span> = HashMap::new();

    for line in lines(source).filter(|line| !line.is_blank()) {
        let line = line.trimmed();
        match parse_fragment(line, junction_box) {
            Ok(junction_box) => {
                if let Some(first) = seen.get(&junction_box) {
                    diagnostics.emit(
                        Diagnostic::warning(format!(
                            "junction box `{junction_box}` is listed more than once"
                        ))
                        .with_code(ErrorCode::E204)
                        .with_label(line.span(), "listed again here")
                        .with_secondary_label(*first, "first listed here"),
                    );
                } else {
                    seen.insert(junction_box, line.span());
                }
                boxes.push(junction_box);
            }
            Err(diag) => diagnostics.emit(diag),
        }
    }
    if boxes.is_empty() && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("junction boxes"));
    }

    debug!(boxes = boxes.len(); "Parsed junction boxes");
    diagnostics.finish_with(boxes)
}
