//! Red tile positions: one `x,y` pair per line, in loop order.

use advent_core::theater::RedTile;
use log::debug;
use winnow::Parser;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{Expected, IResult, Input, number, parse_fragment},
    source::{empty_input, lines},
    span::Span,
};

fn red_tile(input: &mut Input<'_>) -> IResult<RedTile> {
    let x = number.parse_next(input)?;
    ','.context(
        Expected::new(ErrorCode::E001, "expected `,` between coordinates")
            .with_help("red tiles are written `x,y`, like `7,1`"),
    )
    .parse_next(input)?;
    let y = number.parse_next(input)?;
    Ok(RedTile::new(x, y))
}

fn diagonal_run(from: (RedTile, Span), to: (RedTile, Span)) -> Diagnostic {
    Diagnostic::error(format!(
        "red tiles `{}` and `{}` share neither a row nor a column",
        from.0, to.0
    ))
    .with_code(ErrorCode::E203)
    .with_label(to.1, "this tile")
    .with_secondary_label(from.1, "follows this tile")
    .with_help("consecutive red tiles are joined by a straight run of green tiles")
}

/// Parse the red tile loop. Blank lines are skipped.
///
/// Consecutive tiles, including the last and the first, must share a row
/// or a column.
pub fn parse_red_tiles(source: &str) -> Result<Vec<RedTile>, ParseError> {
    let mut diagnostics = DiagnosticCollector::new();
    let mut tiles: Vec<(RedTile, Span)> = Vec::new();

    for line in lines(source).filter(|line| !line.is_blank()) {
        let line = line.trimmed();
        match parse_fragment(line, red_tile) {
            Ok(tile) => tiles.push((tile, line.span())),
            Err(diag) => diagnostics.emit(diag),
        }
    }
    if tiles.is_empty() && !diagnostics.has_errors() {
        diagnostics.emit(empty_input("red tiles"));
    }

    if !diagnostics.has_errors() {
        // with two tiles the closing edge is the same as the opening one
        let edges = if tiles.len() > 2 { tiles.len() } else { tiles.len() - 1 };
        for idx in 0..edges {
            let from = tiles[idx];
            let to = tiles[(idx + 1) % tiles.len()];
            if from.0.x() != to.0.x() && from.0.y() != to.0.y() {
                diagnostics.emit(diagonal_run(from, to));
            }
        }
    }

    debug!(tiles = tiles.len(); "Parsed red tiles");
    diagnostics.finish_with(tiles.into_iter().map(|(tile, _)| tile).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_red_tiles() {
        let tiles = parse_red_tiles("7,1\n11,1\n11,7\n7,7\n").unwrap();

        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles[2], RedTile::new(11, 7));
    }

    #[test]
    fn test_single_tile() {
        assert_eq!(parse_red_tiles("3,4\n").unwrap(), vec![RedTile::new(3, 4)]);
    }

    #[test]
    fn test_diagonal_run() {
        let err = parse_red_tiles("1,1\n5,1\n7,4\n1,4\n").unwrap_err();
        let diag = &err.diagnostics()[0];

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(diag.code(), Some(ErrorCode::E203));
        assert_eq!(diag.message(), "red tiles `5,1` and `7,4` share neither a row nor a column");
        assert_eq!(diag.labels()[0].span(), Span::new(8..11));
        assert_eq!(diag.labels()[1].span(), Span::new(4..7));
    }

    #[test]
    fn test_closing_edge_is_checked() {
        let err = parse_red_tiles("1,1\n5,1\n5,4\n").unwrap_err();
        assert!(err.diagnostics()[0].message().contains("`5,4` and `1,1`"));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_red_tiles("").unwrap_err();
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }
}
