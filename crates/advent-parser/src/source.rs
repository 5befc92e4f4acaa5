//! Line splitting with byte offsets into the original input.

use std::ops::Range;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// One line of puzzle input, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    start: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    pub(crate) fn new(start: usize, text: &'a str) -> Self {
        Self { start, text }
    }

    /// Byte offset of the first character in the whole input.
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The line with surrounding whitespace removed.
    pub(crate) fn trimmed(&self) -> Self {
        let leading = self.text.len() - self.text.trim_start().len();
        Self::new(self.start + leading, self.text.trim())
    }

    /// Span of the whole line.
    pub(crate) fn span(&self) -> Span {
        Span::new(self.start..self.start + self.text.len())
    }

    /// Span of a byte range relative to the start of the line.
    pub(crate) fn span_at(&self, range: Range<usize>) -> Span {
        Span::new(self.start + range.start..self.start + range.end)
    }
}

/// Split `source` into lines, tracking where each one starts.
///
/// Both `\n` and `\r\n` terminators are accepted.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0;
    source.split_inclusive('\n').map(move |raw| {
        let line_start = start;
        start += raw.len();
        let text = raw.strip_suffix('\n').unwrap_or(raw);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Line::new(line_start, text)
    })
}

/// Diagnostic for an input that holds nothing to parse.
pub(crate) fn empty_input(what: &str) -> Diagnostic {
    Diagnostic::error(format!("input has no {what}"))
        .with_code(ErrorCode::E100)
        .with_label(Span::new(0..0), ErrorCode::E100.description())
        .with_help("check that the right puzzle input file was given")
}

/// Diagnostic for a grid row whose width differs from the first row.
pub(crate) fn ragged_row(line: Line<'_>, first: Line<'_>, expected: usize) -> Diagnostic {
    Diagnostic::error(format!(
        "row is {} cells wide, expected {expected}",
        line.text().chars().count()
    ))
    .with_code(ErrorCode::E101)
    .with_label(line.span(), ErrorCode::E101.description())
    .with_secondary_label(first.span(), "first row sets the width")
    .with_help("every row of a grid must have the same number of cells")
}
