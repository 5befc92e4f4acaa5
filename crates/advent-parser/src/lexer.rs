//! Shared winnow building blocks for line-oriented puzzle inputs.
//!
//! Each input format is parsed one line (or one comma separated entry) at a
//! time. Parsers attach an [`Expected`] context to their failures, and
//! [`parse_fragment`] turns a failed parse into a [`Diagnostic`] whose span
//! points into the whole input.

use winnow::{
    Parser,
    ascii::digit1,
    combinator::{eof, separated_pair},
    error::{ContextError, ErrMode, ModalResult},
    stream::LocatingSlice,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    source::Line,
    span::Span,
};

/// What a parser was looking for when it failed.
///
/// Attached to winnow errors via `.context()`; the innermost context wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Expected {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
}

impl Expected {
    pub(crate) const fn new(code: ErrorCode, message: &'static str) -> Self {
        Self {
            code,
            message,
            help: None,
        }
    }

    pub(crate) const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

pub(crate) type Input<'a> = LocatingSlice<&'a str>;
pub(crate) type IResult<O> = ModalResult<O, ContextError<Expected>>;

/// Parse an unsigned decimal number.
pub(crate) fn number(input: &mut Input<'_>) -> IResult<u64> {
    digit1
        .context(Expected::new(ErrorCode::E001, "expected a number"))
        .try_map(|digits: &str| digits.parse::<u64>())
        .context(
            Expected::new(ErrorCode::E002, "number does not fit in 64 bits")
                .with_help("the largest accepted number is 18446744073709551615"),
        )
        .parse_next(input)
}

/// Parse an inclusive `start-end` pair.
pub(crate) fn number_range(input: &mut Input<'_>) -> IResult<(u64, u64)> {
    separated_pair(
        number,
        '-'.context(
            Expected::new(ErrorCode::E001, "expected `-` between range bounds")
                .with_help("ranges are written `start-end`, like `11-22`"),
        ),
        number,
    )
    .parse_next(input)
}

/// Require the end of the current fragment.
pub(crate) fn line_end(input: &mut Input<'_>, expected: Expected) -> IResult<()> {
    eof.void().context(expected).parse_next(input)
}

/// Reject a range written back to front.
pub(crate) fn check_range(start: u64, end: u64, span: Span) -> Result<(u64, u64), Diagnostic> {
    if start <= end {
        return Ok((start, end));
    }
    Err(
        Diagnostic::error(format!(
            "range start `{start}` is greater than its end `{end}`"
        ))
        .with_code(ErrorCode::E200)
        .with_label(span, ErrorCode::E200.description())
        .with_help(format!("write the smaller ID first: `{end}-{start}`")),
    )
}

/// Run `parser` over the whole of `line`, which must be fully consumed.
pub(crate) fn parse_fragment<'a, O, P>(line: Line<'a>, mut parser: P) -> Result<O, Diagnostic>
where
    P: Parser<Input<'a>, O, ErrMode<ContextError<Expected>>>,
{
    parser
        .parse(LocatingSlice::new(line.text()))
        .map_err(|err| {
            let offset = err.offset();
            let found = match line.text()[offset..].chars().next() {
                Some(c) => format!("found `{}`", c.escape_debug()),
                None => "line ends here".to_string(),
            };

            match err.inner().context().next() {
                Some(Expected {
                    code,
                    message,
                    help,
                }) => {
                    let span = line.span_at(offending(line.text(), offset, *code));
                    let diag = Diagnostic::error(*message)
                        .with_code(*code)
                        .with_label(span, found);
                    match help {
                        Some(help) => diag.with_help(*help),
                        None => diag,
                    }
                }
                None => {
                    let span = line.span_at(offending(line.text(), offset, ErrorCode::E001));
                    Diagnostic::error(ErrorCode::E001.description())
                        .with_code(ErrorCode::E001)
                        .with_label(span, found)
                }
            }
        })
}

/// Byte range to blame for a failure at `offset`.
///
/// Numbers out of range are underlined in full, anything else is blamed on
/// a single character.
fn offending(text: &str, offset: usize, code: ErrorCode) -> std::ops::Range<usize> {
    let rest = &text[offset..];
    let len = match rest.chars().next() {
        None => 0,
        Some(_) if code == ErrorCode::E002 => rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len()),
        Some(c) => c.len_utf8(),
    };
    offset..offset + len
}
