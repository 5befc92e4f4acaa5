//! Collector for accumulating diagnostics while reading an input file.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so that every bad line is reported, not just
/// the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Whether any error has been emitted so far.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - If there are no errors, logs any warnings and returns `Ok(())`.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }
        for diagnostic in &self.diagnostics {
            warn!(diagnostic:%; "Input warning");
        }
        Ok(())
    }

    /// Give up on a fatal problem and return everything collected so far.
    pub fn into_error(self) -> ParseError {
        ParseError::new(self.diagnostics)
    }

    /// Finish collection, returning `value` when no error was emitted.
    pub fn finish_with<T>(self, value: T) -> Result<T, ParseError> {
        self.finish().map(|()| value)
    }
}
