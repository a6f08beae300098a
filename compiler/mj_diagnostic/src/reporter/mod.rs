//! Per-file error accumulation.
//!
//! One reporter is created per input file and shared by reference between
//! the scanner and the parser that reads from it. Reports are kept in the
//! order they arrive, so emission order matches discovery order.

use std::cell::RefCell;
use std::io::Write;

use crate::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use crate::Diagnostic;

/// Accumulates diagnostics for a single input.
///
/// Interior mutability lets the scanner and parser both hold `&ErrorReporter`
/// while the parser owns the scanner.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: RefCell<Vec<Diagnostic>>,
    file: Option<String>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reporter that stamps `file` onto every diagnostic lacking one.
    pub fn for_file(file: impl Into<String>) -> Self {
        ErrorReporter {
            diagnostics: RefCell::new(Vec::new()),
            file: Some(file.into()),
        }
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Append a diagnostic.
    pub fn report(&self, mut diagnostic: Diagnostic) {
        if diagnostic.file.is_none() {
            diagnostic.file.clone_from(&self.file);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Snapshot of everything reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Send every accumulated diagnostic to `emitter`, in reported order.
    pub fn emit_errors(&self, emitter: &mut dyn DiagnosticEmitter) {
        emitter.emit_all(&self.diagnostics.borrow());
        emitter.flush();
    }

    /// Render accumulated diagnostics to `out`, then the summary line.
    ///
    /// `verbose` adds locations and notes; otherwise one line per error.
    /// `is_tty` only matters for `ColorMode::Auto`.
    pub fn output_errors(
        &self,
        out: &mut dyn Write,
        color: ColorMode,
        is_tty: bool,
        verbose: bool,
    ) {
        let mut emitter = TerminalEmitter::with_color_mode(out, color, is_tty).verbose(verbose);
        self.emit_errors(&mut emitter);
        emitter.emit_summary(self.error_count());
        emitter.flush();
    }
}
