//! The `lex` command: print the token stream of a file.

use std::fs;
use std::io::Write;
use std::path::Path;

use mj_diagnostic::emitter::ColorMode;
use mj_diagnostic::ErrorReporter;
use mj_ir::Dialect;

use crate::DriverError;

/// Print every token of `path`, then any lexical errors. Returns the
/// number of errors.
pub fn lex_file(path: &Path, dialect: Dialect, out: &mut dyn Write) -> Result<usize, DriverError> {
    let source = fs::read_to_string(path).map_err(|e| DriverError::read(path, e))?;
    let reporter = ErrorReporter::for_file(path.display().to_string());
    let tokens = mj_lexer::lex(&source, dialect, &reporter);

    writeln!(
        out,
        "Tokens for '{}' ({} tokens, {dialect}):",
        path.display(),
        tokens.len()
    )?;
    for token in &tokens {
        writeln!(out, "  {token:?}")?;
    }

    if reporter.has_errors() {
        writeln!(out)?;
        reporter.output_errors(out, ColorMode::Never, false, true);
    }
    Ok(reporter.error_count())
}
