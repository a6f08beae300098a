//! Recursive descent parser for MiniJ.
//!
//! A recognizer: it checks that a token stream is a well-formed program
//! and builds no tree. The [`ErrorReporter`] it shares with the scanner is
//! the only output; an empty reporter after [`Parser::parse`] means the
//! program was accepted.
//!
//! The first syntax error ends the parse. Grammar productions return
//! [`ParseResult`] and propagate a [`SyntaxError`] with `?` up to
//! [`Parser::parse`], which reports it and returns normally.

mod context;
mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseResult, SyntaxError};
pub use grammar::Classification;

use mj_diagnostic::ErrorReporter;
use mj_ir::{Dialect, Token};
use mj_lexer::Scanner;
use tracing::debug;

/// Parser state for one input.
pub struct Parser<'r> {
    cursor: Cursor<'r>,
    reporter: &'r ErrorReporter,
    dialect: Dialect,
}

impl<'r> Parser<'r> {
    /// The dialect is taken from the scanner, so the two always agree.
    pub fn new(scanner: Scanner<'r>, reporter: &'r ErrorReporter) -> Self {
        let dialect = scanner.dialect();
        Parser {
            cursor: Cursor::new(scanner),
            reporter,
            dialect,
        }
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The lookahead token. After a failed parse, the token the error was
    /// found at.
    pub fn current(&self) -> &Token {
        self.cursor.current()
    }

    /// Parse one program, reporting at most one syntax error.
    pub fn parse(&mut self) {
        debug!(dialect = %self.dialect, "parse");
        match self.parse_program() {
            Ok(()) => debug!(tokens = self.cursor.consumed(), "parse finished"),
            Err(error) => {
                debug!(
                    code = %error.code,
                    position = %error.position,
                    tokens = self.cursor.consumed(),
                    "parse aborted"
                );
                self.reporter.report(error.to_diagnostic());
            }
        }
    }

    /// Run `f`, tagging an error it returns with `context` unless an inner
    /// production already tagged it.
    fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        f(self).map_err(|error| error.with_context(context))
    }
}

/// Scan and parse `source` in one step.
pub fn parse(source: &str, dialect: Dialect, reporter: &ErrorReporter) {
    let scanner = Scanner::new(source, dialect, reporter);
    Parser::new(scanner, reporter).parse();
}

#[cfg(test)]
mod tests;
