//! MiniJ lexer.
//!
//! Converts source text into [`Token`]s one at a time, on demand from the
//! parser. Three layers:
//! - [`SourceBuffer`]: decoded characters with a `'\0'` sentinel
//! - [`Cursor`]: one-character lookahead with line/column tracking
//! - [`Scanner`]: the token state machine, reporting lexical errors as it goes
//!
//! [`lex`] drains a scanner eagerly, for tools and tests.

mod cursor;
mod scanner;
mod source_buffer;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use source_buffer::{SourceBuffer, SENTINEL};

use mj_diagnostic::ErrorReporter;
use mj_ir::{Dialect, Token, TokenKind};
use tracing::debug;

/// Scan `source` to completion.
///
/// The result always ends with exactly one `Eot`.
pub fn lex(source: &str, dialect: Dialect, reporter: &ErrorReporter) -> Vec<Token> {
    let mut scanner = Scanner::new(source, dialect, reporter);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        let done = token.is(TokenKind::Eot);
        tokens.push(token);
        if done {
            debug!(count = tokens.len(), %dialect, "lex");
            return tokens;
        }
    }
}
