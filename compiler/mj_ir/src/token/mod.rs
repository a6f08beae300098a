//! Token types shared by the scanner and parser.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Position;

/// A lexeme: its category, the exact source text, and where it started.
///
/// Created once by the scanner and consumed once by the parser. Position is
/// informational; grammar decisions look only at `kind` (and occasionally
/// `text`, e.g. the `*` of a wildcard import).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    /// An end-of-input token at `position`.
    pub fn eot(position: Position) -> Self {
        Token {
            kind: TokenKind::Eot,
            text: String::new(),
            position,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::Eot {
            f.write_str(TokenKind::Eot.display_name())
        } else {
            write!(f, "'{}'", self.text)
        }
    }
}
