//! One-token lookahead over a live scanner.
//!
//! The parser never sees more than the current token. Advancing pulls the
//! next token from the [`Scanner`] on demand, so lexical errors are
//! reported in the same order the parser reaches them.

use std::mem;

use mj_ir::{Dialect, Token, TokenKind};
use mj_lexer::Scanner;
use tracing::trace;

use crate::{ParseResult, SyntaxError};

/// Token cursor owning the scanner it reads from.
pub struct Cursor<'r> {
    scanner: Scanner<'r>,
    current: Token,
    consumed: usize,
}

impl<'r> Cursor<'r> {
    /// Prime the lookahead with the scanner's first token.
    pub fn new(mut scanner: Scanner<'r>) -> Self {
        let current = scanner.scan();
        Cursor {
            scanner,
            current,
            consumed: 0,
        }
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.scanner.dialect()
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eot)
    }

    /// Number of tokens consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consume the current token and return it.
    pub fn advance(&mut self) -> Token {
        let next = self.scanner.scan();
        let token = mem::replace(&mut self.current, next);
        self.consumed += 1;
        trace!(kind = ?token.kind, text = %token.text, position = %token.position, "consume");
        token
    }

    /// Consume the current token if it is `kind`.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token and return it, or fail without consuming.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(&[kind]))
        }
    }

    /// Like [`expect`](Self::expect), accepting any of `kinds`.
    pub fn expect_any(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        if kinds.contains(&self.current.kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kinds))
        }
    }

    /// Separated so the formatting stays off the `expect` fast path.
    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kinds: &[TokenKind]) -> SyntaxError {
        let expected: Vec<&str> = kinds.iter().map(|k| k.display_name()).collect();
        SyntaxError::expected(&expected.join(" or "), &self.current)
    }
}
