//! Characters in, tokens out.
//!
//! [`Scanner::scan`] never fails. Lexical problems are reported to the
//! shared [`ErrorReporter`] and scanning continues: most produce a token
//! anyway, an unknown character is skipped, and the three that leave
//! nothing sensible to resume from (unterminated comment, unterminated
//! string, `..`) end the input with a synthesized `Eot`.

use std::io::Read;

use mj_diagnostic::{Diagnostic, ErrorCode, ErrorReporter};
use mj_ir::{lookup, Dialect, Position, Token, TokenKind};
use tracing::trace;

use crate::{Cursor, SourceBuffer};

/// On-demand scanner over one input.
///
/// # Invariants
///
/// - `cursor.current()` is the next unconsumed character.
/// - Only [`take`](Self::take) grows `text`.
/// - `start` is the position of the first character of `text`; while
///   `text` is empty it follows the cursor across skipped characters.
/// - Once an `Eot` has been returned, every later call returns `Eot`.
pub struct Scanner<'r> {
    cursor: Cursor,
    reporter: &'r ErrorReporter,
    dialect: Dialect,
    text: String,
    start: Position,
    finished: bool,
}

impl<'r> Scanner<'r> {
    pub fn new(source: &str, dialect: Dialect, reporter: &'r ErrorReporter) -> Self {
        Self::from_buffer(SourceBuffer::new(source), dialect, reporter)
    }

    /// Scan a UTF-8 byte stream. Read failures surface before any token is
    /// produced.
    pub fn from_reader(
        reader: impl Read,
        dialect: Dialect,
        reporter: &'r ErrorReporter,
    ) -> std::io::Result<Self> {
        let buffer = SourceBuffer::from_reader(reader)?;
        Ok(Self::from_buffer(buffer, dialect, reporter))
    }

    pub fn from_buffer(buffer: SourceBuffer, dialect: Dialect, reporter: &'r ErrorReporter) -> Self {
        let cursor = Cursor::new(buffer);
        let start = cursor.position();
        Scanner {
            cursor,
            reporter,
            dialect,
            text: String::new(),
            start,
            finished: false,
        }
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Produce the next token.
    pub fn scan(&mut self) -> Token {
        if self.finished {
            return Token::eot(self.cursor.position());
        }

        let token = loop {
            if let Some(token) = self.next_token() {
                break token;
            }
        };

        if token.is(TokenKind::Eot) {
            self.finished = true;
        }
        trace!(kind = ?token.kind, text = %token.text, position = %token.position, "scan");
        token
    }

    /// One attempt at a token. `None` means something was consumed without
    /// producing one (a comment, an invalid character) and the caller
    /// should try again.
    fn next_token(&mut self) -> Option<Token> {
        self.clear_text();
        self.skip_whitespace();

        let c = self.cursor.current();
        match c {
            '/' => self.slash_or_comment(),
            '"' => Some(self.string()),
            '\'' => Some(self.char_literal()),
            '.' => Some(self.dot()),
            _ if lookup::is_operator_start(c) => Some(self.operator(c)),
            _ if self.is_word_start(c) => Some(self.word()),
            _ if c.is_ascii_digit() => Some(self.number()),
            _ => {
                if let Some(kind) = lookup::punctuation(c) {
                    self.take();
                    Some(self.make_token(kind))
                } else if self.cursor.is_eof() {
                    Some(self.eot())
                } else {
                    self.invalid_char(c);
                    None
                }
            }
        }
    }

    // ─── Character plumbing ───

    /// Append the current character to the lexeme and advance.
    #[inline]
    fn take(&mut self) {
        self.text.push(self.cursor.current());
        self.cursor.advance();
    }

    /// Advance without appending.
    #[inline]
    fn skip(&mut self) {
        self.cursor.advance();
        if self.text.is_empty() {
            self.start = self.cursor.position();
        }
    }

    fn clear_text(&mut self) {
        self.text.clear();
        self.start = self.cursor.position();
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_whitespace() {
            self.skip();
        }
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        Token::new(kind, std::mem::take(&mut self.text), self.start)
    }

    fn eot(&mut self) -> Token {
        self.text.clear();
        Token::eot(self.cursor.position())
    }

    #[cold]
    fn report(&self, code: ErrorCode, message: impl Into<String>, position: Position) {
        self.reporter
            .report(Diagnostic::error(code).with_message(message).at(position));
    }

    // ─── Token shapes ───

    /// `/=`, a comment, or `/`.
    fn slash_or_comment(&mut self) -> Option<Token> {
        self.take();
        match self.cursor.current() {
            '=' => {
                self.take();
                Some(self.make_token(TokenKind::CompoundAssign))
            }
            '/' => {
                self.cursor.eat_while(|c| c != '\n');
                self.cursor.advance();
                None
            }
            '*' => {
                self.cursor.advance();
                // `/*/` does not close: the closing `*` must come after the opening one.
                let mut last = '\0';
                loop {
                    if self.cursor.is_eof() {
                        self.report(ErrorCode::E0002, "Unterminated multiline comment", self.start);
                        return Some(self.eot());
                    }
                    let c = self.cursor.current();
                    self.cursor.advance();
                    if last == '*' && c == '/' {
                        return None;
                    }
                    last = c;
                }
            }
            _ => Some(self.make_token(TokenKind::BinaryOp)),
        }
    }

    /// Every operator except the ones starting with `/`.
    ///
    /// `c` is consumed exactly once, up front; at most one more character
    /// follows it.
    fn operator(&mut self, c: char) -> Token {
        self.take();
        let next = self.cursor.current();

        let kind = if c == '=' {
            if next == '=' {
                self.take();
                TokenKind::CompareOp
            } else {
                TokenKind::Assign
            }
        } else if lookup::is_compound_assignable(c) && next == '=' {
            self.take();
            TokenKind::CompoundAssign
        } else if lookup::is_dual_use(c) {
            if next == c {
                self.take();
                TokenKind::IncDec
            } else {
                TokenKind::GenericOp
            }
        } else {
            match c {
                '!' if next == '=' => {
                    self.take();
                    TokenKind::CompareOp
                }
                '!' => TokenKind::UnaryOp,
                '<' | '>' if next == '=' => {
                    self.take();
                    TokenKind::CompareOp
                }
                '<' => TokenKind::LeftChevron,
                '>' => TokenKind::RightChevron,
                '|' | '&' => {
                    if next == c {
                        self.take();
                    }
                    TokenKind::BinaryOp
                }
                _ => TokenKind::BinaryOp,
            }
        };

        self.make_token(kind)
    }

    fn is_word_start(&self, c: char) -> bool {
        if self.dialect.is_mini() {
            c.is_alphabetic()
        } else {
            c.is_alphabetic() || c == '_' || c == '$'
        }
    }

    fn word(&mut self) -> Token {
        self.take();
        while is_word_continue(self.cursor.current()) {
            self.take();
        }
        let kind = lookup::classify_word(&self.text, self.dialect);
        self.make_token(kind)
    }

    fn number(&mut self) -> Token {
        self.take_digits();
        let c = self.cursor.current();

        if c == '.' {
            self.take();
            // `7.` is still a float.
            self.take_digits();
            return self.make_token(TokenKind::FloatLiteral);
        }

        if c.is_alphabetic() || c == '_' {
            self.report(
                ErrorCode::E0003,
                format!("Invalid character while parsing number: {c}"),
                self.cursor.position(),
            );
        }
        self.make_token(TokenKind::IntLiteral)
    }

    fn take_digits(&mut self) {
        while self.cursor.current().is_ascii_digit() {
            self.take();
        }
    }

    /// `"` through the next `"`. No escapes; newlines are literal.
    fn string(&mut self) -> Token {
        self.take();
        loop {
            if self.cursor.current() == '"' {
                self.take();
                return self.make_token(TokenKind::StringLiteral);
            }
            if self.cursor.is_eof() {
                self.report(ErrorCode::E0008, "Unterminated String literal", self.start);
                return self.eot();
            }
            self.take();
        }
    }

    fn char_literal(&mut self) -> Token {
        self.take();

        match self.cursor.current() {
            '\'' => {
                self.take();
                self.report(
                    ErrorCode::E0005,
                    "Invalid Character literal: cannot be empty",
                    self.start,
                );
                return self.make_token(TokenKind::CharLiteral);
            }
            // Any character is content here, a newline included.
            _ if self.cursor.is_eof() => return self.unterminated_char(),
            _ => self.take(),
        }

        if self.cursor.current() == '\'' {
            self.take();
            return self.make_token(TokenKind::CharLiteral);
        }

        loop {
            let c = self.cursor.current();
            if c == '\'' {
                self.take();
                self.report(
                    ErrorCode::E0006,
                    "Invalid Character literal: too long, must be no longer than one character",
                    self.start,
                );
                return self.make_token(TokenKind::CharLiteral);
            }
            if c == '\n' || self.cursor.is_eof() {
                return self.unterminated_char();
            }
            self.take();
        }
    }

    fn unterminated_char(&mut self) -> Token {
        self.report(ErrorCode::E0004, "Unterminated Character literal", self.start);
        self.make_token(TokenKind::CharLiteral)
    }

    /// `.`, and in the extended dialect `...`.
    fn dot(&mut self) -> Token {
        self.take();
        if self.dialect.is_mini() || self.cursor.current() != '.' {
            return self.make_token(TokenKind::Dot);
        }

        self.take();
        if self.cursor.current() != '.' {
            self.report(ErrorCode::E0007, "Invalid punctuation: ..", self.start);
            return self.eot();
        }
        self.take();
        self.make_token(TokenKind::Ellipsis)
    }

    fn invalid_char(&mut self, c: char) {
        self.report(
            ErrorCode::E0001,
            format!("Invalid character '{}' encountered while scanning", c.escape_debug()),
            self.cursor.position(),
        );
        self.skip();
    }
}

fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
