//! Character cursor with line/column tracking.
//!
//! The cursor owns its [`SourceBuffer`] and exposes exactly one character
//! of lookahead through [`Cursor::current`]. EOF is the sentinel at an
//! offset at or past the source length, so an interior `'\0'` is still an
//! ordinary (invalid) character.

use mj_ir::Position;

use crate::SourceBuffer;

/// Cursor over a sentinel-terminated buffer.
///
/// # Invariant
///
/// `position` is the line/column of `current()`. Lines start at 1 and the
/// first character of every line is column 1.
#[derive(Clone, Debug)]
pub struct Cursor {
    buffer: SourceBuffer,
    offset: usize,
    position: Position,
}

impl Cursor {
    pub fn new(buffer: SourceBuffer) -> Self {
        Cursor {
            buffer,
            offset: 0,
            position: Position::START,
        }
    }

    /// The next unconsumed character, or the sentinel at EOF.
    #[inline]
    pub fn current(&self) -> char {
        self.buffer.get(self.offset)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consume `current()`. Does nothing at EOF.
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        if self.current() == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        self.offset += 1;
    }

    /// Consume characters while `pred` holds. Never consumes the sentinel.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }
}
