//! Sentinel-terminated source buffer.
//!
//! The buffer holds the decoded characters of one input followed by a
//! `'\0'` sentinel, so the scanner can look at the current character
//! without bounds checks. Reads past the sentinel also yield `'\0'`.
//!
//! A `'\0'` inside the source is legal input (it scans as an invalid
//! character); [`Cursor`](crate::Cursor) tells it apart from EOF by
//! comparing its offset with [`SourceBuffer::len`].

use std::io::{self, Read};

/// The character returned at and after end of input.
pub const SENTINEL: char = '\0';

/// Decoded source characters plus a trailing sentinel.
///
/// # Layout
///
/// ```text
/// [source chars..., '\0']
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    chars: Vec<char>,
    source_len: usize,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        let source_len = chars.len();
        chars.push(SENTINEL);
        SourceBuffer { chars, source_len }
    }

    /// Read an entire byte stream as UTF-8.
    ///
    /// Invalid UTF-8 surfaces as an [`io::ErrorKind::InvalidData`] error.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::new(&source))
    }

    /// Number of source characters, excluding the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.source_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Character at `offset`, or [`SENTINEL`] at and past the end.
    #[inline]
    pub fn get(&self, offset: usize) -> char {
        self.chars.get(offset).copied().unwrap_or(SENTINEL)
    }
}
