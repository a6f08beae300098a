//! Grammar dialect selection.

use std::fmt;
use std::str::FromStr;

/// Which grammar the scanner and parser accept.
///
/// Fixed for the lifetime of a parse. Both the keyword table and every
/// dialect-conditional production read this value; it is passed in at
/// construction and never mutated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// The restricted teaching subset.
    #[default]
    Mini,
    /// Generics, exceptions, loop variants, access modifiers and a
    /// package/import header.
    Extended,
}

impl Dialect {
    #[inline]
    pub fn is_mini(self) -> bool {
        matches!(self, Dialect::Mini)
    }

    #[inline]
    pub fn is_extended(self) -> bool {
        matches!(self, Dialect::Extended)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Mini => "mini",
            Dialect::Extended => "extended",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dialect '{}' (expected 'mini' or 'extended')",
            self.0
        )
    }
}

impl std::error::Error for UnknownDialect {}

/// Parse a dialect name. Case-insensitive; `full` is accepted as an alias
/// for `extended`.
impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mini" => Ok(Dialect::Mini),
            "extended" | "full" => Ok(Dialect::Extended),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}
