//! Statement context flags.
//!
//! The same statement production is entered from several places that
//! accept different subsets of the grammar: method bodies, the init clause
//! of a `for` header, the mandatory blocks of `try`. These flags say which
//! subset applies.

/// Context flags for statement parsing.
///
/// Multiple flags can be combined using [`with`](Self::with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct StmtContext(u8);

impl StmtContext {
    /// Only a `{ ... }` block is acceptable here.
    pub const REQUIRE_BLOCK: Self = Self(1 << 0);

    /// Keyword-led statements (`if`, `for`, `while`, and in the extended
    /// dialect `throw`, `break`, `continue`, `try`, `do`) are allowed.
    pub const ALLOW_KEYWORDS: Self = Self(1 << 1);

    /// A `Type name : Expression` foreach header is allowed in place of a
    /// declaration.
    pub const ALLOW_FOREACH: Self = Self(1 << 2);

    /// Context of an ordinary statement inside a block.
    pub const STATEMENT: Self = Self::ALLOW_KEYWORDS;

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_combine() {
        let ctx = StmtContext::REQUIRE_BLOCK.with(StmtContext::ALLOW_KEYWORDS);
        assert!(ctx.has(StmtContext::REQUIRE_BLOCK));
        assert!(ctx.has(StmtContext::ALLOW_KEYWORDS));
        assert!(!ctx.has(StmtContext::ALLOW_FOREACH));
    }

    #[test]
    fn default_has_nothing() {
        let ctx = StmtContext::default();
        assert!(!ctx.has(StmtContext::ALLOW_KEYWORDS));
        assert!(!ctx.has(StmtContext::REQUIRE_BLOCK));
    }
}
