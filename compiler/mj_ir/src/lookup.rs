//! Static classification tables.
//!
//! All tables are immutable. The keyword table is shared between dialects
//! and filtered through [`TokenKind::is_extended_only`], so there is one
//! source of truth for spelling.

use crate::{Dialect, TokenKind};

/// Resolve a keyword spelling under `dialect`.
///
/// Returns `None` for non-keywords and for extended-only keywords in the
/// mini dialect.
pub fn keyword(text: &str, dialect: Dialect) -> Option<TokenKind> {
    let kind = TokenKind::KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|&(_, kind)| kind)?;
    if dialect.is_mini() && kind.is_extended_only() {
        None
    } else {
        Some(kind)
    }
}

/// Resolve a primitive type name.
pub fn primitive(text: &str) -> Option<TokenKind> {
    match text {
        "int" => Some(TokenKind::IntType),
        "boolean" => Some(TokenKind::BooleanType),
        "String" => Some(TokenKind::StringType),
        "float" => Some(TokenKind::FloatType),
        "double" => Some(TokenKind::DoubleType),
        "char" => Some(TokenKind::CharType),
        _ => None,
    }
}

pub fn is_protection(text: &str) -> bool {
    matches!(text, "public" | "private" | "protected")
}

pub fn is_modifier(text: &str) -> bool {
    matches!(text, "static" | "final" | "volatile" | "abstract")
}

/// Classify a scanned word.
///
/// Order: keyword, primitive name, protection marker, modifier, identifier.
pub fn classify_word(text: &str, dialect: Dialect) -> TokenKind {
    if let Some(kind) = keyword(text, dialect) {
        kind
    } else if let Some(kind) = primitive(text) {
        kind
    } else if is_protection(text) {
        TokenKind::Protection
    } else if is_modifier(text) {
        TokenKind::Modifier
    } else {
        TokenKind::Ident
    }
}

/// Single-character punctuation.
///
/// `.` maps to [`TokenKind::Dot`]; ellipsis detection happens in the
/// scanner because it needs more than one character.
pub fn punctuation(c: char) -> Option<TokenKind> {
    match c {
        '.' => Some(TokenKind::Dot),
        ',' => Some(TokenKind::Comma),
        ':' => Some(TokenKind::Colon),
        ';' => Some(TokenKind::Semicolon),
        '?' => Some(TokenKind::Question),
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '[' => Some(TokenKind::LBracket),
        ']' => Some(TokenKind::RBracket),
        _ => None,
    }
}

/// Characters that begin an operator token.
///
/// `/` is absent: the scanner resolves it together with comments.
pub fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '+' | '*' | '-' | '%' | '|' | '&' | '~' | '!' | '=' | '>' | '<'
    )
}

/// Operators usable both as prefix and infix, and doubled into `++`/`--`.
pub fn is_dual_use(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Operators that take an `=` suffix to form a compound assignment.
pub fn is_compound_assignable(c: char) -> bool {
    matches!(c, '+' | '/' | '*' | '-' | '%' | '|' | '&')
}
