//! Token kind enumeration.

/// Lexical category of a token.
///
/// A closed set; the lexeme's text lives on [`Token`](crate::Token), so
/// kinds carry no payload and compare by discriminant alone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    Eot,
    Ident,

    // === Primitive type names ===
    IntType,
    BooleanType,
    StringType,
    FloatType,
    DoubleType,
    CharType,

    // === Literals ===
    /// `true` or `false`.
    BoolLiteral,
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,

    // === Keywords (both dialects) ===
    Class,
    If,
    Else,
    For,
    While,
    This,
    Void,
    New,
    Return,

    // === Keywords (extended dialect only) ===
    Package,
    Import,
    Throws,
    Throw,
    Implements,
    Extends,
    Try,
    Catch,
    Finally,
    Break,
    Continue,
    Do,
    Switch,
    Case,

    // === Declaration markers ===
    /// `public`, `private` or `protected`.
    Protection,
    /// `static`, `final`, `volatile` or `abstract`.
    Modifier,

    // === Operators ===
    /// `!`
    UnaryOp,
    /// `*`, `/`, `%`, `~`, `&`, `|`, `&&`, `||`
    BinaryOp,
    /// `+` or `-`: prefix or infix.
    GenericOp,
    /// `==`, `!=`, `<=`, `>=`
    CompareOp,
    /// `=`
    Assign,
    /// `+=`, `-=`, `*=`, `/=`, `%=`, `|=`, `&=`
    CompoundAssign,
    /// `++` or `--`: prefix or postfix.
    IncDec,
    /// `<`: comparison or generic-argument open.
    LeftChevron,
    /// `>`: comparison or generic-argument close.
    RightChevron,

    // === Punctuation ===
    Dot,
    Comma,
    Colon,
    Semicolon,
    Question,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    /// `...` (extended dialect only).
    Ellipsis,
}

impl TokenKind {
    /// Every keyword kind, paired with its spelling.
    pub const KEYWORDS: &'static [(&'static str, TokenKind)] = &[
        ("class", TokenKind::Class),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("this", TokenKind::This),
        ("void", TokenKind::Void),
        ("new", TokenKind::New),
        ("return", TokenKind::Return),
        ("true", TokenKind::BoolLiteral),
        ("false", TokenKind::BoolLiteral),
        ("package", TokenKind::Package),
        ("import", TokenKind::Import),
        ("throws", TokenKind::Throws),
        ("throw", TokenKind::Throw),
        ("implements", TokenKind::Implements),
        ("extends", TokenKind::Extends),
        ("try", TokenKind::Try),
        ("catch", TokenKind::Catch),
        ("finally", TokenKind::Finally),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("do", TokenKind::Do),
        ("switch", TokenKind::Switch),
        ("case", TokenKind::Case),
    ];

    /// Whether this keyword exists only in the extended dialect.
    ///
    /// In the mini dialect these spellings scan as identifiers.
    pub fn is_extended_only(self) -> bool {
        matches!(
            self,
            TokenKind::Package
                | TokenKind::Import
                | TokenKind::Throws
                | TokenKind::Throw
                | TokenKind::Implements
                | TokenKind::Extends
                | TokenKind::Try
                | TokenKind::Catch
                | TokenKind::Finally
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Do
                | TokenKind::Switch
                | TokenKind::Case
                | TokenKind::Ellipsis
        )
    }

    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            TokenKind::IntType
                | TokenKind::BooleanType
                | TokenKind::StringType
                | TokenKind::FloatType
                | TokenKind::DoubleType
                | TokenKind::CharType
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::BoolLiteral
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::CharLiteral
                | TokenKind::StringLiteral
        )
    }

    /// Operators that continue an expression with a right operand.
    pub fn is_infix_operator(self) -> bool {
        matches!(
            self,
            TokenKind::BinaryOp
                | TokenKind::CompareOp
                | TokenKind::GenericOp
                | TokenKind::LeftChevron
                | TokenKind::RightChevron
        )
    }

    /// Operators that may start an expression.
    pub fn is_prefix_operator(self) -> bool {
        matches!(
            self,
            TokenKind::UnaryOp | TokenKind::GenericOp | TokenKind::IncDec
        )
    }

    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eot => "end of input",
            TokenKind::Ident => "identifier",
            TokenKind::IntType => "int",
            TokenKind::BooleanType => "boolean",
            TokenKind::StringType => "String",
            TokenKind::FloatType => "float",
            TokenKind::DoubleType => "double",
            TokenKind::CharType => "char",
            TokenKind::BoolLiteral => "boolean literal",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::CharLiteral => "character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Class => "class",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::This => "this",
            TokenKind::Void => "void",
            TokenKind::New => "new",
            TokenKind::Return => "return",
            TokenKind::Package => "package",
            TokenKind::Import => "import",
            TokenKind::Throws => "throws",
            TokenKind::Throw => "throw",
            TokenKind::Implements => "implements",
            TokenKind::Extends => "extends",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Finally => "finally",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Do => "do",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Protection => "access modifier",
            TokenKind::Modifier => "modifier",
            TokenKind::UnaryOp => "unary operator",
            TokenKind::BinaryOp => "binary operator",
            TokenKind::GenericOp => "operator",
            TokenKind::CompareOp => "comparison operator",
            TokenKind::Assign => "=",
            TokenKind::CompoundAssign => "compound assignment",
            TokenKind::IncDec => "increment/decrement",
            TokenKind::LeftChevron => "<",
            TokenKind::RightChevron => ">",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Question => "?",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Ellipsis => "...",
        }
    }
}
