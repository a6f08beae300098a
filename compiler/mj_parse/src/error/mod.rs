//! Syntax error values.
//!
//! A [`SyntaxError`] is the abort value of a parse: it is built at the
//! point of detection, carried out through `?`, and converted to a
//! [`Diagnostic`] exactly once, in [`Parser::parse`](crate::Parser::parse).

use mj_diagnostic::{Diagnostic, ErrorCode};
use mj_ir::{Position, Token};

/// Result alias for grammar productions.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// What was being parsed when an error occurred.
///
/// Rendered as a "while parsing ..." note. The innermost context wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    PackageHeader,
    Import,
    ClassDeclaration,
    MemberDeclaration,
    Parameters,
    Block,
    IfStatement,
    ForLoop,
    WhileLoop,
    DoWhileLoop,
    TryStatement,
    Arguments,
    ArrayLiteral,
    NewExpression,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::PackageHeader => "the package declaration",
            Self::Import => "an import",
            Self::ClassDeclaration => "a class declaration",
            Self::MemberDeclaration => "a field or method declaration",
            Self::Parameters => "a parameter list",
            Self::Block => "a block",
            Self::IfStatement => "an if statement",
            Self::ForLoop => "a for loop",
            Self::WhileLoop => "a while loop",
            Self::DoWhileLoop => "a do-while loop",
            Self::TryStatement => "a try statement",
            Self::Arguments => "an argument list",
            Self::ArrayLiteral => "an array literal",
            Self::NewExpression => "a new expression",
        }
    }
}

/// A located syntax violation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxError {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub message: String,
    /// Position of the offending token.
    pub position: Position,
    pub context: Option<ErrorContext>,
    /// Optional help messages.
    pub help: Vec<String>,
}

impl SyntaxError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, position: Position) -> Self {
        SyntaxError {
            code,
            message: message.into(),
            position,
            context: None,
            help: Vec::new(),
        }
    }

    /// Set the context unless an inner production already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .at(self.position);

        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        for help in &self.help {
            diag = diag.with_note(help);
        }

        diag
    }

    // ─── Common errors ───

    /// A mandatory token was missing.
    #[cold]
    pub fn expected(expected: &str, found: &Token) -> Self {
        SyntaxError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {found}"),
            found.position,
        )
    }

    /// A token that no rule at this point can start with.
    #[cold]
    pub fn unexpected(what: &str, found: &Token) -> Self {
        SyntaxError::new(
            ErrorCode::E1001,
            format!("Unexpected token {what}: {found}"),
            found.position,
        )
    }

    /// A suffix that contradicts what the prefix was already known to be.
    #[cold]
    pub fn contradiction(message: impl Into<String>, at: &Token) -> Self {
        SyntaxError::new(ErrorCode::E1002, message, at.position)
    }

    #[cold]
    pub fn invalid_member(message: impl Into<String>, at: &Token) -> Self {
        SyntaxError::new(ErrorCode::E1003, message, at.position)
    }
}
