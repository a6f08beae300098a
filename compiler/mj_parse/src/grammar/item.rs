//! Class declarations and their members.

use mj_ir::TokenKind;
use tracing::debug;

use crate::context::StmtContext;
use crate::{ErrorContext, ParseResult, Parser, SyntaxError};

/// What a member declaration has been narrowed to so far.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum MemberShape {
    Undecided,
    /// Declared with more than one name.
    Field,
    /// Declared `void`.
    Method,
}

const VOID_FIELD: &str = "void keyword not allowed in field declaration";

impl Parser<'_> {
    /// `[protection] modifier* class Name [extends Type] { member* }`
    ///
    /// Protection, modifiers and `extends` belong to the extended dialect.
    pub(crate) fn parse_class(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::ClassDeclaration, |p| {
            if p.dialect.is_extended() {
                p.parse_declaration_markers();
            }
            p.cursor.expect(TokenKind::Class)?;
            let name = p.cursor.expect(TokenKind::Ident)?;
            debug!(name = %name.text, position = %name.position, "class");

            if p.cursor.eat(TokenKind::Extends) {
                p.parse_type(false)?;
            }

            p.cursor.expect(TokenKind::LBrace)?;
            while !p.cursor.eat(TokenKind::RBrace) {
                p.parse_member()?;
            }
            Ok(())
        })
    }

    /// `[protection] modifier*`
    fn parse_declaration_markers(&mut self) {
        self.cursor.eat(TokenKind::Protection);
        while self.cursor.eat(TokenKind::Modifier) {}
    }

    /// A field or a method. Which one is settled by what follows the
    /// name list; contradictions with `void` or with multiple names are
    /// errors.
    fn parse_member(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::MemberDeclaration, |p| {
            p.parse_declaration_markers();

            let mut shape = if p.cursor.eat(TokenKind::Void) {
                MemberShape::Method
            } else {
                p.parse_type(true)?;
                MemberShape::Undecided
            };

            let first = p.cursor.expect(TokenKind::Ident)?;
            let mut names = 1;
            while p.cursor.eat(TokenKind::Comma) {
                p.cursor.expect(TokenKind::Ident)?;
                names += 1;
            }
            if names > 1 {
                if shape == MemberShape::Method {
                    return Err(SyntaxError::invalid_member(VOID_FIELD, &first));
                }
                shape = MemberShape::Field;
            }

            let next = p.cursor.current().clone();
            match next.kind {
                TokenKind::LParen => {
                    if shape == MemberShape::Field {
                        return Err(SyntaxError::invalid_member(
                            "Unexpected token '(' in field declaration",
                            &next,
                        )
                        .with_help("a method declares exactly one name"));
                    }
                    debug!(name = %first.text, "method");
                    p.cursor.advance();
                    p.parse_parameters()?;
                    if p.cursor.eat(TokenKind::Throws) {
                        p.parse_type(false)?;
                    }
                    p.parse_statement(StmtContext::REQUIRE_BLOCK.with(StmtContext::ALLOW_KEYWORDS))?;
                }
                TokenKind::Assign => {
                    if p.dialect.is_mini() {
                        return Err(SyntaxError::invalid_member(
                            "Field assignment on declaration not supported in the mini dialect",
                            &next,
                        )
                        .with_help("initialize the field inside a method instead"));
                    }
                    if shape == MemberShape::Method {
                        return Err(SyntaxError::invalid_member(VOID_FIELD, &next));
                    }
                    p.cursor.advance();
                    p.parse_expression(true)?;
                    p.cursor.expect(TokenKind::Semicolon)?;
                }
                TokenKind::Semicolon => {
                    if shape == MemberShape::Method {
                        return Err(SyntaxError::invalid_member(VOID_FIELD, &next));
                    }
                    p.cursor.advance();
                }
                _ => return Err(SyntaxError::unexpected("in class body", &next)),
            }
            Ok(())
        })
    }

    /// `( [Type [...] name (, Type [...] name)*] )` after the name.
    fn parse_parameters(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::Parameters, |p| {
            if p.cursor.eat(TokenKind::RParen) {
                return Ok(());
            }
            loop {
                p.parse_type(true)?;
                // Only the extended scanner produces `...`.
                p.cursor.eat(TokenKind::Ellipsis);
                p.cursor.expect(TokenKind::Ident)?;
                if !p.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.cursor.expect(TokenKind::RParen)?;
            Ok(())
        })
    }
}
