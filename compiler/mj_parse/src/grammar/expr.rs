//! Expressions.
//!
//! Operators have no precedence: `a + b * c` is read as an operand followed
//! by an operator and another whole expression, so every chain nests to
//! the right. The parser only recognizes; it never evaluates, so grouping
//! has no observable effect.

use mj_diagnostic::ErrorCode;
use mj_ir::TokenKind;
use mj_stack::ensure_sufficient_stack;

use crate::{Classification, ErrorContext, ParseResult, Parser, SyntaxError};

impl Parser<'_> {
    /// Parse one expression.
    ///
    /// `allow_array_literal` admits `{ e, ... }` in initializer position.
    pub(crate) fn parse_expression(&mut self, allow_array_literal: bool) -> ParseResult<()> {
        ensure_sufficient_stack(|| self.parse_expression_inner(allow_array_literal))
    }

    fn parse_expression_inner(&mut self, allow_array_literal: bool) -> ParseResult<()> {
        let kind = self.cursor.current_kind();

        if kind.is_prefix_operator() {
            self.cursor.advance();
            self.parse_expression(false)?;
        } else if allow_array_literal && kind == TokenKind::LBrace {
            self.cursor.advance();
            self.parse_array_literal()?;
        } else if kind.is_literal() {
            self.cursor.advance();
        } else if kind == TokenKind::LParen {
            self.cursor.advance();
            self.parse_expression(false)?;
            self.cursor.expect(TokenKind::RParen)?;
        } else if kind == TokenKind::New {
            self.cursor.advance();
            self.parse_new()?;
        } else {
            let start = self.cursor.current().clone();
            if self.parse_type_or_reference()? == Classification::Type {
                return Err(SyntaxError::new(
                    ErrorCode::E1006,
                    format!("Type is not a valid expression: {start}"),
                    start.position,
                ));
            }
        }

        self.parse_expression_tail()
    }

    /// What may follow a complete operand.
    fn parse_expression_tail(&mut self) -> ParseResult<()> {
        let kind = self.cursor.current_kind();
        if kind == TokenKind::IncDec {
            self.cursor.advance();
        } else if kind.is_infix_operator() {
            self.cursor.advance();
            self.parse_expression(false)?;
        } else if kind == TokenKind::Question {
            self.cursor.advance();
            self.parse_expression(false)?;
            self.cursor.expect(TokenKind::Colon)?;
            self.parse_expression(false)?;
        }
        Ok(())
    }

    /// Elements and `}` after the opening brace. A trailing comma is
    /// allowed; elements may not themselves be array literals.
    fn parse_array_literal(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::ArrayLiteral, |p| {
            while !p.cursor.check(TokenKind::RBrace) {
                p.parse_expression(false)?;
                if !p.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.cursor.expect(TokenKind::RBrace)?;
            Ok(())
        })
    }

    /// `Type [( args )] ([ expr ])*` after `new`.
    ///
    /// Constructors take no arguments in the mini dialect.
    fn parse_new(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::NewExpression, |p| {
            p.parse_type(false)?;
            if p.cursor.eat(TokenKind::LParen) {
                if p.dialect.is_mini() {
                    p.cursor.expect(TokenKind::RParen)?;
                } else {
                    p.parse_arguments()?;
                }
            }
            while p.cursor.eat(TokenKind::LBracket) {
                p.parse_expression(false)?;
                p.cursor.expect(TokenKind::RBracket)?;
            }
            Ok(())
        })
    }
}
