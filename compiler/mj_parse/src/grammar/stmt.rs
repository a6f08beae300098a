//! Statements.

use mj_diagnostic::ErrorCode;
use mj_ir::{Token, TokenKind};
use mj_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::context::StmtContext;
use crate::{Classification, ErrorContext, ParseResult, Parser, SyntaxError};

impl Parser<'_> {
    /// Parse one statement under `ctx`.
    ///
    /// Returns `true` when a foreach header (`Type name : expr`) was parsed
    /// in place of a declaration, which only happens under
    /// [`StmtContext::ALLOW_FOREACH`].
    pub(crate) fn parse_statement(&mut self, ctx: StmtContext) -> ParseResult<bool> {
        ensure_sufficient_stack(|| self.parse_statement_inner(ctx))
    }

    fn parse_statement_inner(&mut self, ctx: StmtContext) -> ParseResult<bool> {
        if ctx.has(StmtContext::REQUIRE_BLOCK) || self.cursor.check(TokenKind::LBrace) {
            self.parse_block()?;
            return Ok(false);
        }

        let keywords = ctx.has(StmtContext::ALLOW_KEYWORDS);
        trace!(kind = ?self.cursor.current_kind(), keywords, "statement");

        // Extended-only keywords never reach here in the mini dialect: the
        // scanner reads them as identifiers.
        match self.cursor.current_kind() {
            TokenKind::Return => {
                self.cursor.advance();
                if !self.cursor.eat(TokenKind::Semicolon) {
                    self.parse_expression(false)?;
                    self.cursor.expect(TokenKind::Semicolon)?;
                }
            }
            TokenKind::Throw if keywords => {
                self.cursor.advance();
                self.parse_expression(false)?;
                self.cursor.expect(TokenKind::Semicolon)?;
            }
            TokenKind::Break | TokenKind::Continue if keywords => {
                self.cursor.advance();
                self.cursor.expect(TokenKind::Semicolon)?;
            }
            TokenKind::Try if keywords => self.parse_try()?,
            TokenKind::If if keywords => self.parse_if()?,
            TokenKind::For if keywords => self.parse_for()?,
            TokenKind::Do if keywords => self.parse_do_while()?,
            TokenKind::While if keywords => self.parse_while()?,
            TokenKind::IncDec => {
                self.parse_prefix_update()?;
                self.cursor.expect(TokenKind::Semicolon)?;
            }
            _ => return self.parse_simple_statement(ctx.has(StmtContext::ALLOW_FOREACH)),
        }
        Ok(false)
    }

    /// `{ statement* }`
    pub(crate) fn parse_block(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::Block, |p| {
            p.cursor.expect(TokenKind::LBrace)?;
            while !p.cursor.eat(TokenKind::RBrace) {
                p.parse_statement(StmtContext::STATEMENT)?;
            }
            Ok(())
        })
    }

    /// A statement led by a Type-or-Reference: a declaration, an
    /// assignment, an update, or a call.
    fn parse_simple_statement(&mut self, allow_foreach: bool) -> ParseResult<bool> {
        let class = self.parse_type_or_reference()?;
        let after = self.cursor.current().clone();

        match after.kind {
            TokenKind::Ident => {
                if !class.can_be_type() {
                    return Err(SyntaxError::contradiction(
                        format!("Unexpected token after reference: {after}"),
                        &after,
                    ));
                }
                self.cursor.advance();

                if allow_foreach && self.cursor.eat(TokenKind::Colon) {
                    self.parse_expression(false)?;
                    return Ok(true);
                }
                // Locals need an initializer in the mini dialect.
                if self.dialect.is_mini() || !self.cursor.eat(TokenKind::Semicolon) {
                    self.cursor.expect(TokenKind::Assign)?;
                    self.parse_expression(true)?;
                    self.cursor.expect(TokenKind::Semicolon)?;
                }
            }
            TokenKind::Assign | TokenKind::CompoundAssign | TokenKind::IncDec => {
                self.parse_update_tail(class, &after)?;
                self.cursor.expect(TokenKind::Semicolon)?;
            }
            TokenKind::Semicolon => {
                check_value_used(class, &after)?;
                self.cursor.advance();
            }
            _ => return Err(SyntaxError::unexpected("after type/reference", &after)),
        }
        Ok(false)
    }

    /// `++ ref` / `-- ref`, without the terminator.
    fn parse_prefix_update(&mut self) -> ParseResult<()> {
        let op = self.cursor.advance();
        if self.parse_type_or_reference()? == Classification::Type {
            return Err(SyntaxError::new(
                ErrorCode::E1004,
                format!("Operator {} not valid for Type", op.text),
                op.position,
            ));
        }
        Ok(())
    }

    /// `= expr`, `op= expr`, `++` or `--` after an assignment target.
    fn parse_update_tail(&mut self, class: Classification, op: &Token) -> ParseResult<()> {
        if class == Classification::Type {
            return Err(SyntaxError::new(
                ErrorCode::E1004,
                format!("Type missing identifier; unexpected token {op}"),
                op.position,
            ));
        }
        if !class.is_assignable() {
            return Err(SyntaxError::new(
                ErrorCode::E1004,
                "Cannot assign to read only expression",
                op.position,
            ));
        }
        self.cursor.advance();
        if op.kind != TokenKind::IncDec {
            self.parse_expression(false)?;
        }
        Ok(())
    }

    // ─── Control flow ───

    fn parse_if(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::IfStatement, |p| {
            p.cursor.advance();
            p.parse_condition()?;
            p.parse_statement(StmtContext::STATEMENT)?;
            // A dangling `else` binds to the nearest `if`.
            if p.cursor.eat(TokenKind::Else) {
                p.parse_statement(StmtContext::STATEMENT)?;
            }
            Ok(())
        })
    }

    fn parse_while(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::WhileLoop, |p| {
            p.cursor.advance();
            p.parse_condition()?;
            p.parse_statement(StmtContext::STATEMENT)?;
            Ok(())
        })
    }

    fn parse_do_while(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::DoWhileLoop, |p| {
            p.cursor.advance();
            p.parse_statement(StmtContext::STATEMENT)?;
            p.cursor.expect(TokenKind::While)?;
            p.parse_condition()?;
            p.cursor.expect(TokenKind::Semicolon)?;
            Ok(())
        })
    }

    /// `( expr )`
    fn parse_condition(&mut self) -> ParseResult<()> {
        self.cursor.expect(TokenKind::LParen)?;
        self.parse_expression(false)?;
        self.cursor.expect(TokenKind::RParen)?;
        Ok(())
    }

    /// `for ( Type name : expr ) stmt` or
    /// `for ( [init] ; [cond] ; [update] ) stmt`.
    ///
    /// The init clause is a statement and consumes its own `;`. If it turns
    /// out to be a foreach header the rest of the classic form is skipped.
    fn parse_for(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::ForLoop, |p| {
            p.cursor.advance();
            p.cursor.expect(TokenKind::LParen)?;

            let foreach = if p.cursor.eat(TokenKind::Semicolon) {
                false
            } else {
                p.parse_statement(StmtContext::ALLOW_FOREACH)?
            };

            if !foreach {
                if !p.cursor.eat(TokenKind::Semicolon) {
                    p.parse_expression(false)?;
                    p.cursor.expect(TokenKind::Semicolon)?;
                }
                p.parse_for_update()?;
            }

            p.cursor.expect(TokenKind::RParen)?;
            p.parse_statement(StmtContext::STATEMENT)?;
            Ok(())
        })
    }

    /// The optional update clause: an assignment, an update or a call,
    /// without a terminator.
    fn parse_for_update(&mut self) -> ParseResult<()> {
        match self.cursor.current_kind() {
            TokenKind::RParen => Ok(()),
            TokenKind::IncDec => self.parse_prefix_update(),
            _ => {
                let class = self.parse_type_or_reference()?;
                let after = self.cursor.current().clone();
                match after.kind {
                    TokenKind::Assign | TokenKind::CompoundAssign | TokenKind::IncDec => {
                        self.parse_update_tail(class, &after)
                    }
                    TokenKind::RParen => check_value_used(class, &after),
                    _ => Err(SyntaxError::unexpected("after type/reference", &after)),
                }
            }
        }
    }

    /// `try block (catch ( Type name ) block [finally block] | finally block)`
    fn parse_try(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::TryStatement, |p| {
            p.cursor.advance();
            p.parse_block()?;
            if p.cursor.eat(TokenKind::Catch) {
                p.cursor.expect(TokenKind::LParen)?;
                p.parse_type(false)?;
                p.cursor.expect(TokenKind::Ident)?;
                p.cursor.expect(TokenKind::RParen)?;
                p.parse_block()?;
                if p.cursor.eat(TokenKind::Finally) {
                    p.parse_block()?;
                }
            } else {
                p.cursor.expect(TokenKind::Finally)?;
                p.parse_block()?;
            }
            Ok(())
        })
    }
}

/// A reference standing alone as a statement must be a call.
fn check_value_used(class: Classification, at: &Token) -> ParseResult<()> {
    if class == Classification::ReferenceUnassignable {
        Ok(())
    } else {
        Err(SyntaxError::new(
            ErrorCode::E1005,
            format!("Reference value unused ({at})"),
            at.position,
        )
        .with_help("only method calls can stand alone as statements"))
    }
}
