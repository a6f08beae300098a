//! Types in positions where only a type can appear.
//!
//! Field and parameter types, `extends` clauses, `catch` parameters, the
//! operand of `new`, and generic arguments.

use mj_ir::TokenKind;

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `primitive | name (.name | <args>)*`, then `[]*` when `allow_array`.
    ///
    /// In the mini dialect `boolean` never takes array brackets.
    pub(crate) fn parse_type(&mut self, allow_array: bool) -> ParseResult<()> {
        let base = self.cursor.current_kind();
        if base.is_primitive() {
            self.cursor.advance();
        } else {
            self.cursor.expect(TokenKind::Ident)?;
            loop {
                if self.cursor.eat(TokenKind::Dot) {
                    self.cursor.expect(TokenKind::Ident)?;
                } else if self.dialect.is_extended() && self.cursor.eat(TokenKind::LeftChevron) {
                    // `<>` leaves the arguments to inference.
                    if !self.cursor.eat(TokenKind::RightChevron) {
                        self.parse_type_argument_list()?;
                    }
                } else {
                    break;
                }
            }
        }

        let mini_boolean = self.dialect.is_mini() && base == TokenKind::BooleanType;
        if allow_array && !mini_boolean {
            self.parse_array_brackets()?;
        }
        Ok(())
    }

    /// `Type (, Type)* >` after an opening `<`.
    pub(crate) fn parse_type_argument_list(&mut self) -> ParseResult<()> {
        loop {
            self.parse_type(true)?;
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RightChevron)?;
        Ok(())
    }

    /// `([])*`
    pub(crate) fn parse_array_brackets(&mut self) -> ParseResult<()> {
        while self.cursor.eat(TokenKind::LBracket) {
            self.cursor.expect(TokenKind::RBracket)?;
        }
        Ok(())
    }
}
