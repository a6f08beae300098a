//! The top level: header and class list.

use mj_ir::TokenKind;

use crate::{ErrorContext, ParseResult, Parser};

impl Parser<'_> {
    /// `[header] class* Eot`
    pub(crate) fn parse_program(&mut self) -> ParseResult<()> {
        if self.dialect.is_extended() {
            self.parse_header()?;
        }
        while !self.cursor.is_at_end() {
            self.parse_class()?;
        }
        Ok(())
    }

    /// `package a.b.c ;` then `import a.b.(c | *) ;` any number of times.
    fn parse_header(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::PackageHeader, |p| {
            p.cursor.expect(TokenKind::Package)?;
            p.cursor.expect(TokenKind::Ident)?;
            while p.cursor.eat(TokenKind::Dot) {
                p.cursor.expect(TokenKind::Ident)?;
            }
            p.cursor.expect(TokenKind::Semicolon)?;
            Ok(())
        })?;

        while self.cursor.check(TokenKind::Import) {
            self.in_error_context(ErrorContext::Import, Self::parse_import)?;
        }
        Ok(())
    }

    fn parse_import(&mut self) -> ParseResult<()> {
        self.cursor.advance();
        self.cursor.expect(TokenKind::Ident)?;
        while self.cursor.eat(TokenKind::Dot) {
            let current = self.cursor.current();
            if current.is(TokenKind::BinaryOp) && current.text == "*" {
                // A wildcard ends the path.
                self.cursor.advance();
                break;
            }
            self.cursor.expect(TokenKind::Ident)?;
        }
        self.cursor.expect(TokenKind::Semicolon)?;
        Ok(())
    }
}
