//! Type-or-Reference disambiguation.
//!
//! `a.b[3].c(x)` and `a.b<C>[]` start the same way. Both are parsed by one
//! production that reads the leading name and then a loop of suffixes,
//! narrowing a [`Classification`] as each suffix rules one reading out.
//! A suffix that contradicts the narrowed classification is a syntax
//! error.
//!
//! | suffix      | requires            | result                          |
//! |-------------|---------------------|---------------------------------|
//! | `.name`     |                     | unchanged, assignable, callable |
//! | `[]`        | not `Reference`     | `Type`, ends the prefix         |
//! | `[expr]`    | not `Type`          | `Reference`, assignable         |
//! | `<T, ...>`  | not `Reference`     | `Type` (extended only)          |
//! | `(args)`    | not `Type`, callable| `Reference`, not assignable     |

use bitflags::bitflags;
use mj_diagnostic::ErrorCode;
use mj_ir::TokenKind;
use tracing::trace;

use crate::{ErrorContext, ParseResult, Parser, SyntaxError};

/// What a Type-or-Reference prefix turned out to be.
///
/// Narrows monotonically: `Undetermined` becomes one of the other three
/// and never changes back.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Classification {
    /// A bare or dotted name. Usable as a type or as an assignable
    /// reference.
    Undetermined,
    Type,
    /// A value that can be assigned to (`a[i]`, `a.b`).
    Reference,
    /// A value that cannot be assigned to: anything ending in a call.
    ReferenceUnassignable,
}

impl Classification {
    /// Whether a declaration may use this as its type.
    pub fn can_be_type(self) -> bool {
        matches!(self, Classification::Undetermined | Classification::Type)
    }

    /// Whether this may appear on the left of an assignment.
    pub fn is_assignable(self) -> bool {
        matches!(self, Classification::Undetermined | Classification::Reference)
    }
}

bitflags! {
    /// What the most recent suffix permits next.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    struct Suffix: u8 {
        /// The prefix so far denotes a storage location.
        const ASSIGNABLE = 1 << 0;
        /// The prefix so far ends in a name, so `(` may follow.
        const CALLABLE = 1 << 1;
    }
}

impl Parser<'_> {
    /// Parse a Type-or-Reference prefix and classify it.
    pub(crate) fn parse_type_or_reference(&mut self) -> ParseResult<Classification> {
        let class = self.parse_type_or_reference_inner()?;
        trace!(?class, "type_or_reference");
        Ok(class)
    }

    fn parse_type_or_reference_inner(&mut self) -> ParseResult<Classification> {
        let base = self.cursor.current_kind();
        if base.is_primitive() {
            self.cursor.advance();
            if !(self.dialect.is_mini() && base == TokenKind::BooleanType) {
                self.parse_array_brackets()?;
            }
            return Ok(Classification::Type);
        }

        self.cursor.expect_any(&[TokenKind::Ident, TokenKind::This])?;

        let mut class = Classification::Undetermined;
        let mut state = Suffix::CALLABLE;

        loop {
            match self.cursor.current_kind() {
                TokenKind::Dot => {
                    self.cursor.advance();
                    self.cursor.expect(TokenKind::Ident)?;
                    state = Suffix::ASSIGNABLE | Suffix::CALLABLE;
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    if self.cursor.check(TokenKind::RBracket) {
                        if class == Classification::Reference {
                            return Err(SyntaxError::contradiction(
                                format!(
                                    "Invalid type or reference; Expected expression after '[', found {}",
                                    self.cursor.current()
                                ),
                                self.cursor.current(),
                            ));
                        }
                        self.cursor.advance();
                        self.parse_array_brackets()?;
                        return Ok(Classification::Type);
                    }

                    if class == Classification::Type {
                        return Err(SyntaxError::contradiction(
                            format!(
                                "Invalid type or reference; Types cannot evaluate expressions in brackets. Expected ']', found {}",
                                self.cursor.current()
                            ),
                            self.cursor.current(),
                        ));
                    }
                    class = Classification::Reference;
                    self.parse_expression(false)?;
                    self.cursor.expect(TokenKind::RBracket)?;
                    if self.dialect.is_mini() {
                        return Ok(Classification::Reference);
                    }
                    state = Suffix::ASSIGNABLE;
                }
                TokenKind::LeftChevron if self.dialect.is_extended() => {
                    if class == Classification::Reference {
                        return Err(SyntaxError::contradiction(
                            "Generics syntax not allowed in reference, only in type",
                            self.cursor.current(),
                        ));
                    }
                    self.cursor.advance();
                    class = Classification::Type;
                    self.parse_type_argument_list()?;
                    state = Suffix::empty();
                }
                TokenKind::LParen => {
                    if class == Classification::Type {
                        return Err(SyntaxError::contradiction(
                            "Invalid type or reference; cannot call method in type declaration",
                            self.cursor.current(),
                        ));
                    }
                    if !state.contains(Suffix::CALLABLE) {
                        return Err(SyntaxError::new(
                            ErrorCode::E1007,
                            "Unexpected token '('; only method identifiers can be called as functions",
                            self.cursor.current().position,
                        ));
                    }
                    self.cursor.advance();
                    class = Classification::Reference;
                    self.parse_arguments()?;
                    if self.dialect.is_mini() {
                        return Ok(Classification::ReferenceUnassignable);
                    }
                    state = Suffix::empty();
                }
                _ => break,
            }
        }

        if class == Classification::Reference && !state.contains(Suffix::ASSIGNABLE) {
            Ok(Classification::ReferenceUnassignable)
        } else {
            Ok(class)
        }
    }

    /// The rest of `( args )` after the opening parenthesis. A trailing
    /// comma is allowed.
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<()> {
        self.in_error_context(ErrorContext::Arguments, |p| {
            while !p.cursor.check(TokenKind::RParen) {
                p.parse_expression(false)?;
                if !p.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            p.cursor.expect(TokenKind::RParen)?;
            Ok(())
        })
    }
}
