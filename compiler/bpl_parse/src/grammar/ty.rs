//! Type parsing.
//!
//! ```text
//! Type     = TypeAtom | Ident [TypeArgs] | MapType
//! TypeAtom = "int" | "real" | "bool" | "(" Type ")"
//! TypeArgs = (TypeAtom | Ident) [TypeArgs] | MapType
//! MapType  = [TypeParams] "[" [Type {"," Type}] "]" Type
//! ```
//!
//! An unescaped `bvNN` name with no arguments is a bitvector type. Every
//! other name stays unresolved for a later pass.

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{BasicType, Ident, MapType, Type, TypeKind};
use bpl_ir::{bitvector_width, Span, TokenKind};

use crate::recovery::TYPE_START;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> Type {
        ensure_sufficient_stack(|| self.parse_type_inner())
    }

    fn parse_type_inner(&mut self) -> Type {
        match self.current_kind() {
            TokenKind::Int | TokenKind::Real | TokenKind::Bool | TokenKind::LParen => {
                self.parse_type_atom()
            }
            TokenKind::Ident => {
                let start = self.current_span();
                let (name, escaped) = self.expect_ident_escaped();
                let args = if TYPE_START.contains(self.current_kind()) {
                    self.parse_type_args()
                } else {
                    Vec::new()
                };
                let span = self.span_from(start);
                named_type(name, escaped, args, span)
            }
            TokenKind::LBracket | TokenKind::Lt => self.parse_map_type(),
            _ => {
                self.syntax_error(SyntaxError::Invalid("Type"));
                Type::dummy(self.current_span())
            }
        }
    }

    fn parse_type_atom(&mut self) -> Type {
        let token = self.current();
        let basic = match token.kind {
            TokenKind::Int => BasicType::Int,
            TokenKind::Real => BasicType::Real,
            TokenKind::Bool => BasicType::Bool,
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_type();
                self.expect(TokenKind::RParen);
                return inner;
            }
            _ => {
                self.syntax_error(SyntaxError::Invalid("TypeAtom"));
                return Type::dummy(token.span);
            }
        };
        self.advance();
        Type::basic(basic, token.span)
    }

    /// Arguments of a type constructor application. A map type swallows the
    /// rest of the list.
    fn parse_type_args(&mut self) -> Vec<Type> {
        let mut args = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::Int | TokenKind::Real | TokenKind::Bool | TokenKind::LParen => {
                    args.push(self.parse_type_atom());
                }
                TokenKind::Ident => {
                    let (name, escaped) = self.expect_ident_escaped();
                    let span = name.span;
                    args.push(named_type(name, escaped, Vec::new(), span));
                }
                TokenKind::LBracket | TokenKind::Lt => {
                    args.push(self.parse_map_type());
                    break;
                }
                _ => {
                    self.syntax_error(SyntaxError::Invalid("TypeArgs"));
                    break;
                }
            }
            if !TYPE_START.contains(self.current_kind()) {
                break;
            }
        }
        args
    }

    fn parse_map_type(&mut self) -> Type {
        let start = self.current_span();
        let type_params = if self.check(TokenKind::Lt) {
            self.parse_type_params()
        } else {
            Vec::new()
        };
        self.expect(TokenKind::LBracket);
        let mut args = Vec::new();
        if TYPE_START.contains(self.current_kind()) {
            args.push(self.parse_type());
            while self.eat(TokenKind::Comma) {
                args.push(self.parse_type());
            }
        }
        self.expect(TokenKind::RBracket);
        let result = self.parse_type();
        Type::new(
            TypeKind::Map(Box::new(MapType {
                type_params,
                args,
                result,
            })),
            self.span_from(start),
        )
    }
}

fn named_type(name: Ident, escaped: bool, args: Vec<Type>, span: Span) -> Type {
    if !escaped && args.is_empty() {
        if let Some(width) = bitvector_width(&name.name) {
            return Type::new(TypeKind::Bv(width), span);
        }
    }
    Type::unresolved(name.name, args, span)
}
