//! Atoms: literals, identifiers and calls, `old`, coercions, parenthesized
//! forms (quantifiers, `let`), `if-then-else` and code expressions.
//!
//! Malformed numeric literals are reported and replaced by zero so the
//! surrounding expression still parses.

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{
    ArithCoercion, BigDec, BigFloat, Block, CodeExpr, Expr, ExprKind, LetExpr, LetVar, Literal,
    NAryOp, QuantifierExpr, QuantifierKind, RoundingMode, TransferCmd, TransferKind,
};
use bpl_ir::ast::{parse_bv_literal, parse_nat};
use bpl_ir::{Span, Token, TokenKind};
use num_bigint::BigInt;
use num_traits::Zero;

use super::Operand;
use crate::grammar::attr::strip_quotes;
use crate::grammar::stmt::LabelOrCmd;
use crate::recovery::{CMD_START, EXPR_START};
use crate::Parser;

/// Significand and exponent sizes of the fallback for a malformed float.
const FALLBACK_FLOAT_SIZES: (u32, u32) = (24, 8);

impl Parser<'_> {
    pub(crate) fn parse_atom(&mut self) -> Expr {
        let token = self.current();
        let start = token.span;
        match token.kind {
            TokenKind::False
            | TokenKind::True
            | TokenKind::RoundNearestTiesToEven
            | TokenKind::RoundNearestTiesToAway
            | TokenKind::RoundTowardPositive
            | TokenKind::RoundTowardNegative
            | TokenKind::RoundTowardZero
            | TokenKind::Digits
            | TokenKind::Decimal
            | TokenKind::DecFloat
            | TokenKind::Float
            | TokenKind::BvLit
            | TokenKind::String => {
                self.advance();
                let literal = self.literal_value(token);
                Expr::literal(literal, start)
            }
            TokenKind::Ident => self.parse_ident_or_call(),
            TokenKind::Old => {
                self.advance();
                self.expect(TokenKind::LParen);
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen);
                Expr::new(ExprKind::Old(Box::new(inner)), self.span_from(start))
            }
            TokenKind::Int | TokenKind::Real => {
                let coercion = if token.kind == TokenKind::Int {
                    ArithCoercion::ToInt
                } else {
                    ArithCoercion::ToReal
                };
                self.advance();
                self.expect(TokenKind::LParen);
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen);
                Expr::nary(
                    NAryOp::ArithCoercion(coercion),
                    vec![inner],
                    self.span_from(start),
                )
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::If => self.parse_if_then_else(),
            TokenKind::LCodeBrace => self.parse_code_expr(),
            _ => {
                self.syntax_error(SyntaxError::Invalid("AtomExpression"));
                Expr::dummy(start)
            }
        }
    }

    /// Value of an already consumed literal token.
    fn literal_value(&mut self, token: &Token) -> Literal {
        match token.kind {
            TokenKind::True => Literal::Bool(true),
            TokenKind::RoundNearestTiesToEven => Literal::RoundingMode(RoundingMode::NearestTiesToEven),
            TokenKind::RoundNearestTiesToAway => Literal::RoundingMode(RoundingMode::NearestTiesToAway),
            TokenKind::RoundTowardPositive => Literal::RoundingMode(RoundingMode::TowardPositive),
            TokenKind::RoundTowardNegative => Literal::RoundingMode(RoundingMode::TowardNegative),
            TokenKind::RoundTowardZero => Literal::RoundingMode(RoundingMode::TowardZero),
            TokenKind::Digits => Literal::Int(self.parse_nat_literal(&token.text)),
            TokenKind::Decimal | TokenKind::DecFloat => {
                Literal::Real(BigDec::parse(&token.text).unwrap_or_else(|| {
                    self.semantic_error("incorrectly formatted number");
                    BigDec::zero()
                }))
            }
            TokenKind::Float => Literal::Float(BigFloat::parse(&token.text).unwrap_or_else(|| {
                self.semantic_error("incorrectly formatted floating point");
                let (significand, exponent) = FALLBACK_FLOAT_SIZES;
                BigFloat::zero(significand, exponent)
            })),
            TokenKind::BvLit => {
                let (value, width) = parse_bv_literal(&token.text).unwrap_or_else(|| {
                    self.semantic_error("incorrectly formatted bitvector");
                    (BigInt::zero(), 0)
                });
                Literal::Bv { value, width }
            }
            TokenKind::String => Literal::String(strip_quotes(&token.text).to_string()),
            _ => Literal::Bool(false),
        }
    }

    /// Value of a `Digits` token, or zero after reporting.
    pub(crate) fn parse_nat_literal(&mut self, text: &str) -> BigInt {
        parse_nat(text).unwrap_or_else(|| {
            self.semantic_error("incorrectly formatted number");
            BigInt::zero()
        })
    }

    /// `Ident ["(" [Expressions] ")"]`
    fn parse_ident_or_call(&mut self) -> Expr {
        let id = self.expect_ident();
        if !self.eat(TokenKind::LParen) {
            return Expr::ident(id.name, id.span);
        }
        let args = self.parse_opt_expressions();
        self.expect(TokenKind::RParen);
        Expr::nary(NAryOp::FunctionCall(id.name), args, self.span_from(id.span))
    }

    /// `"(" (Expression | Quantifier | LetExpr) ")"`
    fn parse_paren(&mut self) -> Expr {
        let start = self.advance().span;
        let kind = self.current_kind();
        let expr = if EXPR_START.contains(kind) {
            match self.parse_operand() {
                Operand::Expr(e) => e,
                Operand::BitRange(range) => {
                    self.semantic_error("parentheses around bitvector bounds are not allowed");
                    Expr::dummy(range.span)
                }
            }
        } else if let Some(quantifier) = quantifier_kind(kind) {
            self.advance();
            self.parse_quantifier_body(quantifier, start)
        } else if kind == TokenKind::Var {
            self.parse_let_expr()
        } else {
            self.syntax_error(SyntaxError::Invalid("AtomExpression"));
            Expr::dummy(start)
        };
        self.expect(TokenKind::RParen);
        expr
    }

    /// `(TypeParams [BoundVars] | BoundVars) "::" {AttributeOrTrigger} Expression`
    ///
    /// A quantifier that ends up binding nothing (only after an error) is
    /// replaced by its body.
    fn parse_quantifier_body(&mut self, kind: QuantifierKind, start: Span) -> Expr {
        let mut type_params = Vec::new();
        let mut bound_vars = Vec::new();
        if self.check(TokenKind::Lt) {
            type_params = self.parse_type_params();
            if self.check(TokenKind::Ident) || self.check(TokenKind::LBrace) {
                bound_vars = self.parse_bound_vars();
            }
        } else if self.check(TokenKind::Ident) || self.check(TokenKind::LBrace) {
            bound_vars = self.parse_bound_vars();
        } else {
            self.syntax_error(SyntaxError::Invalid("QuantifierBody"));
        }
        self.expect(TokenKind::QSep);

        let mut attributes = Vec::new();
        let mut triggers = Vec::new();
        while self.check(TokenKind::LBrace) {
            self.parse_attribute_or_trigger(&mut attributes, &mut triggers);
        }
        let body = self.parse_expression();

        if kind == QuantifierKind::Lambda && !triggers.is_empty() {
            self.semantic_error("triggers not allowed in lambda expressions");
            triggers.clear();
        }
        if type_params.is_empty() && bound_vars.is_empty() {
            return body;
        }
        let span = start.merge(body.span);
        Expr::new(
            ExprKind::Quantifier(Box::new(QuantifierExpr {
                kind,
                type_params,
                bound_vars,
                attributes,
                triggers,
                body,
            })),
            span,
        )
    }

    /// `"var" LetVar {"," LetVar} ":=" Expressions ";" {Attribute} Expression`
    fn parse_let_expr(&mut self) -> Expr {
        let start = self.advance().span;
        let mut vars = vec![self.parse_let_var()];
        while self.eat(TokenKind::Comma) {
            vars.push(self.parse_let_var());
        }
        self.expect(TokenKind::Assign);
        let values = self.parse_expressions();
        self.expect(TokenKind::Semicolon);
        let attributes = self.parse_attributes();
        let body = self.parse_expression();
        let span = start.merge(body.span);
        Expr::new(
            ExprKind::Let(Box::new(LetExpr {
                vars,
                values,
                attributes,
                body,
            })),
            span,
        )
    }

    fn parse_let_var(&mut self) -> LetVar {
        let attributes = self.parse_attributes();
        let id = self.expect_ident();
        LetVar {
            name: id.name,
            attributes,
            span: id.span,
        }
    }

    /// `"if" Expression "then" Expression "else" Expression`
    fn parse_if_then_else(&mut self) -> Expr {
        let start = self.advance().span;
        let cond = self.parse_expression();
        self.expect(TokenKind::Then);
        let then_expr = self.parse_expression();
        self.expect(TokenKind::Else);
        let else_expr = self.parse_expression();
        let span = start.merge(else_expr.span);
        Expr::nary(NAryOp::IfThenElse, vec![cond, then_expr, else_expr], span)
    }

    /// `"|{" {LocalVars} SpecBlock {SpecBlock} "}|"`
    fn parse_code_expr(&mut self) -> Expr {
        let start = self.advance().span;
        let locals = self.parse_local_vars();
        let mut blocks = vec![self.parse_spec_block()];
        while self.check(TokenKind::Ident) {
            blocks.push(self.parse_spec_block());
        }
        self.expect(TokenKind::RCodeBrace);
        Expr::new(
            ExprKind::Code(Box::new(CodeExpr { locals, blocks })),
            self.span_from(start),
        )
    }

    /// `Ident ":" {LabelOrCmd} ("goto" Idents | "return" Expression) ";"`
    fn parse_spec_block(&mut self) -> Block {
        let label = self.expect_ident();
        self.expect(TokenKind::Colon);
        let mut cmds = Vec::new();
        while CMD_START.contains(self.current_kind()) {
            match self.parse_label_or_cmd() {
                Some(LabelOrCmd::Cmd(cmd)) => cmds.push(cmd),
                Some(LabelOrCmd::Label(_)) => {
                    self.semantic_error("code expression blocks can only have one label");
                }
                None => {}
            }
        }

        let transfer_start = self.current_span();
        let kind = if self.eat(TokenKind::Goto) {
            TransferKind::Goto(self.parse_idents())
        } else if self.eat(TokenKind::Return) {
            TransferKind::ReturnExpr(self.parse_expression())
        } else {
            self.syntax_error(SyntaxError::Invalid("SpecBlock"));
            TransferKind::Return
        };
        let transfer = TransferCmd {
            kind,
            span: self.span_from(transfer_start),
        };
        self.expect(TokenKind::Semicolon);

        Block {
            span: self.span_from(label.span),
            label: label.name,
            cmds,
            transfer,
        }
    }
}

fn quantifier_kind(kind: TokenKind) -> Option<QuantifierKind> {
    match kind {
        TokenKind::Forall => Some(QuantifierKind::Forall),
        TokenKind::Exists => Some(QuantifierKind::Exists),
        TokenKind::Lambda => Some(QuantifierKind::Lambda),
        _ => None,
    }
}
