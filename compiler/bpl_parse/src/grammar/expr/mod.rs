//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//!
//! | Level | Operators | Associativity |
//! |---|---|---|
//! | equivalence | `<==>` | left |
//! | implication | `==>` / `<==` | right / left, not mixed |
//! | logical | `&&` or `\|\|` | left, one kind per chain |
//! | relational | `== != < > <= >= <:` | none |
//! | concat | `++` | left |
//! | additive | `+ -` | left |
//! | multiplicative | `* / div mod` | left |
//! | power | `**` | right |
//! | unary | `- !` | prefix |
//! | coercion | `e : T`, `hi : lo` | postfix |
//! | array | `e[..]` | postfix |
//!
//! Levels pass [`Operand`]s upward so that a bit range (`hi:lo`) can only
//! be consumed by the bracket that encloses it. Any operator that receives
//! one reports it and substitutes a placeholder.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry points, the precedence chain, coercion and indexing
//! - `operators.rs`: operator matching helpers
//! - `atom.rs`: literals, identifiers, calls, quantifiers, `let`, code expressions

mod atom;
mod operators;

use bpl_diagnostic::SyntaxError;
use bpl_ir::ast::{BinaryOp, Expr, ExprKind, Literal, NAryOp, UnaryOp};
use bpl_ir::{Span, TokenKind};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::recovery::{EXPR_START, TYPE_START};
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

/// Result of one precedence level.
pub(crate) enum Operand {
    Expr(Expr),
    BitRange(BitRange),
}

/// `upper : lower` bounds of a bitvector extract, before the enclosing
/// bracket has consumed them.
pub(crate) struct BitRange {
    pub upper: u32,
    pub lower: u32,
    pub span: Span,
}

impl Operand {
    fn span(&self) -> Span {
        match self {
            Operand::Expr(e) => e.span,
            Operand::BitRange(r) => r.span,
        }
    }

    /// The expression, or a placeholder for a bit range that has already
    /// been reported.
    fn into_expr_unchecked(self) -> Expr {
        match self {
            Operand::Expr(e) => e,
            Operand::BitRange(r) => Expr::dummy(r.span),
        }
    }
}

impl Parser<'_> {
    /// Parse a full expression.
    ///
    /// Uses `ensure_sufficient_stack` since expressions nest through
    /// parentheses, quantifiers and calls.
    pub(crate) fn parse_expression(&mut self) -> Expr {
        ensure_sufficient_stack(|| {
            let operand = self.parse_equivalence();
            self.operand_to_expr(operand)
        })
    }

    /// `Expression {"," Expression}`
    pub(crate) fn parse_expressions(&mut self) -> Vec<Expr> {
        let mut exprs = vec![self.parse_expression()];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expression());
        }
        exprs
    }

    /// Argument list contents: empty, or `Expressions`.
    pub(crate) fn parse_opt_expressions(&mut self) -> Vec<Expr> {
        if EXPR_START.contains(self.current_kind()) {
            self.parse_expressions()
        } else {
            Vec::new()
        }
    }

    /// A full expression that may also be a bit range.
    fn parse_operand(&mut self) -> Operand {
        ensure_sufficient_stack(|| self.parse_equivalence())
    }

    /// Unwrap an operand about to be used by an operator, rejecting a bit
    /// range.
    fn operand_to_expr(&mut self, operand: Operand) -> Expr {
        match operand {
            Operand::Expr(e) => e,
            Operand::BitRange(range) => {
                self.semantic_error_at(range.span, "bitvector bounds in illegal position");
                Expr::dummy(range.span)
            }
        }
    }

    fn parse_equivalence(&mut self) -> Operand {
        let mut left = self.parse_implication(false);
        while self.eat(TokenKind::Iff) {
            let lhs = self.operand_to_expr(left);
            let rhs = self.parse_implication(false);
            let rhs = self.operand_to_expr(rhs);
            left = Operand::Expr(Expr::binary(BinaryOp::Iff, lhs, rhs));
        }
        left
    }

    /// `==>` nests to the right. `<==` chains to the left and is stored with
    /// its operands swapped. Inside the right side of a `==>`, a `<==` is a
    /// mixture that needs parentheses.
    fn parse_implication(&mut self, no_explies: bool) -> Operand {
        let left = self.parse_logical();
        match self.current_kind() {
            TokenKind::Implies => {
                self.advance();
                let lhs = self.operand_to_expr(left);
                let rhs = ensure_sufficient_stack(|| self.parse_implication(true));
                let rhs = self.operand_to_expr(rhs);
                Operand::Expr(Expr::binary(BinaryOp::Imp, lhs, rhs))
            }
            TokenKind::Explies => {
                let mut acc = self.operand_to_expr(left);
                let mut first = true;
                while self.eat(TokenKind::Explies) {
                    if first && no_explies {
                        self.semantic_error(
                            "illegal mixture of ==> and <==, use parentheses to disambiguate",
                        );
                    }
                    first = false;
                    let rhs = self.parse_logical();
                    let rhs = self.operand_to_expr(rhs);
                    acc = Expr::binary(BinaryOp::Imp, rhs, acc);
                }
                Operand::Expr(acc)
            }
            _ => left,
        }
    }

    /// A chain of `&&` or of `||`. The first operator fixes the chain's
    /// kind; a different one later in the chain is reported and parsing
    /// continues with it.
    fn parse_logical(&mut self) -> Operand {
        let left = self.parse_relational();
        let Some(chain_op) = self.match_logical_op() else {
            return left;
        };
        let mut acc = self.operand_to_expr(left);
        while let Some(op) = self.match_logical_op() {
            if op != chain_op {
                self.syntax_error(SyntaxError::Message(
                    "illegal mixture of && and ||, use parentheses to disambiguate",
                ));
            }
            self.advance();
            let rhs = self.parse_relational();
            let rhs = self.operand_to_expr(rhs);
            acc = Expr::binary(op, acc, rhs);
        }
        Operand::Expr(acc)
    }

    /// At most one relational operator; `a < b < c` leaves the second `<`
    /// for the caller to reject.
    fn parse_relational(&mut self) -> Operand {
        let left = self.parse_concat();
        let Some(op) = self.match_relational_op() else {
            return left;
        };
        self.advance();
        let lhs = self.operand_to_expr(left);
        let rhs = self.parse_concat();
        let rhs = self.operand_to_expr(rhs);
        Operand::Expr(Expr::binary(op, lhs, rhs))
    }

    fn parse_concat(&mut self) -> Operand {
        let mut left = self.parse_additive();
        while self.eat(TokenKind::Concat) {
            let lhs = self.operand_to_expr(left);
            let rhs = self.parse_additive();
            let rhs = self.operand_to_expr(rhs);
            let span = lhs.span.merge(rhs.span);
            left = Operand::Expr(Expr::nary(NAryOp::BvConcat, vec![lhs, rhs], span));
        }
        left
    }

    fn parse_additive(&mut self) -> Operand {
        let mut left = self.parse_multiplicative();
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let lhs = self.operand_to_expr(left);
            let rhs = self.parse_multiplicative();
            let rhs = self.operand_to_expr(rhs);
            left = Operand::Expr(Expr::binary(op, lhs, rhs));
        }
        left
    }

    fn parse_multiplicative(&mut self) -> Operand {
        let mut left = self.parse_power();
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let lhs = self.operand_to_expr(left);
            let rhs = self.parse_power();
            let rhs = self.operand_to_expr(rhs);
            left = Operand::Expr(Expr::binary(op, lhs, rhs));
        }
        left
    }

    /// `**` is right-associative.
    fn parse_power(&mut self) -> Operand {
        let left = self.parse_unary();
        if !self.eat(TokenKind::Pow) {
            return left;
        }
        let lhs = self.operand_to_expr(left);
        let rhs = ensure_sufficient_stack(|| self.parse_power());
        let rhs = self.operand_to_expr(rhs);
        Operand::Expr(Expr::binary(BinaryOp::Pow, lhs, rhs))
    }

    fn parse_unary(&mut self) -> Operand {
        let op = match self.current_kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Not => UnaryOp::Not,
            kind if EXPR_START.contains(kind) => return self.parse_coercion(),
            _ => {
                self.syntax_error(SyntaxError::Invalid("UnaryExpression"));
                return Operand::Expr(Expr::dummy(self.current_span()));
            }
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary());
        let operand = self.operand_to_expr(operand);
        Operand::Expr(Expr::unary(op, operand, start))
    }

    /// `ArrayExpression {":" (Type | Nat)}`
    ///
    /// `e : T` retypes `e`. `n : m` with an integer literal `n` makes the bit
    /// range `[n:m]`.
    fn parse_coercion(&mut self) -> Operand {
        let mut operand = Operand::Expr(self.parse_array());
        while self.eat(TokenKind::Colon) {
            if TYPE_START.contains(self.current_kind()) {
                let ty = self.parse_type();
                let expr = self.operand_to_expr(operand);
                let span = expr.span.merge(ty.span);
                operand = Operand::Expr(Expr::nary(NAryOp::TypeCoercion(ty), vec![expr], span));
            } else if self.check(TokenKind::Digits) {
                let token = self.advance();
                let lower = self.parse_nat_literal(&token.text);
                let lower = self.bit_bound(&lower);
                let span = operand.span().merge(token.span);
                let upper = match operand {
                    Operand::Expr(Expr {
                        kind: ExprKind::Literal(Literal::Int(value)),
                        ..
                    }) => self.bit_bound(&value),
                    _ => {
                        self.semantic_error("arguments of extract need to be integer literals");
                        0
                    }
                };
                operand = Operand::BitRange(BitRange { upper, lower, span });
            } else {
                self.syntax_error(SyntaxError::Invalid("CoercionExpression"));
            }
        }
        operand
    }

    fn bit_bound(&mut self, value: &BigInt) -> u32 {
        value.to_u32().unwrap_or_else(|| {
            self.semantic_error("bitvector bounds out of range");
            0
        })
    }

    /// `AtomExpression {"[" [Index {"," Index}] [":=" Expression] "]"}`
    ///
    /// A single bit-range index makes a bitvector extract. A `:=` makes a map
    /// store, anything else a map select.
    fn parse_array(&mut self) -> Expr {
        let mut expr = self.parse_atom();
        while self.check(TokenKind::LBracket) {
            self.advance();
            let mut indexes = Vec::new();
            let mut extract: Option<BitRange> = None;
            let mut stored: Option<Expr> = None;

            if EXPR_START.contains(self.current_kind()) {
                match self.parse_operand() {
                    Operand::BitRange(range) => extract = Some(range),
                    Operand::Expr(index) => indexes.push(index),
                }
                while self.eat(TokenKind::Comma) {
                    let index = self.parse_operand();
                    if extract.is_some() || matches!(index, Operand::BitRange(_)) {
                        self.semantic_error("bitvectors only have one dimension");
                    }
                    indexes.push(index.into_expr_unchecked());
                }
                if self.eat(TokenKind::Assign) {
                    let value = self.parse_operand();
                    if extract.is_some() || matches!(value, Operand::BitRange(_)) {
                        self.semantic_error("assignment to bitvectors is not possible");
                    }
                    stored = Some(value.into_expr_unchecked());
                }
            } else if self.eat(TokenKind::Assign) {
                stored = Some(self.parse_expression());
            }
            self.expect(TokenKind::RBracket);

            let span = expr.span.merge(self.previous_span());
            expr = if let Some(value) = stored {
                let arity = indexes.len();
                let mut args = Vec::with_capacity(arity + 2);
                args.push(expr);
                args.extend(indexes);
                args.push(value);
                Expr::nary(NAryOp::MapStore { arity }, args, span)
            } else if let Some(range) = extract {
                Expr::nary(
                    NAryOp::BvExtract {
                        upper: range.upper,
                        lower: range.lower,
                    },
                    vec![expr],
                    span,
                )
            } else {
                let arity = indexes.len();
                let mut args = Vec::with_capacity(arity + 1);
                args.push(expr);
                args.extend(indexes);
                Expr::nary(NAryOp::MapSelect { arity }, args, span)
            };
        }
        expr
    }
}
