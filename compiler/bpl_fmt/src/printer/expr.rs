//! Expressions.
//!
//! Operands are parenthesized only when the grammar would otherwise group
//! them differently. `if-then-else` and type coercions always carry their
//! own parentheses, which makes them atoms for every context.

use bpl_ir::ast::{
    BinaryOp, CodeExpr, Expr, ExprKind, LetExpr, Literal, NAryOp, QuantifierExpr,
};

use super::Printer;
use crate::emitter::Emitter;

/// Binding strength of `++`.
const CONCAT_PRECEDENCE: u8 = 5;
const UNARY_PRECEDENCE: u8 = 9;
const ATOM_PRECEDENCE: u8 = 10;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
    None,
}

fn assoc(op: BinaryOp) -> Assoc {
    match op {
        BinaryOp::Imp | BinaryOp::Pow => Assoc::Right,
        BinaryOp::Eq
        | BinaryOp::Neq
        | BinaryOp::Lt
        | BinaryOp::Gt
        | BinaryOp::Le
        | BinaryOp::Ge
        | BinaryOp::Subtype => Assoc::None,
        _ => Assoc::Left,
    }
}

fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::NAry { op, .. } => match op {
            NAryOp::Binary(op) => op.precedence(),
            NAryOp::BvConcat => CONCAT_PRECEDENCE,
            NAryOp::Unary(_) => UNARY_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        },
        _ => ATOM_PRECEDENCE,
    }
}

/// `&&` and `||` share a level but may not be chained together.
fn is_other_logical(op: BinaryOp, operand: &Expr) -> bool {
    matches!(op, BinaryOp::And | BinaryOp::Or)
        && matches!(
            operand.as_binary(),
            Some((inner @ (BinaryOp::And | BinaryOp::Or), _, _)) if inner != op
        )
}

impl<E: Emitter> Printer<E> {
    pub fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(lit) => self.literal(lit),
            ExprKind::Ident(name) => self.ident(name),
            ExprKind::Old(inner) => {
                self.text("old(");
                self.expr(inner);
                self.text(")");
            }
            ExprKind::NAry { op, args } => self.nary(op, args),
            ExprKind::Quantifier(q) => self.quantifier(q),
            ExprKind::Let(let_expr) => self.let_expr(let_expr),
            ExprKind::Code(code) => self.code_expr(code),
        }
    }

    fn operand(&mut self, expr: &Expr, parenthesize: bool) {
        if parenthesize {
            self.text("(");
            self.expr(expr);
            self.text(")");
        } else {
            self.expr(expr);
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Bool(b) => self.text(if *b { "true" } else { "false" }),
            Literal::Int(value) => self.text(&value.to_string()),
            Literal::Real(value) => self.text(&value.to_string()),
            Literal::Float(value) => self.text(&value.to_string()),
            Literal::Bv { value, width } => self.text(&format!("{value}bv{width}")),
            Literal::String(s) => {
                self.text("\"");
                self.text(s);
                self.text("\"");
            }
            Literal::RoundingMode(mode) => self.text(mode.as_str()),
        }
    }

    fn nary(&mut self, op: &NAryOp, args: &[Expr]) {
        match (op, args) {
            (NAryOp::Binary(op), [left, right]) => self.binary(*op, left, right),
            (NAryOp::Unary(op), [operand]) => {
                self.text(op.as_symbol());
                self.operand(operand, precedence(operand) < UNARY_PRECEDENCE);
            }
            (NAryOp::BvConcat, [left, right]) => {
                self.operand(left, precedence(left) < CONCAT_PRECEDENCE);
                self.text(" ++ ");
                self.operand(right, precedence(right) <= CONCAT_PRECEDENCE);
            }
            (NAryOp::FunctionCall(name), _) => {
                self.ident(name);
                self.text("(");
                self.comma_list(args, |p, e| p.expr(e));
                self.text(")");
            }
            (NAryOp::MapSelect { .. }, [map, indexes @ ..]) => {
                self.map_base(map);
                self.text("[");
                self.comma_list(indexes, |p, e| p.expr(e));
                self.text("]");
            }
            (NAryOp::MapStore { .. }, [map, rest @ .., value]) => {
                self.map_base(map);
                self.text("[");
                self.comma_list(rest, |p, e| p.expr(e));
                if !rest.is_empty() {
                    self.space();
                }
                self.text(":= ");
                self.expr(value);
                self.text("]");
            }
            (NAryOp::BvExtract { upper, lower }, [bv]) => {
                self.map_base(bv);
                self.text(&format!("[{upper}:{lower}]"));
            }
            (NAryOp::IfThenElse, [cond, then_expr, else_expr]) => {
                self.text("(if ");
                self.expr(cond);
                self.text(" then ");
                self.expr(then_expr);
                self.text(" else ");
                self.expr(else_expr);
                self.text(")");
            }
            (NAryOp::ArithCoercion(coercion), [inner]) => {
                self.text(coercion.as_str());
                self.text("(");
                self.expr(inner);
                self.text(")");
            }
            (NAryOp::TypeCoercion(ty), [inner]) => {
                self.text("(");
                self.operand(inner, precedence(inner) < ATOM_PRECEDENCE);
                self.text(" : ");
                self.ty(ty);
                self.text(")");
            }
            // Arity mismatches only come from hand-built trees.
            (op, args) => {
                self.text(&format!("{op:?}("));
                self.comma_list(args, |p, e| p.expr(e));
                self.text(")");
            }
        }
    }

    fn binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {
        let p = op.precedence();
        let (lp, rp) = (precedence(left), precedence(right));
        let (paren_left, paren_right) = match assoc(op) {
            Assoc::Left => (lp < p || is_other_logical(op, left), rp <= p),
            Assoc::Right => (lp <= p, rp < p),
            Assoc::None => (lp <= p, rp <= p),
        };
        self.operand(left, paren_left);
        self.space();
        self.text(op.as_symbol());
        self.space();
        self.operand(right, paren_right);
    }

    /// The base of `[...]` must be an atom.
    fn map_base(&mut self, base: &Expr) {
        self.operand(base, precedence(base) < ATOM_PRECEDENCE);
    }

    fn quantifier(&mut self, q: &QuantifierExpr) {
        self.text("(");
        self.text(q.kind.as_str());
        self.space();
        if !q.type_params.is_empty() {
            self.type_params(&q.type_params);
            if !q.bound_vars.is_empty() {
                self.space();
            }
        }
        self.comma_list(&q.bound_vars, |p, var| {
            p.attributes(&var.attributes);
            p.ident(&var.name);
            p.text(": ");
            p.ty(&var.ty);
        });
        self.text(" :: ");
        self.attributes(&q.attributes);
        self.triggers(&q.triggers);
        self.expr(&q.body);
        self.text(")");
    }

    fn let_expr(&mut self, let_expr: &LetExpr) {
        self.text("(var ");
        self.comma_list(&let_expr.vars, |p, var| {
            p.attributes(&var.attributes);
            p.ident(&var.name);
        });
        self.text(" := ");
        self.comma_list(&let_expr.values, |p, e| p.expr(e));
        self.text("; ");
        self.attributes(&let_expr.attributes);
        self.expr(&let_expr.body);
        self.text(")");
    }

    /// Code expressions print on one line.
    fn code_expr(&mut self, code: &CodeExpr) {
        self.text("|{ ");
        for local in &code.locals {
            self.var_decl(local);
            self.space();
        }
        for block in &code.blocks {
            self.ident(&block.label);
            self.text(": ");
            for cmd in &block.cmds {
                self.cmd(cmd);
                self.space();
            }
            self.transfer(&block.transfer);
            self.space();
        }
        self.text("}|");
    }
}
