//! Expression nodes.

use crate::Span;

use super::{
    ArithCoercion, Attribute, BinaryOp, Block, Literal, Trigger, Type, TypeVariable, UnaryOp,
    Variable,
};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    Literal(Literal),
    Ident(String),
    Old(Box<Expr>),
    NAry { op: NAryOp, args: Vec<Expr> },
    Quantifier(Box<QuantifierExpr>),
    Let(Box<LetExpr>),
    Code(Box<CodeExpr>),
}

/// Operator of an [`ExprKind::NAry`] node.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NAryOp {
    Binary(BinaryOp),
    Unary(UnaryOp),
    FunctionCall(String),
    /// `m[i1, ..., in]`; args are the map followed by the indexes.
    MapSelect { arity: usize },
    /// `m[i1, ..., in := v]`; args are the map, the indexes, then the value.
    MapStore { arity: usize },
    IfThenElse,
    ArithCoercion(ArithCoercion),
    /// `e : T`
    TypeCoercion(Type),
    /// `a ++ b`
    BvConcat,
    /// `e[upper:lower]`
    BvExtract { upper: u32, lower: u32 },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum QuantifierKind {
    Forall,
    Exists,
    Lambda,
}

impl QuantifierKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuantifierKind::Forall => "forall",
            QuantifierKind::Exists => "exists",
            QuantifierKind::Lambda => "lambda",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QuantifierExpr {
    pub kind: QuantifierKind,
    pub type_params: Vec<TypeVariable>,
    pub bound_vars: Vec<Variable>,
    pub attributes: Vec<Attribute>,
    /// Always empty for lambdas.
    pub triggers: Vec<Trigger>,
    pub body: Expr,
}

/// `var x, y := e1, e2; body`. The two lists are not required to have
/// equal length here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LetExpr {
    pub vars: Vec<LetVar>,
    pub values: Vec<Expr>,
    pub attributes: Vec<Attribute>,
    pub body: Expr,
}

/// Let-bound name; its type is inferred downstream.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LetVar {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// `|{ locals blocks }|`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CodeExpr {
    pub locals: Vec<Variable>,
    pub blocks: Vec<Block>,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Placeholder used after a syntax or semantic error.
    pub fn dummy(span: Span) -> Self {
        Expr::literal(Literal::Bool(false), span)
    }

    pub fn literal(lit: Literal, span: Span) -> Self {
        Expr::new(ExprKind::Literal(lit), span)
    }

    pub fn ident(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Ident(name.into()), span)
    }

    pub fn nary(op: NAryOp, args: Vec<Expr>, span: Span) -> Self {
        Expr::new(ExprKind::NAry { op, args }, span)
    }

    /// Binary node spanning both operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Expr::nary(NAryOp::Binary(op), vec![left, right], span)
    }

    pub fn unary(op: UnaryOp, operand: Expr, span: Span) -> Self {
        let span = span.merge(operand.span);
        Expr::nary(NAryOp::Unary(op), vec![operand], span)
    }

    /// The operator and operands if this is a binary node.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match &self.kind {
            ExprKind::NAry {
                op: NAryOp::Binary(op),
                args,
            } => match args.as_slice() {
                [l, r] => Some((*op, l, r)),
                _ => None,
            },
            _ => None,
        }
    }
}
