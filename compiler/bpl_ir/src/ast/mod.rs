//! Syntax tree produced by the parser.
//!
//! Every node exclusively owns its children; attribute and trigger lists
//! belong to the node they annotate. The tree has no back-references.

mod attr;
mod cmd;
mod decl;
mod expr;
mod literal;
mod operators;
mod ty;

pub use attr::{find_attribute, has_bool_attribute, AttrParam, Attribute, Trigger};
pub use cmd::{
    AssignLhs, BigBlock, Block, BlockTail, BreakCmd, CallCmd, Cmd, CmdKind, ElseBranch, IfCmd,
    Invariant, StmtList, StructuredCmd, TransferCmd, TransferKind, WhileCmd,
};
pub use decl::{
    Axiom, Constant, ConstantParent, Declaration, Formal, Function, Implementation, Procedure,
    SpecClause, TypeCtorDecl, TypeSynonymDecl, Variable,
};
pub use expr::{CodeExpr, Expr, ExprKind, LetExpr, LetVar, NAryOp, QuantifierExpr, QuantifierKind};
pub use literal::{parse_bv_literal, parse_nat, BigDec, BigFloat, FloatValue, Literal, RoundingMode};
pub use operators::{ArithCoercion, BinaryOp, UnaryOp};
pub use ty::{BasicType, MapType, Type, TypeKind, TypeVariable};

use crate::Span;

/// Identifier occurrence with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// Root of a parsed source unit: top-level declarations in source order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

impl Program {
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Function(f) => Some(f),
            _ => None,
        })
    }

    pub fn axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Axiom(a) => Some(a),
            _ => None,
        })
    }

    pub fn procedures(&self) -> impl Iterator<Item = &Procedure> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Procedure(p) => Some(p),
            _ => None,
        })
    }

    pub fn implementations(&self) -> impl Iterator<Item = &Implementation> {
        self.declarations.iter().filter_map(|d| match d {
            Declaration::Implementation(i) => Some(i),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests;
