//! Commands, structured statements, and the `BigBlock` statement form.
//!
//! A statement list is a sequence of [`BigBlock`]s. Each holds straight-line
//! commands and is closed by at most one structured or transfer command;
//! [`BlockTail`] makes "both" unrepresentable.

use crate::Span;

use super::{Attribute, Expr, Ident};

/// Straight-line command.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cmd {
    pub kind: CmdKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CmdKind {
    /// `a, m[i] := e1, e2;`
    Assign { lhss: Vec<AssignLhs>, rhss: Vec<Expr> },
    Assert { expr: Expr, attributes: Vec<Attribute> },
    Assume { expr: Expr, attributes: Vec<Attribute> },
    Havoc { vars: Vec<Ident> },
    Call(CallCmd),
    /// `par c1 | c2;` The attributes are also copied onto each call.
    ParCall { calls: Vec<CallCmd>, attributes: Vec<Attribute> },
    Yield,
}

/// Assignment target.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum AssignLhs {
    Simple(Ident),
    /// `map[indexes]`, possibly nested.
    Map {
        map: Box<AssignLhs>,
        indexes: Vec<Expr>,
        span: Span,
    },
}

impl AssignLhs {
    pub fn span(&self) -> Span {
        match self {
            AssignLhs::Simple(id) => id.span,
            AssignLhs::Map { span, .. } => *span,
        }
    }

    /// The variable ultimately assigned.
    pub fn root(&self) -> &Ident {
        match self {
            AssignLhs::Simple(id) => id,
            AssignLhs::Map { map, .. } => map.root(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CallCmd {
    pub is_async: bool,
    pub is_free: bool,
    pub callee: Ident,
    pub ins: Vec<Expr>,
    pub outs: Vec<Ident>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum StructuredCmd {
    If(IfCmd),
    While(WhileCmd),
    Break(BreakCmd),
}

impl StructuredCmd {
    pub fn span(&self) -> Span {
        match self {
            StructuredCmd::If(c) => c.span,
            StructuredCmd::While(c) => c.span,
            StructuredCmd::Break(c) => c.span,
        }
    }
}

/// `if (guard) { ... } else ...`; a `None` guard is `(*)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IfCmd {
    pub guard: Option<Expr>,
    pub then_branch: StmtList,
    pub else_branch: Option<ElseBranch>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ElseBranch {
    If(Box<IfCmd>),
    Block(StmtList),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WhileCmd {
    pub guard: Option<Expr>,
    pub invariants: Vec<Invariant>,
    pub body: StmtList,
    pub span: Span,
}

/// Loop invariant; `free` invariants are assumed, not checked.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Invariant {
    pub free: bool,
    pub expr: Expr,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BreakCmd {
    pub label: Option<String>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TransferCmd {
    pub kind: TransferKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TransferKind {
    Goto(Vec<Ident>),
    Return,
    /// Only inside code expressions.
    ReturnExpr(Expr),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockTail {
    Structured(StructuredCmd),
    Transfer(TransferCmd),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigBlock {
    /// Starts at the label or first command.
    pub span: Span,
    pub label: Option<String>,
    pub cmds: Vec<Cmd>,
    /// `None` falls through to the next block.
    pub tail: Option<BlockTail>,
}

/// Body of a procedure, loop, or branch. Never has zero blocks.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StmtList {
    pub big_blocks: Vec<BigBlock>,
    /// The closing `}`.
    pub end: Span,
}

/// Labeled basic block of a code expression.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Block {
    pub label: String,
    pub cmds: Vec<Cmd>,
    pub transfer: TransferCmd,
    pub span: Span,
}
