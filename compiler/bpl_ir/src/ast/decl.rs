//! Top-level declarations and variables.

use crate::Span;

use super::{Attribute, Expr, Ident, StmtList, Type, TypeVariable};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Declaration {
    Constant(Constant),
    TypeCtor(TypeCtorDecl),
    TypeSynonym(TypeSynonymDecl),
    Function(Function),
    Axiom(Axiom),
    GlobalVariable(Variable),
    Procedure(Procedure),
    Implementation(Implementation),
}

impl Declaration {
    /// Declared name; axioms have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Constant(d) => Some(&d.name),
            Declaration::TypeCtor(d) => Some(&d.name),
            Declaration::TypeSynonym(d) => Some(&d.name),
            Declaration::Function(d) => Some(&d.name),
            Declaration::Axiom(_) => None,
            Declaration::GlobalVariable(d) => Some(&d.name),
            Declaration::Procedure(d) => Some(&d.name),
            Declaration::Implementation(d) => Some(&d.name),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Declaration::Constant(d) => d.span,
            Declaration::TypeCtor(d) => d.span,
            Declaration::TypeSynonym(d) => d.span,
            Declaration::Function(d) => d.span,
            Declaration::Axiom(d) => d.span,
            Declaration::GlobalVariable(d) => d.span,
            Declaration::Procedure(d) => d.span,
            Declaration::Implementation(d) => d.span,
        }
    }
}

/// Global, local or bound variable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
    pub where_clause: Option<Expr>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// Function or procedure parameter. Only function formals may be unnamed.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Formal {
    pub name: Option<String>,
    pub ty: Type,
    pub where_clause: Option<Expr>,
    pub incoming: bool,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// One constant; `const a, b: T;` produces two.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Constant {
    pub name: String,
    pub ty: Type,
    pub unique: bool,
    /// `None` without an `extends` clause; `Some(vec![])` for a bare `extends`.
    pub parents: Option<Vec<ConstantParent>>,
    pub children_complete: bool,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConstantParent {
    pub parent: Ident,
    pub unique: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeCtorDecl {
    pub name: String,
    pub arity: usize,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeSynonymDecl {
    pub name: String,
    pub type_params: Vec<TypeVariable>,
    pub body: Type,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Function {
    pub name: String,
    pub type_params: Vec<TypeVariable>,
    pub formals: Vec<Formal>,
    pub result: Formal,
    /// Set only for `{:inline}` functions; other definitions become an axiom.
    pub body: Option<Expr>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Axiom {
    pub expr: Expr,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// `[free] requires e;` or `[free] ensures e;`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SpecClause {
    pub free: bool,
    pub expr: Expr,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Procedure {
    pub name: String,
    pub type_params: Vec<TypeVariable>,
    pub ins: Vec<Formal>,
    pub outs: Vec<Formal>,
    pub requires: Vec<SpecClause>,
    pub modifies: Vec<Ident>,
    pub ensures: Vec<SpecClause>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Implementation {
    pub name: String,
    pub type_params: Vec<TypeVariable>,
    pub ins: Vec<Formal>,
    pub outs: Vec<Formal>,
    pub locals: Vec<Variable>,
    pub body: StmtList,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}
