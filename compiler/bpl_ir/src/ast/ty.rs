//! Type expressions.
//!
//! Names in type position stay [`TypeKind::Unresolved`] until resolution,
//! with one exception: an unescaped `bvNN` becomes [`TypeKind::Bv`].

use crate::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Type {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Basic(BasicType),
    /// Bitvector of the given width.
    Bv(u32),
    Map(Box<MapType>),
    /// Bound type parameter; produced by resolution, never by the parser.
    Var(String),
    /// Type constructor or synonym application, or a type variable, not yet resolved.
    Unresolved { name: String, args: Vec<Type> },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BasicType {
    Int,
    Real,
    Bool,
}

impl BasicType {
    pub fn as_str(self) -> &'static str {
        match self {
            BasicType::Int => "int",
            BasicType::Real => "real",
            BasicType::Bool => "bool",
        }
    }
}

/// `<T...>[args]result`; the type parameters scope over args and result.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MapType {
    pub type_params: Vec<TypeVariable>,
    pub args: Vec<Type>,
    pub result: Type,
}

/// A declared type parameter.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeVariable {
    pub name: String,
    pub span: Span,
}

impl Type {
    pub fn new(kind: TypeKind, span: Span) -> Self {
        Type { kind, span }
    }

    pub fn basic(basic: BasicType, span: Span) -> Self {
        Type {
            kind: TypeKind::Basic(basic),
            span,
        }
    }

    /// Placeholder used after a syntax error.
    pub fn dummy(span: Span) -> Self {
        Type::basic(BasicType::Int, span)
    }

    pub fn unresolved(name: impl Into<String>, args: Vec<Type>, span: Span) -> Self {
        Type {
            kind: TypeKind::Unresolved {
                name: name.into(),
                args,
            },
            span,
        }
    }

    /// The bare name this type was written as, if it is a single
    /// unapplied identifier.
    pub fn as_bare_name(&self) -> Option<String> {
        match &self.kind {
            TypeKind::Unresolved { name, args } if args.is_empty() => Some(name.clone()),
            TypeKind::Bv(width) => Some(format!("bv{width}")),
            _ => None,
        }
    }
}
