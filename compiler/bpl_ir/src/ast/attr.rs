//! Attributes (`{:key params}`) and triggers (`{e, ...}`).
//!
//! Both are kept as ordered vectors on the node they annotate, in the
//! order they appear in source.

use crate::Span;

use super::{Expr, ExprKind, Literal};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Attribute {
    pub key: String,
    pub params: Vec<AttrParam>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttrParam {
    /// String literal with quotes removed.
    String(String),
    Expr(Expr),
}

/// Instantiation pattern. `positive == false` comes from `{:nopats e}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Trigger {
    pub positive: bool,
    pub exprs: Vec<Expr>,
    pub span: Span,
}

/// First attribute with the given key.
pub fn find_attribute<'a>(attributes: &'a [Attribute], key: &str) -> Option<&'a Attribute> {
    attributes.iter().find(|a| a.key == key)
}

/// `{:key}` or `{:key true}` is present.
pub fn has_bool_attribute(attributes: &[Attribute], key: &str) -> bool {
    find_attribute(attributes, key).is_some_and(|attr| match attr.params.as_slice() {
        [] => true,
        [AttrParam::Expr(Expr {
            kind: ExprKind::Literal(Literal::Bool(b)),
            ..
        })] => *b,
        _ => false,
    })
}
