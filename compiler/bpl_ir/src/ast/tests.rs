use pretty_assertions::assert_eq;

use super::*;

fn int_lit(n: i64) -> Expr {
    Expr::literal(Literal::Int(n.into()), Span::DUMMY)
}

#[test]
fn test_bool_attribute_forms() {
    let bare = Attribute {
        key: "inline".into(),
        params: vec![],
        span: Span::DUMMY,
    };
    let falsy = Attribute {
        key: "inline".into(),
        params: vec![AttrParam::Expr(Expr::literal(Literal::Bool(false), Span::DUMMY))],
        span: Span::DUMMY,
    };
    let stringy = Attribute {
        key: "inline".into(),
        params: vec![AttrParam::String("yes".into())],
        span: Span::DUMMY,
    };
    assert!(has_bool_attribute(&[bare], "inline"));
    assert!(!has_bool_attribute(&[falsy], "inline"));
    assert!(!has_bool_attribute(&[stringy], "inline"));
    assert!(!has_bool_attribute(&[], "inline"));
}

#[test]
fn test_binary_span_covers_operands() {
    let mut l = int_lit(1);
    l.span = Span::new(0, 1);
    let mut r = int_lit(2);
    r.span = Span::new(4, 5);
    let e = Expr::binary(BinaryOp::Add, l, r);
    assert_eq!(e.span, Span::new(0, 5));
    assert!(matches!(e.as_binary(), Some((BinaryOp::Add, _, _))));
}

#[test]
fn test_bare_name_of_types() {
    let named = Type::unresolved("T", vec![], Span::DUMMY);
    let applied = Type::unresolved("Seq", vec![named.clone()], Span::DUMMY);
    assert_eq!(named.as_bare_name().as_deref(), Some("T"));
    assert_eq!(applied.as_bare_name(), None);
    assert_eq!(Type::basic(BasicType::Int, Span::DUMMY).as_bare_name(), None);
    assert_eq!(Type::new(TypeKind::Bv(8), Span::DUMMY).as_bare_name().as_deref(), Some("bv8"));
}

#[test]
fn test_assign_lhs_root() {
    let lhs = AssignLhs::Map {
        map: Box::new(AssignLhs::Simple(Ident::new("m", Span::DUMMY))),
        indexes: vec![int_lit(0)],
        span: Span::DUMMY,
    };
    assert_eq!(lhs.root().name, "m");
}
