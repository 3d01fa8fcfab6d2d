//! Operator types for expressions.

/// Binary operators, in the order of their precedence levels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    /// `<==>`
    Iff,
    /// `==>`; `a <== b` is stored as `b ==> a`.
    Imp,
    And,
    Or,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    /// `<:`
    Subtype,
    Add,
    Sub,
    Mul,
    /// Integer `div`
    Div,
    Mod,
    /// Real `/`
    RealDiv,
    /// `**`
    Pow,
}

impl BinaryOp {
    /// Get the operator symbol as a string.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Iff => "<==>",
            BinaryOp::Imp => "==>",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Subtype => "<:",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "div",
            BinaryOp::Mod => "mod",
            BinaryOp::RealDiv => "/",
            BinaryOp::Pow => "**",
        }
    }

    /// Binding strength; higher binds tighter.
    ///
    /// Bitvector concatenation (`++`) sits at level 5 between relational
    /// and additive operators but is not a `BinaryOp`.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Iff => 1,
            BinaryOp::Imp => 2,
            BinaryOp::And | BinaryOp::Or => 3,
            BinaryOp::Eq
            | BinaryOp::Neq
            | BinaryOp::Lt
            | BinaryOp::Gt
            | BinaryOp::Le
            | BinaryOp::Ge
            | BinaryOp::Subtype => 4,
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod | BinaryOp::RealDiv => 7,
            BinaryOp::Pow => 8,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// `int(e)` and `real(e)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ArithCoercion {
    ToInt,
    ToReal,
}

impl ArithCoercion {
    pub fn as_str(self) -> &'static str {
        match self {
            ArithCoercion::ToInt => "int",
            ArithCoercion::ToReal => "real",
        }
    }
}
