//! `RawToken` to `TokenKind` conversion.

use bpl_ir::TokenKind;

use crate::raw_token::RawToken;

/// Map a raw token to its terminal kind; comments have none.
pub(crate) fn convert(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::LineComment | RawToken::BlockComment => return None,
        RawToken::Ident => TokenKind::Ident,
        RawToken::BvLit => TokenKind::BvLit,
        RawToken::Digits => TokenKind::Digits,
        RawToken::String => TokenKind::String,
        RawToken::Decimal => TokenKind::Decimal,
        RawToken::DecFloat => TokenKind::DecFloat,
        RawToken::Float => TokenKind::Float,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Star => TokenKind::Star,
        RawToken::LCodeBrace => TokenKind::LCodeBrace,
        RawToken::RCodeBrace => TokenKind::RCodeBrace,
        RawToken::QSep => TokenKind::QSep,
        RawToken::Iff => TokenKind::Iff,
        RawToken::Implies => TokenKind::Implies,
        RawToken::Explies => TokenKind::Explies,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Neq => TokenKind::Neq,
        RawToken::Le => TokenKind::Le,
        RawToken::Ge => TokenKind::Ge,
        RawToken::Subtype => TokenKind::Subtype,
        RawToken::Concat => TokenKind::Concat,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Pow => TokenKind::Pow,
        RawToken::Not => TokenKind::Not,
        RawToken::Var => TokenKind::Var,
        RawToken::Where => TokenKind::Where,
        RawToken::Const => TokenKind::Const,
        RawToken::Unique => TokenKind::Unique,
        RawToken::Extends => TokenKind::Extends,
        RawToken::Complete => TokenKind::Complete,
        RawToken::Function => TokenKind::Function,
        RawToken::Returns => TokenKind::Returns,
        RawToken::Axiom => TokenKind::Axiom,
        RawToken::Type => TokenKind::Type,
        RawToken::Procedure => TokenKind::Procedure,
        RawToken::Implementation => TokenKind::Implementation,
        RawToken::Modifies => TokenKind::Modifies,
        RawToken::Free => TokenKind::Free,
        RawToken::Requires => TokenKind::Requires,
        RawToken::Ensures => TokenKind::Ensures,
        RawToken::Int => TokenKind::Int,
        RawToken::Real => TokenKind::Real,
        RawToken::Bool => TokenKind::Bool,
        RawToken::Goto => TokenKind::Goto,
        RawToken::Return => TokenKind::Return,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::Invariant => TokenKind::Invariant,
        RawToken::Break => TokenKind::Break,
        RawToken::Assert => TokenKind::Assert,
        RawToken::Assume => TokenKind::Assume,
        RawToken::Havoc => TokenKind::Havoc,
        RawToken::Yield => TokenKind::Yield,
        RawToken::Async => TokenKind::Async,
        RawToken::Call => TokenKind::Call,
        RawToken::Par => TokenKind::Par,
        RawToken::Div => TokenKind::Div,
        RawToken::Mod => TokenKind::Mod,
        RawToken::False => TokenKind::False,
        RawToken::True => TokenKind::True,
        RawToken::Old => TokenKind::Old,
        RawToken::Forall => TokenKind::Forall,
        RawToken::Exists => TokenKind::Exists,
        RawToken::Lambda => TokenKind::Lambda,
        RawToken::RoundNearestTiesToEven => TokenKind::RoundNearestTiesToEven,
        RawToken::RoundNearestTiesToAway => TokenKind::RoundNearestTiesToAway,
        RawToken::RoundTowardPositive => TokenKind::RoundTowardPositive,
        RawToken::RoundTowardNegative => TokenKind::RoundTowardNegative,
        RawToken::RoundTowardZero => TokenKind::RoundTowardZero,
    };
    Some(kind)
}
