//! Raw Token Definition
//!
//! The logos-derived tokenizer. Comments are recognized here and dropped
//! by [`crate::lex`]; everything else maps one-to-one onto `TokenKind`.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    // Literals
    #[regex(r"\\?[a-zA-Z'~#$^_.?`][a-zA-Z0-9'~#$^_.?`]*")]
    Ident,
    #[regex(r"[0-9]+bv[0-9]+")]
    BvLit,
    #[regex(r"[0-9]+")]
    Digits,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,
    #[regex(r"[0-9]+e-?[0-9]+")]
    Decimal,
    #[regex(r"[0-9]+\.[0-9]+(e-?[0-9]+)?")]
    DecFloat,
    #[regex(r"0x[0-9a-fA-F]+\.", hex_float)]
    #[regex(r"0(NaN|nan|\+oo|-oo)[0-9]+e[0-9]+")]
    Float,

    // Punctuation
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token(":=")]
    Assign,
    #[token("|")]
    Pipe,
    #[token("*")]
    Star,
    #[token("|{")]
    LCodeBrace,
    #[token("}|")]
    RCodeBrace,
    #[token("::")]
    #[token("•")]
    QSep,

    // Operators
    #[token("<==>")]
    #[token("⇔")]
    Iff,
    #[token("==>")]
    #[token("⇒")]
    Implies,
    #[token("<==")]
    #[token("⇐")]
    Explies,
    #[token("&&")]
    #[token("∧")]
    And,
    #[token("||")]
    #[token("∨")]
    Or,
    #[token("==")]
    EqEq,
    #[token("!=")]
    #[token("≠")]
    Neq,
    #[token("<=")]
    #[token("≤")]
    Le,
    #[token(">=")]
    #[token("≥")]
    Ge,
    #[token("<:")]
    Subtype,
    #[token("++")]
    Concat,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
    #[token("**")]
    Pow,
    #[token("!")]
    #[token("¬")]
    Not,

    // Keywords
    #[token("var")]
    Var,
    #[token("where")]
    Where,
    #[token("const")]
    Const,
    #[token("unique")]
    Unique,
    #[token("extends")]
    Extends,
    #[token("complete")]
    Complete,
    #[token("function")]
    Function,
    #[token("returns")]
    Returns,
    #[token("axiom")]
    Axiom,
    #[token("type")]
    Type,
    #[token("procedure")]
    Procedure,
    #[token("implementation")]
    Implementation,
    #[token("modifies")]
    Modifies,
    #[token("free")]
    Free,
    #[token("requires")]
    Requires,
    #[token("ensures")]
    Ensures,
    #[token("int")]
    Int,
    #[token("real")]
    Real,
    #[token("bool")]
    Bool,
    #[token("goto")]
    Goto,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("invariant")]
    Invariant,
    #[token("break")]
    Break,
    #[token("assert")]
    Assert,
    #[token("assume")]
    Assume,
    #[token("havoc")]
    Havoc,
    #[token("yield")]
    Yield,
    #[token("async")]
    Async,
    #[token("call")]
    Call,
    #[token("par")]
    Par,
    #[token("div")]
    Div,
    #[token("mod")]
    Mod,
    #[token("false")]
    False,
    #[token("true")]
    True,
    #[token("old")]
    Old,
    #[token("forall")]
    #[token("∀")]
    Forall,
    #[token("exists")]
    #[token("∃")]
    Exists,
    #[token("lambda")]
    #[token("λ")]
    Lambda,

    // Rounding modes
    #[token("roundNearestTiesToEven")]
    #[token("RNE")]
    RoundNearestTiesToEven,
    #[token("roundNearestTiesToAway")]
    #[token("RNA")]
    RoundNearestTiesToAway,
    #[token("roundTowardPositive")]
    #[token("RTP")]
    RoundTowardPositive,
    #[token("roundTowardNegative")]
    #[token("RTN")]
    RoundTowardNegative,
    #[token("roundTowardZero")]
    #[token("RTZ")]
    RoundTowardZero,
}

/// Consume a possibly nested `/* ... */` comment after its opening `/*`.
///
/// An unterminated comment swallows the rest of the input and becomes an
/// error token.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return true;
                }
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    false
}

/// Rest of a hex float after `0x<digits>.`.
///
/// The hex digits share `e` and `f` with the field separators, so the
/// token takes every following letter and digit, plus a `-` directly after
/// an `e`. The parser splits and validates the fields.
fn hex_float(lex: &mut Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut len = 0;
    while let Some(&b) = bytes.get(len) {
        let exponent_sign = b == b'-' && len > 0 && bytes[len - 1] == b'e';
        if b.is_ascii_alphanumeric() || exponent_sign {
            len += 1;
        } else {
            break;
        }
    }
    lex.bump(len);
    true
}
