//! Token types for the Boogie scanner.
//!
//! `TokenKind` is a payload-free terminal id; the literal text of identifiers
//! and literals travels in [`Token::text`]. ASCII and Unicode spellings of the
//! same operator share one kind.

use std::fmt;

use crate::{Position, Span};

/// A token with its literal text and source location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, pos: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            pos,
        }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            text: kind.spelling().to_string(),
            span: Span::DUMMY,
            pos: Position::default(),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.pos)
    }
}

/// Terminal kinds.
///
/// The discriminant doubles as the bit index in recovery sets, so the enum
/// must stay below 128 variants. [`TokenKind::Error`] is the placeholder for
/// characters the scanner could not classify; the parser skips it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Eof,

    // Literal classes
    Ident,
    BvLit,
    Digits,
    String,
    Decimal,
    DecFloat,
    Float,

    // Punctuation
    Semicolon,
    LParen,
    RParen,
    Colon,
    Comma,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Lt,
    Gt,
    /// `=`
    Eq,
    /// `:=`
    Assign,
    /// `|`
    Pipe,
    /// `*`
    Star,
    /// `|{`
    LCodeBrace,
    /// `}|`
    RCodeBrace,
    /// `::` or `•`
    QSep,

    // Operators
    /// `<==>` or `⇔`
    Iff,
    /// `==>` or `⇒`
    Implies,
    /// `<==` or `⇐`
    Explies,
    /// `&&` or `∧`
    And,
    /// `||` or `∨`
    Or,
    /// `==`
    EqEq,
    /// `!=` or `≠`
    Neq,
    /// `<=` or `≤`
    Le,
    /// `>=` or `≥`
    Ge,
    /// `<:`
    Subtype,
    /// `++`
    Concat,
    Plus,
    Minus,
    /// `/`
    Slash,
    /// `**`
    Pow,
    /// `!` or `¬`
    Not,

    // Declaration keywords
    Var,
    Where,
    Const,
    Unique,
    Extends,
    Complete,
    Function,
    Returns,
    Axiom,
    Type,
    Procedure,
    Implementation,
    Modifies,
    Free,
    Requires,
    Ensures,

    // Type keywords
    Int,
    Real,
    Bool,

    // Statement keywords
    Goto,
    Return,
    If,
    Then,
    Else,
    While,
    Invariant,
    Break,
    Assert,
    Assume,
    Havoc,
    Yield,
    Async,
    Call,
    Par,

    // Expression keywords
    Div,
    Mod,
    False,
    True,
    Old,
    /// `forall` or `∀`
    Forall,
    /// `exists` or `∃`
    Exists,
    /// `lambda` or `λ`
    Lambda,

    // Rounding modes (two spellings each)
    RoundNearestTiesToEven,
    RoundNearestTiesToAway,
    RoundTowardPositive,
    RoundTowardNegative,
    RoundTowardZero,

    /// Unclassifiable input; never a valid terminal.
    Error,
}

impl TokenKind {
    /// Number of kinds, including [`TokenKind::Error`].
    pub const COUNT: usize = TokenKind::Error as usize + 1;

    /// Bit index used by recovery sets.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether the parser treats this kind as part of the grammar.
    #[inline]
    pub const fn is_valid_terminal(self) -> bool {
        !matches!(self, TokenKind::Error)
    }

    /// Whether this kind names a class of spellings rather than one spelling.
    pub const fn is_class(self) -> bool {
        matches!(
            self,
            TokenKind::Eof
                | TokenKind::Ident
                | TokenKind::BvLit
                | TokenKind::Digits
                | TokenKind::String
                | TokenKind::Decimal
                | TokenKind::DecFloat
                | TokenKind::Float
                | TokenKind::Error
        )
    }

    /// Canonical (ASCII) spelling, or the class name for literal classes.
    pub const fn spelling(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "ident",
            TokenKind::BvLit => "bvlit",
            TokenKind::Digits => "digits",
            TokenKind::String => "string",
            TokenKind::Decimal => "decimal",
            TokenKind::DecFloat => "dec_float",
            TokenKind::Float => "float",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::Assign => ":=",
            TokenKind::Pipe => "|",
            TokenKind::Star => "*",
            TokenKind::LCodeBrace => "|{",
            TokenKind::RCodeBrace => "}|",
            TokenKind::QSep => "::",
            TokenKind::Iff => "<==>",
            TokenKind::Implies => "==>",
            TokenKind::Explies => "<==",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::EqEq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::Subtype => "<:",
            TokenKind::Concat => "++",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Slash => "/",
            TokenKind::Pow => "**",
            TokenKind::Not => "!",
            TokenKind::Var => "var",
            TokenKind::Where => "where",
            TokenKind::Const => "const",
            TokenKind::Unique => "unique",
            TokenKind::Extends => "extends",
            TokenKind::Complete => "complete",
            TokenKind::Function => "function",
            TokenKind::Returns => "returns",
            TokenKind::Axiom => "axiom",
            TokenKind::Type => "type",
            TokenKind::Procedure => "procedure",
            TokenKind::Implementation => "implementation",
            TokenKind::Modifies => "modifies",
            TokenKind::Free => "free",
            TokenKind::Requires => "requires",
            TokenKind::Ensures => "ensures",
            TokenKind::Int => "int",
            TokenKind::Real => "real",
            TokenKind::Bool => "bool",
            TokenKind::Goto => "goto",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Invariant => "invariant",
            TokenKind::Break => "break",
            TokenKind::Assert => "assert",
            TokenKind::Assume => "assume",
            TokenKind::Havoc => "havoc",
            TokenKind::Yield => "yield",
            TokenKind::Async => "async",
            TokenKind::Call => "call",
            TokenKind::Par => "par",
            TokenKind::Div => "div",
            TokenKind::Mod => "mod",
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::Old => "old",
            TokenKind::Forall => "forall",
            TokenKind::Exists => "exists",
            TokenKind::Lambda => "lambda",
            TokenKind::RoundNearestTiesToEven => "roundNearestTiesToEven",
            TokenKind::RoundNearestTiesToAway => "roundNearestTiesToAway",
            TokenKind::RoundTowardPositive => "roundTowardPositive",
            TokenKind::RoundTowardNegative => "roundTowardNegative",
            TokenKind::RoundTowardZero => "roundTowardZero",
            TokenKind::Error => "???",
        }
    }

    /// Text used in "`X` expected" messages.
    ///
    /// Classes are bare (`ident expected`), spellings are quoted (`";" expected`).
    pub fn expected_name(self) -> String {
        if self.is_class() {
            self.spelling().to_string()
        } else {
            format!("\"{}\"", self.spelling())
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Scanned tokens, always terminated by a single [`TokenKind::Eof`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The final token; `None` only for a list nobody terminated.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds only, for tests and tracing.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
