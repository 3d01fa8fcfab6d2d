//! Error recovery for the parser.
//!
//! Token sets double as FIRST sets for the grammar's loops and as the
//! synchronization classes the parser skips to after a mismatch.

use bpl_ir::TokenKind;

use crate::cursor::Cursor;

const _: () = assert!(
    TokenKind::COUNT <= 128,
    "TokenSet uses u128 bitset; all discriminant indices must be < 128"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder form for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }
}

/// Tokens that begin a top-level declaration.
pub const DECL_START: TokenSet = TokenSet::new()
    .with(TokenKind::Const)
    .with(TokenKind::Function)
    .with(TokenKind::Axiom)
    .with(TokenKind::Type)
    .with(TokenKind::Var)
    .with(TokenKind::Procedure)
    .with(TokenKind::Implementation);

/// Where top-level recovery resumes.
pub const DECL_SYNC: TokenSet = DECL_START.with(TokenKind::Eof);

/// Keywords that begin a simple command.
const CMD_KEYWORDS: TokenSet = TokenSet::new()
    .with(TokenKind::Free)
    .with(TokenKind::Assert)
    .with(TokenKind::Assume)
    .with(TokenKind::Havoc)
    .with(TokenKind::Yield)
    .with(TokenKind::Async)
    .with(TokenKind::Call)
    .with(TokenKind::Par);

/// Tokens that begin a label or a simple command.
pub const CMD_START: TokenSet = CMD_KEYWORDS.with(TokenKind::Ident);

/// Where statement-level recovery resumes, after skipping past the next `;`
/// if one comes first. Identifiers are left out: inside a broken command
/// they would restart parsing mid-expression. `var` is left out too: a
/// stray local declaration inside a body is skipped rather than read as a
/// global.
pub const STMT_SYNC: TokenSet = CMD_KEYWORDS
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Break)
    .with(TokenKind::Goto)
    .with(TokenKind::Return)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof)
    .with(TokenKind::Const)
    .with(TokenKind::Function)
    .with(TokenKind::Axiom)
    .with(TokenKind::Type)
    .with(TokenKind::Procedure)
    .with(TokenKind::Implementation);

/// Tokens that begin a procedure contract clause.
pub const SPEC_START: TokenSet = TokenSet::new()
    .with(TokenKind::Modifies)
    .with(TokenKind::Free)
    .with(TokenKind::Requires)
    .with(TokenKind::Ensures);

/// Tokens that begin an expression.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::BvLit)
    .with(TokenKind::Digits)
    .with(TokenKind::String)
    .with(TokenKind::Decimal)
    .with(TokenKind::DecFloat)
    .with(TokenKind::Float)
    .with(TokenKind::LParen)
    .with(TokenKind::Int)
    .with(TokenKind::Real)
    .with(TokenKind::If)
    .with(TokenKind::Minus)
    .with(TokenKind::Not)
    .with(TokenKind::False)
    .with(TokenKind::True)
    .with(TokenKind::RoundNearestTiesToEven)
    .with(TokenKind::RoundNearestTiesToAway)
    .with(TokenKind::RoundTowardPositive)
    .with(TokenKind::RoundTowardNegative)
    .with(TokenKind::RoundTowardZero)
    .with(TokenKind::Old)
    .with(TokenKind::LCodeBrace);

/// Tokens that begin a type.
pub const TYPE_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::LParen)
    .with(TokenKind::Int)
    .with(TokenKind::Real)
    .with(TokenKind::Bool)
    .with(TokenKind::LBracket)
    .with(TokenKind::Lt);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let mut skipped = 0usize;
    while !cursor.is_at_end() {
        if recovery.contains(cursor.current_kind()) {
            tracing::debug!(skipped, "resynchronized");
            return true;
        }
        cursor.advance();
        skipped += 1;
    }
    tracing::debug!(skipped, "resynchronized at end of input");
    false
}
