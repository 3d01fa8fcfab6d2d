//! Reserved words and identifier escaping.
//!
//! A source identifier written `\name` denotes the plain identifier `name`
//! even when `name` is a reserved word or looks like a bitvector type
//! (`bv32`). Printers use [`sanitize_identifier`] to restore the escape.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Every word the scanner classifies as something other than an identifier.
pub const KEYWORDS: &[&str] = &[
    "RNA",
    "RNE",
    "RTN",
    "RTP",
    "RTZ",
    "assert",
    "assume",
    "async",
    "axiom",
    "bool",
    "break",
    "call",
    "complete",
    "const",
    "div",
    "else",
    "ensures",
    "exists",
    "extends",
    "false",
    "forall",
    "free",
    "function",
    "goto",
    "havoc",
    "if",
    "implementation",
    "int",
    "invariant",
    "lambda",
    "mod",
    "modifies",
    "old",
    "par",
    "procedure",
    "real",
    "requires",
    "return",
    "returns",
    "roundNearestTiesToAway",
    "roundNearestTiesToEven",
    "roundTowardNegative",
    "roundTowardPositive",
    "roundTowardZero",
    "then",
    "true",
    "type",
    "unique",
    "var",
    "where",
    "while",
    "yield",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Whether `name` is a reserved word.
pub fn is_keyword(name: &str) -> bool {
    KEYWORD_SET.contains(name)
}

/// Parse the width out of a `bvNN` type name.
///
/// Returns `None` for anything else, including `bv` with no digits.
pub fn bitvector_width(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("bv")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Strip the escape backslash from identifier text.
pub fn unescape_identifier(text: &str) -> &str {
    text.strip_prefix('\\').unwrap_or(text)
}

/// Identifier text as it must be written in source.
pub fn sanitize_identifier(name: &str) -> String {
    let looks_like_bv = name
        .strip_prefix("bv")
        .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()));
    if is_keyword(name) || looks_like_bv {
        format!("\\{name}")
    } else {
        name.to_string()
    }
}
