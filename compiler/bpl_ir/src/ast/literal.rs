//! Literal values.
//!
//! Numbers are kept exact: integers and bitvector values are `BigInt`,
//! decimals are a mantissa/exponent pair, and floats keep their hex
//! significand. Arithmetic over these values is a downstream concern.

use std::fmt;

use num_bigint::BigInt;
use num_traits::{Num, Zero};

/// A literal constant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    Bool(bool),
    Int(BigInt),
    Real(BigDec),
    Float(BigFloat),
    Bv { value: BigInt, width: u32 },
    /// String contents with the surrounding quotes removed.
    String(String),
    RoundingMode(RoundingMode),
}

/// Exact decimal `mantissa * 10^exponent`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct BigDec {
    pub mantissa: BigInt,
    pub exponent: i32,
}

impl BigDec {
    pub fn zero() -> Self {
        BigDec::default()
    }

    /// Parse either `123e-4` or `12.5` / `12.5e3`.
    pub fn parse(text: &str) -> Option<BigDec> {
        let (number, exp) = match text.find(|c| c == 'e' || c == 'E') {
            Some(at) => (&text[..at], text[at + 1..].parse::<i32>().ok()?),
            None => (text, 0),
        };
        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));
        if int_part.is_empty() || !is_digits(int_part) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = format!("{int_part}{frac_part}");
        let mantissa = BigInt::from_str_radix(&digits, 10).ok()?;
        let frac_len = i32::try_from(frac_part.len()).ok()?;
        Some(BigDec {
            mantissa,
            exponent: exp.checked_sub(frac_len)?,
        })
    }
}

impl fmt::Display for BigDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.to_string();
        let frac_len = usize::try_from(-i64::from(self.exponent)).unwrap_or(0);
        if self.exponent < 0 && !self.mantissa.is_zero() && digits.len() > frac_len {
            let (int_part, frac_part) = digits.split_at(digits.len() - frac_len);
            write!(f, "{int_part}.{frac_part}")
        } else {
            write!(f, "{digits}e{}", self.exponent)
        }
    }
}

/// Floating-point literal with explicit significand and exponent sizes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigFloat {
    pub value: FloatValue,
    pub significand_size: u32,
    pub exponent_size: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum FloatValue {
    /// `0x<int>.<frac>e<exponent>`; `significand` holds the hex digits of
    /// `<int><frac>`, of which the last `fraction_digits` are the fraction.
    Finite {
        significand: BigInt,
        fraction_digits: u32,
        exponent: i64,
    },
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl BigFloat {
    pub fn zero(significand_size: u32, exponent_size: u32) -> Self {
        BigFloat {
            value: FloatValue::Finite {
                significand: BigInt::zero(),
                fraction_digits: 1,
                exponent: 0,
            },
            significand_size,
            exponent_size,
        }
    }

    /// Parse `0x1.8e3f24e8`, `0NaN24e8`, `0+oo53e11` or `0-oo53e11`.
    pub fn parse(text: &str) -> Option<BigFloat> {
        if let Some(hex) = text.strip_prefix("0x") {
            // Hex digits include `e` and `f`, so split the decimal fields off the right.
            let (body, exponent_size) = hex.rsplit_once('e')?;
            let (body, significand_size) = body.rsplit_once('f')?;
            let (mantissa, exponent) = body.rsplit_once('e')?;
            let (int_part, frac_part) = mantissa.split_once('.')?;
            if int_part.is_empty() || frac_part.is_empty() {
                return None;
            }
            let significand = BigInt::from_str_radix(&format!("{int_part}{frac_part}"), 16).ok()?;
            return Some(BigFloat {
                value: FloatValue::Finite {
                    significand,
                    fraction_digits: u32::try_from(frac_part.len()).ok()?,
                    exponent: exponent.parse().ok()?,
                },
                significand_size: significand_size.parse().ok()?,
                exponent_size: exponent_size.parse().ok()?,
            });
        }
        let rest = text.strip_prefix('0')?;
        let (value, sizes) = if let Some(s) = rest.strip_prefix("NaN").or_else(|| rest.strip_prefix("nan")) {
            (FloatValue::NaN, s)
        } else if let Some(s) = rest.strip_prefix("+oo") {
            (FloatValue::PositiveInfinity, s)
        } else if let Some(s) = rest.strip_prefix("-oo") {
            (FloatValue::NegativeInfinity, s)
        } else {
            return None;
        };
        let (significand_size, exponent_size) = parse_sizes(sizes)?;
        Some(BigFloat {
            value,
            significand_size,
            exponent_size,
        })
    }
}

/// `<sig>e<exp>` size suffix.
fn parse_sizes(text: &str) -> Option<(u32, u32)> {
    let (sig, exp) = text.split_once('e')?;
    Some((sig.parse().ok()?, exp.parse().ok()?))
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s, e) = (self.significand_size, self.exponent_size);
        match &self.value {
            FloatValue::Finite {
                significand,
                fraction_digits,
                exponent,
            } => {
                let frac_len = *fraction_digits as usize;
                let mut hex = significand.to_str_radix(16);
                if hex.len() <= frac_len {
                    hex = format!("{}{hex}", "0".repeat(frac_len + 1 - hex.len()));
                }
                let (int_part, frac_part) = hex.split_at(hex.len() - frac_len);
                write!(f, "0x{int_part}.{frac_part}e{exponent}f{s}e{e}")
            }
            FloatValue::NaN => write!(f, "0NaN{s}e{e}"),
            FloatValue::PositiveInfinity => write!(f, "0+oo{s}e{e}"),
            FloatValue::NegativeInfinity => write!(f, "0-oo{s}e{e}"),
        }
    }
}

/// IEEE rounding mode literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RoundingMode {
    NearestTiesToEven,
    NearestTiesToAway,
    TowardPositive,
    TowardNegative,
    TowardZero,
}

impl RoundingMode {
    /// Long source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::NearestTiesToEven => "roundNearestTiesToEven",
            RoundingMode::NearestTiesToAway => "roundNearestTiesToAway",
            RoundingMode::TowardPositive => "roundTowardPositive",
            RoundingMode::TowardNegative => "roundTowardNegative",
            RoundingMode::TowardZero => "roundTowardZero",
        }
    }
}

/// Parse `<value>bv<width>`.
pub fn parse_bv_literal(text: &str) -> Option<(BigInt, u32)> {
    let (value, width) = text.split_once("bv")?;
    if !is_digits(value) || !is_digits(width) {
        return None;
    }
    Some((BigInt::from_str_radix(value, 10).ok()?, width.parse().ok()?))
}

/// Parse a run of decimal digits.
pub fn parse_nat(text: &str) -> Option<BigInt> {
    if !is_digits(text) {
        return None;
    }
    BigInt::from_str_radix(text, 10).ok()
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
