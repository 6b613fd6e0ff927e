//! Signed fixed-point decimal arithmetic with 18 fractional digits.
//!
//! [`Fixed`] stores a value as an `i128` mantissa scaled by 10¹⁸
//! (value = mantissa / 10¹⁸). The integer range spans roughly ±1.7 × 10²⁰,
//! wide enough to hold spot prices in the trillions with full 18-digit
//! fractional precision. Multiplication and division run through a 256-bit
//! intermediate so products of large operands never lose digits.
//!
//! All arithmetic is deterministic and platform-independent: no IEEE 754
//! rounding is involved anywhere. Every truncating operation rounds toward
//! zero, matching the convention of scaled-integer decimal libraries.
//!
//! # Overflow
//! Operators (`+`, `-`, `*`, `/`) panic on overflow and on division by
//! zero, like Rust's built-in integers. `checked_*` variants return
//! `Option` instead. The transcendental functions document their domains.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mantissa scale: 10¹⁸.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

const SCALE_U: u128 = SCALE as u128;
const MASK64: u128 = (1 << 64) - 1;

/// ln 2, pre-rounded to 18 decimal digits.
const LN2_RAW: i128 = 693_147_180_559_945_309;

/// A signed fixed-point decimal with 18 fractional digits.
///
/// # Examples
/// ```
/// use quantfix::fixed::Fixed;
/// let half = Fixed::from_raw(500_000_000_000_000_000);
/// assert_eq!(half + half, Fixed::ONE);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Fixed(i128);

impl Fixed {
    /// The value 0.
    pub const ZERO: Fixed = Fixed(0);
    /// The value 1.
    pub const ONE: Fixed = Fixed(SCALE);
    /// ln 2.
    pub const LN2: Fixed = Fixed(LN2_RAW);

    /// Construct from an integer value.
    pub const fn from_int(v: i64) -> Fixed {
        Fixed(v as i128 * SCALE)
    }

    /// Construct from a raw 18-decimal mantissa.
    pub const fn from_raw(mantissa: i128) -> Fixed {
        Fixed(mantissa)
    }

    /// The raw 18-decimal mantissa.
    pub const fn raw(self) -> i128 {
        self.0
    }

    /// Convert from an `f64`, rounding to the nearest representable value.
    ///
    /// Conversion inherits the argument's binary rounding error, so this is
    /// a convenience for tests and interop, not a deterministic code path.
    ///
    /// # Panics
    /// Panics if `v` is not finite or is outside the representable range.
    pub fn from_f64(v: f64) -> Fixed {
        assert!(v.is_finite(), "cannot convert non-finite f64 to Fixed");
        let scaled = (v * 1e18).round();
        assert!(
            scaled.abs() < i128::MAX as f64,
            "f64 value out of Fixed range"
        );
        Fixed(scaled as i128)
    }

    /// Project to `f64`, losing precision beyond ~15 significant digits.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 1e18
    }

    /// Absolute value.
    pub const fn abs(self) -> Fixed {
        Fixed(self.0.abs())
    }

    /// True when the value is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(self, rhs: Fixed) -> Option<Fixed> {
        self.0.checked_add(rhs.0).map(Fixed)
    }

    /// Checked subtraction; `None` on overflow.
    pub fn checked_sub(self, rhs: Fixed) -> Option<Fixed> {
        self.0.checked_sub(rhs.0).map(Fixed)
    }

    /// Checked multiplication; `None` if the truncated product overflows.
    pub fn checked_mul(self, rhs: Fixed) -> Option<Fixed> {
        try_mul_div(self.0, rhs.0, SCALE).map(Fixed)
    }

    /// Checked division; `None` on division by zero or overflow.
    pub fn checked_div(self, rhs: Fixed) -> Option<Fixed> {
        try_mul_div(self.0, SCALE, rhs.0).map(Fixed)
    }

    /// Natural exponential eˣ.
    ///
    /// Range-reduces by ln 2 (x = n·ln 2 + r with r ∈ [0, ln 2)), sums the
    /// Taylor series on r, then rescales by 2ⁿ exactly on the mantissa.
    /// Arguments below −42 underflow to exactly zero.
    ///
    /// # Panics
    /// Panics if the result exceeds the representable range (x > 46).
    pub fn exp(self) -> Fixed {
        if self.0 == 0 {
            return Fixed::ONE;
        }
        if self.0 <= -42 * SCALE {
            // e^-42 scaled by 10^18 truncates to zero.
            return Fixed::ZERO;
        }
        assert!(self.0 <= 46 * SCALE, "fixed-point overflow in exp");

        let n = floor_div(self.0, LN2_RAW);
        let r = Fixed(self.0 - n * LN2_RAW);

        // Taylor series on r ∈ [0, ln 2): 1 + r + r²/2! + r³/3! + ...
        let mut term = Fixed::ONE;
        let mut sum = Fixed::ONE;
        for i in 1..=34_i128 {
            term = Fixed(mul_div(term.0, r.0, SCALE) / i);
            if term.0 == 0 {
                break;
            }
            sum = sum + term;
        }

        if n >= 0 {
            let shift = n as u32;
            assert!(
                shift < 127 && sum.0 <= i128::MAX >> shift,
                "fixed-point overflow in exp"
            );
            Fixed(sum.0 << shift)
        } else {
            let shift = (-n) as u32;
            if shift >= 127 {
                Fixed::ZERO
            } else {
                Fixed(sum.0 >> shift)
            }
        }
    }

    /// Natural logarithm.
    ///
    /// Normalizes to [1, 2) by binary scaling, then evaluates
    /// ln y = 2·artanh((y − 1)/(y + 1)), whose argument is at most 1/3.
    ///
    /// # Panics
    /// Panics if the argument is not strictly positive.
    pub fn ln(self) -> Fixed {
        assert!(self.0 > 0, "ln of non-positive fixed-point value");

        let mut m = self.0;
        let mut k: i128 = 0;
        while m >= 2 * SCALE {
            m /= 2;
            k += 1;
        }
        while m < SCALE {
            m *= 2;
            k -= 1;
        }

        // z = (y − 1)/(y + 1) ∈ [0, 1/3]; ln y = 2(z + z³/3 + z⁵/5 + ...)
        let y = Fixed(m);
        let z = (y - Fixed::ONE) / (y + Fixed::ONE);
        let z2 = z * z;
        let mut power = z;
        let mut sum = z;
        let mut i = 3_i128;
        while i <= 81 {
            power = power * z2;
            let term = Fixed(power.0 / i);
            if term.0 == 0 {
                break;
            }
            sum = sum + term;
            i += 2;
        }

        Fixed(2 * sum.0 + k * LN2_RAW)
    }

    /// Base-2 logarithm: ln x / ln 2.
    ///
    /// # Panics
    /// Panics if the argument is not strictly positive.
    pub fn log2(self) -> Fixed {
        self.ln() / Fixed::LN2
    }

    /// Square root, truncated toward zero.
    ///
    /// Integer Newton iteration on the widened mantissa: the result is
    /// ⌊√(m · 10¹⁸)⌋ for mantissa m, so no precision is lost to an
    /// intermediate representation.
    ///
    /// # Panics
    /// Panics if the argument is negative.
    pub fn sqrt(self) -> Fixed {
        assert!(self.0 >= 0, "sqrt of negative fixed-point value");
        if self.0 == 0 {
            return Fixed::ZERO;
        }

        let (hi, lo) = wide_mul(self.0 as u128, SCALE_U);
        let bits = if hi != 0 {
            256 - hi.leading_zeros()
        } else {
            128 - lo.leading_zeros()
        };

        // Seed at 2^⌈bits/2⌉ ≥ √n, then descend; terminates at ⌊√n⌋.
        let mut x: u128 = 1 << ((bits + 1) / 2).min(127);
        loop {
            let q = match div_wide(hi, lo, x) {
                Some(q) => q,
                None => unreachable!("quotient bounded by descending iterate"),
            };
            let y = (x >> 1) + (q >> 1) + (x & q & 1);
            if y >= x {
                break;
            }
            x = y;
        }
        Fixed(x as i128)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.checked_add(rhs.0).expect("fixed-point overflow"))
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        Fixed(self.0.checked_sub(rhs.0).expect("fixed-point overflow"))
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    /// Full-width product truncated toward zero.
    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed(mul_div(self.0, rhs.0, SCALE))
    }
}

impl Div for Fixed {
    type Output = Fixed;

    /// Full-width quotient truncated toward zero.
    ///
    /// # Panics
    /// Panics on division by zero.
    fn div(self, rhs: Fixed) -> Fixed {
        Fixed(mul_div(self.0, SCALE, rhs.0))
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed(-self.0)
    }
}

/// A decimal string could not be parsed as a [`Fixed`] value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid fixed-point decimal: {input:?}")]
pub struct ParseFixedError {
    input: String,
}

impl FromStr for Fixed {
    type Err = ParseFixedError;

    /// Parse a decimal string such as `"3.5"` or `"-0.25"`.
    ///
    /// Accepts at most 18 fractional digits; the integer part must fit the
    /// representable range.
    fn from_str(s: &str) -> std::result::Result<Fixed, ParseFixedError> {
        let err = || ParseFixedError {
            input: s.to_string(),
        };

        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1_i128, rest),
            None => (1, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if frac_part.len() > 18
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
            || !int_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let int: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| err())?
        };
        let mut frac: i128 = 0;
        if !frac_part.is_empty() {
            frac = frac_part.parse().map_err(|_| err())?;
            frac *= 10_i128.pow(18 - frac_part.len() as u32);
        }

        let mantissa = int
            .checked_mul(SCALE)
            .and_then(|m| m.checked_add(frac))
            .ok_or_else(err)?;
        Ok(Fixed(sign * mantissa))
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let m = self.0.unsigned_abs();
        let int = m / SCALE_U;
        let frac = m % SCALE_U;
        if frac == 0 {
            write!(f, "{sign}{int}")
        } else {
            let digits = format!("{frac:018}");
            write!(f, "{sign}{int}.{}", digits.trim_end_matches('0'))
        }
    }
}

/// ⌊a·b/d⌋ toward zero through a 256-bit intermediate.
///
/// # Panics
/// Panics if `d` is zero or the quotient exceeds the `i128` range.
fn mul_div(a: i128, b: i128, d: i128) -> i128 {
    try_mul_div(a, b, d).expect("fixed-point overflow or division by zero")
}

fn try_mul_div(a: i128, b: i128, d: i128) -> Option<i128> {
    if d == 0 {
        return None;
    }
    let negative = ((a < 0) != (b < 0)) != (d < 0);
    let (hi, lo) = wide_mul(a.unsigned_abs(), b.unsigned_abs());
    let q = div_wide(hi, lo, d.unsigned_abs())?;
    if q > i128::MAX as u128 {
        return None;
    }
    let q = q as i128;
    Some(if negative { -q } else { q })
}

/// 128 × 128 → 256 bit unsigned multiply, returned as (high, low) halves.
fn wide_mul(a: u128, b: u128) -> (u128, u128) {
    let (a_hi, a_lo) = (a >> 64, a & MASK64);
    let (b_hi, b_lo) = (b >> 64, b & MASK64);

    let ll = a_lo * b_lo;
    let lh = a_lo * b_hi;
    let hl = a_hi * b_lo;
    let hh = a_hi * b_hi;

    let mid = (ll >> 64) + (lh & MASK64) + (hl & MASK64);
    let lo = (ll & MASK64) | (mid << 64);
    let hi = hh + (lh >> 64) + (hl >> 64) + (mid >> 64);
    (hi, lo)
}

/// 256 ÷ 128 bit unsigned division, truncating.
///
/// Returns `None` when the quotient does not fit in 128 bits (`hi >= d`)
/// or `d` is zero.
fn div_wide(hi: u128, lo: u128, d: u128) -> Option<u128> {
    if d == 0 || hi >= d {
        return None;
    }
    if hi == 0 {
        return Some(lo / d);
    }

    // Restoring binary long division over the low 128 bits; `hi < d` seeds
    // the remainder directly. The remainder stays below d, so a carry out
    // of the shift means the shifted value exceeded d exactly once and
    // wrapping subtraction lands on the true remainder.
    let mut quotient: u128 = 0;
    let mut rem: u128 = hi;
    for i in (0..128).rev() {
        let bit = (lo >> i) & 1;
        let carry = rem >> 127;
        rem = (rem << 1) | bit;
        if carry == 1 || rem >= d {
            rem = rem.wrapping_sub(d);
            quotient |= 1 << i;
        }
    }
    Some(quotient)
}

/// Floor division for signed mantissas (rounds toward negative infinity).
fn floor_div(a: i128, b: i128) -> i128 {
    let q = a / b;
    if a % b < 0 { q - 1 } else { q }
}
