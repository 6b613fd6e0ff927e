//! Standard normal distribution functions in fixed point.
//!
//! [`norm_cdf`] uses the bounded rational polynomial approximation of
//! Abramowitz & Stegun 26.2.17 (Hart's method): for x ≥ 0,
//!
//! ```text
//! t    = 1 / (1 + p·x)
//! Φ(x) = 1 − φ(x)·(a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵)
//! ```
//!
//! evaluated by Horner's method, with the x < 0 branch taken by symmetry
//! reflection Φ(x) = 1 − Φ(−x). Absolute error is below 1e-7 over practical
//! ranges.
//!
//! Guarantees relied on by the pricing and diagnostic layers:
//! - Φ(x) ∈ [0, 1] for all finite x
//! - Φ is monotonically non-decreasing
//! - Φ(x) + Φ(−x) = 1 exactly in mantissa terms (the reflection reuses the
//!   magnitude evaluation, and Φ(0) is pinned to exactly 1/2)
//! - φ(x) = φ(−x) exactly
//!
//! # References
//! - Abramowitz, M. and Stegun, I. *Handbook of Mathematical Functions*,
//!   formula 26.2.17.

use crate::fixed::{Fixed, SCALE};

// A&S 26.2.17 coefficients, pre-scaled to 18-decimal mantissas.
const P: Fixed = Fixed::from_raw(231_641_900_000_000_000); // 0.2316419
const A1: Fixed = Fixed::from_raw(319_381_530_000_000_000); // 0.319381530
const A2: Fixed = Fixed::from_raw(-356_563_782_000_000_000); // -0.356563782
const A3: Fixed = Fixed::from_raw(1_781_477_937_000_000_000); // 1.781477937
const A4: Fixed = Fixed::from_raw(-1_821_255_978_000_000_000); // -1.821255978
const A5: Fixed = Fixed::from_raw(1_330_274_429_000_000_000); // 1.330274429

/// 1/√(2π), pre-rounded to 18 decimal digits.
const INV_SQRT_2PI: Fixed = Fixed::from_raw(398_942_280_401_432_678);

/// Beyond this magnitude the tail is zero at 18 decimals and x² would
/// approach the mantissa range.
const TAIL_CUTOFF: Fixed = Fixed::from_int(40);

/// Standard normal density φ(x) = e^(−x²/2)/√(2π).
pub fn norm_pdf(x: Fixed) -> Fixed {
    let ax = x.abs();
    if ax >= TAIL_CUTOFF {
        return Fixed::ZERO;
    }
    let half_sq = Fixed::from_raw((ax * ax).raw() / 2);
    INV_SQRT_2PI * (-half_sq).exp()
}

/// Standard normal cumulative distribution function Φ(x).
pub fn norm_cdf(x: Fixed) -> Fixed {
    if x.is_zero() {
        return Fixed::from_raw(SCALE / 2);
    }
    let ax = x.abs();
    if ax >= TAIL_CUTOFF {
        return if x > Fixed::ZERO {
            Fixed::ONE
        } else {
            Fixed::ZERO
        };
    }

    // Magnitude branch: Φ(|x|) = 1 − φ(|x|)·poly(t), Horner on t.
    let t = Fixed::ONE / (Fixed::ONE + P * ax);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let phi_pos = Fixed::ONE - norm_pdf(ax) * poly;

    if x > Fixed::ZERO {
        phi_pos
    } else {
        Fixed::ONE - phi_pos
    }
}
