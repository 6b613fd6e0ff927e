//! Exponentially weighted moving average volatility estimation.
//!
//! Single-pass recurrence over an ordered sequence of log-returns:
//!
//! ```text
//! var₀ = r₀²
//! varᵢ = λ·varᵢ₋₁ + (1 − λ)·rᵢ²      (i ≥ 1)
//! ```
//!
//! The decay factor λ must lie strictly inside (0, 1); higher λ weights
//! history more heavily. Returns are consumed in the given order — the
//! estimate is order-sensitive and the pass is not restartable as an
//! independent stream.
//!
//! The final variance is annualized with the 252 trading-periods-per-year
//! convention: annualized vol = √var · √252. For a single return this
//! reduces to |r₀|·√252.

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;

/// Annualized EWMA volatility of an ordered log-return sequence.
///
/// # Errors
/// - [`QuantFixError::EmptyReturnsArray`] if `returns` is empty.
/// - [`QuantFixError::InvalidDecayFactor`] unless 0 < λ < 1.
pub fn ewma_volatility(returns: &[Fixed], lambda: Fixed) -> Result<Fixed> {
    if returns.is_empty() {
        return Err(QuantFixError::EmptyReturnsArray);
    }
    if lambda <= Fixed::ZERO || lambda >= Fixed::ONE {
        return Err(QuantFixError::InvalidDecayFactor { lambda });
    }

    let one_minus = Fixed::ONE - lambda;
    let mut variance = returns[0] * returns[0];
    for r in &returns[1..] {
        variance = lambda * variance + one_minus * (*r * *r);
    }

    let annualization = Fixed::from_int(252).sqrt();
    Ok(variance.sqrt() * annualization)
}
