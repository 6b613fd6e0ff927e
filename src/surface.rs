//! Volatility surface model: moneyness skew plus utilization premium.
//!
//! The surface adjusts a base implied volatility with two additive terms:
//!
//! - **Skew** — a quadratic in the moneyness deviation m − 1 (m = S/K):
//!   `skew = a·(m−1)² + b·(m−1)`. Exactly zero at the money.
//! - **Utilization premium** — a hyperbolic markup in pool utilization u:
//!   `premium = base_iv·k·u/(1−u)`. Zero at u = 0 and divergent as u → 1,
//!   so full utilization is rejected outright.
//!
//! [`vol_surface_point`] composes both into a [`VolSurfacePoint`] with
//! `total_iv = base_iv + skew + premium`; the base IV is passed through
//! unmodified.

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;
use crate::types::VolSurfacePoint;
use crate::validate::check_strike;

/// Quadratic moneyness skew a·(m−1)² + b·(m−1), with m = spot/strike.
///
/// # Errors
/// [`QuantFixError::InvalidStrikePrice`] if the strike is not positive.
pub fn volatility_skew(spot: Fixed, strike: Fixed, a: Fixed, b: Fixed) -> Result<Fixed> {
    check_strike(strike)?;
    let deviation = spot / strike - Fixed::ONE;
    Ok(a * (deviation * deviation) + b * deviation)
}

/// Utilization premium base_iv·k·u/(1−u).
///
/// # Errors
/// [`QuantFixError::UtilizationTooHigh`] if `utilization >= 1` (the
/// premium diverges at full utilization).
pub fn utilization_premium(base_iv: Fixed, utilization: Fixed, k: Fixed) -> Result<Fixed> {
    if utilization >= Fixed::ONE {
        return Err(QuantFixError::UtilizationTooHigh { utilization });
    }
    let pressure = utilization / (Fixed::ONE - utilization);
    Ok(base_iv * k * pressure)
}

/// One fully adjusted surface point: base IV plus skew plus premium.
///
/// # Errors
/// Propagates the skew and premium validation errors.
#[allow(clippy::too_many_arguments)]
pub fn vol_surface_point(
    base_iv: Fixed,
    spot: Fixed,
    strike: Fixed,
    a: Fixed,
    b: Fixed,
    utilization: Fixed,
    k: Fixed,
) -> Result<VolSurfacePoint> {
    let skew = volatility_skew(spot, strike, a, b)?;
    let premium = utilization_premium(base_iv, utilization, k)?;
    Ok(VolSurfacePoint {
        base_iv,
        skew,
        utilization_premium: premium,
        total_iv: base_iv + skew + premium,
    })
}
