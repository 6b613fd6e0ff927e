//! Core value types for fixed-point option pricing.
//!
//! Every entity here is an immutable value type constructed per call: inputs
//! ([`OptionParameters`]) are validated by the entry points that accept them,
//! and outputs ([`PricingResult`], [`Greeks`], [`InvariantReport`],
//! [`PrecisionReport`], [`VolSurfacePoint`]) are derived snapshots with no
//! ownership relationships beyond composition. Nothing persists beyond a
//! single call and nothing is cached.
//!
//! All quantities are [`Fixed`] 18-decimal values, so equality is exact and
//! the types derive full `Eq`/`Ord` (unlike `f64`-backed types, there is no
//! NaN to break total ordering).

use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;

/// Inputs to the Black-Scholes-Merton model for a single European option.
///
/// Invariants (enforced by every entry point, not by construction):
/// spot > 0, strike > 0, volatility > 0, time_to_expiry > 0,
/// risk_free_rate ≥ 0.
///
/// # Examples
/// ```
/// use quantfix::fixed::Fixed;
/// use quantfix::types::OptionParameters;
///
/// let params = OptionParameters {
///     spot: Fixed::from_int(3000),
///     strike: Fixed::from_int(3000),
///     volatility: Fixed::from_raw(800_000_000_000_000_000), // 0.8
///     risk_free_rate: Fixed::ZERO,
///     time_to_expiry: Fixed::from_raw(250_000_000_000_000_000), // 0.25
/// };
/// assert_eq!(params.spot, params.strike);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current price S of the underlying.
    pub spot: Fixed,
    /// Strike price K of the contract.
    pub strike: Fixed,
    /// Annualized volatility σ (0.8 = 80%).
    pub volatility: Fixed,
    /// Continuously compounded risk-free rate r.
    pub risk_free_rate: Fixed,
    /// Time to expiry T in years (0.25 = 3 months).
    pub time_to_expiry: Fixed,
}

/// Both BSM premiums plus the d₁/d₂ intermediates they were derived from.
///
/// `call_price` and `put_price` are non-negative by construction of the
/// formula. d₁ > d₂ always, since σ√T > 0 for valid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// European call premium S·Φ(d₁) − K·e^(−rT)·Φ(d₂).
    pub call_price: Fixed,
    /// European put premium K·e^(−rT)·Φ(−d₂) − S·Φ(−d₁).
    pub put_price: Fixed,
    /// Standardized moneyness argument d₁.
    pub d1: Fixed,
    /// d₂ = d₁ − σ√T.
    pub d2: Fixed,
}

/// First- and second-order price sensitivities for one parameter set.
///
/// All four figures share the d₁/d₂ and Φ/φ evaluations of the pricing
/// pass, so price and Greeks for the same inputs never diverge by rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeks {
    /// Call delta Φ(d₁) ∈ (0, 1).
    pub call_delta: Fixed,
    /// Gamma φ(d₁)/(S·σ·√T); identical for calls and puts, always > 0.
    pub gamma: Fixed,
    /// Vega S·φ(d₁)·√T; always > 0.
    pub vega: Fixed,
    /// Call theta; always < 0 (time decay).
    pub call_theta: Fixed,
}

/// Snapshot self-diagnostic over one pricing evaluation.
///
/// Recomputed fresh on every call; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvariantReport {
    /// Both premiums came out non-negative.
    pub premiums_non_negative: bool,
    /// call − put matched S − K·e^(−rT) within the supplied tolerance.
    pub put_call_parity_holds: bool,
    /// Φ(d₁) and Φ(d₂) both landed in [0, 1].
    pub cdf_in_unit_interval: bool,
}

/// Error metrics of a computed value against a nonzero reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionReport {
    /// |computed − reference|.
    pub absolute_error: Fixed,
    /// absolute_error / |reference|.
    pub relative_error: Fixed,
    /// −log₂(relative error), a logarithmic precision score, not a
    /// probability. Exact equality reports the sentinel 59 (the mantissa's
    /// usable integer range spans about 59 bits).
    pub bits_of_precision: Fixed,
}

/// One point of the volatility surface: base IV plus its adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolSurfacePoint {
    /// Base implied volatility, passed through unmodified.
    pub base_iv: Fixed,
    /// Moneyness skew a·(m−1)² + b·(m−1); zero at the money.
    pub skew: Fixed,
    /// Utilization premium base_iv·k·u/(1−u); zero at zero utilization.
    pub utilization_premium: Fixed,
    /// base_iv + skew + utilization_premium.
    pub total_iv: Fixed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> OptionParameters {
        OptionParameters {
            spot: Fixed::from_int(3000),
            strike: Fixed::from_int(3100),
            volatility: Fixed::from_raw(800_000_000_000_000_000),
            risk_free_rate: Fixed::from_raw(50_000_000_000_000_000),
            time_to_expiry: Fixed::from_raw(250_000_000_000_000_000),
        }
    }

    #[test]
    fn parameters_are_plain_values() {
        let a = sample_params();
        let b = a; // Copy
        assert_eq!(a, b);
    }

    #[test]
    fn serde_round_trip_parameters() {
        let p = sample_params();
        let json = serde_json::to_string(&p).unwrap();
        let back: OptionParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn serde_round_trip_reports() {
        let report = InvariantReport {
            premiums_non_negative: true,
            put_call_parity_holds: true,
            cdf_in_unit_interval: false,
        };
        let json = serde_json::to_string(&report).unwrap();
        let back: InvariantReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);

        let point = VolSurfacePoint {
            base_iv: Fixed::from_raw(800_000_000_000_000_000),
            skew: Fixed::ZERO,
            utilization_premium: Fixed::from_raw(400_000_000_000_000_000),
            total_iv: Fixed::from_raw(1_200_000_000_000_000_000),
        };
        let json = serde_json::to_string(&point).unwrap();
        let back: VolSurfacePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
