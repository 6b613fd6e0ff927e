//! Black-Scholes-Merton pricing for European options.
//!
//! ```text
//! d₁ = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
//! d₂ = d₁ − σ·√T
//! call = S·Φ(d₁) − K·e^(−rT)·Φ(d₂)
//! put  = K·e^(−rT)·Φ(−d₂) − S·Φ(−d₁)
//! ```
//!
//! [`price_bsm`] computes the shared intermediates once and returns both
//! premiums with d₁/d₂ in a single [`PricingResult`]. Put-call parity
//! (call − put = S − K·e^(−rT)) is an identity of the formula: with the
//! exact complement Φ(−x) = 1 − Φ(x), the computed gap stays within a few
//! mantissa units of truncation.
//!
//! # References
//! - Hull, *Options, Futures, and Other Derivatives*, Ch. 15.

use rayon::prelude::*;

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;
use crate::normal::{norm_cdf, norm_pdf};
use crate::types::{OptionParameters, PricingResult};
use crate::validate::check_option_parameters;

/// Shared per-parameter-set intermediates.
///
/// Computed once per evaluation and reused by pricing, Greeks, and the
/// invariant checker so that no two consumers diverge by independent
/// rounding.
pub(crate) struct BsmCore {
    pub d1: Fixed,
    pub d2: Fixed,
    /// Φ(d₁)
    pub nd1: Fixed,
    /// Φ(d₂)
    pub nd2: Fixed,
    /// φ(d₁)
    pub pdf_d1: Fixed,
    /// e^(−rT)
    pub discount: Fixed,
    /// √T
    pub sqrt_t: Fixed,
}

/// d₁/d₂ plus √T. Caller must have validated the parameters.
///
/// Positive σ and T can still leave σ√T below one mantissa unit (σ√T of
/// 1e-19 truncates to zero at 18 decimals); d₁ is then not representable,
/// so the degenerate product is rejected rather than divided by.
fn d_values(params: &OptionParameters) -> Result<(Fixed, Fixed, Fixed)> {
    let sqrt_t = params.time_to_expiry.sqrt();
    let sigma_sqrt_t = params.volatility * sqrt_t;
    if sigma_sqrt_t.is_zero() {
        return Err(QuantFixError::InvalidVolatility {
            volatility: params.volatility,
        });
    }
    let half_var = Fixed::from_raw((params.volatility * params.volatility).raw() / 2);
    let drift = (params.risk_free_rate + half_var) * params.time_to_expiry;
    let log_moneyness = (params.spot / params.strike).ln();
    let d1 = (log_moneyness + drift) / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;
    Ok((d1, d2, sqrt_t))
}

pub(crate) fn bsm_core(params: &OptionParameters) -> Result<BsmCore> {
    let (d1, d2, sqrt_t) = d_values(params)?;
    let discount = (-(params.risk_free_rate * params.time_to_expiry)).exp();
    Ok(BsmCore {
        d1,
        d2,
        nd1: norm_cdf(d1),
        nd2: norm_cdf(d2),
        pdf_d1: norm_pdf(d1),
        discount,
        sqrt_t,
    })
}

/// Compute d₁ and d₂ for a validated parameter set.
///
/// d₁ > d₂ strictly, since σ√T > 0 whenever the computation proceeds.
///
/// # Errors
/// Returns a validation error for non-positive spot, strike, volatility,
/// or expiry, and for a negative rate. Also rejects
/// [`QuantFixError::InvalidVolatility`] when σ√T truncates to zero at 18
/// decimals; any realistic volatility and expiry clears that by many
/// orders of magnitude.
pub fn d1_d2(params: &OptionParameters) -> Result<(Fixed, Fixed)> {
    check_option_parameters(params)?;
    let (d1, d2, _) = d_values(params)?;
    Ok((d1, d2))
}

/// Price a European call and put in one pass.
///
/// # Errors
/// Returns a validation error if any parameter is outside its financial
/// domain; see [`crate::error::QuantFixError`].
pub fn price_bsm(params: &OptionParameters) -> Result<PricingResult> {
    check_option_parameters(params)?;
    let core = bsm_core(params)?;
    let discounted_strike = params.strike * core.discount;
    let call_price = params.spot * core.nd1 - discounted_strike * core.nd2;
    let put_price =
        discounted_strike * (Fixed::ONE - core.nd2) - params.spot * (Fixed::ONE - core.nd1);
    Ok(PricingResult {
        call_price,
        put_price,
        d1: core.d1,
        d2: core.d2,
    })
}

/// Price one parameter set across a grid of strikes in parallel.
///
/// Each strike is an independent evaluation (validation included), so the
/// grid is embarrassingly parallel; rayon splits it across the thread
/// pool with no shared state.
///
/// # Errors
/// Fails on the first strike whose parameter set fails validation.
pub fn price_strike_grid(
    params: &OptionParameters,
    strikes: &[Fixed],
) -> Result<Vec<PricingResult>> {
    strikes
        .par_iter()
        .map(|&strike| price_bsm(&OptionParameters { strike, ..*params }))
        .collect()
}
