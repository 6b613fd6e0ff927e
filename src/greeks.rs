//! First- and second-order sensitivities of the BSM price.
//!
//! ```text
//! call delta = Φ(d₁)
//! gamma      = φ(d₁) / (S·σ·√T)
//! vega       = S·φ(d₁)·√T
//! call theta = −S·φ(d₁)·σ/(2√T) − r·K·e^(−rT)·Φ(d₂)
//! ```
//!
//! All four figures are evaluated from the same [`bsm_core`] intermediates
//! the pricing pass uses, so price and Greeks for one parameter set can
//! never diverge by independent rounding.
//!
//! Gamma is identical for calls and puts and always positive; vega is
//! always positive; call theta is always negative (time decay).

use crate::error::Result;
use crate::fixed::Fixed;
use crate::pricing::bsm_core;
use crate::types::{Greeks, OptionParameters};
use crate::validate::check_option_parameters;

/// Compute call delta, gamma, vega, and call theta in one pass.
///
/// # Errors
/// Returns a validation error if any parameter is outside its financial
/// domain; validation is re-run here independently of any prior pricing
/// call.
pub fn greeks(params: &OptionParameters) -> Result<Greeks> {
    check_option_parameters(params)?;
    let core = bsm_core(params)?;

    let call_delta = core.nd1;
    let gamma = core.pdf_d1 / (params.spot * params.volatility * core.sqrt_t);
    let vega = params.spot * core.pdf_d1 * core.sqrt_t;

    let two_sqrt_t = Fixed::from_raw(core.sqrt_t.raw() * 2);
    let decay = (params.spot * core.pdf_d1 * params.volatility) / two_sqrt_t;
    let carry = params.risk_free_rate * (params.strike * core.discount) * core.nd2;
    let call_theta = -decay - carry;

    Ok(Greeks {
        call_delta,
        gamma,
        vega,
        call_theta,
    })
}
