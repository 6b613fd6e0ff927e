//! Self-diagnostic invariant checks over one pricing evaluation.
//!
//! [`check_invariants`] prices the parameter set and reports three model
//! invariants as a snapshot [`InvariantReport`], recomputed fresh on every
//! call. [`assert_put_call_parity`] is the checked-assertion form of the
//! parity test for use in higher-level correctness gates: it returns
//! nothing on success and a [`QuantFixError::PutCallParityViolation`]
//! carrying the gap when the tolerance is exceeded.

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;
use crate::normal::norm_cdf;
use crate::pricing::price_bsm;
use crate::types::{InvariantReport, OptionParameters};

/// call − put compared against the forward value S − K·e^(−rT).
///
/// Caller must have validated the parameters (both callers below price
/// first, which validates).
fn parity_gap(params: &OptionParameters, call: Fixed, put: Fixed) -> Fixed {
    let discount = (-(params.risk_free_rate * params.time_to_expiry)).exp();
    let forward_value = params.spot - params.strike * discount;
    (call - put - forward_value).abs()
}

/// Price the parameter set and report the three model invariants.
///
/// # Errors
/// Returns a validation error if any parameter is outside its financial
/// domain. A report with a `false` field is a diagnostic finding, not an
/// error.
pub fn check_invariants(params: &OptionParameters, tolerance: Fixed) -> Result<InvariantReport> {
    let result = price_bsm(params)?;

    let premiums_non_negative =
        result.call_price >= Fixed::ZERO && result.put_price >= Fixed::ZERO;
    let put_call_parity_holds =
        parity_gap(params, result.call_price, result.put_price) <= tolerance;

    let nd1 = norm_cdf(result.d1);
    let nd2 = norm_cdf(result.d2);
    let in_unit = |v: Fixed| v >= Fixed::ZERO && v <= Fixed::ONE;
    let cdf_in_unit_interval = in_unit(nd1) && in_unit(nd2);

    Ok(InvariantReport {
        premiums_non_negative,
        put_call_parity_holds,
        cdf_in_unit_interval,
    })
}

/// Fail if the put-call parity gap exceeds `tolerance`.
///
/// # Errors
/// - Validation errors for out-of-domain parameters.
/// - [`QuantFixError::PutCallParityViolation`] carrying the measured gap
///   and the tolerance it exceeded.
pub fn assert_put_call_parity(params: &OptionParameters, tolerance: Fixed) -> Result<()> {
    let result = price_bsm(params)?;
    let gap = parity_gap(params, result.call_price, result.put_price);
    if gap > tolerance {
        return Err(QuantFixError::PutCallParityViolation { gap, tolerance });
    }
    Ok(())
}
