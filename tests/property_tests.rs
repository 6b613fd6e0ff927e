//! Property-based tests using proptest.
//!
//! These tests verify invariant properties across random inputs rather than
//! testing fixed examples. Inputs are generated as raw mantissas so the
//! properties are checked on exactly the values the library computes with.

use proptest::prelude::*;
use quantfix::fixed::{Fixed, SCALE};
use quantfix::normal::norm_cdf;
use quantfix::precision::{agrees_within_bps, measure_precision, EXACT_MATCH_BITS};
use quantfix::pricing::{d1_d2, price_bsm};
use quantfix::OptionParameters;

/// Random valid parameter sets over a realistic operating range:
/// spot/strike in [100, 100_000], vol in [5%, 300%], r in [0, 20%],
/// T in [1 day, 4 years].
fn arb_params() -> impl Strategy<Value = OptionParameters> {
    (
        100_i64..100_000,
        100_i64..100_000,
        SCALE / 20..3 * SCALE,
        0_i128..SCALE / 5,
        SCALE / 365..4 * SCALE,
    )
        .prop_map(|(spot, strike, vol, rate, t)| OptionParameters {
            spot: Fixed::from_int(spot),
            strike: Fixed::from_int(strike),
            volatility: Fixed::from_raw(vol),
            risk_free_rate: Fixed::from_raw(rate),
            time_to_expiry: Fixed::from_raw(t),
        })
}

// --- Property 1: d1 strictly dominates d2 ---

proptest! {
    /// d₂ = d₁ − σ√T with σ√T > 0 for every valid parameter set.
    #[test]
    fn d1_strictly_above_d2(params in arb_params()) {
        let (d1, d2) = d1_d2(&params).unwrap();
        prop_assert!(d1 > d2, "d1={d1}, d2={d2}");
    }
}

// --- Property 2: put-call parity ---

proptest! {
    /// call − put = S − K·e^(−rT) within a hair of the mantissa across the
    /// whole operating range.
    #[test]
    fn put_call_parity_holds(params in arb_params()) {
        let result = price_bsm(&params).unwrap();
        let discount = (-(params.risk_free_rate * params.time_to_expiry)).exp();
        let forward_value = params.spot - params.strike * discount;
        let gap = (result.call_price - result.put_price - forward_value).abs();
        // Truncation noise scales with the spot magnitude; 1e-12 covers the
        // full 1e5 spot range with orders of magnitude to spare.
        prop_assert!(
            gap <= Fixed::from_raw(1_000_000),
            "gap={gap} for spot={}, strike={}",
            params.spot,
            params.strike
        );
    }
}

// --- Property 3: premiums are non-negative ---

proptest! {
    #[test]
    fn premiums_non_negative(params in arb_params()) {
        let result = price_bsm(&params).unwrap();
        prop_assert!(result.call_price >= Fixed::ZERO);
        prop_assert!(result.put_price >= Fixed::ZERO);
    }
}

// --- Property 4: cdf bounds, symmetry, monotonicity ---

proptest! {
    /// Φ maps every argument into [0, 1] and satisfies the exact complement
    /// Φ(x) + Φ(−x) = 1 in mantissa terms.
    #[test]
    fn cdf_bounds_and_exact_complement(raw in -50 * SCALE..50 * SCALE) {
        let x = Fixed::from_raw(raw);
        let phi = norm_cdf(x);
        prop_assert!(phi >= Fixed::ZERO && phi <= Fixed::ONE);
        prop_assert_eq!(phi + norm_cdf(-x), Fixed::ONE);
    }
}

proptest! {
    /// Φ is non-decreasing: a positive step never lowers the cdf. Steps of
    /// at least 0.01 keep the true increment well above truncation noise
    /// everywhere in the ±8 range.
    #[test]
    fn cdf_monotone(raw in -8 * SCALE..8 * SCALE, step in SCALE / 100..SCALE) {
        let lo = norm_cdf(Fixed::from_raw(raw));
        let hi = norm_cdf(Fixed::from_raw(raw + step));
        prop_assert!(hi >= lo);
    }
}

// --- Property 5: precision measurement of a value against itself ---

proptest! {
    /// Any nonzero value measured against itself is an exact match.
    #[test]
    fn self_measurement_is_exact(raw in 1_i128..1_000_000 * SCALE) {
        let v = Fixed::from_raw(raw);
        let report = measure_precision(v, v).unwrap();
        prop_assert_eq!(report.absolute_error, Fixed::ZERO);
        prop_assert_eq!(report.relative_error, Fixed::ZERO);
        prop_assert_eq!(report.bits_of_precision, EXACT_MATCH_BITS);
    }
}

// --- Property 6: basis-point agreement near the origin ---

proptest! {
    /// A zero baseline agrees only with exact zero, no matter the
    /// tolerance; and every value agrees with itself at zero tolerance.
    #[test]
    fn bps_agreement_origin_cases(raw in 1_i128..1_000_000 * SCALE, bps in 0_i128..100 * SCALE) {
        let v = Fixed::from_raw(raw);
        let tolerance = Fixed::from_raw(bps);
        prop_assert!(!agrees_within_bps(v, Fixed::ZERO, tolerance));
        prop_assert!(agrees_within_bps(Fixed::ZERO, Fixed::ZERO, tolerance));
        prop_assert!(agrees_within_bps(v, v, Fixed::ZERO));
    }
}
