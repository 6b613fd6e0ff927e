//! Numerical precision analysis of computed values against references.
//!
//! [`measure_precision`] scores a computed value against a trusted nonzero
//! reference as absolute error, relative error, and a bits-of-precision
//! figure (−log₂ of the relative error). [`compare_protocol_errors`] puts
//! that absolute error side by side with the error bounds assumed for two
//! widely deployed on-chain pricing implementations, and
//! [`agrees_within_bps`] is the tolerance predicate for cross-checking two
//! independently computed quantities in basis points.

use serde::{Deserialize, Serialize};

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;
use crate::types::PrecisionReport;

/// Bits-of-precision sentinel reported on an exact match.
///
/// The i128 mantissa spans about 59 usable bits of integer range at 18
/// decimals, so no measured result can legitimately score higher.
pub const EXACT_MATCH_BITS: Fixed = Fixed::from_int(59);

/// Assumed relative error of reference protocol A (1e-7).
pub const REFERENCE_PROTOCOL_A_ERROR: Fixed = Fixed::from_raw(100_000_000_000);

/// Assumed relative error of reference protocol B (5e-7).
pub const REFERENCE_PROTOCOL_B_ERROR: Fixed = Fixed::from_raw(500_000_000_000);

/// Absolute error of this library next to the absolute errors the two
/// reference protocols would incur on the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolErrorComparison {
    /// |computed − reference| as measured here.
    pub this_library_error: Fixed,
    /// [`REFERENCE_PROTOCOL_A_ERROR`] · |reference|.
    pub reference_protocol_a_error: Fixed,
    /// [`REFERENCE_PROTOCOL_B_ERROR`] · |reference|.
    pub reference_protocol_b_error: Fixed,
}

/// Score `computed` against a trusted nonzero `reference`.
///
/// `bits_of_precision` is −log₂(relative error), clamped to
/// [`EXACT_MATCH_BITS`] when the relative error truncates to zero — which
/// can happen even for a nonzero absolute error once the ratio drops below
/// one mantissa unit.
///
/// # Errors
/// [`QuantFixError::ZeroReferenceValue`] if `reference` is zero (relative
/// error would be undefined).
pub fn measure_precision(computed: Fixed, reference: Fixed) -> Result<PrecisionReport> {
    if reference.is_zero() {
        return Err(QuantFixError::ZeroReferenceValue);
    }
    let absolute_error = (computed - reference).abs();
    let relative_error = absolute_error / reference.abs();
    let bits_of_precision = if relative_error.is_zero() {
        EXACT_MATCH_BITS
    } else {
        -relative_error.log2()
    };
    Ok(PrecisionReport {
        absolute_error,
        relative_error,
        bits_of_precision,
    })
}

/// Compare this library's absolute error against the bounds the two
/// reference protocols would incur on the same reference value.
///
/// # Errors
/// [`QuantFixError::ZeroReferenceValue`] if `reference` is zero.
pub fn compare_protocol_errors(
    computed: Fixed,
    reference: Fixed,
) -> Result<ProtocolErrorComparison> {
    if reference.is_zero() {
        return Err(QuantFixError::ZeroReferenceValue);
    }
    let magnitude = reference.abs();
    Ok(ProtocolErrorComparison {
        this_library_error: (computed - reference).abs(),
        reference_protocol_a_error: REFERENCE_PROTOCOL_A_ERROR * magnitude,
        reference_protocol_b_error: REFERENCE_PROTOCOL_B_ERROR * magnitude,
    })
}

/// Do two independently computed values agree within `basis_points`?
///
/// With a zero baseline `b` there is no meaningful relative comparison, so
/// agreement then requires `a` to be exactly zero as well. Otherwise the
/// test is |a − b|/|b| ≤ basis_points/10000.
pub fn agrees_within_bps(a: Fixed, b: Fixed, basis_points: Fixed) -> bool {
    if b.is_zero() {
        return a.is_zero();
    }
    let relative = (a - b).abs() / b.abs();
    relative <= basis_points / Fixed::from_int(10_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(v: f64) -> Fixed {
        Fixed::from_f64(v)
    }

    // --- measure_precision ---

    #[test]
    fn exact_match_reports_sentinel_bits() {
        let v = Fixed::from_int(475);
        let report = measure_precision(v, v).unwrap();
        assert_eq!(report.absolute_error, Fixed::ZERO);
        assert_eq!(report.relative_error, Fixed::ZERO);
        assert_eq!(report.bits_of_precision, EXACT_MATCH_BITS);
    }

    #[test]
    fn one_part_in_two_to_twenty() {
        // rel = 2^-20 exactly: bits must come out at 20.
        let reference = Fixed::from_int(1 << 20);
        let computed = reference + Fixed::ONE;
        let report = measure_precision(computed, reference).unwrap();
        assert_eq!(report.absolute_error, Fixed::ONE);
        assert!((report.bits_of_precision.to_f64() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn sub_mantissa_ratio_clamps_to_sentinel() {
        // abs error 1e-18 against a reference of 1e3: the ratio truncates
        // to zero at 18 decimals, so bits clamps rather than diverging.
        let reference = Fixed::from_int(1000);
        let computed = reference + Fixed::from_raw(1);
        let report = measure_precision(computed, reference).unwrap();
        assert_eq!(report.absolute_error, Fixed::from_raw(1));
        assert_eq!(report.relative_error, Fixed::ZERO);
        assert_eq!(report.bits_of_precision, EXACT_MATCH_BITS);
    }

    #[test]
    fn error_is_symmetric_in_sign() {
        let above = measure_precision(fx(100.5), fx(100.0)).unwrap();
        let below = measure_precision(fx(99.5), fx(100.0)).unwrap();
        assert_eq!(above.absolute_error, below.absolute_error);
        assert_eq!(above.relative_error, below.relative_error);
    }

    #[test]
    fn negative_reference_uses_magnitude() {
        let report = measure_precision(fx(-100.5), fx(-100.0)).unwrap();
        assert_eq!(report.absolute_error, fx(0.5));
        assert!(report.relative_error > Fixed::ZERO);
    }

    #[test]
    fn zero_reference_rejected() {
        assert!(matches!(
            measure_precision(fx(1.0), Fixed::ZERO),
            Err(QuantFixError::ZeroReferenceValue)
        ));
    }

    // --- compare_protocol_errors ---

    #[test]
    fn protocol_bounds_scale_with_reference() {
        let cmp = compare_protocol_errors(Fixed::from_int(1000), Fixed::from_int(1000)).unwrap();
        assert_eq!(cmp.this_library_error, Fixed::ZERO);
        // 1e-7 · 1000 = 1e-4, 5e-7 · 1000 = 5e-4.
        assert_eq!(cmp.reference_protocol_a_error, Fixed::from_raw(100_000_000_000_000));
        assert_eq!(cmp.reference_protocol_b_error, Fixed::from_raw(500_000_000_000_000));
    }

    #[test]
    fn beats_both_protocols_on_typical_premiums() {
        // A 1e-9 absolute slip on a ~475 premium sits far under either
        // protocol's bound at that magnitude.
        let reference = fx(475.558257);
        let computed = reference + Fixed::from_raw(1_000_000_000);
        let cmp = compare_protocol_errors(computed, reference).unwrap();
        assert!(cmp.this_library_error < cmp.reference_protocol_a_error);
        assert!(cmp.this_library_error < cmp.reference_protocol_b_error);
        assert!(cmp.reference_protocol_a_error < cmp.reference_protocol_b_error);
    }

    #[test]
    fn protocol_comparison_rejects_zero_reference() {
        assert!(matches!(
            compare_protocol_errors(fx(1.0), Fixed::ZERO),
            Err(QuantFixError::ZeroReferenceValue)
        ));
    }

    // --- agrees_within_bps ---

    #[test]
    fn agreement_within_one_bps() {
        // 100.005 vs 100.0 is 0.5 bps.
        assert!(agrees_within_bps(fx(100.005), fx(100.0), Fixed::ONE));
        assert!(!agrees_within_bps(fx(100.05), fx(100.0), Fixed::ONE));
    }

    #[test]
    fn agreement_boundary_is_inclusive() {
        // Exactly 1 bps: 100.01 vs 100.
        assert!(agrees_within_bps(fx(100.01), fx(100.0), Fixed::ONE));
    }

    #[test]
    fn zero_baseline_only_agrees_with_zero() {
        assert!(agrees_within_bps(Fixed::ZERO, Fixed::ZERO, Fixed::ONE));
        assert!(!agrees_within_bps(Fixed::from_raw(1), Fixed::ZERO, Fixed::from_int(10_000)));
    }

    #[test]
    fn negative_baseline_compares_by_magnitude() {
        assert!(agrees_within_bps(fx(-100.005), fx(-100.0), Fixed::ONE));
    }
}
