//! Error types for the quantfix library.
//!
//! Every fallible operation returns `Result<T, QuantFixError>` rather than
//! panicking. Each validation variant carries the offending value so callers
//! can diagnose bad financial inputs without re-deriving them.
//!
//! All variants describe caller-input problems: the library is stateless and
//! deterministic, so retrying a failed call with the same inputs yields the
//! same failure and nothing is recoverable internally.

use thiserror::Error;

use crate::fixed::Fixed;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, QuantFixError>;

/// Errors raised by pricing, volatility, and diagnostic entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuantFixError {
    /// Spot price must be strictly positive.
    #[error("invalid spot price: must be positive, got {spot}")]
    InvalidSpotPrice { spot: Fixed },

    /// Strike price must be strictly positive.
    #[error("invalid strike price: must be positive, got {strike}")]
    InvalidStrikePrice { strike: Fixed },

    /// Volatility must be strictly positive.
    #[error("invalid volatility: must be positive, got {volatility}")]
    InvalidVolatility { volatility: Fixed },

    /// Time to expiry must be strictly positive.
    #[error("invalid time to expiry: must be positive, got {time_to_expiry}")]
    InvalidTimeToExpiry { time_to_expiry: Fixed },

    /// Risk-free rate must be non-negative.
    #[error("invalid risk-free rate: must be non-negative, got {rate}")]
    InvalidRiskFreeRate { rate: Fixed },

    /// EWMA estimation requires at least one log-return.
    #[error("empty returns array: EWMA estimation requires at least one log-return")]
    EmptyReturnsArray,

    /// EWMA decay factor must lie strictly inside (0, 1).
    #[error("invalid decay factor: must be in (0, 1), got {lambda}")]
    InvalidDecayFactor { lambda: Fixed },

    /// Utilization premium diverges at full utilization.
    #[error("utilization too high: must be below 1, got {utilization}")]
    UtilizationTooHigh { utilization: Fixed },

    /// Precision metrics are undefined against a zero reference value.
    #[error("zero reference value: relative error is undefined")]
    ZeroReferenceValue,

    /// Put-call parity gap exceeded the supplied tolerance.
    #[error("put-call parity violation: gap {gap} exceeds tolerance {tolerance}")]
    PutCallParityViolation { gap: Fixed, tolerance: Fixed },
}
