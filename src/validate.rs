//! Input validation helpers.
//!
//! Every public entry point that accepts an [`OptionParameters`] re-runs
//! [`check_option_parameters`] before computing; there is no shared
//! validated-state cache. Checks run in a fixed order (spot, strike,
//! volatility, expiry, rate) and each failure carries the offending value.

use crate::error::{QuantFixError, Result};
use crate::fixed::Fixed;
use crate::types::OptionParameters;

/// Validate the financial domain of a full parameter set.
///
/// Order matters: the first violated constraint determines the error.
pub(crate) fn check_option_parameters(params: &OptionParameters) -> Result<()> {
    if params.spot <= Fixed::ZERO {
        return Err(QuantFixError::InvalidSpotPrice { spot: params.spot });
    }
    check_strike(params.strike)?;
    if params.volatility <= Fixed::ZERO {
        return Err(QuantFixError::InvalidVolatility {
            volatility: params.volatility,
        });
    }
    if params.time_to_expiry <= Fixed::ZERO {
        return Err(QuantFixError::InvalidTimeToExpiry {
            time_to_expiry: params.time_to_expiry,
        });
    }
    if params.risk_free_rate < Fixed::ZERO {
        return Err(QuantFixError::InvalidRiskFreeRate {
            rate: params.risk_free_rate,
        });
    }
    Ok(())
}

/// Validate a strike in isolation (also used by the skew model).
pub(crate) fn check_strike(strike: Fixed) -> Result<()> {
    if strike <= Fixed::ZERO {
        return Err(QuantFixError::InvalidStrikePrice { strike });
    }
    Ok(())
}
