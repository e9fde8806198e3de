//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the closed-form pricers

use thiserror::Error;
use vanna_core::types::PricingError;

/// Analytical pricing errors.
///
/// The closed-form pricers do not define intrinsic-value fallbacks for
/// degenerate inputs: zero volatility or zero time to expiry makes the
/// d-terms undefined, and the call fails with a typed error instead of
/// returning NaN.
///
/// # Variants
/// - `InvalidVolatility`: Non-positive volatility
/// - `DegenerateExpiry`: Non-positive time to expiry
/// - `NonPositiveForward`: Forward level outside the lognormal domain
/// - `NonPositiveStrike`: Strike outside the lognormal domain
///
/// # Examples
/// ```
/// use vanna_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Non-positive time to expiry.
    #[error("Degenerate time to expiry: T = {expiry}")]
    DegenerateExpiry {
        /// The invalid time to expiry
        expiry: f64,
    },

    /// Non-positive forward under lognormal dynamics.
    #[error("Non-positive forward: F = {forward}")]
    NonPositiveForward {
        /// The invalid forward level
        forward: f64,
    },

    /// Non-positive strike under lognormal dynamics.
    #[error("Non-positive strike: K = {strike}")]
    NonPositiveStrike {
        /// The invalid strike level
        strike: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::DomainFault(err.to_string())
    }
}
