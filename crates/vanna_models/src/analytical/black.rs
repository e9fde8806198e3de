//! Black pricing formula on a lognormal forward.
//!
//! Prices European exercise against a forward level, with discounting and
//! any annuity scaling applied by the instrument facade, not here.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = F·Φ(d₁) - K·Φ(d₂)
//! **Put Price**: P = K·Φ(-d₂) - F·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Put conventions
//!
//! Alongside the standard put above, a legacy put variant is kept available
//! behind [`PutConvention::Legacy`]. It multiplies the forward leg by the
//! strike (P = K·Φ(-d₂) - F·K·Φ(-d₁)), which breaks put-call parity for any
//! strike other than 1 and exists solely to reproduce historical marks
//! produced under that convention. All facades use
//! [`PutConvention::Standard`], which is the variant the parity property
//! tests pin down.

use num_traits::Float;
use vanna_core::types::OptionSide;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;

/// Put-leg convention for the Black formula.
///
/// # Variants
/// - `Standard`: P = K·Φ(-d₂) - F·Φ(-d₁); satisfies C - P = F - K
/// - `Legacy`: P = K·Φ(-d₂) - F·K·Φ(-d₁); dimensionally inconsistent,
///   retained only for reproducing marks computed under that convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PutConvention {
    /// Parity-consistent put formula (the default).
    #[default]
    Standard,
    /// Historical put formula with the extra strike factor on the forward leg.
    Legacy,
}

/// Validates the shared numeric domain of the Black formula.
#[inline]
fn validate<T: Float>(forward: T, strike: T, expiry: T, sigma: T) -> Result<(), AnalyticalError> {
    let zero = T::zero();

    if sigma <= zero {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: sigma.to_f64().unwrap_or(0.0),
        });
    }
    if expiry <= zero {
        return Err(AnalyticalError::DegenerateExpiry {
            expiry: expiry.to_f64().unwrap_or(0.0),
        });
    }
    if forward <= zero {
        return Err(AnalyticalError::NonPositiveForward {
            forward: forward.to_f64().unwrap_or(0.0),
        });
    }
    if strike <= zero {
        return Err(AnalyticalError::NonPositiveStrike {
            strike: strike.to_f64().unwrap_or(0.0),
        });
    }
    Ok(())
}

/// Computes the undiscounted Black price of a European option on a forward.
///
/// Uses [`PutConvention::Standard`] for puts. See [`black_price_with`] for
/// the legacy put variant.
///
/// # Arguments
/// * `forward` - Forward level of the underlying (F, must be positive)
/// * `strike` - Strike (K, must be positive)
/// * `expiry` - Time to expiry in years (T, must be positive)
/// * `sigma` - Annualised lognormal volatility (must be positive)
/// * `side` - Call or put
///
/// # Errors
/// - `AnalyticalError::InvalidVolatility` if sigma <= 0
/// - `AnalyticalError::DegenerateExpiry` if expiry <= 0
/// - `AnalyticalError::NonPositiveForward` / `NonPositiveStrike` outside the
///   lognormal domain
///
/// # Examples
/// ```
/// use vanna_models::analytical::black_price;
/// use vanna_core::types::OptionSide;
///
/// let call: f64 = black_price(100.0, 100.0, 1.0, 0.2, OptionSide::Call).unwrap();
/// let put: f64 = black_price(100.0, 100.0, 1.0, 0.2, OptionSide::Put).unwrap();
///
/// // Put-call parity on the forward: C - P = F - K
/// assert!((call - put).abs() < 1e-10);
///
/// // Zero volatility faults rather than falling back to intrinsic value
/// assert!(black_price(100.0, 100.0, 1.0, 0.0, OptionSide::Call).is_err());
/// ```
#[inline]
pub fn black_price<T: Float>(
    forward: T,
    strike: T,
    expiry: T,
    sigma: T,
    side: OptionSide,
) -> Result<T, AnalyticalError> {
    black_price_with(forward, strike, expiry, sigma, side, PutConvention::Standard)
}

/// Computes the undiscounted Black price with an explicit put convention.
///
/// Calls are identical under both conventions; only the put leg differs.
///
/// # Examples
/// ```
/// use vanna_models::analytical::{black_price_with, PutConvention};
/// use vanna_core::types::OptionSide;
///
/// let standard =
///     black_price_with(1.14, 1.10, 0.5, 0.06, OptionSide::Put, PutConvention::Standard).unwrap();
/// let legacy =
///     black_price_with(1.14, 1.10, 0.5, 0.06, OptionSide::Put, PutConvention::Legacy).unwrap();
/// assert!(standard != legacy);
/// ```
pub fn black_price_with<T: Float>(
    forward: T,
    strike: T,
    expiry: T,
    sigma: T,
    side: OptionSide,
    convention: PutConvention,
) -> Result<T, AnalyticalError> {
    validate(forward, strike, expiry, sigma)?;

    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = sigma * expiry.sqrt();

    // d1 = (ln(F/K) + σ²T/2) / (σ√T), d2 = d1 - σ√T
    let d1 = ((forward / strike).ln() + half * sigma * sigma * expiry) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    let price = match side {
        OptionSide::Call => forward * norm_cdf(d1) - strike * norm_cdf(d2),
        OptionSide::Put => match convention {
            PutConvention::Standard => strike * norm_cdf(-d2) - forward * norm_cdf(-d1),
            PutConvention::Legacy => strike * norm_cdf(-d2) - forward * strike * norm_cdf(-d1),
        },
    };

    Ok(price)
}
