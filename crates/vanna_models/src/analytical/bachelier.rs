//! Bachelier (normal) pricing formula on an additive forward.
//!
//! Commonly used for rates swaptions quoted in normal basis-point
//! volatility, where negative forwards and strikes are meaningful.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = (φ(d) + d·Φ(d))·σ√T
//! **Put Price**: P = (φ(d) - d·Φ(-d))·σ√T
//!
//! Where:
//! - d = (F - K) / (σ√T)
//! - Φ(·) is the standard normal CDF, φ(·) the PDF

use num_traits::Float;
use vanna_core::types::OptionSide;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Computes the undiscounted Bachelier price of a European option on a
/// forward.
///
/// Unlike the Black formula, the forward and strike may take any sign, so
/// this is the pricer of choice for interest-rate forwards. Volatility is
/// in the same additive units as the forward (for swaptions, basis points
/// per annum).
///
/// # Arguments
/// * `forward` - Forward level (any sign)
/// * `strike` - Strike (any sign)
/// * `expiry` - Time to expiry in years (must be positive)
/// * `sigma` - Annualised normal volatility (must be positive)
/// * `side` - Call (payer) or put (receiver)
///
/// # Errors
/// - `AnalyticalError::InvalidVolatility` if sigma <= 0
/// - `AnalyticalError::DegenerateExpiry` if expiry <= 0
///
/// # Examples
/// ```
/// use vanna_models::analytical::bachelier_price;
/// use vanna_core::types::OptionSide;
///
/// let payer: f64 = bachelier_price(180.0, 180.0, 1.0, 100.0, OptionSide::Call).unwrap();
/// let receiver: f64 = bachelier_price(180.0, 180.0, 1.0, 100.0, OptionSide::Put).unwrap();
///
/// // ATM call and put coincide under normal dynamics
/// assert!((payer - receiver).abs() < 1e-10);
///
/// // ATM normal price = σ√T/√(2π)
/// assert!((payer - 100.0 * 0.3989422804).abs() < 1e-4);
/// ```
pub fn bachelier_price<T: Float>(
    forward: T,
    strike: T,
    expiry: T,
    sigma: T,
    side: OptionSide,
) -> Result<T, AnalyticalError> {
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

    let vol_sqrt_t = sigma * expiry.sqrt();
    let d = (forward - strike) / vol_sqrt_t;

    let price = match side {
        OptionSide::Call => (norm_pdf(d) + d * norm_cdf(d)) * vol_sqrt_t,
        OptionSide::Put => (norm_pdf(d) - d * norm_cdf(-d)) * vol_sqrt_t,
    };

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Domain validation
    // ==========================================================

    #[test]
    fn test_zero_volatility_faults() {
        let result = bachelier_price(180.0, 180.0, 1.0, 0.0, OptionSide::Call);
        assert_eq!(
            result.unwrap_err(),
            AnalyticalError::InvalidVolatility { volatility: 0.0 }
        );
    }

    #[test]
    fn test_zero_expiry_faults() {
        let result = bachelier_price(180.0, 180.0, 0.0, 100.0, OptionSide::Put);
        assert!(matches!(
            result.unwrap_err(),
            AnalyticalError::DegenerateExpiry { .. }
        ));
    }

    // ==========================================================
    // Prices
    // ==========================================================

    #[test]
    fn test_atm_reference_value() {
        // ATM normal price = σ√T·φ(0) = σ√T/√(2π)
        let price = bachelier_price(180.0, 180.0, 1.0, 100.0, OptionSide::Call).unwrap();
        assert_relative_eq!(price, 100.0 * 0.3989422804, epsilon = 1e-4);
    }

    #[test]
    fn test_atm_call_put_symmetry() {
        let call = bachelier_price(0.01, 0.01, 2.0, 0.005, OptionSide::Call).unwrap();
        let put = bachelier_price(0.01, 0.01, 2.0, 0.005, OptionSide::Put).unwrap();
        assert_relative_eq!(call, put, epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = F - K under normal dynamics
        for strike in [140.0, 160.0, 180.0, 200.0, 220.0] {
            let call = bachelier_price(180.0, strike, 1.0, 100.0, OptionSide::Call).unwrap();
            let put = bachelier_price(180.0, strike, 1.0, 100.0, OptionSide::Put).unwrap();
            assert_relative_eq!(call - put, 180.0 - strike, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_negative_forward_allowed() {
        // Negative rates are a valid normal-model input
        let price = bachelier_price(-0.002, 0.001, 1.0, 0.006, OptionSide::Call).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn test_prices_non_negative() {
        for (forward, strike) in [(100.0, 300.0), (300.0, 100.0), (-50.0, 50.0)] {
            for side in [OptionSide::Call, OptionSide::Put] {
                let price = bachelier_price(forward, strike, 0.5, 80.0, side).unwrap();
                assert!(price >= 0.0, "negative price for F={} K={}", forward, strike);
            }
        }
    }

    #[test]
    fn test_deep_itm_call_approaches_intrinsic() {
        let price = bachelier_price(500.0, 100.0, 1.0, 50.0, OptionSide::Call).unwrap();
        assert_relative_eq!(price, 400.0, max_relative = 1e-6);
    }

    proptest::proptest! {
        // Tolerances below are scaled by σ√T: the CDF approximation carries
        // ~1e-7 absolute error, which can exceed the true price deep out of
        // the money

        #[test]
        fn prop_prices_non_negative(
            forward in -500.0..500.0f64,
            strike in -500.0..500.0f64,
            expiry in 0.01..30.0f64,
            sigma in 0.1..500.0f64,
        ) {
            let slack = 1e-5 * sigma * expiry.sqrt();
            for side in [OptionSide::Call, OptionSide::Put] {
                let price = bachelier_price(forward, strike, expiry, sigma, side).unwrap();
                proptest::prop_assert!(price >= -slack);
            }
        }

        #[test]
        fn prop_call_dominates_intrinsic(
            forward in -500.0..500.0f64,
            strike in -500.0..500.0f64,
            expiry in 0.01..30.0f64,
            sigma in 0.1..500.0f64,
        ) {
            let slack = 1e-5 * sigma * expiry.sqrt();
            let call = bachelier_price(forward, strike, expiry, sigma, OptionSide::Call).unwrap();
            proptest::prop_assert!(call >= (forward - strike).max(0.0) - slack);
        }
    }
}
