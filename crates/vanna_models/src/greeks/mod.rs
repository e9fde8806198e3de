//! Generic central-difference greek engine.
//!
//! Finite-difference operators parametrised by any fallible pricing closure
//! and a bump size. No numerical-differentiation library is involved; the
//! three functions below are the full definitions.
//!
//! Gamma deserves a note: it is built by re-bumping [`delta`] with the same
//! bump size delta itself uses internally, i.e. two composed first-order
//! central differences rather than a single three-point second-derivative
//! stencil. The composition widens the effective stencil and smooths the
//! result, and downstream numbers are calibrated to that behaviour, so it
//! must not be collapsed into the classical formula.
//!
//! # Usage
//!
//! ```rust
//! use vanna_models::greeks;
//! use vanna_core::types::PricingError;
//!
//! let square = |x: f64| -> Result<f64, PricingError> { Ok(x * x) };
//!
//! let delta = greeks::delta(&square, 3.0, 0.5).unwrap();
//! assert!((delta - 6.0).abs() < 1e-12);
//!
//! let gamma = greeks::gamma(&square, 3.0, 0.5).unwrap();
//! assert!((gamma - 2.0).abs() < 1e-12);
//! ```

use num_traits::Float;
use vanna_core::types::PricingError;

/// Checks the bump size before differencing.
///
/// A zero bump would silently produce NaN from the 0/0 quotient; fault
/// explicitly instead.
#[inline]
fn validate_bump<T: Float>(bump: T) -> Result<(), PricingError> {
    if bump == T::zero() {
        return Err(PricingError::DomainFault(
            "finite-difference bump must be non-zero".to_string(),
        ));
    }
    Ok(())
}

/// First-order central difference of a pricing closure.
///
/// `delta = (pv(x + bump) - pv(x - bump)) / (2·bump)`
///
/// The unit convention follows the closure: if `pv` returns bps upfront and
/// `x` is in bps, the delta is per basis point.
///
/// # Arguments
/// * `pv` - Pricing closure over the bump axis
/// * `x` - Centre point
/// * `bump` - Shift applied on each side (must be non-zero)
///
/// # Errors
/// Propagates any error from the bumped revaluations; faults on a zero bump.
pub fn delta<T, F>(pv: &F, x: T, bump: T) -> Result<T, PricingError>
where
    T: Float,
    F: Fn(T) -> Result<T, PricingError>,
{
    validate_bump(bump)?;
    let up = pv(x + bump)?;
    let down = pv(x - bump)?;
    let two = T::from(2.0).unwrap();
    Ok((up - down) / (two * bump))
}

/// Second-order sensitivity from two composed central differences.
///
/// `gamma = (delta(x + bump) - delta(x - bump)) / (2·bump)`
///
/// where each inner [`delta`] uses the same bump, so four revaluations at
/// x ± 2·bump and x are involved. Deliberately not a three-point stencil;
/// see the module docs.
///
/// # Arguments
/// * `pv` - Pricing closure over the bump axis
/// * `x` - Centre point
/// * `bump` - Shift applied at both difference levels (must be non-zero)
pub fn gamma<T, F>(pv: &F, x: T, bump: T) -> Result<T, PricingError>
where
    T: Float,
    F: Fn(T) -> Result<T, PricingError>,
{
    validate_bump(bump)?;
    let up = delta(pv, x + bump, bump)?;
    let down = delta(pv, x - bump, bump)?;
    let two = T::from(2.0).unwrap();
    Ok((up - down) / (two * bump))
}

/// Volatility sensitivity per vol point.
///
/// The bump is expressed in vol points and divided by 100 to shift the
/// decimal volatility fed to the pricer, while the difference is divided by
/// the un-scaled bump:
///
/// `vega = (pv(σ + bump/100) - pv(σ - bump/100)) / (2·bump)`
///
/// so the result reads as PV change per 1 vol point.
///
/// # Arguments
/// * `pv` - Pricing closure over the volatility axis (decimal volatility)
/// * `sigma` - Centre volatility, decimal
/// * `bump` - Shift in vol points (must be non-zero)
pub fn vega<T, F>(pv: &F, sigma: T, bump: T) -> Result<T, PricingError>
where
    T: Float,
    F: Fn(T) -> Result<T, PricingError>,
{
    validate_bump(bump)?;
    let hundred = T::from(100.0).unwrap();
    let shift = bump / hundred;
    let up = pv(sigma + shift)?;
    let down = pv(sigma - shift)?;
    let two = T::from(2.0).unwrap();
    Ok((up - down) / (two * bump))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic(x: f64) -> Result<f64, PricingError> {
        Ok(x * x * x)
    }

    // ==========================================================
    // Delta
    // ==========================================================

    #[test]
    fn test_delta_exact_for_quadratic() {
        // Central differences are exact for polynomials up to degree 2
        let pv = |x: f64| -> Result<f64, PricingError> { Ok(2.0 * x * x + x) };
        let d = delta(&pv, 5.0, 0.1).unwrap();
        assert_relative_eq!(d, 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_delta_converges_for_cubic() {
        // d/dx x³ at 2 is 12; central difference error is O(bump²)
        let coarse = delta(&cubic, 2.0, 0.5).unwrap();
        let fine = delta(&cubic, 2.0, 0.01).unwrap();
        assert!((fine - 12.0).abs() < (coarse - 12.0).abs());
        assert_relative_eq!(fine, 12.0, epsilon = 1e-3);
    }

    #[test]
    fn test_delta_zero_bump_faults() {
        let result = delta(&cubic, 2.0, 0.0);
        assert!(matches!(result.unwrap_err(), PricingError::DomainFault(_)));
    }

    #[test]
    fn test_delta_propagates_closure_error() {
        let pv = |_x: f64| -> Result<f64, PricingError> {
            Err(PricingError::DomainFault("boom".to_string()))
        };
        assert!(delta(&pv, 1.0, 0.1).is_err());
    }

    // ==========================================================
    // Gamma (double central difference)
    // ==========================================================

    #[test]
    fn test_gamma_exact_for_cubic() {
        // d²/dx² x³ at 2 is 12; the composed difference is exact for cubics
        let g = gamma(&cubic, 2.0, 0.25).unwrap();
        assert_relative_eq!(g, 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_gamma_is_composed_of_deltas() {
        // The definition is literally the outer difference of two deltas
        let pv = |x: f64| -> Result<f64, PricingError> { Ok((x * 0.3).sin()) };
        let bump = 0.05;
        let x = 1.2;
        let expected = (delta(&pv, x + bump, bump).unwrap() - delta(&pv, x - bump, bump).unwrap())
            / (2.0 * bump);
        assert_relative_eq!(gamma(&pv, x, bump).unwrap(), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_gamma_differs_from_three_point_stencil() {
        // The composed form spans x ± 2·bump, so for a quartic it disagrees
        // with the classical (f(x+h) - 2f(x) + f(x-h))/h² stencil
        let pv = |x: f64| -> Result<f64, PricingError> { Ok(x.powi(4)) };
        let bump = 0.5;
        let x = 1.0;
        let composed = gamma(&pv, x, bump).unwrap();
        let stencil = (pv(x + bump).unwrap() - 2.0 * pv(x).unwrap() + pv(x - bump).unwrap())
            / (bump * bump);
        assert!((composed - stencil).abs() > 1e-3);
    }

    // ==========================================================
    // Vega
    // ==========================================================

    #[test]
    fn test_vega_vol_point_scaling() {
        // pv linear in sigma with slope m: vega = m·(2·bump/100)/(2·bump) = m/100
        let pv = |sigma: f64| -> Result<f64, PricingError> { Ok(40.0 * sigma) };
        let v = vega(&pv, 0.16, 1.0).unwrap();
        assert_relative_eq!(v, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_vega_zero_bump_faults() {
        let pv = |sigma: f64| -> Result<f64, PricingError> { Ok(sigma) };
        assert!(vega(&pv, 0.2, 0.0).is_err());
    }
}
