//! The `Priceable` capability trait.
//!
//! Instruments expose present value and greeks against a quote bundle of
//! their own choosing. The quote is passed per call and never stored: every
//! computation is a pure function of its arguments, independently
//! re-entrant, and safe to evaluate concurrently across threads.

use crate::types::PricingError;

/// Capability interface for instruments that can be priced and risked.
///
/// # Associated Types
/// * `Quote` - The per-call bundle of market inputs this instrument needs
///   (spot/forward level, volatility, discount rates). Quotes are value
///   types; nothing is cached between calls.
///
/// # Contract
/// - Every method is pure: identical inputs yield bit-identical results.
/// - Greeks use each instrument's documented default bump sizes and unit
///   conventions (per basis point, per vol point, and so on).
/// - Errors are never suppressed; degenerate inputs surface as
///   `PricingError::DomainFault` to the immediate caller.
///
/// # Examples
///
/// ```
/// use vanna_core::traits::Priceable;
/// use vanna_core::types::PricingError;
///
/// struct ForwardContract {
///     strike: f64,
/// }
///
/// struct ForwardQuote {
///     forward: f64,
/// }
///
/// impl Priceable for ForwardContract {
///     type Quote = ForwardQuote;
///
///     fn pv(&self, quote: &ForwardQuote) -> Result<f64, PricingError> {
///         Ok(quote.forward - self.strike)
///     }
///
///     fn delta(&self, _quote: &ForwardQuote) -> Result<f64, PricingError> {
///         Ok(1.0)
///     }
///
///     fn gamma(&self, _quote: &ForwardQuote) -> Result<f64, PricingError> {
///         Ok(0.0)
///     }
///
///     fn vega(&self, _quote: &ForwardQuote) -> Result<f64, PricingError> {
///         Ok(0.0)
///     }
/// }
///
/// let fwd = ForwardContract { strike: 100.0 };
/// let pv = fwd.pv(&ForwardQuote { forward: 101.0 }).unwrap();
/// assert!((pv - 1.0).abs() < 1e-12);
/// ```
pub trait Priceable {
    /// Per-call market quote bundle.
    type Quote;

    /// Present value in the instrument's documented unit convention.
    fn pv(&self, quote: &Self::Quote) -> Result<f64, PricingError>;

    /// First-order sensitivity of PV to the underlying level.
    fn delta(&self, quote: &Self::Quote) -> Result<f64, PricingError>;

    /// Second-order sensitivity of PV to the underlying level.
    fn gamma(&self, quote: &Self::Quote) -> Result<f64, PricingError>;

    /// Sensitivity of PV to volatility.
    fn vega(&self, quote: &Self::Quote) -> Result<f64, PricingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear {
        slope: f64,
    }

    struct LinearQuote {
        x: f64,
    }

    impl Priceable for Linear {
        type Quote = LinearQuote;

        fn pv(&self, quote: &LinearQuote) -> Result<f64, PricingError> {
            Ok(self.slope * quote.x)
        }

        fn delta(&self, _quote: &LinearQuote) -> Result<f64, PricingError> {
            Ok(self.slope)
        }

        fn gamma(&self, _quote: &LinearQuote) -> Result<f64, PricingError> {
            Ok(0.0)
        }

        fn vega(&self, _quote: &LinearQuote) -> Result<f64, PricingError> {
            Ok(0.0)
        }
    }

    #[test]
    fn test_pv_is_pure() {
        let instrument = Linear { slope: 2.5 };
        let quote = LinearQuote { x: 4.0 };
        let first = instrument.pv(&quote).unwrap();
        let second = instrument.pv(&quote).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_greeks_via_trait() {
        let instrument = Linear { slope: 2.5 };
        let quote = LinearQuote { x: 4.0 };
        assert_eq!(instrument.delta(&quote).unwrap(), 2.5);
        assert_eq!(instrument.gamma(&quote).unwrap(), 0.0);
    }
}
