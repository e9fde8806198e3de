//! Rates swaption facade.
//!
//! European swaptions quoted in normal basis-point volatility, priced with
//! the Bachelier formula. Forward, strike, and volatility are all in basis
//! points; the running price is scaled by the swap annuity to give bps
//! upfront per 10,000 notional.

use std::fmt;

use vanna_core::traits::Priceable;
use vanna_core::types::{year_fraction, Currency, Date, OptionSide, PricingError};

use crate::analytical::bachelier_price;
use crate::greeks;

/// Default forward bump for numerical dv01 and gamma, in basis points.
pub const DEFAULT_FORWARD_BUMP: f64 = 10.0;
/// Default volatility bump for numerical vega, in basis points of normal
/// volatility.
pub const DEFAULT_VOL_BUMP: f64 = 5.0;

/// Per-call market quote for a rates swaption.
///
/// `forward` and `sigma` are in basis points (normal vol in bps/annum);
/// `annuity` is per 10,000 notional, so roughly 10 for a 10y swap.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatesQuote {
    /// Forward swap rate in basis points.
    pub forward: f64,
    /// Annualised normal volatility in basis points.
    pub sigma: f64,
    /// Swap annuity per 10,000 notional.
    pub annuity: f64,
}

/// A European swaption on a forward-starting swap.
///
/// A payer swaption maps to [`OptionSide::Call`] (gains as the forward
/// rises), a receiver to [`OptionSide::Put`]; the side parser accepts the
/// payer/receiver tokens directly.
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::{RatesSwaption, RatesQuote};
/// use vanna_core::types::{Currency, Date, OptionSide};
///
/// let payer = RatesSwaption::new(
///     "10y payer",
///     Date::from_ymd(2017, 1, 31).unwrap(),
///     Date::from_ymd(2018, 1, 31).unwrap(),
///     "payer".parse::<OptionSide>().unwrap(),
///     180.0,
///     365,
///     Currency::USD,
/// )
/// .unwrap();
///
/// let quote = RatesQuote { forward: 180.0, sigma: 100.0, annuity: 10.0 };
/// let bps_upfront = payer.pv(&quote).unwrap();
/// assert!(bps_upfront > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatesSwaption {
    /// Trade label.
    name: String,
    /// Trade date.
    trade_date: Date,
    /// Option expiry date.
    expiry_date: Date,
    /// Payer (call) or receiver (put).
    side: OptionSide,
    /// Strike rate in basis points.
    strike: f64,
    /// Flat day-count divisor.
    day_count: u32,
    /// PV currency.
    pv_ccy: Currency,
}

impl RatesSwaption {
    /// Creates a new rates swaption.
    ///
    /// Unlike the lognormal facades the strike may take any sign; negative
    /// strikes are meaningful under normal dynamics.
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `trade_date` - Trade date
    /// * `expiry_date` - Expiry date (must follow the trade date)
    /// * `side` - Payer (call) or receiver (put)
    /// * `strike` - Strike rate in basis points (finite, any sign)
    /// * `day_count` - Flat day-count divisor (must be positive)
    /// * `pv_ccy` - PV currency
    ///
    /// # Errors
    /// `PricingError::InvalidInput` on a non-finite strike, a zero
    /// day-count divisor, or inverted dates.
    pub fn new(
        name: &str,
        trade_date: Date,
        expiry_date: Date,
        side: OptionSide,
        strike: f64,
        day_count: u32,
        pv_ccy: Currency,
    ) -> Result<Self, PricingError> {
        if !strike.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "Strike must be finite, got {}",
                strike
            )));
        }
        if day_count == 0 {
            return Err(PricingError::InvalidInput(
                "Day-count divisor must be positive".to_string(),
            ));
        }
        if expiry_date <= trade_date {
            return Err(PricingError::InvalidInput(
                "Expiry date must follow trade date".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            trade_date,
            expiry_date,
            side,
            strike,
            day_count,
            pv_ccy,
        })
    }

    /// Returns the trade label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the option side (payer = call, receiver = put).
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Returns the strike in basis points.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    fn time_to_expiry(&self) -> f64 {
        year_fraction(self.trade_date, self.expiry_date, self.day_count)
    }

    /// Present value in bps upfront per 10,000 notional.
    ///
    /// Bachelier running price scaled by the annuity.
    ///
    /// # Errors
    /// `PricingError::DomainFault` when σ ≤ 0 or the option has expired.
    pub fn pv(&self, quote: &RatesQuote) -> Result<f64, PricingError> {
        let t = self.time_to_expiry();
        let bps_running = bachelier_price(quote.forward, self.strike, t, quote.sigma, self.side)?;
        Ok(quote.annuity * bps_running)
    }

    /// Numerical dv01 from a central difference on the forward axis, with
    /// `bump` in basis points.
    ///
    /// Payers carry positive dv01, receivers negative.
    pub fn delta_with_bump(&self, quote: &RatesQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |forward: f64| self.pv(&RatesQuote { forward, ..*quote });
        greeks::delta(&pv, quote.forward, bump)
    }

    /// Numerical gamma per basis point of forward.
    pub fn gamma_with_bump(&self, quote: &RatesQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |forward: f64| self.pv(&RatesQuote { forward, ..*quote });
        greeks::gamma(&pv, quote.forward, bump)
    }

    /// Numerical vega per basis point of normal volatility.
    ///
    /// The volatility axis is already in basis points, so the bump shifts
    /// sigma directly with no vol-point rescaling; this is a plain central
    /// difference, unlike the lognormal facades.
    pub fn vega_with_bump(&self, quote: &RatesQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |sigma: f64| self.pv(&RatesQuote { sigma, ..*quote });
        greeks::delta(&pv, quote.sigma, bump)
    }
}

impl Priceable for RatesSwaption {
    type Quote = RatesQuote;

    fn pv(&self, quote: &RatesQuote) -> Result<f64, PricingError> {
        RatesSwaption::pv(self, quote)
    }

    fn delta(&self, quote: &RatesQuote) -> Result<f64, PricingError> {
        self.delta_with_bump(quote, DEFAULT_FORWARD_BUMP)
    }

    fn gamma(&self, quote: &RatesQuote) -> Result<f64, PricingError> {
        self.gamma_with_bump(quote, DEFAULT_FORWARD_BUMP)
    }

    fn vega(&self, quote: &RatesQuote) -> Result<f64, PricingError> {
        self.vega_with_bump(quote, DEFAULT_VOL_BUMP)
    }
}

impl fmt::Display for RatesSwaption {
    /// Diagnostic key-value dump of the stored trade economics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RatesSwaption {{ name: {}, trade_date: {}, expiry_date: {}, side: {}, strike: {}, day_count: {}, pv_ccy: {} }}",
            self.name,
            self.trade_date,
            self.expiry_date,
            self.side,
            self.strike,
            self.day_count,
            self.pv_ccy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn swaption(side: OptionSide) -> RatesSwaption {
        RatesSwaption::new(
            "10y swaption",
            Date::from_ymd(2017, 1, 31).unwrap(),
            Date::from_ymd(2018, 1, 31).unwrap(),
            side,
            180.0,
            365,
            Currency::USD,
        )
        .unwrap()
    }

    fn atm_quote() -> RatesQuote {
        RatesQuote {
            forward: 180.0,
            sigma: 100.0,
            annuity: 10.0,
        }
    }

    // ==========================================================
    // Construction and side tokens
    // ==========================================================

    #[test]
    fn test_negative_strike_allowed() {
        let result = RatesSwaption::new(
            "neg strike",
            Date::from_ymd(2017, 1, 31).unwrap(),
            Date::from_ymd(2018, 1, 31).unwrap(),
            OptionSide::Put,
            -25.0,
            365,
            Currency::EUR,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_payer_receiver_tokens_parse() {
        assert_eq!("Payer".parse::<OptionSide>().unwrap(), OptionSide::Call);
        assert_eq!("rec".parse::<OptionSide>().unwrap(), OptionSide::Put);
    }

    // ==========================================================
    // Present value
    // ==========================================================

    #[test]
    fn test_atm_pv_reference_value() {
        // annuity · σ√T/√(2π) = 10 · 100 · 0.3989
        let pv = swaption(OptionSide::Call).pv(&atm_quote()).unwrap();
        assert_relative_eq!(pv, 10.0 * 100.0 * 0.3989422804, max_relative = 1e-6);
    }

    #[test]
    fn test_pv_scales_linearly_with_annuity() {
        let base = swaption(OptionSide::Call).pv(&atm_quote()).unwrap();
        let doubled = swaption(OptionSide::Call)
            .pv(&RatesQuote {
                annuity: 20.0,
                ..atm_quote()
            })
            .unwrap();
        assert_relative_eq!(doubled, 2.0 * base, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    #[test]
    fn test_payer_dv01_positive_receiver_negative() {
        let payer_delta = swaption(OptionSide::Call)
            .delta_with_bump(&atm_quote(), 10.0)
            .unwrap();
        let receiver_delta = swaption(OptionSide::Put)
            .delta_with_bump(&atm_quote(), 10.0)
            .unwrap();
        assert!(payer_delta > 0.0);
        assert!(receiver_delta < 0.0);
        // ATM normal delta is ±annuity/2 up to difference error
        assert_relative_eq!(payer_delta, -receiver_delta, epsilon = 1e-9);
    }

    #[test]
    fn test_atm_dv01_near_half_annuity() {
        let delta = swaption(OptionSide::Call)
            .delta_with_bump(&atm_quote(), 1.0)
            .unwrap();
        assert_relative_eq!(delta, 5.0, max_relative = 0.01);
    }

    #[test]
    fn test_gamma_positive_both_sides() {
        for side in [OptionSide::Call, OptionSide::Put] {
            let gamma = swaption(side).gamma_with_bump(&atm_quote(), 10.0).unwrap();
            assert!(gamma > 0.0);
        }
    }

    #[test]
    fn test_vega_shifts_sigma_directly() {
        // ATM PV is linear in sigma, so vega = annuity·√T/√(2π) regardless
        // of the bump size
        let coarse = swaption(OptionSide::Call)
            .vega_with_bump(&atm_quote(), 5.0)
            .unwrap();
        let fine = swaption(OptionSide::Call)
            .vega_with_bump(&atm_quote(), 1.0)
            .unwrap();
        assert_relative_eq!(coarse, 10.0 * 0.3989422804, max_relative = 1e-6);
        assert_relative_eq!(coarse, fine, max_relative = 1e-6);
    }

    #[test]
    fn test_priceable_defaults() {
        let payer = swaption(OptionSide::Call);
        let quote = atm_quote();
        assert_eq!(
            Priceable::vega(&payer, &quote).unwrap(),
            payer.vega_with_bump(&quote, DEFAULT_VOL_BUMP).unwrap()
        );
    }

    #[test]
    fn test_display_dumps_fields() {
        let text = format!("{}", swaption(OptionSide::Call));
        assert!(text.contains("10y swaption"));
        assert!(text.contains("strike: 180"));
    }
}
