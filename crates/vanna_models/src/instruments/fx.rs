//! FX vanilla option facade.
//!
//! European options on a currency pair, priced with the Black formula on
//! the interest-rate-parity forward. The PV currency must be one of the
//! two legs of the pair; quanto payoffs into a third currency are out of
//! scope. Prices are per unit notional of the base currency.

use std::fmt;

use vanna_core::traits::Priceable;
use vanna_core::types::{
    year_fraction, Currency, CurrencyError, CurrencyPair, Date, OptionSide, PricingError,
};

use crate::analytical::black_price;
use crate::greeks;

/// Default spot bump for numerical delta and gamma, in spot units.
///
/// Sized for pairs quoted near 100 (yen-style); callers pricing pairs
/// quoted near 1 should pass an explicit bump of pip scale instead.
pub const DEFAULT_SPOT_BUMP: f64 = 10.0;
/// Default volatility bump for numerical vega, in vol points.
pub const DEFAULT_VOL_BUMP: f64 = 1.0;

/// Per-call market quote for an FX option.
///
/// `rd` is the funding rate of the quote currency and `rf` the funding
/// rate of the base currency, both decimal, so the parity forward is
/// `spot·exp((rd − rf)·T)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxQuote {
    /// Spot exchange rate, quote units per base unit.
    pub spot: f64,
    /// Annualised lognormal volatility, decimal.
    pub sigma: f64,
    /// Quote-currency funding rate, decimal.
    pub rd: f64,
    /// Base-currency funding rate, decimal.
    pub rf: f64,
}

/// A European vanilla option on a currency pair.
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::{FxOption, FxQuote};
/// use vanna_core::types::{Currency, CurrencyPair, Date, OptionSide};
///
/// let eurusd_call = FxOption::new(
///     "EURUSD 1y",
///     Date::from_ymd(2017, 1, 31).unwrap(),
///     Date::from_ymd(2018, 1, 31).unwrap(),
///     OptionSide::Call,
///     1.14,
///     365,
///     Currency::USD,
///     CurrencyPair::parse("EURUSD").unwrap(),
/// )
/// .unwrap();
///
/// let quote = FxQuote { spot: 1.14, sigma: 0.06, rd: 0.0025, rf: -0.005 };
/// assert!(eurusd_call.pv(&quote).unwrap() > 0.0);
///
/// // PV currency must be a leg of the pair
/// assert!(FxOption::new(
///     "BAD",
///     Date::from_ymd(2017, 1, 31).unwrap(),
///     Date::from_ymd(2018, 1, 31).unwrap(),
///     OptionSide::Call,
///     1.14,
///     365,
///     Currency::JPY,
///     CurrencyPair::parse("EURUSD").unwrap(),
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxOption {
    /// Trade label.
    name: String,
    /// Trade date.
    trade_date: Date,
    /// Option expiry date.
    expiry_date: Date,
    /// Call or put on the base currency.
    side: OptionSide,
    /// Strike, quote units per base unit.
    strike: f64,
    /// Flat day-count divisor.
    day_count: u32,
    /// PV currency, one of the two legs.
    pv_ccy: Currency,
    /// The currency pair.
    pair: CurrencyPair,
}

impl FxOption {
    /// Creates a new FX vanilla option.
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `trade_date` - Trade date
    /// * `expiry_date` - Expiry date (must follow the trade date)
    /// * `side` - Call or put on the base currency
    /// * `strike` - Strike, quote units per base unit (positive, finite)
    /// * `day_count` - Flat day-count divisor (must be positive)
    /// * `pv_ccy` - PV currency; must be the base or quote leg of `pair`
    /// * `pair` - The currency pair
    ///
    /// # Errors
    /// `PricingError::InvalidInput` on a bad strike, divisor, or date
    /// order, and when `pv_ccy` is neither leg of the pair. The mismatch
    /// faults here, before any pricing call.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        trade_date: Date,
        expiry_date: Date,
        side: OptionSide,
        strike: f64,
        day_count: u32,
        pv_ccy: Currency,
        pair: CurrencyPair,
    ) -> Result<Self, PricingError> {
        if !(strike > 0.0 && strike.is_finite()) {
            return Err(PricingError::InvalidInput(format!(
                "Strike must be positive and finite, got {}",
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
        if !pair.contains(pv_ccy) {
            return Err(CurrencyError::PvCurrencyMismatch {
                pv_ccy: pv_ccy.code().to_string(),
                pair: pair.code(),
            }
            .into());
        }
        Ok(Self {
            name: name.to_string(),
            trade_date,
            expiry_date,
            side,
            strike,
            day_count,
            pv_ccy,
            pair,
        })
    }

    /// Returns the trade label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency pair.
    #[inline]
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the PV currency.
    #[inline]
    pub fn pv_ccy(&self) -> Currency {
        self.pv_ccy
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    fn time_to_expiry(&self) -> f64 {
        year_fraction(self.trade_date, self.expiry_date, self.day_count)
    }

    /// Present value per unit notional of the base currency, in the PV
    /// currency.
    ///
    /// Black price on the parity forward, discounted at `rd`. When the PV
    /// currency is the base leg, the quote-currency price is converted by
    /// dividing by spot.
    ///
    /// # Errors
    /// `PricingError::DomainFault` when the quote puts the Black formula
    /// outside its domain.
    pub fn pv(&self, quote: &FxQuote) -> Result<f64, PricingError> {
        let t = self.time_to_expiry();
        let forward = quote.spot * ((quote.rd - quote.rf) * t).exp();
        let price = black_price(forward, self.strike, t, quote.sigma, self.side)?;
        let price = price * (-quote.rd * t).exp();
        if self.pv_ccy == self.pair.base() {
            Ok(price / quote.spot)
        } else {
            Ok(price)
        }
    }

    /// Numerical delta from a central difference on the spot axis, in PV
    /// currency per unit of spot.
    pub fn delta_with_bump(&self, quote: &FxQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |spot: f64| self.pv(&FxQuote { spot, ..*quote });
        greeks::delta(&pv, quote.spot, bump)
    }

    /// Numerical gamma, in units of delta per unit of spot.
    pub fn gamma_with_bump(&self, quote: &FxQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |spot: f64| self.pv(&FxQuote { spot, ..*quote });
        greeks::gamma(&pv, quote.spot, bump)
    }

    /// Numerical vega per vol point, with `bump` in vol points.
    pub fn vega_with_bump(&self, quote: &FxQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |sigma: f64| self.pv(&FxQuote { sigma, ..*quote });
        greeks::vega(&pv, quote.sigma, bump)
    }
}

impl Priceable for FxOption {
    type Quote = FxQuote;

    fn pv(&self, quote: &FxQuote) -> Result<f64, PricingError> {
        FxOption::pv(self, quote)
    }

    fn delta(&self, quote: &FxQuote) -> Result<f64, PricingError> {
        self.delta_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn gamma(&self, quote: &FxQuote) -> Result<f64, PricingError> {
        self.gamma_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn vega(&self, quote: &FxQuote) -> Result<f64, PricingError> {
        self.vega_with_bump(quote, DEFAULT_VOL_BUMP)
    }
}

impl fmt::Display for FxOption {
    /// Diagnostic key-value dump of the stored trade economics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FxOption {{ name: {}, trade_date: {}, expiry_date: {}, side: {}, strike: {}, day_count: {}, pv_ccy: {}, pair: {} }}",
            self.name,
            self.trade_date,
            self.expiry_date,
            self.side,
            self.strike,
            self.day_count,
            self.pv_ccy,
            self.pair
        )
    }
}
