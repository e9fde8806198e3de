//! Equity index option facade.
//!
//! European options on an equity index, priced with the Black formula on a
//! carry-implied forward and discounted at the funding rate. Prices are in
//! index points for one unit of the index.

use std::fmt;

use vanna_core::traits::Priceable;
use vanna_core::types::{year_fraction, Currency, Date, OptionSide, PricingError};

use crate::analytical::black_price;
use crate::greeks;

/// Default spot bump for numerical delta and gamma, in index points.
pub const DEFAULT_SPOT_BUMP: f64 = 10.0;
/// Default volatility bump for numerical vega, in vol points.
pub const DEFAULT_VOL_BUMP: f64 = 1.0;

/// Per-call market quote for an equity index option.
///
/// `sigma` is decimal annual lognormal volatility (16% enters as 0.16);
/// `rd` is the funding rate and `rf` the annualised dividend rate, both
/// decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityQuote {
    /// Underlying index spot level.
    pub spot: f64,
    /// Annualised lognormal volatility, decimal.
    pub sigma: f64,
    /// Funding / risk-free rate, decimal.
    pub rd: f64,
    /// Annualised dividend rate, decimal.
    pub rf: f64,
}

/// A European option on an equity index.
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::{EquityIndexOption, EquityQuote};
/// use vanna_core::types::{Currency, Date, OptionSide};
///
/// let spx_call = EquityIndexOption::new(
///     "SPX",
///     Date::from_ymd(2017, 1, 31).unwrap(),
///     Date::from_ymd(2018, 1, 31).unwrap(),
///     OptionSide::Call,
///     4400.0,
///     365,
///     Currency::USD,
/// )
/// .unwrap();
///
/// let quote = EquityQuote { spot: 4400.0, sigma: 0.16, rd: 0.02, rf: 0.02 };
/// let pv = spx_call.pv(&quote).unwrap();
/// assert!(pv > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityIndexOption {
    /// Index or trade label.
    name: String,
    /// Trade date.
    trade_date: Date,
    /// Option expiry date.
    expiry_date: Date,
    /// Call or put.
    side: OptionSide,
    /// Strike in index points.
    strike: f64,
    /// Flat day-count divisor.
    day_count: u32,
    /// PV currency.
    pv_ccy: Currency,
}

impl EquityIndexOption {
    /// Creates a new equity index option.
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `trade_date` - Trade date
    /// * `expiry_date` - Expiry date (must follow the trade date)
    /// * `side` - Call or put (use `OptionSide::from_str` for token input)
    /// * `strike` - Strike in index points (must be positive and finite)
    /// * `day_count` - Flat day-count divisor (must be positive)
    /// * `pv_ccy` - PV currency
    ///
    /// # Errors
    /// `PricingError::InvalidInput` on a non-positive strike, a zero
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

    /// Returns the option side.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Returns the strike in index points.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the PV currency.
    #[inline]
    pub fn pv_ccy(&self) -> Currency {
        self.pv_ccy
    }

    /// Time from trade to expiry on the flat divisor.
    #[inline]
    fn time_to_expiry(&self) -> f64 {
        year_fraction(self.trade_date, self.expiry_date, self.day_count)
    }

    /// Present value in index points for one unit of the index.
    ///
    /// Builds the carry-implied forward `spot·exp((rd − rf)·T)`, prices it
    /// with the Black formula, and discounts at `rd`.
    ///
    /// # Errors
    /// `PricingError::DomainFault` when the quote puts the Black formula
    /// outside its domain (σ ≤ 0, T ≤ 0, non-positive forward).
    pub fn pv(&self, quote: &EquityQuote) -> Result<f64, PricingError> {
        let t = self.time_to_expiry();
        let forward = quote.spot * ((quote.rd - quote.rf) * t).exp();
        let price = black_price(forward, self.strike, t, quote.sigma, self.side)?;
        Ok(price * (-quote.rd * t).exp())
    }

    /// Numerical delta from a central difference on the spot axis.
    ///
    /// A returned value of 0.5 means 50 delta.
    pub fn delta_with_bump(&self, quote: &EquityQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |spot: f64| self.pv(&EquityQuote { spot, ..*quote });
        greeks::delta(&pv, quote.spot, bump)
    }

    /// Numerical gamma, in units of delta per index point.
    pub fn gamma_with_bump(&self, quote: &EquityQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |spot: f64| self.pv(&EquityQuote { spot, ..*quote });
        greeks::gamma(&pv, quote.spot, bump)
    }

    /// Numerical vega per vol point, with `bump` in vol points.
    pub fn vega_with_bump(&self, quote: &EquityQuote, bump: f64) -> Result<f64, PricingError> {
        let pv = |sigma: f64| self.pv(&EquityQuote { sigma, ..*quote });
        greeks::vega(&pv, quote.sigma, bump)
    }
}

impl Priceable for EquityIndexOption {
    type Quote = EquityQuote;

    fn pv(&self, quote: &EquityQuote) -> Result<f64, PricingError> {
        EquityIndexOption::pv(self, quote)
    }

    fn delta(&self, quote: &EquityQuote) -> Result<f64, PricingError> {
        self.delta_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn gamma(&self, quote: &EquityQuote) -> Result<f64, PricingError> {
        self.gamma_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn vega(&self, quote: &EquityQuote) -> Result<f64, PricingError> {
        self.vega_with_bump(quote, DEFAULT_VOL_BUMP)
    }
}

impl fmt::Display for EquityIndexOption {
    /// Diagnostic key-value dump of the stored trade economics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EquityIndexOption {{ name: {}, trade_date: {}, expiry_date: {}, side: {}, strike: {}, day_count: {}, pv_ccy: {} }}",
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
