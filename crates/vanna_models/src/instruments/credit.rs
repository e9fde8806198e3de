//! CDS swaption facade.
//!
//! Spread options on index CDS, priced with the Black formula on the
//! forward spread from the credit engine, with a convexity-style strike
//! adjustment. Accurate enough for the liquid investment-grade and
//! senior-financials indices; price-based high-yield options can be
//! handled by converting price levels into spread levels first.

use std::fmt;

use vanna_core::traits::Priceable;
use vanna_core::types::{year_fraction, Currency, Date, OptionSide, PricingError};

use crate::analytical::black_price;
use crate::credit::Cds;
use crate::greeks;

/// Default spot-spread bump for numerical delta and gamma, in basis points.
pub const DEFAULT_SPOT_BUMP: f64 = 10.0;
/// Default volatility bump for numerical vega, in vol points.
pub const DEFAULT_VOL_BUMP: f64 = 1.0;

/// Per-call market quote for a CDS swaption.
///
/// Carries the underlying [`Cds`] descriptor alongside the market levels,
/// so a single quote value is self-contained for batch revaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdsSwaptionQuote {
    /// Spot CDS spread in bps/annum.
    pub spot: f64,
    /// Annualised lognormal spread volatility, decimal.
    pub sigma: f64,
    /// Flat discount rate, decimal. In practice the full ISDA swap curve
    /// would replace this.
    pub rd: f64,
    /// The underlying index CDS.
    pub cds: Cds,
}

/// A European option to enter an index CDS at a given spread.
///
/// Payers (calls) profit as spreads widen, receivers (puts) as they
/// tighten. PVs are in bps upfront.
///
/// # Examples
///
/// ```
/// use vanna_models::credit::Cds;
/// use vanna_models::instruments::{CdsSwaption, CdsSwaptionQuote};
/// use vanna_core::types::{Currency, Date, OptionSide};
///
/// let cdxig = Cds::new(
///     "CDXIG",
///     Date::from_ymd(2019, 8, 6).unwrap(),
///     Date::from_ymd(2024, 6, 20).unwrap(),
///     100.0,
///     0.4,
///     365,
///     Currency::USD,
/// )
/// .unwrap();
///
/// let payer = CdsSwaption::new(
///     "cdxig payer",
///     Date::from_ymd(2019, 8, 6).unwrap(),
///     Date::from_ymd(2019, 9, 18).unwrap(),
///     OptionSide::Call,
///     60.0,
///     365,
///     Currency::USD,
/// )
/// .unwrap();
///
/// let quote = CdsSwaptionQuote { spot: 59.5, sigma: 0.56, rd: 0.022, cds: cdxig };
/// assert!(payer.pv(&quote).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdsSwaption {
    /// Trade label.
    name: String,
    /// Trade date.
    trade_date: Date,
    /// Option expiry date; also the forward start of the underlying CDS.
    expiry_date: Date,
    /// Payer (call) or receiver (put).
    side: OptionSide,
    /// Strike spread in bps/annum.
    strike: f64,
    /// Flat day-count divisor.
    day_count: u32,
    /// PV currency.
    pv_ccy: Currency,
}

impl CdsSwaption {
    /// Creates a new CDS swaption.
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `trade_date` - Trade date
    /// * `expiry_date` - Option expiry; the underlying CDS forward starts
    ///   here (must follow the trade date)
    /// * `side` - Payer (call) or receiver (put)
    /// * `strike` - Strike spread in bps/annum (must be positive, finite)
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
                "Strike spread must be positive and finite, got {}",
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

    /// Returns the strike spread in bps/annum.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    fn time_to_expiry(&self) -> f64 {
        year_fraction(self.trade_date, self.expiry_date, self.day_count)
    }

    /// Present value in bps upfront.
    ///
    /// Prices the Black formula on the forward spread from the credit
    /// engine, against a strike adjusted for the fact that the payoff is
    /// on a running spread while the annuity used to settle varies with
    /// the realised spread:
    ///
    /// `adjusted_strike = coupon + (strike − coupon)·(A(strike)/A(spot))/exp(−h·T)`
    ///
    /// where `A` is the forward annuity at expiry and `h` the hazard rate
    /// at spot. The running price is scaled by `A(spot)` to give bps
    /// upfront. An approximation rather than exact replication pricing.
    ///
    /// # Errors
    /// `PricingError::DomainFault` when the annuity at spot vanishes, when
    /// the adjusted strike leaves the lognormal domain, or on degenerate
    /// volatility or expiry.
    pub fn pv(&self, quote: &CdsSwaptionQuote) -> Result<f64, PricingError> {
        let t = self.time_to_expiry();
        let cds = &quote.cds;

        let annuity_at_spot = cds.forward_annuity(quote.spot, quote.rd, self.expiry_date)?;
        if annuity_at_spot == 0.0 {
            return Err(PricingError::DomainFault(
                "Forward annuity at spot is zero; strike adjustment undefined".to_string(),
            ));
        }
        let annuity_at_strike = cds.forward_annuity(self.strike, quote.rd, self.expiry_date)?;
        let forward = cds.forward_level(quote.spot, quote.rd, self.expiry_date)?;
        let hazard = cds.hazard_rate(quote.spot);

        let adjusted_strike = cds.coupon()
            + (self.strike - cds.coupon()) * (annuity_at_strike / annuity_at_spot)
                / (-hazard * t).exp();

        let price = black_price(forward, adjusted_strike, t, quote.sigma, self.side)?;
        Ok(price * annuity_at_spot)
    }

    /// Numerical spread delta from a central difference on the spot axis,
    /// with `bump` in basis points.
    ///
    /// A returned value of 2.5 means $250,000 per basis point per $1bn
    /// notional.
    pub fn delta_with_bump(
        &self,
        quote: &CdsSwaptionQuote,
        bump: f64,
    ) -> Result<f64, PricingError> {
        let pv = |spot: f64| {
            self.pv(&CdsSwaptionQuote {
                spot,
                ..quote.clone()
            })
        };
        greeks::delta(&pv, quote.spot, bump)
    }

    /// Numerical spread gamma, in units of delta per basis point.
    pub fn gamma_with_bump(
        &self,
        quote: &CdsSwaptionQuote,
        bump: f64,
    ) -> Result<f64, PricingError> {
        let pv = |spot: f64| {
            self.pv(&CdsSwaptionQuote {
                spot,
                ..quote.clone()
            })
        };
        greeks::gamma(&pv, quote.spot, bump)
    }

    /// Numerical vega per vol point, with `bump` in vol points.
    pub fn vega_with_bump(
        &self,
        quote: &CdsSwaptionQuote,
        bump: f64,
    ) -> Result<f64, PricingError> {
        let pv = |sigma: f64| {
            self.pv(&CdsSwaptionQuote {
                sigma,
                ..quote.clone()
            })
        };
        greeks::vega(&pv, quote.sigma, bump)
    }
}

impl Priceable for CdsSwaption {
    type Quote = CdsSwaptionQuote;

    fn pv(&self, quote: &CdsSwaptionQuote) -> Result<f64, PricingError> {
        CdsSwaption::pv(self, quote)
    }

    fn delta(&self, quote: &CdsSwaptionQuote) -> Result<f64, PricingError> {
        self.delta_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn gamma(&self, quote: &CdsSwaptionQuote) -> Result<f64, PricingError> {
        self.gamma_with_bump(quote, DEFAULT_SPOT_BUMP)
    }

    fn vega(&self, quote: &CdsSwaptionQuote) -> Result<f64, PricingError> {
        self.vega_with_bump(quote, DEFAULT_VOL_BUMP)
    }
}

impl fmt::Display for CdsSwaption {
    /// Diagnostic key-value dump of the stored trade economics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CdsSwaption {{ name: {}, trade_date: {}, expiry_date: {}, side: {}, strike: {}, day_count: {}, pv_ccy: {} }}",
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
