//! CDS forward engine: hazard rate, forward annuity, forward level.
//!
//! Approximate levels of annuities and forwards for index CDS. The
//! approximations are good enough to price spread-based options on the
//! liquid indices (investment-grade and senior-financials style baskets)
//! and have been checked against dealer runs to within bid/ask. Price-based
//! high-yield options can be handled by first converting price levels into
//! spread levels.
//!
//! The forward-level formula is a first-order roll-down approximation:
//! accurate for forward horizons of roughly three months or less, and not
//! to be treated as exact beyond that window.

use std::fmt;

use vanna_core::types::time::year_fraction;
use vanna_core::types::{Currency, Date, PricingError};

/// Day-basis adjustment applied to hazard rates and annuities.
///
/// Hard-coded Actual/360-style scaling, independent of the instrument's own
/// flat day-count divisor.
const DAY_BASIS_ADJUSTMENT: f64 = 365.0 / 360.0;

/// Error types for CDS construction and forward calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum CdsError {
    /// Recovery rate outside [0, 1).
    InvalidRecovery(f64),
    /// Day-count divisor must be a positive integer.
    InvalidDayCount(u32),
    /// Expiry does not follow the trade date.
    InvalidDateOrder,
    /// Hazard plus discount intensity vanished; the annuity is undefined.
    DegenerateIntensity,
    /// Forward annuity of zero makes the forward level undefined.
    ZeroAnnuity,
}

impl fmt::Display for CdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CdsError::InvalidRecovery(r) => {
                write!(f, "Recovery must be in [0, 1), got {}", r)
            }
            CdsError::InvalidDayCount(d) => {
                write!(f, "Day-count divisor must be positive, got {}", d)
            }
            CdsError::InvalidDateOrder => write!(f, "Expiry date must follow trade date"),
            CdsError::DegenerateIntensity => {
                write!(f, "Hazard plus discount rate is zero; annuity undefined")
            }
            CdsError::ZeroAnnuity => write!(f, "Forward annuity is zero; forward level undefined"),
        }
    }
}

impl std::error::Error for CdsError {}

impl From<CdsError> for PricingError {
    fn from(err: CdsError) -> Self {
        match err {
            CdsError::InvalidRecovery(_)
            | CdsError::InvalidDayCount(_)
            | CdsError::InvalidDateOrder => PricingError::InvalidInput(err.to_string()),
            CdsError::DegenerateIntensity | CdsError::ZeroAnnuity => {
                PricingError::DomainFault(err.to_string())
            }
        }
    }
}

/// An index CDS described by its running coupon, recovery assumption, and
/// maturity, used as the forward engine behind CDS swaption pricing.
///
/// All fields are set at construction and read-only thereafter. Spot
/// spreads and discount rates are quote inputs passed per call.
///
/// # Examples
///
/// ```
/// use vanna_models::credit::Cds;
/// use vanna_core::types::{Currency, Date};
///
/// let cdxig = Cds::new(
///     "CDXIG",
///     Date::from_ymd(2019, 8, 6).unwrap(),
///     Date::from_ymd(2024, 6, 20).unwrap(),
///     100.0, // coupon, bps/annum
///     0.4,   // recovery
///     365,   // flat day-count divisor
///     Currency::USD,
/// )
/// .unwrap();
///
/// let start = Date::from_ymd(2019, 8, 6).unwrap();
/// let pv01 = cdxig.forward_annuity(59.5, 0.022, start).unwrap();
/// assert!((pv01 - 4.5788).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cds {
    /// Index or reference name (free-text label).
    name: String,
    /// Trade date.
    trade_date: Date,
    /// CDS maturity date.
    expiry_date: Date,
    /// Running coupon in bps/annum.
    coupon: f64,
    /// Recovery rate assumption, in [0, 1).
    recovery: f64,
    /// Flat day-count divisor (days in a year).
    day_count: u32,
    /// PV currency.
    pv_ccy: Currency,
}

impl Cds {
    /// Creates a new CDS descriptor.
    ///
    /// # Arguments
    /// * `name` - Free-text label
    /// * `trade_date` - Trade date
    /// * `expiry_date` - CDS maturity date (must follow the trade date)
    /// * `coupon` - Running coupon in bps/annum
    /// * `recovery` - Recovery rate, must be in [0, 1)
    /// * `day_count` - Flat day-count divisor, must be positive
    /// * `pv_ccy` - PV currency
    ///
    /// # Errors
    /// - `CdsError::InvalidRecovery` if recovery is outside [0, 1)
    /// - `CdsError::InvalidDayCount` if the divisor is zero
    /// - `CdsError::InvalidDateOrder` if expiry does not follow trade
    pub fn new(
        name: &str,
        trade_date: Date,
        expiry_date: Date,
        coupon: f64,
        recovery: f64,
        day_count: u32,
        pv_ccy: Currency,
    ) -> Result<Self, CdsError> {
        if !(0.0..1.0).contains(&recovery) {
            return Err(CdsError::InvalidRecovery(recovery));
        }
        if day_count == 0 {
            return Err(CdsError::InvalidDayCount(day_count));
        }
        if expiry_date <= trade_date {
            return Err(CdsError::InvalidDateOrder);
        }
        Ok(Self {
            name: name.to_string(),
            trade_date,
            expiry_date,
            coupon,
            recovery,
            day_count,
            pv_ccy,
        })
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trade date.
    #[inline]
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Returns the CDS maturity date.
    #[inline]
    pub fn expiry_date(&self) -> Date {
        self.expiry_date
    }

    /// Returns the running coupon in bps/annum.
    #[inline]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns the recovery assumption.
    #[inline]
    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    /// Returns the flat day-count divisor.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Returns the PV currency.
    #[inline]
    pub fn pv_ccy(&self) -> Currency {
        self.pv_ccy
    }

    /// Converts a spot spread into an annualised default-intensity
    /// approximation.
    ///
    /// `hazard = spot / (1 - recovery) / 10000 · 365/360`
    ///
    /// # Arguments
    /// * `spot` - Spot CDS spread in bps/annum
    ///
    /// # Returns
    /// Hazard rate in absolute units. Monotonically increasing in both spot
    /// and recovery (recovery < 1 is a construction invariant, so the
    /// denominator never vanishes).
    #[inline]
    pub fn hazard_rate(&self, spot: f64) -> f64 {
        spot / (1.0 - self.recovery) / 1e4 * DAY_BASIS_ADJUSTMENT
    }

    /// Computes the annuity (PV01) of a CDS forward.
    ///
    /// The risky present value of 1 unit paid continuously until default or
    /// CDS maturity, discounted at the flat rate `rd`. In practice a full
    /// swap-curve discount would replace the flat rate.
    ///
    /// `pv01 = (1 - exp(-(h + rd)·tf)) / (h + rd) · 365/360`
    ///
    /// where `tf` runs from the forward start to CDS maturity on the
    /// instrument's flat divisor and `h = spot/10000/(1-recovery)`.
    ///
    /// # Arguments
    /// * `spot` - Spot CDS spread in bps/annum
    /// * `rd` - Flat discount rate in absolute units
    /// * `forward_start_date` - Starting day of the CDS forward
    ///
    /// # Errors
    /// `CdsError::DegenerateIntensity` when `h + rd` is zero.
    pub fn forward_annuity(
        &self,
        spot: f64,
        rd: f64,
        forward_start_date: Date,
    ) -> Result<f64, CdsError> {
        let time_fraction = year_fraction(forward_start_date, self.expiry_date, self.day_count);
        let hazard = spot / 1e4 / (1.0 - self.recovery);
        let intensity = hazard + rd;
        if intensity == 0.0 {
            return Err(CdsError::DegenerateIntensity);
        }
        let pv01 = (1.0 - (-intensity * time_fraction).exp()) / intensity * DAY_BASIS_ADJUSTMENT;
        Ok(pv01)
    }

    /// Computes the approximate forward spread level.
    ///
    /// `forward = spot + spot·tf2/pv01`
    ///
    /// where `tf2` runs from the trade date to the forward start. This is a
    /// first-order roll-down approximation, very close to dealer
    /// calculations for horizons of three months or less.
    ///
    /// # Arguments
    /// * `spot` - Spot CDS spread in bps/annum
    /// * `rd` - Flat discount rate in absolute units
    /// * `forward_start_date` - Starting day of the CDS forward
    ///
    /// # Errors
    /// - `CdsError::DegenerateIntensity` from the annuity calculation
    /// - `CdsError::ZeroAnnuity` when the annuity vanishes
    pub fn forward_level(
        &self,
        spot: f64,
        rd: f64,
        forward_start_date: Date,
    ) -> Result<f64, CdsError> {
        let time_fraction = year_fraction(self.trade_date, forward_start_date, self.day_count);
        let pv01 = self.forward_annuity(spot, rd, forward_start_date)?;
        if pv01 == 0.0 {
            return Err(CdsError::ZeroAnnuity);
        }
        Ok(spot + spot * time_fraction / pv01)
    }
}

impl fmt::Display for Cds {
    /// Diagnostic key-value dump of the stored descriptor fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cds {{ name: {}, trade_date: {}, expiry_date: {}, coupon: {}, recovery: {}, day_count: {}, pv_ccy: {} }}",
            self.name,
            self.trade_date,
            self.expiry_date,
            self.coupon,
            self.recovery,
            self.day_count,
            self.pv_ccy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn cdxig() -> Cds {
        Cds::new(
            "CDXIG",
            Date::from_ymd(2019, 8, 6).unwrap(),
            Date::from_ymd(2024, 6, 20).unwrap(),
            100.0,
            0.4,
            365,
            Currency::USD,
        )
        .unwrap()
    }

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_new_valid() {
        let cds = cdxig();
        assert_eq!(cds.name(), "CDXIG");
        assert_eq!(cds.coupon(), 100.0);
        assert_eq!(cds.day_count(), 365);
    }

    #[test]
    fn test_recovery_of_one_rejected() {
        // recovery = 1 would put a zero in the hazard denominator
        let result = Cds::new(
            "BAD",
            Date::from_ymd(2019, 8, 6).unwrap(),
            Date::from_ymd(2024, 6, 20).unwrap(),
            100.0,
            1.0,
            365,
            Currency::USD,
        );
        assert_eq!(result.unwrap_err(), CdsError::InvalidRecovery(1.0));
    }

    #[test]
    fn test_negative_recovery_rejected() {
        let result = Cds::new(
            "BAD",
            Date::from_ymd(2019, 8, 6).unwrap(),
            Date::from_ymd(2024, 6, 20).unwrap(),
            100.0,
            -0.1,
            365,
            Currency::USD,
        );
        assert!(matches!(result.unwrap_err(), CdsError::InvalidRecovery(_)));
    }

    #[test]
    fn test_zero_day_count_rejected() {
        let result = Cds::new(
            "BAD",
            Date::from_ymd(2019, 8, 6).unwrap(),
            Date::from_ymd(2024, 6, 20).unwrap(),
            100.0,
            0.4,
            0,
            Currency::USD,
        );
        assert_eq!(result.unwrap_err(), CdsError::InvalidDayCount(0));
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let result = Cds::new(
            "BAD",
            Date::from_ymd(2024, 6, 20).unwrap(),
            Date::from_ymd(2019, 8, 6).unwrap(),
            100.0,
            0.4,
            365,
            Currency::USD,
        );
        assert_eq!(result.unwrap_err(), CdsError::InvalidDateOrder);
    }

    // ==========================================================
    // Hazard rate
    // ==========================================================

    #[test]
    fn test_hazard_rate_reference_value() {
        // 59.5 / 0.6 / 1e4 · 365/360
        let cds = cdxig();
        assert_relative_eq!(
            cds.hazard_rate(59.5),
            59.5 / 0.6 / 1e4 * 365.0 / 360.0,
            epsilon = 1e-15
        );
    }

    proptest! {
        #[test]
        fn prop_hazard_rate_monotone_in_spot(a in 1.0..400.0f64, b in 1.0..400.0f64) {
            let cds = cdxig();
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };
            prop_assume!(lo < hi);
            prop_assert!(cds.hazard_rate(lo) < cds.hazard_rate(hi));
        }

        #[test]
        fn prop_hazard_rate_monotone_in_recovery(r1 in 0.0..0.95f64, r2 in 0.0..0.95f64) {
            let (lo, hi) = if r1 < r2 { (r1, r2) } else { (r2, r1) };
            prop_assume!(hi - lo > 1e-9);
            let make = |rec: f64| {
                Cds::new(
                    "X",
                    Date::from_ymd(2019, 8, 6).unwrap(),
                    Date::from_ymd(2024, 6, 20).unwrap(),
                    100.0,
                    rec,
                    365,
                    Currency::USD,
                )
                .unwrap()
            };
            prop_assert!(make(lo).hazard_rate(60.0) < make(hi).hazard_rate(60.0));
        }
    }

    // ==========================================================
    // Forward annuity
    // ==========================================================

    #[test]
    fn test_forward_annuity_reference_value() {
        // Known scenario: spot 59.5, rd 2.2%, start on trade date
        let cds = cdxig();
        let pv01 = cds
            .forward_annuity(59.5, 0.022, Date::from_ymd(2019, 8, 6).unwrap())
            .unwrap();
        assert_relative_eq!(pv01, 4.5788, epsilon = 1e-3);
    }

    #[test]
    fn test_forward_annuity_vanishes_at_maturity() {
        let cds = cdxig();
        let pv01 = cds
            .forward_annuity(59.5, 0.022, Date::from_ymd(2024, 6, 20).unwrap())
            .unwrap();
        assert_relative_eq!(pv01, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_annuity_zero_intensity_faults() {
        let cds = cdxig();
        let result = cds.forward_annuity(0.0, 0.0, Date::from_ymd(2019, 9, 18).unwrap());
        assert_eq!(result.unwrap_err(), CdsError::DegenerateIntensity);
    }

    // ==========================================================
    // Forward level
    // ==========================================================

    #[test]
    fn test_forward_level_above_spot() {
        // Upward-sloping roll-down: forward sits above spot
        let cds = cdxig();
        let forward = cds
            .forward_level(59.5, 0.022, Date::from_ymd(2019, 9, 18).unwrap())
            .unwrap();
        assert!(forward > 59.5);
        // 43 days of carry over a ~4.55 annuity adds roughly 1.5bp
        assert_relative_eq!(
            forward,
            59.5 + 59.5 * (43.0 / 365.0)
                / cds
                    .forward_annuity(59.5, 0.022, Date::from_ymd(2019, 9, 18).unwrap())
                    .unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_forward_level_zero_annuity_faults() {
        // Forward start at maturity gives a zero annuity
        let cds = cdxig();
        let result = cds.forward_level(59.5, 0.022, Date::from_ymd(2024, 6, 20).unwrap());
        assert_eq!(result.unwrap_err(), CdsError::ZeroAnnuity);
    }

    // ==========================================================
    // Display
    // ==========================================================

    #[test]
    fn test_display_dumps_fields() {
        let text = format!("{}", cdxig());
        assert!(text.contains("CDXIG"));
        assert!(text.contains("2024-06-20"));
        assert!(text.contains("recovery: 0.4"));
    }
}
