//! Time types and year-fraction calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `year_fraction`: flat-divisor year fractions used by every instrument
//!
//! Only a single simplified Actual/Base convention is supported: the day
//! count is a flat positive divisor (e.g. 365), with no business-day or
//! holiday handling.
//!
//! # Examples
//!
//! ```
//! use vanna_core::types::time::{year_fraction, Date};
//!
//! let trade = Date::from_ymd(2017, 1, 31).unwrap();
//! let expiry = Date::from_ymd(2018, 1, 31).unwrap();
//!
//! let t = year_fraction(trade, expiry, 365);
//! assert!((t - 1.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing and the date arithmetic the pricing kernel
/// needs (whole-day differences).
///
/// # Examples
///
/// ```
/// use vanna_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2024)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_core::types::time::Date;
    ///
    /// let leap = Date::from_ymd(2024, 2, 29).unwrap();
    /// assert_eq!(leap.day(), 29);
    ///
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_core::types::time::Date;
    ///
    /// let date = Date::parse("2019-08-06").unwrap();
    /// assert_eq!(date.year(), 2019);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of whole days between two dates (self - rhs).
    fn sub(self, rhs: Self) -> i64 {
        (self.0 - rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Computes the flat-divisor year fraction between two dates.
///
/// Returns `(reference_date - trade_date).days / day_count_divisor`.
///
/// There is no bounds checking: a `reference_date` before `trade_date`
/// yields a negative fraction, which callers must treat as a modeling
/// contract rather than an error. Divisor validation (positive integer)
/// is an instrument-construction concern; this function is the raw kernel.
///
/// # Arguments
/// * `trade_date` - Start of the accrual period
/// * `reference_date` - End of the accrual period
/// * `day_count_divisor` - Days in a year under the flat convention
///
/// # Examples
///
/// ```
/// use vanna_core::types::time::{year_fraction, Date};
///
/// let trade = Date::from_ymd(2019, 8, 6).unwrap();
/// let expiry = Date::from_ymd(2019, 9, 18).unwrap();
/// let t = year_fraction(trade, expiry, 365);
/// assert!((t - 43.0 / 365.0).abs() < 1e-12);
/// ```
#[inline]
pub fn year_fraction(trade_date: Date, reference_date: Date, day_count_divisor: u32) -> f64 {
    (reference_date - trade_date) as f64 / day_count_divisor as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Date construction and parsing
    // ==========================================================

    #[test]
    fn test_from_ymd_valid() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_from_ymd_invalid() {
        let result = Date::from_ymd(2023, 2, 29);
        assert_eq!(
            result.unwrap_err(),
            DateError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_parse_iso8601() {
        let date = Date::parse("2019-08-06").unwrap();
        assert_eq!(date, Date::from_ymd(2019, 8, 6).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Date::parse("06/08/2019").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let date = Date::from_ymd(2024, 1, 5).unwrap();
        let text = format!("{}", date);
        assert_eq!(text, "2024-01-05");
        assert_eq!(text.parse::<Date>().unwrap(), date);
    }

    // ==========================================================
    // Day arithmetic
    // ==========================================================

    #[test]
    fn test_sub_whole_days() {
        let start = Date::from_ymd(2019, 8, 6).unwrap();
        let end = Date::from_ymd(2019, 9, 18).unwrap();
        assert_eq!(end - start, 43);
    }

    #[test]
    fn test_sub_across_leap_day() {
        let start = Date::from_ymd(2020, 2, 28).unwrap();
        let end = Date::from_ymd(2020, 3, 1).unwrap();
        assert_eq!(end - start, 2);
    }

    #[test]
    fn test_sub_negative() {
        let start = Date::from_ymd(2019, 9, 18).unwrap();
        let end = Date::from_ymd(2019, 8, 6).unwrap();
        assert_eq!(end - start, -43);
    }

    // ==========================================================
    // Year fractions
    // ==========================================================

    #[test]
    fn test_year_fraction_one_year() {
        let trade = Date::from_ymd(2017, 1, 31).unwrap();
        let expiry = Date::from_ymd(2018, 1, 31).unwrap();
        assert_relative_eq!(year_fraction(trade, expiry, 365), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_year_fraction_long_dated() {
        // 2019-08-06 to 2024-06-20 spans 1780 days
        let trade = Date::from_ymd(2019, 8, 6).unwrap();
        let maturity = Date::from_ymd(2024, 6, 20).unwrap();
        assert_relative_eq!(
            year_fraction(trade, maturity, 365),
            1780.0 / 365.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_year_fraction_negative_passes_through() {
        // Reference before trade is not rejected, by contract
        let trade = Date::from_ymd(2019, 9, 18).unwrap();
        let earlier = Date::from_ymd(2019, 8, 6).unwrap();
        assert!(year_fraction(trade, earlier, 365) < 0.0);
    }

    #[test]
    fn test_year_fraction_alternate_divisor() {
        let trade = Date::from_ymd(2024, 1, 1).unwrap();
        let expiry = Date::from_ymd(2024, 12, 26).unwrap();
        assert_relative_eq!(year_fraction(trade, expiry, 360), 1.0, epsilon = 1e-12);
    }
}
