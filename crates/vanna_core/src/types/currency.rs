//! Currency and currency-pair types.
//!
//! This module provides ISO 4217 currency codes for the major trading
//! currencies and a `CurrencyPair` for FX instruments. A pair carries no
//! market data: spot rates are quote inputs passed per pricing call, never
//! persisted on the pair.
//!
//! # Examples
//!
//! ```
//! use vanna_core::types::currency::{Currency, CurrencyPair};
//!
//! let usd = Currency::USD;
//! assert_eq!(usd.code(), "USD");
//!
//! // Parse a six-letter pair string
//! let pair = CurrencyPair::parse("EURUSD").unwrap();
//! assert_eq!(pair.base(), Currency::EUR);
//! assert_eq!(pair.quote(), Currency::USD);
//! assert!(pair.contains(Currency::USD));
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currency codes for the major trading currencies.
///
/// # Examples
///
/// ```
/// use vanna_core::types::currency::Currency;
///
/// assert_eq!(Currency::USD.code(), "USD");
///
/// // Parse from string (case-insensitive)
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// ```
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            _ => Err(CurrencyError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A currency pair in BASE/QUOTE convention.
///
/// 1 unit of BASE is worth `spot` units of QUOTE, where the spot rate is
/// supplied per pricing call rather than stored here.
///
/// # Examples
///
/// ```
/// use vanna_core::types::currency::{Currency, CurrencyPair};
///
/// let eurusd = CurrencyPair::new(Currency::EUR, Currency::USD).unwrap();
/// assert_eq!(eurusd.code(), "EUR/USD");
///
/// // Same-currency pairs are rejected
/// assert!(CurrencyPair::new(Currency::USD, Currency::USD).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyPair {
    /// Base currency (the numerator in the exchange rate)
    base: Currency,
    /// Quote currency (the denominator in the exchange rate)
    quote: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    ///
    /// # Errors
    /// Returns `CurrencyError::SameCurrency` if base and quote are equal.
    pub fn new(base: Currency, quote: Currency) -> Result<Self, CurrencyError> {
        if base == quote {
            return Err(CurrencyError::SameCurrency(base.code().to_string()));
        }
        Ok(Self { base, quote })
    }

    /// Parses a six-letter pair string such as `"EURUSD"`.
    ///
    /// # Errors
    /// - `CurrencyError::InvalidPair` if the string is not six ASCII letters
    /// - `CurrencyError::Unknown` if either leg is not a known currency
    /// - `CurrencyError::SameCurrency` if both legs are equal
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_core::types::currency::{Currency, CurrencyPair};
    ///
    /// let pair = CurrencyPair::parse("usdjpy").unwrap();
    /// assert_eq!(pair.quote(), Currency::JPY);
    ///
    /// assert!(CurrencyPair::parse("EUR/USD").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, CurrencyError> {
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidPair(s.to_string()));
        }
        let base: Currency = s[0..3].parse()?;
        let quote: Currency = s[3..6].parse()?;
        CurrencyPair::new(base, quote)
    }

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        self.quote
    }

    /// Returns whether the given currency is one of the two legs.
    #[inline]
    pub fn contains(&self, ccy: Currency) -> bool {
        self.base == ccy || self.quote == ccy
    }

    /// Returns the pair code in standard BASE/QUOTE format.
    pub fn code(&self) -> String {
        format!("{}/{}", self.base.code(), self.quote.code())
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
