//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `DateError`: Errors from date construction and parsing
//! - `CurrencyError`: Errors from currency and currency-pair parsing
//! - `SideError`: Errors from option-side token normalisation
//!
//! The taxonomy is deliberately small. Construction-time problems surface as
//! `InvalidInput`; degenerate numeric conditions (zero volatility, zero time
//! to expiry, zero annuity denominator) surface as `DomainFault`. Faults are
//! never retried or suppressed: every error propagates synchronously to the
//! immediate caller.

use std::fmt;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or trade parameters, raised at the
///   point of detection (construction or first use), never silently defaulted
/// - `DomainFault`: Division by zero or logarithm of a non-positive argument
///   arising from degenerate numeric inputs; fatal for that call only
///
/// # Examples
/// ```
/// use vanna_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("strike must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: strike must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or trade parameters
    InvalidInput(String),

    /// Degenerate numeric input made the computation undefined
    DomainFault(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::DomainFault(msg) => write!(f, "Domain fault: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
///
/// # Examples
/// ```
/// use vanna_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Currency-related errors.
///
/// # Variants
/// - `Unknown`: Unknown currency code
/// - `InvalidPair`: Malformed currency-pair string (must be six letters)
/// - `SameCurrency`: Base and quote currencies are the same
/// - `PvCurrencyMismatch`: PV currency is neither leg of the pair
///
/// # Examples
/// ```
/// use vanna_core::types::CurrencyError;
///
/// let err = CurrencyError::Unknown("XAU".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency code: XAU");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    Unknown(String),

    /// Malformed currency-pair string.
    InvalidPair(String),

    /// Base and quote currencies are the same.
    SameCurrency(String),

    /// PV currency is neither the base nor the quote leg of the pair.
    PvCurrencyMismatch {
        /// The requested PV currency code
        pv_ccy: String,
        /// The currency-pair code
        pair: String,
    },
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::Unknown(code) => write!(f, "Unknown currency code: {}", code),
            CurrencyError::InvalidPair(s) => write!(f, "Invalid currency pair: {}", s),
            CurrencyError::SameCurrency(code) => {
                write!(f, "Base and quote currencies are both {}", code)
            }
            CurrencyError::PvCurrencyMismatch { pv_ccy, pair } => {
                write!(f, "PV currency {} is neither leg of {}", pv_ccy, pair)
            }
        }
    }
}

impl std::error::Error for CurrencyError {}

impl From<CurrencyError> for PricingError {
    fn from(err: CurrencyError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Unrecognised option-side token.
///
/// Raised when a side string is none of the accepted aliases
/// (`call`/`c`/`pay`/`payer`, `put`/`p`/`rec`/`receiver`).
///
/// # Examples
/// ```
/// use vanna_core::types::SideError;
///
/// let err = SideError { token: "straddle".to_string() };
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideError {
    /// The rejected token
    pub token: String,
}

impl fmt::Display for SideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognised option side '{}': expected one of call/c/pay/payer/put/p/rec/receiver",
            self.token
        )
    }
}

impl std::error::Error for SideError {}

impl From<SideError> for PricingError {
    fn from(err: SideError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
