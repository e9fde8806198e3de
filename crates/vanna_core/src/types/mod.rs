//! Core time, currency, and financial types.
//!
//! This module provides:
//! - `time`: `Date` and flat-divisor year fraction calculations
//! - `currency`: ISO 4217 currency codes and currency pairs
//! - `side`: normalised option side (call/put, payer/receiver)
//! - `error`: structured error types for pricing, date, currency, and
//!   side-token operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`year_fraction`] from `time`
//! - [`Currency`], [`CurrencyPair`] from `currency`
//! - [`OptionSide`] from `side`
//! - [`PricingError`], [`DateError`], [`CurrencyError`], [`SideError`] from `error`

pub mod currency;
pub mod error;
pub mod side;
pub mod time;

// Re-export commonly used types at module level
pub use currency::{Currency, CurrencyPair};
pub use error::{CurrencyError, DateError, PricingError, SideError};
pub use side::OptionSide;
pub use time::{year_fraction, Date};
