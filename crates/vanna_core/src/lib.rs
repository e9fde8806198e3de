//! # vanna_core: Foundation Types for the Vanna Analytics Toolkit
//!
//! ## Foundation Layer Role
//!
//! vanna_core serves as the bottom layer of the workspace, providing:
//! - Time types: `Date` and flat-divisor year fractions (`types::time`)
//! - Currency types: `Currency`, `CurrencyPair` (`types::currency`)
//! - Option-side normalisation: `OptionSide` (`types::side`)
//! - Error types: `PricingError`, `DateError`, `CurrencyError`, `SideError`
//!   (`types::error`)
//! - The `Priceable` capability trait (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other vanna_* crates, with
//! minimal external dependencies:
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanna_core::types::time::{year_fraction, Date};
//! use vanna_core::types::{Currency, OptionSide};
//!
//! // Date operations
//! let trade = Date::from_ymd(2019, 8, 6).unwrap();
//! let expiry = Date::from_ymd(2019, 9, 18).unwrap();
//! let t = year_fraction(trade, expiry, 365);
//! assert!((t - 43.0 / 365.0).abs() < 1e-12);
//!
//! // Side normalisation shared by every instrument facade
//! let side: OptionSide = "Payer".parse().unwrap();
//! assert_eq!(side, OptionSide::Call);
//!
//! // Currency information
//! assert_eq!(Currency::USD.code(), "USD");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
