//! Analytical (closed-form) option pricing.
//!
//! This module provides the two closed-form pricers every instrument facade
//! dispatches to, together with the normal-distribution helpers they share.
//!
//! # Available Solutions
//!
//! - **Black (lognormal forward)**: equity index options, FX vanillas, and
//!   CDS swaptions on the adjusted forward spread
//! - **Bachelier (normal forward)**: rates swaptions quoted in normal
//!   basis-point volatility
//!
//! # Usage
//!
//! ```rust
//! use vanna_models::analytical::{bachelier_price, black_price};
//! use vanna_core::types::OptionSide;
//!
//! let call = black_price(100.0, 100.0, 1.0, 0.2, OptionSide::Call).unwrap();
//! assert!(call > 0.0);
//!
//! let payer = bachelier_price(180.0, 180.0, 1.0, 100.0, OptionSide::Call).unwrap();
//! assert!(payer > 0.0);
//! ```

pub mod bachelier;
pub mod black;
pub mod distributions;
pub mod error;

pub use bachelier::bachelier_price;
pub use black::{black_price, black_price_with, PutConvention};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
