//! Instrument facades over the analytical pricers.
//!
//! Each facade stores immutable trade economics (dates, side, strike,
//! day-count divisor, PV currency), validated at construction, and prices
//! against a per-call quote struct. Market data is never persisted on an
//! instrument.
//!
//! Greeks are numerical: every facade exposes inherent
//! `delta_with_bump`/`gamma_with_bump`/`vega_with_bump` methods taking an
//! explicit bump size, plus a [`Priceable`](vanna_core::traits::Priceable)
//! implementation that applies the documented default bumps.
//!
//! # Conventions
//!
//! | Facade | Underlying model | PV units |
//! |--------|-----------------|----------|
//! | [`EquityIndexOption`] | Black lognormal | index points |
//! | [`FxOption`] | Black lognormal | quoted PV currency per unit notional |
//! | [`RatesSwaption`] | Bachelier normal | bps upfront per 10,000 notional |
//! | [`CdsSwaption`] | Black lognormal on forward spread | bps upfront |

pub mod credit;
pub mod equity;
pub mod fx;
pub mod rates;

pub use credit::{CdsSwaption, CdsSwaptionQuote};
pub use equity::{EquityIndexOption, EquityQuote};
pub use fx::{FxOption, FxQuote};
pub use rates::{RatesSwaption, RatesQuote};
