//! # Vanna Risk: Batch Scenario Revaluation
//!
//! Embarrassingly-parallel revaluation of [`Priceable`] instruments over
//! scenario grids, built on Rayon.
//!
//! Every pricing call in the workspace is a pure function of instrument and
//! quote, so scenario grids parallelise without locks or shared state: each
//! worker gets a shared reference to the instrument and its own quote.
//!
//! This crate provides:
//! - `parallel`: grid revaluation helpers and the [`GreekReport`] aggregate
//!
//! ## Example
//!
//! ```
//! use vanna_core::types::{Currency, Date, OptionSide};
//! use vanna_models::instruments::{EquityIndexOption, EquityQuote};
//! use vanna_risk::parallel::revalue_grid;
//!
//! let option = EquityIndexOption::new(
//!     "SPX",
//!     Date::from_ymd(2017, 1, 31).unwrap(),
//!     Date::from_ymd(2018, 1, 31).unwrap(),
//!     OptionSide::Call,
//!     4400.0,
//!     365,
//!     Currency::USD,
//! )
//! .unwrap();
//!
//! let quotes: Vec<EquityQuote> = (0..10)
//!     .map(|i| EquityQuote {
//!         spot: 4000.0 + 100.0 * i as f64,
//!         sigma: 0.16,
//!         rd: 0.02,
//!         rf: 0.02,
//!     })
//!     .collect();
//!
//! let pvs = revalue_grid(&option, &quotes);
//! assert_eq!(pvs.len(), 10);
//! ```
//!
//! [`Priceable`]: vanna_core::traits::Priceable

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;

pub use parallel::{greek_report, greek_report_grid, revalue_grid, GreekReport};
