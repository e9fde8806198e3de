//! # Vanna Models: Pricing Kernel and Instrument Facades
//!
//! Closed-form pricers, the CDS forward engine, the finite-difference greek
//! engine, and the instrument facades built on top of them.
//!
//! This crate provides:
//! - Analytical formulas: Black (lognormal forward) and Bachelier (normal
//!   forward) pricers with shared normal-distribution helpers (`analytical`)
//! - CDS forward engine: hazard rate, forward risky annuity, and approximate
//!   forward spread level (`credit`)
//! - Generic central-difference greeks parametrised by any pricing closure
//!   (`greeks`)
//! - Instrument facades: equity index option, FX vanilla option, rates
//!   swaption, CDS swaption (`instruments`)
//!
//! ## Design Principles
//!
//! - **Pure functions everywhere**: no caching, no mutable accumulation, no
//!   cross-call state; every pv/greek call is independently re-entrant
//! - **Immutable value construction** with validating constructors instead
//!   of post-construction setters
//! - **Shared pricer math as free functions**, composed by facades rather
//!   than inherited from a base class

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod credit;
pub mod greeks;
pub mod instruments;
