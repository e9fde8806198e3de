//! Credit instruments and the CDS forward engine.
//!
//! This module provides the [`Cds`] value type, which converts spot credit
//! spreads into the forward-starting quantities the CDS swaption facade
//! needs: hazard rate, forward risky annuity (PV01), and approximate
//! forward spread level.

pub mod cds;

pub use cds::{Cds, CdsError};
