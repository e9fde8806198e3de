//! Core traits for priceable instruments.
//!
//! This module defines the capability interface shared by every instrument
//! facade:
//! - Present value and finite-difference greeks (`Priceable` trait)
//!
//! Instruments implement the trait against their own quote bundle type, so
//! unrelated instrument shapes are never forced through a common base
//! structure.

pub mod priceable;

pub use priceable::Priceable;
