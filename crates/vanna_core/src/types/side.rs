//! Normalised option side (call/put, payer/receiver).
//!
//! Every instrument facade accepts the same side vocabulary, so the alias
//! handling lives here rather than being repeated per instrument. Rates and
//! credit desks quote payer/receiver; those map onto call/put against the
//! forward.
//!
//! # Examples
//!
//! ```
//! use vanna_core::types::OptionSide;
//!
//! let call: OptionSide = "c".parse().unwrap();
//! let payer: OptionSide = "Payer".parse().unwrap();
//! assert_eq!(call, payer);
//!
//! assert!("straddle".parse::<OptionSide>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::SideError;

/// Option side with payer/receiver aliases folded in.
///
/// Accepted tokens (case-insensitive):
/// - `call`, `c`, `pay`, `payer` → `Call`
/// - `put`, `p`, `rec`, `receiver` → `Put`
///
/// Any other token is an invalid-input error. There is no silent fallback:
/// unrecognised tokens fault at the parse site, before any pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionSide {
    /// Call on the forward (payer for swaptions).
    Call,
    /// Put on the forward (receiver for swaptions).
    Put,
}

impl OptionSide {
    /// Returns whether this is a call (payer).
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Returns whether this is a put (receiver).
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionSide::Put)
    }
}

impl FromStr for OptionSide {
    type Err = SideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" | "pay" | "payer" => Ok(OptionSide::Call),
            "put" | "p" | "rec" | "receiver" => Ok(OptionSide::Put),
            _ => Err(SideError {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionSide::Call => write!(f, "Call"),
            OptionSide::Put => write!(f, "Put"),
        }
    }
}
