//! Rayon-based grid revaluation.
//!
//! Helpers for revaluing one instrument across many scenario quotes. The
//! pricing contract guarantees purity, so the only synchronisation is the
//! fork-join of the Rayon pool itself.

use rayon::prelude::*;

use vanna_core::traits::Priceable;
use vanna_core::types::PricingError;

/// Minimum grid size before parallel dispatch pays for itself.
///
/// Below this the closed-form pricers are cheap enough that the fork-join
/// overhead dominates, so the grid is evaluated sequentially.
pub const PARALLEL_THRESHOLD: usize = 64;

/// Full set of first- and second-order sensitivities at one quote.
///
/// Computed with each instrument's documented default bump sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreekReport {
    /// Present value in the instrument's unit convention.
    pub pv: f64,
    /// First-order sensitivity to the underlying level.
    pub delta: f64,
    /// Second-order sensitivity to the underlying level.
    pub gamma: f64,
    /// Sensitivity to volatility.
    pub vega: f64,
}

/// Maps each item through a function in parallel.
///
/// # Arguments
/// * `items` - Slice of items to process
/// * `mapper` - Function to apply to each item
///
/// # Returns
/// Vector of mapped results, in input order.
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Revalues one instrument across a grid of scenario quotes.
///
/// Each scenario is independent; faults stay with their own scenario
/// rather than aborting the grid, so one degenerate quote never hides the
/// other results.
///
/// Small grids (below [`PARALLEL_THRESHOLD`]) run sequentially.
///
/// # Arguments
/// * `instrument` - The instrument to revalue
/// * `quotes` - One quote per scenario
///
/// # Returns
/// Per-scenario PVs in input order.
pub fn revalue_grid<P>(instrument: &P, quotes: &[P::Quote]) -> Vec<Result<f64, PricingError>>
where
    P: Priceable + Sync,
    P::Quote: Sync,
{
    if quotes.len() < PARALLEL_THRESHOLD {
        quotes.iter().map(|q| instrument.pv(q)).collect()
    } else {
        quotes.par_iter().map(|q| instrument.pv(q)).collect()
    }
}

/// Computes the full greek report at one quote with default bumps.
///
/// # Errors
/// Propagates the first pricing fault encountered; a report is only
/// produced when all four measures succeed.
pub fn greek_report<P>(instrument: &P, quote: &P::Quote) -> Result<GreekReport, PricingError>
where
    P: Priceable,
{
    Ok(GreekReport {
        pv: instrument.pv(quote)?,
        delta: instrument.delta(quote)?,
        gamma: instrument.gamma(quote)?,
        vega: instrument.vega(quote)?,
    })
}

/// Computes greek reports across a grid of scenario quotes in parallel.
///
/// The per-scenario fault isolation of [`revalue_grid`] applies here too.
pub fn greek_report_grid<P>(
    instrument: &P,
    quotes: &[P::Quote],
) -> Vec<Result<GreekReport, PricingError>>
where
    P: Priceable + Sync,
    P::Quote: Sync,
{
    if quotes.len() < PARALLEL_THRESHOLD {
        quotes.iter().map(|q| greek_report(instrument, q)).collect()
    } else {
        quotes
            .par_iter()
            .map(|q| greek_report(instrument, q))
            .collect()
    }
}
