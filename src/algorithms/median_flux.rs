//! Median-flux ITCZ estimator (Voigt et al.).
//!
//! ## Purpose
//!
//! This module locates the ITCZ as the latitude at which the cumulative
//! area-weighted precipitation flux, integrated from the southern boundary,
//! first comes closest to half of the domain total. It also provides the
//! half-flux check implied by that definition.
//!
//! ## Key concepts
//!
//! * **Prefix sums**: `pri_int[j] = Σ_{k<=j} pr[k]·area[k]`, O(M) running sum.
//! * **NaN propagation**: sums here use plain IEEE accumulation. A NaN in the
//!   profile poisons the total, every distance comparison fails, and the
//!   search falls back to the first grid point. This mirrors the centroid
//!   estimator's opposite choice and the two must stay distinct.
//!
//! ## Invariants
//!
//! * Ties in the half-flux search resolve to the earliest grid index.
//! * `south + north` from the balance check equals the plain total exactly
//!   up to floating rounding.
//!
//! ## Non-goals
//!
//! * This module does not require non-negative precipitation; the prefix sum
//!   is monotonic only when `pr·area >= 0` everywhere, and that is not
//!   enforced.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::grid::{nearest_grid_index, regrid};
use crate::math::summation::propagating_sum;
use crate::primitives::errors::ItczError;

// ============================================================================
// Position
// ============================================================================

/// ITCZ latitude where cumulative area-weighted precipitation reaches half
/// its total.
pub fn median_flux_position<T: Float>(
    precip: &[T],
    lat: &[T],
    lat_boundary: T,
    grid_step: T,
) -> Result<T, ItczError> {
    let g = regrid(precip, lat, lat_boundary, grid_step)?;

    let total = propagating_sum((0..g.len()).map(|j| g.weighted(j)));
    let half = total * T::from(0.5).unwrap();

    // Single pass over the prefix sums; a candidate must be strictly closer
    // to the half total to displace the current best, so ties and NaN
    // distances keep the earliest index.
    let mut running = T::zero();
    let mut best = T::infinity();
    let mut best_idx = 0;

    for j in 0..g.len() {
        running = running + g.weighted(j);
        let d = (running - half).abs();
        if d < best {
            best = d;
            best_idx = j;
        }
    }

    Ok(g.lat[best_idx])
}

// ============================================================================
// Half-Flux Balance
// ============================================================================

/// Partial area-weighted precipitation sums on each side of the median-flux
/// latitude.
///
/// Recomputes [`median_flux_position`] internally, splits the grid at the
/// index nearest that latitude (the index belongs to the southern half), and
/// returns the plain partial sums `(south, north)`. Each should approximate
/// half of the domain total, and their sum reproduces the total exactly up
/// to rounding.
pub fn median_flux_balance<T: Float>(
    precip: &[T],
    lat: &[T],
    lat_boundary: T,
    grid_step: T,
) -> Result<(T, T), ItczError> {
    let g = regrid(precip, lat, lat_boundary, grid_step)?;
    let itcz = median_flux_position(precip, lat, lat_boundary, grid_step)?;
    let split = nearest_grid_index(&g.lat, itcz);

    let south = propagating_sum((0..=split).map(|j| g.weighted(j)));
    let north = propagating_sum((split + 1..g.len()).map(|j| g.weighted(j)));

    Ok((south, north))
}
