//! Centroid ITCZ estimator (Adam et al. 2016).
//!
//! ## Purpose
//!
//! This module locates the ITCZ as the area- and precipitation-weighted mean
//! latitude of the regridded profile, and provides the moment-balance check
//! that follows from the weighted-mean definition.
//!
//! ## Key concepts
//!
//! * **Weighted centroid**: `Σ(lat·area·pr) / Σ(area·pr)` over the grid.
//! * **NaN-ignoring sums**: NaN terms drop out of numerator and denominator
//!   independently.
//! * **Moment balance**: the first moments of weighted precipitation about
//!   the centroid, south and north of it, have equal magnitude up to grid
//!   discretization.
//!
//! ## Invariants
//!
//! * A zero or non-finite denominator is reported as
//!   [`ItczError::DegenerateWeights`], never returned as a latitude.
//! * The balance check recomputes the position itself; callers cannot feed
//!   it a stale estimate.
//!
//! ## Non-goals
//!
//! * This module does not handle 2-D fields or time series.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::grid::{nearest_grid_index, regrid};
use crate::math::summation::nan_ignoring_sum;
use crate::primitives::errors::ItczError;

// ============================================================================
// Position
// ============================================================================

/// ITCZ latitude as the precipitation- and area-weighted mean latitude.
pub fn centroid_position<T: Float>(
    precip: &[T],
    lat: &[T],
    lat_boundary: T,
    grid_step: T,
) -> Result<T, ItczError> {
    let g = regrid(precip, lat, lat_boundary, grid_step)?;

    let numerator = nan_ignoring_sum((0..g.len()).map(|j| g.lat[j] * g.weighted(j)));
    let denominator = nan_ignoring_sum((0..g.len()).map(|j| g.weighted(j)));

    if denominator == T::zero() || !denominator.is_finite() {
        return Err(ItczError::DegenerateWeights);
    }

    Ok(numerator / denominator)
}

// ============================================================================
// Moment Balance
// ============================================================================

/// Magnitudes of the first moment of weighted precipitation on each side of
/// the centroid.
///
/// Recomputes [`centroid_position`] internally, splits the grid at the index
/// nearest the centroid (that index belongs to the southern half), and
/// returns `(south, north)` moment magnitudes. For smooth unimodal profiles
/// the two should nearly agree; the residual gap comes from the discrete
/// grid and the asymmetric split.
pub fn centroid_moment_balance<T: Float>(
    precip: &[T],
    lat: &[T],
    lat_boundary: T,
    grid_step: T,
) -> Result<(T, T), ItczError> {
    let g = regrid(precip, lat, lat_boundary, grid_step)?;
    let itcz = centroid_position(precip, lat, lat_boundary, grid_step)?;
    let split = nearest_grid_index(&g.lat, itcz);

    let south = nan_ignoring_sum((0..=split).map(|j| (g.lat[j] - itcz) * g.weighted(j))).abs();
    let north =
        nan_ignoring_sum((split + 1..g.len()).map(|j| (g.lat[j] - itcz) * g.weighted(j))).abs();

    Ok((south, north))
}
