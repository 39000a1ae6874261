//! Profile normalization and uniform regridding.
//!
//! ## Purpose
//!
//! This module prepares a zonal-mean precipitation profile for the ITCZ
//! estimators: it reorders the profile south-to-north, interpolates it onto
//! a uniform latitude grid spanning the analysis window, and attaches
//! cosine-latitude area weights.
//!
//! ## Design notes
//!
//! * **Direction detection**: The first two latitude samples decide the
//!   ordering; a descending pair triggers a lockstep reversal of both
//!   sequences.
//! * **Half-open grid**: The uniform grid covers `[-lat_boundary,
//!   +lat_boundary)`; the point at exactly `+lat_boundary` is excluded.
//!   Downstream results depend on this bound, so it must not be widened.
//! * **Edge-hold**: Grid points outside the profile's latitude extent take
//!   the nearest boundary precipitation value.
//!
//! ## Invariants
//!
//! * Output latitude is strictly increasing south to north.
//! * The three output sequences have identical length `ceil(2b / s)`.
//! * Reordering is idempotent and never mutates the caller's slices.
//!
//! ## Non-goals
//!
//! * This module does not estimate the ITCZ position.
//! * This module does not cache grids across calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::area::cos_lat_weight;
use crate::math::interp::interp_point;
use crate::primitives::errors::ItczError;

// ============================================================================
// Regridded Profile
// ============================================================================

/// A precipitation profile resampled onto a uniform latitude grid.
///
/// Ephemeral per-call product of [`regrid`]; the estimators consume it and
/// drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegriddedProfile<T> {
    /// Uniform grid latitudes (degrees), strictly increasing.
    pub lat: Vec<T>,

    /// Precipitation interpolated onto the grid latitudes.
    pub precip: Vec<T>,

    /// Cosine-latitude area weight at each grid latitude.
    pub area: Vec<T>,
}

impl<T: Float> RegriddedProfile<T> {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    /// Whether the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }

    /// Weighted precipitation `precip[j] * area[j]` at a grid index.
    pub fn weighted(&self, j: usize) -> T {
        self.precip[j] * self.area[j]
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Reorder a profile so latitude runs south to north.
///
/// If the first latitude exceeds the second, both sequences are reversed in
/// lockstep; otherwise they are copied unchanged. Returns `(precip, lat)`.
/// Requires at least 2 samples; [`regrid`] validates this before calling.
pub fn reorder_south_to_north<T: Float>(precip: &[T], lat: &[T]) -> (Vec<T>, Vec<T>) {
    if lat[0] > lat[1] {
        let precip_rev: Vec<T> = precip.iter().rev().copied().collect();
        let lat_rev: Vec<T> = lat.iter().rev().copied().collect();
        (precip_rev, lat_rev)
    } else {
        (precip.to_vec(), lat.to_vec())
    }
}

// ============================================================================
// Regridding
// ============================================================================

/// Resample a profile onto the uniform half-open grid
/// `[-lat_boundary, +lat_boundary)` with step `grid_step`.
///
/// Validates inputs and parameters, reorders the profile south-to-north,
/// linearly interpolates precipitation onto the grid (clamping outside the
/// sample range), and attaches area weights.
pub fn regrid<T: Float>(
    precip: &[T],
    lat: &[T],
    lat_boundary: T,
    grid_step: T,
) -> Result<RegriddedProfile<T>, ItczError> {
    Validator::validate_inputs(precip, lat)?;
    Validator::validate_lat_boundary(lat_boundary)?;
    Validator::validate_grid_step(grid_step)?;

    let (pr, lat_sn) = reorder_south_to_north(precip, lat);

    // Grid length for the half-open interval, matching ceil(2b / s)
    let span = lat_boundary + lat_boundary;
    let m = (span / grid_step)
        .ceil()
        .to_usize()
        .ok_or(ItczError::InvalidGridStep(
            grid_step.to_f64().unwrap_or(f64::NAN),
        ))?;

    let mut lat_grid = Vec::with_capacity(m);
    let mut pr_grid = Vec::with_capacity(m);
    let mut area_grid = Vec::with_capacity(m);

    for i in 0..m {
        // start + i * step, not repeated accumulation, so rounding does not drift
        let lat_i = -lat_boundary + T::from(i).unwrap() * grid_step;
        lat_grid.push(lat_i);
        pr_grid.push(interp_point(lat_i, &lat_sn, &pr));
        area_grid.push(cos_lat_weight(lat_i));
    }

    Ok(RegriddedProfile {
        lat: lat_grid,
        precip: pr_grid,
        area: area_grid,
    })
}

// ============================================================================
// Nearest Grid Index
// ============================================================================

/// Index of the grid latitude closest to `target`.
///
/// Ties and NaN distances resolve to the earliest index: a candidate wins
/// only with a strictly smaller absolute difference. The validators split
/// the grid at this index, so the tie rule is part of their contract.
pub fn nearest_grid_index<T: Float>(grid: &[T], target: T) -> usize {
    let mut best = T::infinity();
    let mut best_idx = 0;

    for (j, &g) in grid.iter().enumerate() {
        let d = (g - target).abs();
        if d < best {
            best = d;
            best_idx = j;
        }
    }

    best_idx
}
