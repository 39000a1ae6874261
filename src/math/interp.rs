//! Linear interpolation of a 1-D profile onto query points.
//!
//! ## Purpose
//!
//! This module provides piecewise-linear interpolation of a sampled profile,
//! used to transfer precipitation from the native latitude samples onto the
//! uniform analysis grid.
//!
//! ## Design notes
//!
//! * **Edge-hold clamping**: Queries outside the sample range return the
//!   nearest boundary value rather than extrapolating or erroring.
//! * **Binary search**: Interior queries locate their bracketing segment in
//!   O(log n) via `partition_point`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Sample x-values must be sorted in strictly ascending order.
//! * Samples must contain at least 2 points.
//! * NaN y-values pass through interpolation unchanged into affected segments.
//!
//! ## Non-goals
//!
//! * This module does not sort or validate the input samples.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Point Interpolation
// ============================================================================

/// Interpolate a single query point against sorted samples `(x, y)`.
///
/// # Special cases
///
/// * **Below range**: `query <= x[0]` returns `y[0]`
/// * **Above range**: `query >= x[n-1]` returns `y[n-1]`
/// * **Exact hit**: a query equal to a sample x returns the sample y
pub fn interp_point<T: Float>(query: T, x: &[T], y: &[T]) -> T {
    let n = x.len();

    // Edge-hold clamping at both boundaries
    if query <= x[0] {
        return y[0];
    }
    if query >= x[n - 1] {
        return y[n - 1];
    }

    // First index k with x[k] >= query; the checks above guarantee 0 < k < n
    let k = x.partition_point(|&v| v < query);
    if x[k] == query {
        return y[k];
    }

    let x0 = x[k - 1];
    let x1 = x[k];
    let y0 = y[k - 1];
    let y1 = y[k];

    // Linear interpolation: y = y0 + (query - x0) * slope
    let slope = (y1 - y0) / (x1 - x0);
    y0 + (query - x0) * slope
}

// ============================================================================
// Slice Interpolation
// ============================================================================

/// Interpolate every query point against sorted samples `(x, y)`.
pub fn interp_slice<T: Float>(queries: &[T], x: &[T], y: &[T]) -> Vec<T> {
    queries.iter().map(|&q| interp_point(q, x, y)).collect()
}
