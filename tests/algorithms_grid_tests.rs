#![cfg(feature = "dev")]
//! Tests for profile normalization and uniform regridding.
//!
//! These tests verify the shared preprocessing step feeding both ITCZ
//! estimators:
//! - South-to-north reordering and its idempotence
//! - Half-open uniform grid construction and length
//! - Cosine-latitude area weights
//! - Edge-hold behavior for narrow profiles
//! - Input and parameter rejection
//! - Nearest-index tie-breaking
//!
//! ## Test Organization
//!
//! 1. **Reordering** - Direction detection, idempotence, no mutation
//! 2. **Grid Construction** - Length, spacing, half-open upper bound
//! 3. **Interpolation and Weights** - Values on the grid
//! 4. **Validation** - Degenerate inputs and parameters
//! 5. **Nearest Index** - Tie-breaking rule

use approx::assert_relative_eq;

use itcz::internals::algorithms::grid::{nearest_grid_index, regrid, reorder_south_to_north};
use itcz::internals::primitives::errors::ItczError;

// ============================================================================
// Reordering Tests
// ============================================================================

/// Test that an ascending profile passes through unchanged.
#[test]
fn test_reorder_noop_on_ascending() {
    let lat = vec![-10.0f64, 0.0, 10.0];
    let pr = vec![1.0, 2.0, 3.0];

    let (pr_out, lat_out) = reorder_south_to_north(&pr, &lat);
    assert_eq!(pr_out, pr);
    assert_eq!(lat_out, lat);
}

/// Test that a descending profile is reversed in lockstep.
#[test]
fn test_reorder_reverses_descending() {
    let lat = vec![10.0f64, 0.0, -10.0];
    let pr = vec![3.0, 2.0, 1.0];

    let (pr_out, lat_out) = reorder_south_to_north(&pr, &lat);
    assert_eq!(lat_out, vec![-10.0, 0.0, 10.0]);
    assert_eq!(pr_out, vec![1.0, 2.0, 3.0]);
}

/// Test that reordering is idempotent.
///
/// Applying the reorder twice must equal applying it once.
#[test]
fn test_reorder_idempotent() {
    let lat = vec![45.0f64, 15.0, -15.0, -45.0];
    let pr = vec![0.1, 0.9, 0.7, 0.2];

    let (pr_once, lat_once) = reorder_south_to_north(&pr, &lat);
    let (pr_twice, lat_twice) = reorder_south_to_north(&pr_once, &lat_once);

    assert_eq!(pr_once, pr_twice);
    assert_eq!(lat_once, lat_twice);
}

/// Test that reordering never mutates the caller's slices.
#[test]
fn test_reorder_does_not_mutate_input() {
    let lat = vec![10.0f64, -10.0];
    let pr = vec![2.0, 1.0];

    let _ = reorder_south_to_north(&pr, &lat);
    assert_eq!(lat, vec![10.0, -10.0]);
    assert_eq!(pr, vec![2.0, 1.0]);
}

// ============================================================================
// Grid Construction Tests
// ============================================================================

/// Test the grid length formula ceil(2b / s).
#[test]
fn test_grid_length_half_open_count() {
    let lat: Vec<f64> = (-90..=90).map(f64::from).collect();
    let pr = vec![1.0f64; lat.len()];

    // Exact division: 2 * 30 / 0.5 = 120
    let g = regrid(&pr, &lat, 30.0, 0.5).unwrap();
    assert_eq!(g.len(), 120);
    assert_eq!(g.precip.len(), 120);
    assert_eq!(g.area.len(), 120);

    // Non-exact division rounds up: 2 * 10 / 3 = 6.67 -> 7
    let g = regrid(&pr, &lat, 10.0, 3.0).unwrap();
    assert_eq!(g.len(), 7);
}

/// Test that the grid starts at the southern boundary and excludes the
/// northern boundary.
#[test]
fn test_grid_is_half_open() {
    let lat: Vec<f64> = (-90..=90).map(f64::from).collect();
    let pr = vec![1.0f64; lat.len()];

    let g = regrid(&pr, &lat, 30.0, 0.5).unwrap();
    assert_relative_eq!(g.lat[0], -30.0);
    assert_relative_eq!(g.lat[g.len() - 1], 29.5);
    assert!(g.lat.iter().all(|&l| l < 30.0));
}

/// Test uniform spacing and strictly increasing latitudes.
#[test]
fn test_grid_uniform_and_increasing() {
    let lat: Vec<f64> = (-90..=90).map(f64::from).collect();
    let pr = vec![1.0f64; lat.len()];

    let g = regrid(&pr, &lat, 20.0, 0.25).unwrap();
    for w in g.lat.windows(2) {
        assert!(w[0] < w[1]);
        assert_relative_eq!(w[1] - w[0], 0.25, epsilon = 1e-12);
    }
}

/// Test that a descending profile regrids identically to its ascending twin.
#[test]
fn test_regrid_direction_invariant() {
    let lat_asc: Vec<f64> = (-90..=90).map(f64::from).collect();
    let pr_asc: Vec<f64> = lat_asc
        .iter()
        .map(|&l| (l * std::f64::consts::PI / 180.0).cos())
        .collect();

    let lat_desc: Vec<f64> = lat_asc.iter().rev().copied().collect();
    let pr_desc: Vec<f64> = pr_asc.iter().rev().copied().collect();

    let a = regrid(&pr_asc, &lat_asc, 30.0, 0.5).unwrap();
    let b = regrid(&pr_desc, &lat_desc, 30.0, 0.5).unwrap();

    assert_eq!(a, b);
}

// ============================================================================
// Interpolation and Weight Tests
// ============================================================================

/// Test that area weights are the cosine of the grid latitude.
#[test]
fn test_grid_area_weights() {
    let lat: Vec<f64> = (-90..=90).map(f64::from).collect();
    let pr = vec![1.0f64; lat.len()];

    let g = regrid(&pr, &lat, 30.0, 0.5).unwrap();
    for j in 0..g.len() {
        let expected = (g.lat[j] * std::f64::consts::PI / 180.0).cos();
        assert_relative_eq!(g.area[j], expected, epsilon = 1e-12);
    }

    // The equator carries the largest weight in this window
    let eq = nearest_grid_index(&g.lat, 0.0);
    assert_relative_eq!(g.area[eq], 1.0, epsilon = 1e-12);
}

/// Test edge-hold for a profile narrower than the analysis window.
///
/// Grid points outside the profile's latitude extent take the boundary
/// precipitation values.
#[test]
fn test_regrid_clamps_narrow_profile() {
    let lat = vec![-10.0f64, 0.0, 10.0];
    let pr = vec![4.0, 8.0, 6.0];

    let g = regrid(&pr, &lat, 30.0, 1.0).unwrap();

    // South of -10 everything holds pr[0]; north of 10 holds pr[2]
    for j in 0..g.len() {
        if g.lat[j] <= -10.0 {
            assert_relative_eq!(g.precip[j], 4.0);
        } else if g.lat[j] >= 10.0 {
            assert_relative_eq!(g.precip[j], 6.0);
        }
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of empty inputs.
#[test]
fn test_regrid_rejects_empty() {
    let out = regrid::<f64>(&[], &[], 30.0, 0.5);
    assert_eq!(out.unwrap_err(), ItczError::EmptyInput);
}

/// Test rejection of mismatched lengths.
#[test]
fn test_regrid_rejects_mismatched_lengths() {
    let out = regrid(&[1.0f64, 2.0], &[0.0, 10.0, 20.0], 30.0, 0.5);
    assert_eq!(
        out.unwrap_err(),
        ItczError::MismatchedInputs {
            precip_len: 2,
            lat_len: 3,
        }
    );
}

/// Test rejection of single-point profiles.
#[test]
fn test_regrid_rejects_single_point() {
    let out = regrid(&[1.0f64], &[0.0], 30.0, 0.5);
    assert_eq!(out.unwrap_err(), ItczError::TooFewPoints { got: 1, min: 2 });
}

/// Test rejection of non-finite latitudes.
#[test]
fn test_regrid_rejects_nan_latitude() {
    let out = regrid(&[1.0f64, 2.0, 3.0], &[-10.0, f64::NAN, 10.0], 30.0, 0.5);
    assert!(matches!(out.unwrap_err(), ItczError::InvalidLatitude(_)));
}

/// Test rejection of non-monotonic latitudes in both directions.
#[test]
fn test_regrid_rejects_non_monotonic_latitude() {
    let out = regrid(&[1.0f64, 2.0, 3.0], &[0.0, 10.0, 5.0], 30.0, 0.5);
    assert_eq!(out.unwrap_err(), ItczError::NonMonotonicLatitude { index: 2 });

    let out = regrid(&[1.0f64, 2.0, 3.0], &[10.0, 0.0, 5.0], 30.0, 0.5);
    assert_eq!(out.unwrap_err(), ItczError::NonMonotonicLatitude { index: 2 });
}

/// Test rejection of degenerate grid parameters.
#[test]
fn test_regrid_rejects_bad_parameters() {
    let lat = vec![-10.0f64, 10.0];
    let pr = vec![1.0, 1.0];

    assert_eq!(
        regrid(&pr, &lat, 0.0, 0.5).unwrap_err(),
        ItczError::InvalidLatBoundary(0.0)
    );
    assert_eq!(
        regrid(&pr, &lat, -30.0, 0.5).unwrap_err(),
        ItczError::InvalidLatBoundary(-30.0)
    );
    assert_eq!(
        regrid(&pr, &lat, 30.0, 0.0).unwrap_err(),
        ItczError::InvalidGridStep(0.0)
    );
    // NaN payloads compare unequal to themselves, so match on the variant
    assert!(matches!(
        regrid(&pr, &lat, 30.0, f64::NAN).unwrap_err(),
        ItczError::InvalidGridStep(s) if s.is_nan()
    ));
}

// ============================================================================
// Nearest Index Tests
// ============================================================================

/// Test nearest-index lookup away from ties.
#[test]
fn test_nearest_grid_index_basic() {
    let grid = vec![-1.0f64, 0.0, 1.0, 2.0];

    assert_eq!(nearest_grid_index(&grid, 0.9), 2);
    assert_eq!(nearest_grid_index(&grid, -5.0), 0);
    assert_eq!(nearest_grid_index(&grid, 10.0), 3);
}

/// Test that ties resolve to the earliest index.
///
/// A target exactly between two grid points must pick the southern one;
/// the validators' split point depends on this rule.
#[test]
fn test_nearest_grid_index_tie_breaks_first() {
    let grid = vec![0.0f64, 1.0, 2.0];

    assert_eq!(nearest_grid_index(&grid, 0.5), 0);
    assert_eq!(nearest_grid_index(&grid, 1.5), 1);
}
