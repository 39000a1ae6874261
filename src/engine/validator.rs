//! Input validation for ITCZ profiles and grid parameters.
//!
//! ## Purpose
//!
//! This module provides validation functions for precipitation profiles and
//! grid parameters. It checks requirements such as input lengths, finite and
//! monotonic latitudes, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//! * **NaN precipitation is legal**: Only latitudes are checked for
//!   finiteness. The centroid estimator ignores NaN precipitation term by
//!   term and the median-flux estimator deliberately propagates it, so
//!   rejecting it here would change both contracts.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the regridding or estimation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ItczError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for ITCZ inputs and grid parameters.
///
/// Provides static methods returning `Result<(), ItczError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a precipitation profile and its latitude coordinates.
    pub fn validate_inputs<T: Float>(precip: &[T], lat: &[T]) -> Result<(), ItczError> {
        // Check 1: Non-empty arrays
        if precip.is_empty() || lat.is_empty() {
            return Err(ItczError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = lat.len();
        if n != precip.len() {
            return Err(ItczError::MismatchedInputs {
                precip_len: precip.len(),
                lat_len: n,
            });
        }

        // Check 3: Sufficient points for interpolation and direction detection
        if n < 2 {
            return Err(ItczError::TooFewPoints { got: n, min: 2 });
        }

        // Check 4: Finite latitudes
        for (i, &l) in lat.iter().enumerate() {
            if !l.is_finite() {
                return Err(ItczError::InvalidLatitude(format!(
                    "lat[{}]={}",
                    i,
                    l.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 5: Strictly monotonic latitudes, either direction
        let ascending = lat[0] < lat[1];
        for i in 1..n {
            let ok = if ascending {
                lat[i - 1] < lat[i]
            } else {
                lat[i - 1] > lat[i]
            };
            if !ok {
                return Err(ItczError::NonMonotonicLatitude { index: i });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the half-width of the analysis window.
    pub fn validate_lat_boundary<T: Float>(lat_boundary: T) -> Result<(), ItczError> {
        if !lat_boundary.is_finite() || lat_boundary <= T::zero() {
            return Err(ItczError::InvalidLatBoundary(
                lat_boundary.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the regridding step.
    pub fn validate_grid_step<T: Float>(grid_step: T) -> Result<(), ItczError> {
        if !grid_step.is_finite() || grid_step <= T::zero() {
            return Err(ItczError::InvalidGridStep(
                grid_step.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}
