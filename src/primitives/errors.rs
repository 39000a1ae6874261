//! Error types for ITCZ location operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while locating
//! the ITCZ, covering input validation, grid-parameter constraints, and
//! degenerate weighting.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Surfaced degeneracy**: A zero or non-finite centroid denominator is an
//!   explicit error, never a silently returned NaN latitude.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, too few points,
//!    non-finite or non-monotonic latitudes.
//! 2. **Parameter validation**: Latitude boundary and grid step must be positive and finite.
//! 3. **Degenerate weighting**: All-NaN or all-zero weighted precipitation.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ITCZ location operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ItczError {
    /// Input arrays are empty; locating the ITCZ requires at least 2 points.
    EmptyInput,

    /// `precip` and `lat` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `precip` array.
        precip_len: usize,
        /// Number of elements in the `lat` array.
        lat_len: usize,
    },

    /// Number of points is below the minimum required for interpolation.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A latitude sample is NaN or infinite.
    InvalidLatitude(String),

    /// Latitude samples must be strictly monotonic (either direction).
    NonMonotonicLatitude {
        /// Index of the first sample that breaks monotonicity.
        index: usize,
    },

    /// Latitude boundary must be positive and finite.
    InvalidLatBoundary(f64),

    /// Grid step must be positive and finite.
    InvalidGridStep(f64),

    /// Weighted precipitation sums to zero or a non-finite value, so no
    /// centroid exists.
    DegenerateWeights,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ItczError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                precip_len,
                lat_len,
            } => {
                write!(
                    f,
                    "Length mismatch: precip has {precip_len} points, lat has {lat_len}"
                )
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidLatitude(s) => write!(f, "Invalid latitude value: {s}"),
            Self::NonMonotonicLatitude { index } => {
                write!(f, "Latitude is not strictly monotonic at index {index}")
            }
            Self::InvalidLatBoundary(b) => {
                write!(f, "Invalid lat_boundary: {b} (must be > 0 and finite)")
            }
            Self::InvalidGridStep(s) => {
                write!(f, "Invalid grid_step: {s} (must be > 0 and finite)")
            }
            Self::DegenerateWeights => {
                write!(
                    f,
                    "Weighted precipitation sums to zero or NaN; centroid is undefined"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ItczError {}
