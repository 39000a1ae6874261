//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer implements the ITCZ location algorithms:
//! - Profile normalization and regridding onto a uniform latitude grid
//! - The centroid (Adam) estimator and its moment-balance check
//! - The median-flux (Voigt) estimator and its half-flux check
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Profile normalization and uniform regridding.
pub mod grid;

/// Centroid (precipitation-weighted mean latitude) estimator.
pub mod centroid;

/// Median-flux (half of cumulative flux) estimator.
pub mod median_flux;
