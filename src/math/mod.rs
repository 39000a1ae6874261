//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Linear interpolation with edge-hold clamping
//! - NaN-ignoring and NaN-propagating summation
//! - Cosine-latitude area weights
//!
//! These are reusable numerical building blocks with no ITCZ-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear interpolation with boundary clamping.
pub mod interp;

/// Summation primitives with distinct NaN semantics.
pub mod summation;

/// Spherical area weighting.
pub mod area;
