//! # ITCZ — Locating the Intertropical Convergence Zone
//!
//! Estimate the latitude of the Intertropical Convergence Zone (ITCZ) from a
//! zonal-mean precipitation profile, using two published definitions:
//!
//! * **Centroid** (Adam et al. 2016): the area- and precipitation-weighted
//!   mean latitude inside a tropical window.
//! * **Median flux** (Voigt): the latitude at which cumulative area-weighted
//!   precipitation, integrated from the southern edge of the window, reaches
//!   half of its total.
//!
//! Both definitions share a normalization step: the profile is reordered
//! south-to-north, linearly interpolated onto a uniform latitude grid over
//! `[-lat_boundary, +lat_boundary)`, and weighted by the cosine of latitude
//! to account for the shrinking area of latitude bands on a sphere.
//!
//! ## Quick Start
//!
//! ```rust
//! use itcz::prelude::*;
//!
//! // Zonal-mean precipitation, peaked just north of the equator
//! let lat: Vec<f64> = (-90..=90).map(|d| d as f64).collect();
//! let pr: Vec<f64> = lat
//!     .iter()
//!     .map(|&l| ((l - 5.0) * std::f64::consts::PI / 180.0).cos().powi(8))
//!     .collect();
//!
//! let locator = Itcz::new()
//!     .lat_boundary(30.0)   // analysis window: 30S..30N
//!     .grid_step(0.5)       // regrid to a 0.5 degree grid
//!     .method(Centroid)     // or MedianFlux
//!     .build()?;
//!
//! let result = locator.locate(&pr, &lat)?;
//! println!("{}", result);
//!
//! // Definitional consistency check: the weighted moments south and north
//! // of the centroid should nearly balance.
//! let (south, north) = locator.balance(&pr, &lat)?;
//! assert!((south - north).abs() / south.max(north) < 1e-2);
//! # Result::<(), ItczError>::Ok(())
//! ```
//!
//! ```text
//! ITCZ Location:
//!   Method:      Centroid
//!   Position:    4.9759 degrees
//!   Grid points: 120
//! ```
//!
//! ## Input conventions
//!
//! * Latitudes are in degrees, strictly monotonic, in either direction;
//!   profiles stored north-to-south are reversed internally.
//! * Latitude spacing need not be uniform; interpolation handles irregular
//!   grids.
//! * Grid points outside the profile's latitude extent take the nearest
//!   boundary precipitation value (edge-hold, no extrapolation).
//! * NaN precipitation is accepted: the centroid definition skips NaN terms,
//!   while the median-flux definition propagates them, matching the
//!   reference formulations.
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, ItczError>`. Degenerate inputs
//! (too few points, non-monotonic latitudes, non-positive window or step)
//! and degenerate weighting (an all-zero or all-NaN weighted profile, where
//! the centroid would otherwise be 0/0) are reported as explicit errors
//! instead of silently producing NaN latitudes.
//!
//! ```rust
//! use itcz::prelude::*;
//!
//! let lat = vec![-10.0, 0.0, 10.0];
//! let pr = vec![0.0, 0.0, 0.0];
//!
//! let locator = Itcz::new().lat_boundary(10.0).grid_step(1.0).build()?;
//! assert_eq!(locator.locate(&pr, &lat), Err(ItczError::DegenerateWeights));
//! # Result::<(), ItczError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! itcz = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Adam, O., Bischoff, T., and Schneider, T. (2016). "Seasonal and
//!   Interannual Variations of the Energy Flux Equator and ITCZ"
//! - Voigt, A., et al. (2016). "The tropical rain belts with an annual cycle
//!   and a continent model intercomparison project (TRACMIP)"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure numerical building blocks.
mod math;

// Layer 3: Engine - input and parameter validation.
mod engine;

// Layer 4: Algorithms - regridding and the two estimators.
mod algorithms;

// High-level fluent API for ITCZ location.
mod api;

// Standard ITCZ prelude.
pub mod prelude {
    pub use crate::api::{
        ItczBuilder as Itcz,
        ItczError,
        ItczLocator,
        ItczMethod::{Centroid, MedianFlux},
        ItczResult, RegriddedProfile,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
