//! Spherical area weighting for latitude bands.
//!
//! The area of a latitude band on the unit sphere shrinks toward the poles
//! as the cosine of latitude; weighting precipitation by `cos(lat)` turns a
//! latitudinal sum into an area-proportional integral.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

/// Area weight for a single latitude in degrees: `cos(lat * pi / 180)`.
pub fn cos_lat_weight<T: Float>(lat_deg: T) -> T {
    let deg_to_rad = T::from(PI / 180.0).unwrap();
    (lat_deg * deg_to_rad).cos()
}

/// Area weights for a slice of latitudes in degrees.
pub fn cos_lat_weights<T: Float>(lat_deg: &[T]) -> Vec<T> {
    lat_deg.iter().map(|&l| cos_lat_weight(l)).collect()
}
