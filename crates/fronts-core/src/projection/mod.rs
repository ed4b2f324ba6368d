//! Map projections needed for metric buffering.
//!
//! Implemented from scratch; only the ellipsoidal Lambert Azimuthal Equal
//! Area projection used by EPSG:3035 is required.

pub mod laea;

pub use laea::LambertAzimuthalEqualArea;
