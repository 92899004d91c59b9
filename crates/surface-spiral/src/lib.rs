//! Spiral paths draped over a height field.
//!
//! Pipeline
//! - `spiral`: density-adaptive 2D spiral from a `SpiralCfg`.
//! - `ribbon`: lift the spiral onto a `surface::HeightField`, smooth it through
//!   a `spline::AdaptiveSpline`, and frame an oriented ribbon path.
//! - `buffers`: the wire and path containers filled by `ribbon::SurfaceSpiral`.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated import surface; `prelude` covers the common case.

pub mod api;
pub mod buffers;
pub mod error;
pub mod ribbon;
pub mod spiral;
pub mod spline;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::SpiralError;
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::buffers::{PathBuffer, PointBuffer, RibbonSample};
    pub use crate::error::SpiralError;
    pub use crate::ribbon::{RibbonCfg, RibbonOutcome, SurfaceSpiral, UpdateSummary};
    pub use crate::spiral::{generate, SpiralCfg};
    pub use crate::spline::{AdaptiveSpline, SplinePath, SplineType};
    pub use crate::surface::{FlatSurface, HeightField, Projection, TiltedPlane};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
