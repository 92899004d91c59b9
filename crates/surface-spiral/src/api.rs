//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code (the `cli` crate, benches, examples). Breaking changes are allowed.

// Spiral generation
pub use crate::spiral::rand::{draw_spiral_cfg, ReplayToken, SpiralBounds};
pub use crate::spiral::{generate as generate_spiral, SpiralCfg, MAX_POINTS};
// Surface and spline collaborators
pub use crate::spline::{AdaptiveSpline, SplinePath, SplineType, DEFAULT_SAMPLING_TOLERANCE};
pub use crate::surface::{FlatSurface, HeightField, Projection, TiltedPlane};
// Ribbon building
pub use crate::buffers::{PathBuffer, PathState, PointBuffer, RibbonSample};
pub use crate::ribbon::frame::{frame_ribbon, lateral_normal, project, tangents};
pub use crate::ribbon::{
    build as build_ribbon, Ribbon, RibbonBuild, RibbonCfg, RibbonOutcome, SurfaceSpiral,
    UpdateSummary,
};
pub use crate::error::{Result, SpiralError};

use nalgebra::Vector2;

/// Polar angle of a spiral point in the generator's convention
/// (`p = (−sin θ, cos θ)·r`), in `(−π, π]`.
#[inline]
pub fn spiral_angle(p: Vector2<f64>) -> f64 {
    (-p.x).atan2(p.y)
}
