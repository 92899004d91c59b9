//! Surface ribbon: projection, smoothing and lateral framing of a spiral.
//!
//! Purpose
//! - Lift raw 2D spiral points onto a height field, resample them through an
//!   adaptive spline, and derive per-sample lateral normals for an oriented
//!   ribbon path.
//!
//! Conventions
//! - Tangents are in-plane (xy only). The last sample reuses the tangent of
//!   the one before it; there is no extrapolation and no wrap-around.
//! - The normal is the finite-difference lateral slope `normalize(P₊ − P₋)` of
//!   two probes `sample_size` apart across the path. On a flat field it is the
//!   horizontal right-hand side vector `(t.y, −t.x, 0)`; it is never NaN because
//!   `sample_size > 0` is enforced.
//! - Fewer than two samples, or no in-plane step at all, is reported as
//!   `Degenerate` and yields an empty ribbon rather than an error.
//!
//! Code cross-refs: `build`, `SurfaceSpiral`, `frame::{project, tangents, frame_ribbon}`.

mod builder;
mod cfg;
pub mod frame;

pub use builder::{build, Ribbon, RibbonBuild, RibbonOutcome, SurfaceSpiral, UpdateSummary};
pub use cfg::RibbonCfg;
