use nalgebra::Vector2;

use super::cfg::SpiralCfg;
use crate::error::{Result, SpiralError};

/// Generate the density-adaptive spiral for `cfg`, from `r1` towards `r2`.
///
/// The loop is driven by the density cursor `D`, not by angle: each step recovers
/// the radius through `r = sqrt(r1² + 2·dr·D)`, the angular progress through
/// `d = (r − r1) / dr`, then advances `D` by `density_start + d·dDensity`.
/// Every emitted point was computed from a cursor value `< L`, hence its radius
/// lies between `r1` and `r2`.
///
/// Errors: `InvalidConfiguration` from `SpiralCfg::validate`, raised before the
/// loop starts. The loop never emits more than `point_bound()` points and
/// stops with `InvalidConfiguration` if the cursor stops being finite.
pub fn generate(cfg: &SpiralCfg) -> Result<Vec<Vector2<f64>>> {
    cfg.validate()?;

    let l = cfg.angular_extent();
    let budget = cfg.density_budget();
    let dr = (cfg.r2 - cfg.r1) / l;
    let d_density = (cfg.density_end - cfg.density_start) / l;
    let r1_sq = cfg.r1 * cfg.r1;

    let bound = cfg.point_bound() as usize;
    let mut points = Vec::with_capacity(bound.min(1 << 16));
    let mut cursor: f64 = 0.0;
    loop {
        // radicand stays within [min(r1², r2²), max(r1², r2²)] for cursor < L
        let r = (r1_sq + 2.0 * dr * cursor).max(0.0).sqrt();
        let d = (r - cfg.r1) / dr;
        cursor += cfg.density_start + d * d_density;

        let (s, c) = (d * cfg.direction).sin_cos();
        points.push(Vector2::new(-s * r, c * r));

        if !cursor.is_finite() {
            return Err(SpiralError::invalid(
                "density_start",
                cfg.density_start,
                "density cursor became non-finite",
            ));
        }
        if cursor >= budget || points.len() >= bound {
            break;
        }
    }

    tracing::debug!(
        r1 = cfg.r1,
        r2 = cfg.r2,
        turns = cfg.turns,
        points = points.len(),
        "spiral generated"
    );
    Ok(points)
}
