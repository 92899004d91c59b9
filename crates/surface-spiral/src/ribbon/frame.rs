//! Projection onto the height field and per-sample ribbon framing.
//!
//! Both stages are independent per point given the immutable input slice, so
//! the `parallel` feature maps them with rayon; output order and values are the
//! same as the serial path. On failure both paths report the error of the
//! lowest-index point.

use nalgebra::{Vector2, Vector3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::buffers::RibbonSample;
use crate::error::{Result, SpiralError};
use crate::surface::{HeightField, Projection};

/// Lift every planar point to `(x, y, scale · field(p + offset))`.
pub fn project<H: HeightField + ?Sized>(
    points: &[Vector2<f64>],
    field: &H,
    proj: &Projection,
) -> Result<Vec<Vector3<f64>>> {
    #[cfg(feature = "parallel")]
    let it = points.par_iter();
    #[cfg(not(feature = "parallel"))]
    let it = points.iter();
    first_error(it.map(|p| proj.lift(field, *p)).collect())
}

/// Unwrap per-point results in index order so the reported error does not
/// depend on scheduling.
fn first_error<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    results.into_iter().collect()
}

/// In-plane unit tangents, one per polyline sample.
///
/// - Sample `i < n − 1`: `normalize(next.xy − point.xy)`.
/// - Last sample: reuses the tangent of sample `n − 2`.
/// - A step shorter than `eps` reuses the previous valid tangent (or the next
///   valid one before the first valid step).
///
/// Returns `None` when no step is long enough to define a direction, or when
/// fewer than two samples are given.
pub fn tangents(polyline: &[Vector3<f64>], eps: f64) -> Option<Vec<Vector2<f64>>> {
    let n = polyline.len();
    if n < 2 {
        return None;
    }
    let raw: Vec<Option<Vector2<f64>>> = polyline
        .windows(2)
        .map(|w| (w[1].xy() - w[0].xy()).try_normalize(eps))
        .collect();
    let first_valid = raw.iter().flatten().next().copied()?;

    let mut out = Vec::with_capacity(n);
    let mut last = first_valid;
    for t in &raw {
        if let Some(t) = t {
            last = *t;
        }
        out.push(last);
    }
    // no successor at the final sample
    out.push(last);
    Some(out)
}

/// Finite-difference lateral normal at `p` for in-plane tangent `tangent`.
///
/// Probes sit at `p ± ortho · size / 2` with `ortho = (−t.y, t.x)`; the normal
/// is `normalize(P₊ − P₋)` where `P₋` is the probe on the `+ortho` side.
#[inline]
pub fn lateral_normal<H: HeightField + ?Sized>(
    p: Vector3<f64>,
    tangent: Vector2<f64>,
    field: &H,
    proj: &Projection,
    sample_size: f64,
) -> Result<Vector3<f64>> {
    let ortho = Vector2::new(-tangent.y, tangent.x);
    let half = ortho * (sample_size * 0.5);
    let center = p.xy();
    let pm = proj.lift(field, center + half)?;
    let pp = proj.lift(field, center - half)?;
    (pp - pm).try_normalize(0.0).ok_or_else(|| {
        SpiralError::invalid(
            "sample_size",
            sample_size,
            "lateral probes coincide, normal undefined",
        )
    })
}

/// Pair every polyline sample with its lateral normal.
///
/// Returns `Ok(None)` for degenerate input (see `tangents`).
pub fn frame_ribbon<H: HeightField + ?Sized>(
    polyline: &[Vector3<f64>],
    field: &H,
    proj: &Projection,
    sample_size: f64,
    eps: f64,
) -> Result<Option<Vec<RibbonSample>>> {
    let Some(tangents) = tangents(polyline, eps) else {
        return Ok(None);
    };
    #[cfg(feature = "parallel")]
    let it = polyline.par_iter().zip(tangents.par_iter());
    #[cfg(not(feature = "parallel"))]
    let it = polyline.iter().zip(tangents.iter());
    let samples = first_error(
        it.map(|(p, t)| -> Result<RibbonSample> {
            Ok(RibbonSample {
                position: *p,
                normal: lateral_normal(*p, *t, field, proj, sample_size)?,
            })
        })
        .collect(),
    )?;
    Ok(Some(samples))
}
