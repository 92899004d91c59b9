//! Per-span curve evaluation for the supported spline types.
//!
//! Open curves are closed off with mirrored phantom points
//! `p₋₁ = 2p₀ − p₁` and `pₙ = 2pₙ₋₁ − pₙ₋₂`, so every type starts exactly at
//! the first control point and ends exactly at the last one.

use nalgebra::Vector3;

/// Curve type selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplineType {
    /// Uniform cubic B-spline: C² smooth, approximates interior points.
    #[default]
    BSpline,
    /// Catmull-Rom: C¹, interpolates every control point.
    CatmullRom,
    /// Straight segments between control points.
    Linear,
}

/// Evaluates span `i` (between control points `i` and `i + 1`) at `t ∈ [0, 1]`.
pub(crate) struct Spans {
    kind: SplineType,
    padded: Vec<Vector3<f64>>,
}

impl Spans {
    /// Requires `control.len() >= 2`.
    pub(crate) fn new(kind: SplineType, control: &[Vector3<f64>]) -> Self {
        let n = control.len();
        debug_assert!(n >= 2);
        let mut padded = Vec::with_capacity(n + 2);
        padded.push(control[0] * 2.0 - control[1]);
        padded.extend_from_slice(control);
        padded.push(control[n - 1] * 2.0 - control[n - 2]);
        Self { kind, padded }
    }

    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.padded.len() - 3
    }

    #[inline]
    pub(crate) fn eval(&self, i: usize, t: f64) -> Vector3<f64> {
        let p0 = self.padded[i];
        let p1 = self.padded[i + 1];
        let p2 = self.padded[i + 2];
        let p3 = self.padded[i + 3];
        match self.kind {
            SplineType::BSpline => {
                let s = 1.0 - t;
                let t2 = t * t;
                let t3 = t2 * t;
                let b0 = s * s * s / 6.0;
                let b1 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
                let b2 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
                let b3 = t3 / 6.0;
                p0 * b0 + p1 * b1 + p2 * b2 + p3 * b3
            }
            SplineType::CatmullRom => {
                let t2 = t * t;
                let t3 = t2 * t;
                (p1 * 2.0
                    + (p2 - p0) * t
                    + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
                    + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
                    * 0.5
            }
            SplineType::Linear => p1 + (p2 - p1) * t,
        }
    }
}
