//! Tolerance-driven adaptive subdivision of spline spans.
//!
//! Each span `[0, 1]` is split recursively. A sub-interval is accepted once the
//! curve point at an off-centre probe lies within `tolerance` of the chord
//! between the interval's end points. The probe is off-centre so that curves
//! symmetric about the midpoint (inflections) are still detected.

use nalgebra::Vector3;

use super::basis::Spans;

/// Relative position of the probe inside a sub-interval.
const PROBE: f64 = 0.45;
/// Recursion limit per span (at most `2^MAX_DEPTH` segments).
const MAX_DEPTH: u32 = 12;

/// Sample all spans into an ordered polyline. Starts with the first span's start
/// point and appends each accepted sub-interval's end point.
pub(crate) fn sample_spans(spans: &Spans, tolerance: f64, out: &mut Vec<Vector3<f64>>) {
    out.clear();
    if spans.count() == 0 {
        return;
    }
    out.push(spans.eval(0, 0.0));
    for i in 0..spans.count() {
        let p0 = spans.eval(i, 0.0);
        let p1 = spans.eval(i, 1.0);
        subdivide(spans, i, (0.0, p0), (1.0, p1), tolerance, 0, out);
    }
}

fn subdivide(
    spans: &Spans,
    span: usize,
    (t0, p0): (f64, Vector3<f64>),
    (t1, p1): (f64, Vector3<f64>),
    tolerance: f64,
    depth: u32,
    out: &mut Vec<Vector3<f64>>,
) {
    let t = t0 + (t1 - t0) * PROBE;
    let pt = spans.eval(span, t);
    if depth < MAX_DEPTH && distance_to_segment(pt, p0, p1) > tolerance {
        subdivide(spans, span, (t0, p0), (t, pt), tolerance, depth + 1, out);
        subdivide(spans, span, (t, pt), (t1, p1), tolerance, depth + 1, out);
    } else {
        out.push(p1);
    }
}

#[inline]
pub(crate) fn distance_to_segment(p: Vector3<f64>, a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq < 1e-24 {
        return (p - a).norm();
    }
    let s = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * s)).norm()
}
