use super::*;
use nalgebra::Vector3;

fn arc(n: usize, radius: f64) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|k| {
            let th = std::f64::consts::PI * (k as f64) / ((n - 1) as f64);
            Vector3::new(radius * th.cos(), radius * th.sin(), 0.1 * k as f64)
        })
        .collect()
}

fn spline_with(kind: SplineType, tol: f64, pts: &[Vector3<f64>]) -> SplinePath {
    let mut s = SplinePath::new(kind);
    s.set_sampling_tolerance(tol).unwrap();
    for p in pts {
        s.add(*p);
    }
    s
}

#[test]
fn open_curve_hits_both_end_points() {
    let pts = arc(7, 2.0);
    for kind in [SplineType::BSpline, SplineType::CatmullRom, SplineType::Linear] {
        let mut s = spline_with(kind, 0.01, &pts);
        let poly = s.polyline().unwrap().to_vec();
        assert!(poly.len() >= pts.len(), "{kind:?}");
        assert!((poly[0] - pts[0]).norm() < 1e-9, "{kind:?}");
        assert!((poly[poly.len() - 1] - pts[pts.len() - 1]).norm() < 1e-9, "{kind:?}");
    }
}

#[test]
fn linear_spline_keeps_control_polygon() {
    let pts = arc(9, 1.0);
    let mut s = spline_with(SplineType::Linear, 1e-3, &pts);
    let poly = s.polyline().unwrap();
    assert_eq!(poly.len(), pts.len());
    for (a, b) in poly.iter().zip(&pts) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn catmull_rom_interpolates_interior_points() {
    let pts = arc(6, 3.0);
    let mut s = spline_with(SplineType::CatmullRom, 0.005, &pts);
    let poly = s.polyline().unwrap();
    for p in &pts {
        let nearest = poly
            .iter()
            .map(|q| (q - p).norm())
            .fold(f64::INFINITY, f64::min);
        assert!(nearest < 1e-9);
    }
}

#[test]
fn changing_kind_resamples_cached_polyline() {
    let pts = arc(8, 2.0);
    let mut s = spline_with(SplineType::BSpline, 1e-3, &pts);
    let smooth = s.polyline().unwrap().to_vec();
    s.set_kind(SplineType::Linear);
    assert_eq!(s.kind(), SplineType::Linear);
    let linear = s.polyline().unwrap().to_vec();
    assert_eq!(linear.len(), pts.len());
    assert_ne!(smooth, linear);
    // same kind again keeps the cached result
    s.set_kind(SplineType::Linear);
    assert_eq!(s.polyline().unwrap(), linear.as_slice());
}

#[test]
fn tighter_tolerance_yields_more_points() {
    let pts = arc(5, 4.0);
    let coarse = spline_with(SplineType::BSpline, 0.5, &pts).polyline().unwrap().len();
    let fine = spline_with(SplineType::BSpline, 1e-3, &pts).polyline().unwrap().len();
    assert!(fine > coarse, "fine={fine} coarse={coarse}");
}

#[test]
fn short_inputs_pass_through() {
    let mut s = SplinePath::default();
    assert!(s.polyline().unwrap().is_empty());
    s.add(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(s.polyline().unwrap(), &[Vector3::new(1.0, 2.0, 3.0)]);
    s.clear();
    assert!(s.control_points().is_empty());
    assert!(s.polyline().unwrap().is_empty());
}

#[test]
fn invalid_tolerance_keeps_previous_value() {
    let mut s = SplinePath::default();
    s.set_sampling_tolerance(0.2).unwrap();
    assert!(s.set_sampling_tolerance(0.0).unwrap_err().is_configuration());
    assert!(s.set_sampling_tolerance(f64::NAN).is_err());
    assert_eq!(s.sampling_tolerance(), 0.2);
}

#[test]
fn non_finite_control_point_fails() {
    let mut s = SplinePath::default();
    s.add(Vector3::new(0.0, 0.0, 0.0));
    s.add(Vector3::new(1.0, f64::INFINITY, 0.0));
    assert!(matches!(s.polyline(), Err(SpiralError::Spline(_))));
}

#[test]
fn segment_distance_clamps_to_end_points() {
    let a = Vector3::new(0.0, 0.0, 0.0);
    let b = Vector3::new(1.0, 0.0, 0.0);
    let d_mid = sampler::distance_to_segment(Vector3::new(0.5, 2.0, 0.0), a, b);
    let d_out = sampler::distance_to_segment(Vector3::new(4.0, 4.0, 0.0), a, b);
    assert!((d_mid - 2.0).abs() < 1e-12);
    assert!((d_out - 5.0).abs() < 1e-12);
}
