use super::rand::{draw_spiral_cfg, ReplayToken, SpiralBounds};
use super::{generate, SpiralCfg};
use crate::api::spiral_angle;
use crate::error::SpiralError;
use proptest::prelude::*;

fn max_step(cfg: &SpiralCfg) -> f64 {
    cfg.density_start.max(cfg.density_end)
}

#[test]
fn reference_config_starts_at_inner_radius() {
    let cfg = SpiralCfg::new(1.0, 5.0, 3.0, 0.1, 0.1);
    let pts = generate(&cfg).unwrap();
    assert!(!pts.is_empty());
    // D = 0 → r = r1 at angle 0 → (0, r1)
    assert!(pts[0].x.abs() < 1e-12);
    assert!((pts[0].y - 1.0).abs() < 1e-12);
    // constant density: count = ceil(L / δ) = ceil(18π / 0.1)
    let expected = (cfg.density_budget() / 0.1).ceil() as usize;
    assert!(pts.len().abs_diff(expected) <= 1, "{} vs {}", pts.len(), expected);
}

#[test]
fn last_point_within_one_step_of_outer_radius() {
    let cfg = SpiralCfg::new(1.0, 5.0, 3.0, 0.05, 0.2);
    let pts = generate(&cfg).unwrap();
    let r_last = pts.last().unwrap().norm();
    let dr = (cfg.r2 - cfg.r1) / cfg.angular_extent();
    // last cursor value satisfies L - max_step <= D < L
    let r_floor = (cfg.r2 * cfg.r2 - 2.0 * dr * max_step(&cfg)).sqrt();
    assert!(r_last <= cfg.r2 + 1e-9);
    assert!(r_last >= r_floor - 1e-9, "r_last={r_last} floor={r_floor}");
}

#[test]
fn inward_spiral_reaches_smaller_radius() {
    let cfg = SpiralCfg::new(4.0, 1.0, 2.0, 0.1, 0.1);
    let pts = generate(&cfg).unwrap();
    assert!((pts[0].norm() - 4.0).abs() < 1e-12);
    let r_last = pts.last().unwrap().norm();
    assert!(r_last < 1.2, "r_last={r_last}");
    // radius is monotone along the sequence
    for w in pts.windows(2) {
        assert!(w[1].norm() <= w[0].norm() + 1e-12);
    }
}

#[test]
fn direction_mirrors_winding() {
    let ccw = generate(&SpiralCfg::new(1.0, 3.0, 1.5, 0.05, 0.05)).unwrap();
    let cw = generate(&SpiralCfg::new(1.0, 3.0, 1.5, 0.05, 0.05).with_direction(-1.0)).unwrap();
    assert_eq!(ccw.len(), cw.len());
    for (a, b) in ccw.iter().zip(&cw) {
        assert!((a.x + b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
    }
}

#[test]
fn density_controls_spacing_not_radius() {
    // Sparse at the start, dense at the end: later angular steps are larger.
    let pts = generate(&SpiralCfg::new(1.0, 2.0, 2.0, 0.01, 0.2)).unwrap();
    let angle = |i: usize| spiral_angle(pts[i]);
    let step = |i: usize| {
        let mut a = angle(i + 1) - angle(i);
        if a < 0.0 {
            a += std::f64::consts::TAU;
        }
        a
    };
    assert!(step(pts.len() - 3) > step(1));
}

#[test]
fn rejects_equal_radii() {
    let err = generate(&SpiralCfg::new(2.0, 2.0, 3.0, 0.1, 0.1)).unwrap_err();
    assert!(matches!(
        err,
        SpiralError::InvalidConfiguration { field: "r2", .. }
    ));
}

#[test]
fn rejects_stalling_density_and_bad_turns() {
    let stall_start = SpiralCfg::new(1.0, 5.0, 3.0, 0.0, 0.1);
    assert!(generate(&stall_start).unwrap_err().is_configuration());
    let stall_end = SpiralCfg::new(1.0, 5.0, 3.0, 0.1, -0.1);
    assert!(generate(&stall_end).unwrap_err().is_configuration());
    let no_turns = SpiralCfg::new(1.0, 5.0, 0.0, 0.1, 0.1);
    assert!(generate(&no_turns).unwrap_err().is_configuration());
    let nan_dir = SpiralCfg::new(1.0, 5.0, 1.0, 0.1, 0.1).with_direction(f64::NAN);
    assert!(generate(&nan_dir).unwrap_err().is_configuration());
    let too_fine = SpiralCfg::new(1.0, 5.0, 3.0, 1e-9, 1e-9);
    assert!(generate(&too_fine).unwrap_err().is_configuration());
}

#[test]
fn rejects_radii_whose_square_overflows() {
    let huge = SpiralCfg::new(1e200, 2e200, 1.0, 1e195, 1e195);
    let err = generate(&huge).unwrap_err();
    assert!(matches!(
        err,
        SpiralError::InvalidConfiguration { field: "r1", .. }
    ));
    let huge_outer = SpiralCfg::new(1.0, 1e160, 1.0, 1e155, 1e155);
    assert!(huge_outer.validate().unwrap_err().is_configuration());
    // largest radii that still square finitely are accepted
    let big = SpiralCfg::new(1e150, 2e150, 1.0, 1e148, 1e148);
    let pts = generate(&big).unwrap();
    assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert!(pts.len() as f64 <= big.point_bound());
}

#[test]
fn sampled_configs_are_valid_and_reproducible() {
    let bounds = SpiralBounds::default();
    let mut tok = ReplayToken { seed: 7, index: 0 };
    for _ in 0..32 {
        let a = draw_spiral_cfg(bounds, tok);
        let b = draw_spiral_cfg(bounds, tok);
        assert_eq!(a, b);
        a.validate().unwrap();
        tok = tok.next();
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_terminates_with_bounded_radii(
        r1 in 0.5f64..8.0,
        gap in 0.2f64..4.0,
        outward in any::<bool>(),
        turns in 0.5f64..5.0,
        ds in 0.02f64..0.5,
        de in 0.02f64..0.5,
    ) {
        let r2 = if outward { r1 + gap } else { (r1 - gap).max(0.1) };
        prop_assume!((r2 - r1).abs() > 1e-3);
        let cfg = SpiralCfg::new(r1, r2, turns, ds, de);
        let pts = generate(&cfg).unwrap();
        prop_assert!(!pts.is_empty());
        prop_assert!(pts.len() as f64 <= cfg.point_bound());
        prop_assert!((pts[0].norm() - r1).abs() < 1e-9);
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        for p in &pts {
            let r = p.norm();
            prop_assert!(r >= lo - 1e-9 && r <= hi + 1e-9);
        }
    }

    #[test]
    fn halving_density_increases_point_count(
        r1 in 0.5f64..4.0,
        gap in 0.5f64..4.0,
        turns in 1.0f64..4.0,
        ds in 0.05f64..0.4,
        de in 0.05f64..0.4,
    ) {
        let coarse = SpiralCfg::new(r1, r1 + gap, turns, ds, de);
        let fine = SpiralCfg::new(r1, r1 + gap, turns, ds * 0.5, de * 0.5);
        let n_coarse = generate(&coarse).unwrap().len();
        let n_fine = generate(&fine).unwrap().len();
        prop_assert!(n_fine > n_coarse, "fine={} coarse={}", n_fine, n_coarse);
    }
}
