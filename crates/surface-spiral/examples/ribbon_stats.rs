//! Print polyline and ribbon statistics for a few spiral configurations.
//!
//! Usage:
//!   cargo run -p surface-spiral --example ribbon_stats -- [seed]
//!
//! Draws five spiral configurations from the seeded sampler, drapes each over a
//! wave field and prints raw/polyline/ribbon counts and the height range.

use nalgebra::Vector2;
use surface_spiral::api::{draw_spiral_cfg, ReplayToken, RibbonOutcome, SpiralBounds, SurfaceSpiral};

fn waves(p: Vector2<f64>) -> f64 {
    (p.x * 0.8).sin() + (p.y * 1.1).cos()
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let mut tok = ReplayToken { seed, index: 0 };
    for i in 0..5 {
        let cfg = draw_spiral_cfg(SpiralBounds::default(), tok);
        tok = tok.next();
        let mut s = SurfaceSpiral::new();
        let raw = match s.setup_with(cfg) {
            Ok(n) => n,
            Err(e) => {
                eprintln!("sample {i}: {e}");
                continue;
            }
        };
        let summary = match s.update(&waves, 0.5, Vector2::zeros()) {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("sample {i}: {e}");
                continue;
            }
        };
        let (zmin, zmax) = s
            .polyline()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.z), hi.max(p.z))
            });
        let ribbon = match summary.ribbon {
            RibbonOutcome::Built { samples } => samples.to_string(),
            other => format!("{other:?}"),
        };
        println!(
            "sample {i}: r={:.2}->{:.2} turns={:.2} raw={raw} polyline={} ribbon={ribbon} z=[{zmin:.3}, {zmax:.3}]",
            cfg.r1, cfg.r2, cfg.turns, summary.polyline_len
        );
    }
}
