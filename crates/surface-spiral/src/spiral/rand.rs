//! Seeded sampler for spiral configurations (benches and randomized tests).
//!
//! Model
//! - Radii, turns and both densities are drawn uniformly from `SpiralBounds`;
//!   the winding direction is a fair coin flip between `+1` and `-1`.
//! - Draws are reproducible and indexable through a `(seed, index)` replay token.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cfg::SpiralCfg;

/// Sampling ranges (closed on the left, open on the right).
#[derive(Clone, Copy, Debug)]
pub struct SpiralBounds {
    pub radius: (f64, f64),
    pub turns: (f64, f64),
    pub density: (f64, f64),
    /// Minimum `|r2 − r1|`; redrawn radii closer than this are pushed apart.
    pub min_radius_gap: f64,
}

impl Default for SpiralBounds {
    fn default() -> Self {
        Self {
            radius: (0.5, 10.0),
            turns: (0.5, 6.0),
            density: (0.02, 0.5),
            min_radius_gap: 0.25,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a valid spiral configuration.
///
/// The result always passes `SpiralCfg::validate` for bounds with positive
/// lower limits and `min_radius_gap > 0`.
pub fn draw_spiral_cfg(bounds: SpiralBounds, tok: ReplayToken) -> SpiralCfg {
    let mut rng = tok.to_std_rng();
    let r1 = uniform(&mut rng, bounds.radius);
    let mut r2 = uniform(&mut rng, bounds.radius);
    let gap = bounds.min_radius_gap.max(1e-6);
    if (r2 - r1).abs() < gap {
        r2 = if r2 >= r1 { r1 + gap } else { (r1 - gap).max(gap) };
        if (r2 - r1).abs() < gap {
            r2 = r1 + gap;
        }
    }
    let turns = uniform(&mut rng, bounds.turns);
    let density_start = uniform(&mut rng, bounds.density);
    let density_end = uniform(&mut rng, bounds.density);
    let direction = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    SpiralCfg {
        r1,
        r2,
        turns,
        density_start,
        density_end,
        direction,
    }
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
