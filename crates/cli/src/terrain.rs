//! Noise terrain used as the height field for `run`.

use nalgebra::Vector2;
use noise::{NoiseFn, Perlin};
use surface_spiral::api::HeightField;

use crate::config::TerrainSection;

/// Fractional Brownian motion over 2D Perlin noise, normalised to about `[-1, 1]`.
pub struct NoiseTerrain {
    perlin: Perlin,
    frequency: f64,
    octaves: u32,
}

impl NoiseTerrain {
    pub fn new(cfg: &TerrainSection) -> Self {
        Self {
            perlin: Perlin::new(cfg.seed),
            frequency: cfg.frequency,
            octaves: cfg.octaves.max(1),
        }
    }
}

impl HeightField for NoiseTerrain {
    fn height(&self, p: Vector2<f64>) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_value = 0.0;
        for _ in 0..self.octaves {
            value += self.perlin.get([p.x * frequency, p.y * frequency]) * amplitude;
            max_value += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }
        value / max_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_is_deterministic_and_bounded() {
        let t = NoiseTerrain::new(&TerrainSection::default());
        let u = NoiseTerrain::new(&TerrainSection::default());
        for k in 0..50 {
            let p = Vector2::new(0.37 * k as f64, -0.21 * k as f64);
            let h = t.height(p);
            assert_eq!(h, u.height(p));
            assert!(h.is_finite() && h.abs() <= 1.5);
        }
    }
}
