//! JSON run configuration. Every field has a default, so `{}` is a valid file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use surface_spiral::api::{RibbonCfg, SpiralCfg, SplineType};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub spiral: SpiralSection,
    pub ribbon: RibbonSection,
    pub terrain: TerrainSection,
    pub vertical_scale: f64,
    pub planar_offset: [f64; 2],
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spiral: SpiralSection::default(),
            ribbon: RibbonSection::default(),
            terrain: TerrainSection::default(),
            vertical_scale: 1.0,
            planar_offset: [0.0, 0.0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpiralSection {
    pub r1: f64,
    pub r2: f64,
    pub turns: f64,
    pub density_start: f64,
    pub density_end: f64,
    pub direction: f64,
}

impl Default for SpiralSection {
    fn default() -> Self {
        let c = SpiralCfg::default();
        Self {
            r1: c.r1,
            r2: c.r2,
            turns: c.turns,
            density_start: c.density_start,
            density_end: c.density_end,
            direction: c.direction,
        }
    }
}

impl From<&SpiralSection> for SpiralCfg {
    fn from(s: &SpiralSection) -> Self {
        SpiralCfg::new(s.r1, s.r2, s.turns, s.density_start, s.density_end)
            .with_direction(s.direction)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineKind {
    #[default]
    Bspline,
    CatmullRom,
    Linear,
}

impl From<SplineKind> for SplineType {
    fn from(k: SplineKind) -> Self {
        match k {
            SplineKind::Bspline => SplineType::BSpline,
            SplineKind::CatmullRom => SplineType::CatmullRom,
            SplineKind::Linear => SplineType::Linear,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RibbonSection {
    pub wire: bool,
    pub path: bool,
    pub sample_size: f64,
    pub sampling_tolerance: f64,
    pub spline: SplineKind,
}

impl Default for RibbonSection {
    fn default() -> Self {
        let c = RibbonCfg::default();
        Self {
            wire: c.wire_enabled,
            path: c.path_enabled,
            sample_size: c.sample_size,
            sampling_tolerance: c.sampling_tolerance,
            spline: SplineKind::default(),
        }
    }
}

impl From<&RibbonSection> for RibbonCfg {
    fn from(s: &RibbonSection) -> Self {
        RibbonCfg {
            wire_enabled: s.wire,
            path_enabled: s.path,
            sample_size: s.sample_size,
            sampling_tolerance: s.sampling_tolerance,
            ..RibbonCfg::default()
        }
    }
}

/// Perlin fBm terrain parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerrainSection {
    pub seed: u32,
    /// Base frequency in cycles per world unit.
    pub frequency: f64,
    pub octaves: u32,
}

impl Default for TerrainSection {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.35,
            octaves: 4,
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
    }
}
