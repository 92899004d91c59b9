//! Height-field capability consumed by the ribbon builder.
//!
//! A height field maps a planar coordinate to a scalar height. It must be pure
//! and deterministic; the builder samples it once per spiral point and twice
//! more per ribbon sample. `Sync` is required so that sampling may fan out
//! across threads under the `parallel` feature.

use nalgebra::{Vector2, Vector3};

use crate::error::{Result, SpiralError};

pub trait HeightField: Sync {
    fn height(&self, p: Vector2<f64>) -> f64;
}

impl<F> HeightField for F
where
    F: Fn(Vector2<f64>) -> f64 + Sync,
{
    #[inline]
    fn height(&self, p: Vector2<f64>) -> f64 {
        self(p)
    }
}

/// Constant height everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlatSurface(pub f64);

impl HeightField for FlatSurface {
    #[inline]
    fn height(&self, _p: Vector2<f64>) -> f64 {
        self.0
    }
}

/// Affine height `base + gradient · p`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltedPlane {
    pub gradient: Vector2<f64>,
    pub base: f64,
}

impl HeightField for TiltedPlane {
    #[inline]
    fn height(&self, p: Vector2<f64>) -> f64 {
        self.base + self.gradient.dot(&p)
    }
}

/// Vertical scale and planar offset applied to every height-field query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub vertical_scale: f64,
    pub planar_offset: Vector2<f64>,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            vertical_scale: 1.0,
            planar_offset: Vector2::zeros(),
        }
    }
}

impl Projection {
    pub fn new(vertical_scale: f64, planar_offset: Vector2<f64>) -> Self {
        Self {
            vertical_scale,
            planar_offset,
        }
    }

    /// `(p.x, p.y, vertical_scale · field(p + planar_offset))`.
    ///
    /// A non-finite height is reported as `NonFiniteHeight` at the queried
    /// (offset) coordinate.
    #[inline]
    pub fn lift<H: HeightField + ?Sized>(&self, field: &H, p: Vector2<f64>) -> Result<Vector3<f64>> {
        let q = p + self.planar_offset;
        let h = field.height(q);
        let z = self.vertical_scale * h;
        if !z.is_finite() {
            return Err(SpiralError::NonFiniteHeight {
                x: q.x,
                y: q.y,
                value: h,
            });
        }
        Ok(Vector3::new(p.x, p.y, z))
    }
}
