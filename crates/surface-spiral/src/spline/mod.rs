//! Adaptive spline collaborator.
//!
//! The ribbon builder only needs four operations from a spline: set the
//! sampling tolerance, clear, append control points in order, and read back an
//! ordered polyline. `AdaptiveSpline` captures that contract; `SplinePath` is
//! the implementation used by default.
//!
//! Conventions
//! - Smaller tolerance ⇒ more polyline points, closer to the exact curve.
//! - The polyline is cached until the next `clear` / `add` / tolerance change.
//! - Fewer than two control points yield the control points unchanged.

mod basis;
mod sampler;

use nalgebra::Vector3;

use crate::error::{Result, SpiralError};

pub use basis::SplineType;

/// Default sampling tolerance (maximum chord deviation, in world units).
pub const DEFAULT_SAMPLING_TOLERANCE: f64 = 0.05;

pub trait AdaptiveSpline {
    /// Errors: `InvalidConfiguration` if `tolerance` is not finite and > 0; the
    /// previous tolerance is kept.
    fn set_sampling_tolerance(&mut self, tolerance: f64) -> Result<()>;
    fn sampling_tolerance(&self) -> f64;
    fn clear(&mut self);
    fn add(&mut self, p: Vector3<f64>);
    /// Ordered, resampled polyline through the current control points.
    fn polyline(&mut self) -> Result<&[Vector3<f64>]>;
}

/// Open spline through ordered 3D control points with adaptive resampling.
#[derive(Clone, Debug)]
pub struct SplinePath {
    kind: SplineType,
    tolerance: f64,
    control: Vec<Vector3<f64>>,
    polyline: Vec<Vector3<f64>>,
    dirty: bool,
}

impl Default for SplinePath {
    fn default() -> Self {
        Self::new(SplineType::default())
    }
}

impl SplinePath {
    pub fn new(kind: SplineType) -> Self {
        Self {
            kind,
            tolerance: DEFAULT_SAMPLING_TOLERANCE,
            control: Vec::new(),
            polyline: Vec::new(),
            dirty: true,
        }
    }

    #[inline]
    pub fn kind(&self) -> SplineType {
        self.kind
    }

    pub fn set_kind(&mut self, kind: SplineType) {
        if kind != self.kind {
            self.kind = kind;
            self.dirty = true;
        }
    }

    #[inline]
    pub fn control_points(&self) -> &[Vector3<f64>] {
        &self.control
    }

    fn rebuild(&mut self) -> Result<()> {
        if let Some(i) = self
            .control
            .iter()
            .position(|p| !p.iter().all(|c| c.is_finite()))
        {
            return Err(SpiralError::Spline(format!(
                "non-finite control point at index {i}"
            )));
        }
        if self.control.len() < 2 {
            self.polyline.clear();
            self.polyline.extend_from_slice(&self.control);
        } else {
            let spans = basis::Spans::new(self.kind, &self.control);
            sampler::sample_spans(&spans, self.tolerance, &mut self.polyline);
        }
        self.dirty = false;
        Ok(())
    }
}

impl AdaptiveSpline for SplinePath {
    fn set_sampling_tolerance(&mut self, tolerance: f64) -> Result<()> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(SpiralError::invalid(
                "sampling_tolerance",
                tolerance,
                "must be finite and > 0",
            ));
        }
        if tolerance != self.tolerance {
            self.tolerance = tolerance;
            self.dirty = true;
        }
        Ok(())
    }

    #[inline]
    fn sampling_tolerance(&self) -> f64 {
        self.tolerance
    }

    fn clear(&mut self) {
        self.control.clear();
        self.polyline.clear();
        self.dirty = true;
    }

    #[inline]
    fn add(&mut self, p: Vector3<f64>) {
        self.control.push(p);
        self.dirty = true;
    }

    fn polyline(&mut self) -> Result<&[Vector3<f64>]> {
        if self.dirty {
            self.rebuild()?;
        }
        Ok(&self.polyline)
    }
}

#[cfg(test)]
mod tests;
