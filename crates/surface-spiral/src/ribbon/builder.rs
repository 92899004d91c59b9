use nalgebra::{Vector2, Vector3};

use super::cfg::{check_sample_size, check_sampling_tolerance, RibbonCfg};
use super::frame::{frame_ribbon, project};
use crate::buffers::{PathBuffer, PointBuffer, RibbonSample};
use crate::error::{Result, SpiralError};
use crate::spiral::{generate, SpiralCfg};
use crate::spline::{AdaptiveSpline, SplinePath};
use crate::surface::{HeightField, Projection};

/// Ribbon part of a build.
#[derive(Clone, Debug, PartialEq)]
pub enum Ribbon {
    /// `path_enabled` was false; nothing was framed.
    Disabled,
    Built(Vec<RibbonSample>),
    /// Fewer than two distinct samples reached the framing stage.
    Degenerate { points: usize },
}

/// Output of one projection + smoothing + framing pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RibbonBuild {
    /// Empty whenever fewer than two samples came out of the spline.
    pub polyline: Vec<Vector3<f64>>,
    pub ribbon: Ribbon,
}

/// Project `points` onto `field`, smooth them through `spline` and, if
/// `cfg.path_enabled`, frame every polyline sample.
///
/// Errors: `InvalidConfiguration` (bad `cfg` or projection), `NonFiniteHeight`,
/// `Spline`. Degenerate input is not an error.
pub fn build<H, S>(
    points: &[Vector2<f64>],
    field: &H,
    proj: &Projection,
    cfg: &RibbonCfg,
    spline: &mut S,
) -> Result<RibbonBuild>
where
    H: HeightField + ?Sized,
    S: AdaptiveSpline + ?Sized,
{
    cfg.validate()?;
    check_projection(proj)?;

    let lifted = project(points, field, proj)?;
    spline.set_sampling_tolerance(cfg.sampling_tolerance)?;
    spline.clear();
    for p in lifted {
        spline.add(p);
    }
    let polyline = spline.polyline()?;
    if polyline.len() < 2 {
        tracing::warn!(points = polyline.len(), "degenerate polyline, ribbon skipped");
        return Ok(RibbonBuild {
            polyline: Vec::new(),
            ribbon: Ribbon::Degenerate {
                points: polyline.len(),
            },
        });
    }
    let polyline = polyline.to_vec();

    let ribbon = if cfg.path_enabled {
        match frame_ribbon(&polyline, field, proj, cfg.sample_size, cfg.eps_length)? {
            Some(samples) => Ribbon::Built(samples),
            None => {
                tracing::warn!(
                    points = polyline.len(),
                    "no in-plane tangent defined, ribbon skipped"
                );
                Ribbon::Degenerate {
                    points: polyline.len(),
                }
            }
        }
    } else {
        Ribbon::Disabled
    };
    Ok(RibbonBuild { polyline, ribbon })
}

fn check_projection(proj: &Projection) -> Result<()> {
    if !proj.vertical_scale.is_finite() {
        return Err(SpiralError::invalid(
            "vertical_scale",
            proj.vertical_scale,
            "must be finite",
        ));
    }
    if !(proj.planar_offset.x.is_finite() && proj.planar_offset.y.is_finite()) {
        let bad = if proj.planar_offset.x.is_finite() {
            proj.planar_offset.y
        } else {
            proj.planar_offset.x
        };
        return Err(SpiralError::invalid("planar_offset", bad, "must be finite"));
    }
    Ok(())
}

/// Ribbon outcome of `SurfaceSpiral::update`, without the sample data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RibbonOutcome {
    Disabled,
    Built { samples: usize },
    Degenerate { points: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateSummary {
    pub polyline_len: usize,
    /// `None` when the wire buffer is disabled.
    pub wire_len: Option<usize>,
    pub ribbon: RibbonOutcome,
}

/// Stateful spiral-on-surface builder.
///
/// Lifecycle
/// - `setup` regenerates the raw spiral and clears every derived buffer.
/// - `update` re-projects the existing raw points; it never regenerates the
///   spiral. Disabled buffers are left as they are.
/// - A failing call leaves every buffer exactly as it was.
///
/// Not for concurrent use: `update` mutates the buffers in place.
#[derive(Clone, Debug)]
pub struct SurfaceSpiral<S = SplinePath> {
    cfg: RibbonCfg,
    direction: f64,
    spiral: Option<SpiralCfg>,
    points: Vec<Vector2<f64>>,
    polyline: Vec<Vector3<f64>>,
    spline: S,
    wire: PointBuffer,
    path: PathBuffer,
}

impl Default for SurfaceSpiral<SplinePath> {
    fn default() -> Self {
        Self::with_spline(SplinePath::default())
    }
}

impl SurfaceSpiral<SplinePath> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: AdaptiveSpline> SurfaceSpiral<S> {
    pub fn with_spline(spline: S) -> Self {
        Self {
            cfg: RibbonCfg::default(),
            direction: 1.0,
            spiral: None,
            points: Vec::new(),
            polyline: Vec::new(),
            spline,
            wire: PointBuffer::default(),
            path: PathBuffer::default(),
        }
    }

    /// Regenerate the raw spiral with the current direction.
    ///
    /// Returns the raw point count. On error nothing changes.
    pub fn setup(
        &mut self,
        r1: f64,
        r2: f64,
        turns: f64,
        density_start: f64,
        density_end: f64,
    ) -> Result<usize> {
        let spiral = SpiralCfg::new(r1, r2, turns, density_start, density_end)
            .with_direction(self.direction);
        self.setup_with(spiral)
    }

    /// Like `setup`, taking the direction from `spiral` as well.
    pub fn setup_with(&mut self, spiral: SpiralCfg) -> Result<usize> {
        let points = generate(&spiral)?;
        self.direction = spiral.direction;
        self.spiral = Some(spiral);
        self.points = points;

        self.spline.clear();
        self.polyline.clear();
        self.path.clear();
        self.wire.clear();
        if self.cfg.wire_enabled {
            self.wire.extend_capacity(self.points.len());
        }
        Ok(self.points.len())
    }

    /// Winding factor used by the next `setup`.
    pub fn set_direction(&mut self, direction: f64) -> Result<()> {
        if !direction.is_finite() {
            return Err(SpiralError::invalid("direction", direction, "must be finite"));
        }
        self.direction = direction;
        Ok(())
    }

    pub fn set_sample_size(&mut self, size: f64) -> Result<()> {
        check_sample_size(size)?;
        self.cfg.sample_size = size;
        Ok(())
    }

    pub fn set_sampling_tolerance(&mut self, tolerance: f64) -> Result<()> {
        check_sampling_tolerance(tolerance)?;
        self.cfg.sampling_tolerance = tolerance;
        Ok(())
    }

    pub fn enable_wire(&mut self, enable: bool) {
        self.cfg.wire_enabled = enable;
    }

    pub fn enable_path(&mut self, enable: bool) {
        self.cfg.path_enabled = enable;
    }

    /// Replace all knobs at once (validated).
    pub fn set_config(&mut self, cfg: RibbonCfg) -> Result<()> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(())
    }

    /// Re-project the raw spiral onto `field` and rebuild the enabled buffers.
    pub fn update<H: HeightField + ?Sized>(
        &mut self,
        field: &H,
        vertical_scale: f64,
        planar_offset: Vector2<f64>,
    ) -> Result<UpdateSummary> {
        let proj = Projection::new(vertical_scale, planar_offset);
        let built = build(&self.points, field, &proj, &self.cfg, &mut self.spline)?;

        self.polyline = built.polyline;
        let wire_len = if self.cfg.wire_enabled {
            self.wire.clear();
            self.wire.extend_capacity(self.polyline.len());
            for p in &self.polyline {
                self.wire.push(*p);
            }
            Some(self.wire.len())
        } else {
            None
        };

        let ribbon = match built.ribbon {
            Ribbon::Disabled => RibbonOutcome::Disabled,
            Ribbon::Degenerate { points } => {
                self.path.clear();
                RibbonOutcome::Degenerate { points }
            }
            Ribbon::Built(samples) => {
                self.path.clear();
                self.path.reserve(samples.len());
                self.path.begin();
                for s in &samples {
                    self.path.add(s.position, s.normal);
                }
                self.path.end();
                RibbonOutcome::Built {
                    samples: samples.len(),
                }
            }
        };

        tracing::debug!(
            raw = self.points.len(),
            polyline = self.polyline.len(),
            ?ribbon,
            "surface spiral updated"
        );
        Ok(UpdateSummary {
            polyline_len: self.polyline.len(),
            wire_len,
            ribbon,
        })
    }

    #[inline]
    pub fn config(&self) -> &RibbonCfg {
        &self.cfg
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Configuration of the last successful `setup`.
    #[inline]
    pub fn spiral(&self) -> Option<&SpiralCfg> {
        self.spiral.as_ref()
    }

    /// Raw spiral points in generation order.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Smoothed polyline of the last successful `update`.
    #[inline]
    pub fn polyline(&self) -> &[Vector3<f64>] {
        &self.polyline
    }

    #[inline]
    pub fn wire(&self) -> &PointBuffer {
        &self.wire
    }

    #[inline]
    pub fn path(&self) -> &PathBuffer {
        &self.path
    }

    #[inline]
    pub fn spline(&self) -> &S {
        &self.spline
    }
}
