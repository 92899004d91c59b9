//! Builder knobs (mutable for the lifetime of a `SurfaceSpiral`).

use crate::error::{Result, SpiralError};
use crate::spline::DEFAULT_SAMPLING_TOLERANCE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonCfg {
    /// Rebuild the wire point buffer on `update`.
    pub wire_enabled: bool,
    /// Rebuild the ribbon path buffer on `update`.
    pub path_enabled: bool,
    /// Lateral distance between the two normal-estimation probes.
    pub sample_size: f64,
    /// Spline resampling tolerance.
    pub sampling_tolerance: f64,
    /// In-plane steps shorter than this do not define a tangent.
    pub eps_length: f64,
}

impl Default for RibbonCfg {
    fn default() -> Self {
        Self {
            wire_enabled: true,
            path_enabled: true,
            sample_size: 0.1,
            sampling_tolerance: DEFAULT_SAMPLING_TOLERANCE,
            eps_length: 1e-12,
        }
    }
}

impl RibbonCfg {
    pub fn validate(&self) -> Result<()> {
        check_sample_size(self.sample_size)?;
        check_sampling_tolerance(self.sampling_tolerance)?;
        if !(self.eps_length.is_finite() && self.eps_length >= 0.0) {
            return Err(SpiralError::invalid(
                "eps_length",
                self.eps_length,
                "must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// `sample_size = 0` would put both probes on the same point and leave the
/// normal undefined, so it is rejected up front.
pub(crate) fn check_sample_size(size: f64) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(SpiralError::invalid(
            "sample_size",
            size,
            "must be finite and > 0",
        ))
    }
}

pub(crate) fn check_sampling_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(SpiralError::invalid(
            "sampling_tolerance",
            tolerance,
            "must be finite and > 0",
        ))
    }
}
