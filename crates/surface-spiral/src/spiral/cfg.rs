//! Spiral configuration and its validation.
//!
//! Validation runs before the generation loop so that division by zero and
//! non-terminating density progressions are reported instead of looped on.

use std::f64::consts::{PI, TAU};

use crate::error::{Result, SpiralError};

/// Hard cap on the number of points one `generate` call may emit.
pub const MAX_POINTS: usize = 10_000_000;

/// Immutable input of the spiral generator.
///
/// - `r1`, `r2`: inner and outer radius (`r2 < r1` winds inward).
/// - `turns`: number of full revolutions.
/// - `density_start`, `density_end`: cursor increment at the first and last
///   angular position; varies linearly in angle between the two.
/// - `direction`: multiplicative factor on the angular parameter. Its sign
///   selects the winding orientation; its magnitude scales the winding rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralCfg {
    pub r1: f64,
    pub r2: f64,
    pub turns: f64,
    pub density_start: f64,
    pub density_end: f64,
    pub direction: f64,
}

impl Default for SpiralCfg {
    fn default() -> Self {
        Self {
            r1: 1.0,
            r2: 5.0,
            turns: 3.0,
            density_start: 0.1,
            density_end: 0.1,
            direction: 1.0,
        }
    }
}

impl SpiralCfg {
    /// Counter-clockwise configuration (`direction = 1`).
    pub fn new(r1: f64, r2: f64, turns: f64, density_start: f64, density_end: f64) -> Self {
        Self {
            r1,
            r2,
            turns,
            density_start,
            density_end,
            direction: 1.0,
        }
    }

    #[inline]
    pub fn with_direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    /// Total angular extent `l = 2π·turns`.
    #[inline]
    pub fn angular_extent(&self) -> f64 {
        TAU * self.turns
    }

    /// Stopping threshold `L = π·turns·(r1 + r2)` for the density cursor.
    #[inline]
    pub fn density_budget(&self) -> f64 {
        PI * self.turns * (self.r1 + self.r2)
    }

    /// Upper bound on the emitted point count.
    ///
    /// The cursor increment is linear in the angular progress `d ∈ [0, l]`, so it
    /// never drops below `min(density_start, density_end)`.
    pub fn point_bound(&self) -> f64 {
        let min_step = self.density_start.min(self.density_end);
        (self.density_budget() / min_step).ceil() + 1.0
    }

    pub fn validate(&self) -> Result<()> {
        positive_finite("r1", self.r1)?;
        positive_finite("r2", self.r2)?;
        if (self.r2 - self.r1).abs() <= f64::EPSILON * self.r1.max(self.r2) {
            return Err(SpiralError::invalid(
                "r2",
                self.r2,
                "outer radius must differ from inner radius",
            ));
        }
        positive_finite("turns", self.turns)?;
        // r² and the cursor span 2·dr·L = r2² − r1² must stay representable.
        let l = self.angular_extent();
        let dr = (self.r2 - self.r1) / l;
        let span = 2.0 * dr * self.density_budget();
        for (field, value, sq) in [
            ("r1", self.r1, self.r1 * self.r1),
            ("r2", self.r2, self.r2 * self.r2),
            ("turns", self.turns, span),
        ] {
            if !sq.is_finite() {
                return Err(SpiralError::invalid(
                    field,
                    value,
                    "radius or extent too large, r² overflows",
                ));
            }
        }
        // A non-positive increment anywhere along the spiral stalls the cursor.
        positive_finite("density_start", self.density_start)?;
        positive_finite("density_end", self.density_end)?;
        if !self.direction.is_finite() {
            return Err(SpiralError::invalid(
                "direction",
                self.direction,
                "must be finite",
            ));
        }
        let bound = self.point_bound();
        if !(bound <= MAX_POINTS as f64) {
            return Err(SpiralError::invalid(
                "density_start",
                self.density_start,
                "density too fine, point count exceeds MAX_POINTS",
            ));
        }
        Ok(())
    }
}

#[inline]
fn positive_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SpiralError::invalid(field, value, "must be finite and > 0"))
    }
}
