//! Error type shared by the generator, the spline and the ribbon builder.
//!
//! Degenerate input (fewer than two samples reaching the framing stage) is not
//! an error; it is reported through `ribbon::RibbonOutcome::Degenerate`.

/// Failures surfaced by `generate`, `update` and the validating setters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpiralError {
    /// A configuration value that would divide by zero, never terminate, or
    /// produce a meaningless result.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The height field returned NaN or an infinity.
    #[error("height field returned non-finite value {value} at ({x}, {y})")]
    NonFiniteHeight { x: f64, y: f64, value: f64 },

    /// The spline collaborator could not produce a polyline.
    #[error("spline sampling failed: {0}")]
    Spline(String),
}

impl SpiralError {
    #[inline]
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        SpiralError::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }

    /// True for the configuration class of errors (detected before any work starts).
    #[inline]
    pub fn is_configuration(&self) -> bool {
        matches!(self, SpiralError::InvalidConfiguration { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpiralError>;
