//! Density-adaptive spiral generation.
//!
//! Purpose
//! - Produce an ordered 2D point sequence tracing a spiral from `r1` to `r2`
//!   whose point spacing follows an integrated "ink density" rather than a
//!   uniform angle or arc-length step.
//!
//! Model
//! - A scalar cursor `D` accumulates density. The radius is recovered in closed
//!   form from `D` (inverse of a linearly-varying-radius spiral), the angle from
//!   the radius, and the cursor increment from the angle.
//! - Generation stops once `D >= L = π·turns·(r1 + r2)`.
//!
//! Code cross-refs: `SpiralCfg`, `generate`, `rand::draw_spiral_cfg`.

mod cfg;
mod generate;
pub mod rand;

pub use cfg::{SpiralCfg, MAX_POINTS};
pub use generate::generate;

#[cfg(test)]
mod tests;
