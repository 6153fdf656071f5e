//! Shape Field - moving-shape stimulus generator
//!
//! Core modules:
//! - `sim`: Deterministic shape-field simulation (placement, motion, respawn, rotation)
//! - `renderer`: Reference CPU frame renderer for the emitted primitives
//! - `config`: Run configuration
//! - `error`: Typed failure conditions

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::{FieldConfig, ShapeSpec};
pub use error::{ConfigError, SimError};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Inset a wrapped coordinate is snapped to (independent of shape size)
    pub const WRAP_INSET: f32 = 15.0;

    /// Minimum center distance is `ceil(radius * SEPARATION_FACTOR)`
    pub const SEPARATION_FACTOR: f32 = 2.2;
    /// Placement keeps centers `radius * EDGE_MARGIN_FACTOR` away from frame edges
    pub const EDGE_MARGIN_FACTOR: f32 = 3.0;

    /// Lifetime used when blinking is disabled (never reached in practice)
    pub const DISABLED_LIFETIME: i64 = i64::MAX;

    /// Default retry ceiling for the placement sampler
    pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 100_000;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Per-frame displacement for a heading in screen space.
///
/// 0° points up and angles increase clockwise (y grows downward).
#[inline]
pub fn heading_vector(direction_degrees: f32, speed: f32) -> Vec2 {
    let (dx, dy) = heading_components(direction_degrees as f64, speed as f64);
    Vec2::new(dx as f32, dy as f32)
}

/// Double precision heading components, used by the integrator
#[inline]
pub(crate) fn heading_components(direction_degrees: f64, speed: f64) -> (f64, f64) {
    let theta = direction_degrees.to_radians();
    (speed * theta.sin(), -speed * theta.cos())
}
