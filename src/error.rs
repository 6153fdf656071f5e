//! Failure conditions raised by the simulation

use glam::Vec2;
use std::{error::Error, fmt};

/// A configuration rejected at field construction time
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidFrameSize { width: u32, height: u32 },
    InvalidRadius(f32),
    InvalidExtents { half_width: f32, half_height: f32 },
    InvalidCharacteristicRadius(f32),
    InvalidSpeed(f32),
    NonFiniteDirection,
    NonFiniteRotation,
    ZeroPlacementAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFrameSize { width, height } => {
                write!(f, "frame size must be non-zero (got {width}x{height})")
            }
            ConfigError::InvalidRadius(r) => {
                write!(f, "circle radius must be positive and finite (got {r})")
            }
            ConfigError::InvalidExtents {
                half_width,
                half_height,
            } => write!(
                f,
                "rectangle half extents must be positive and finite (got {half_width}x{half_height})"
            ),
            ConfigError::InvalidCharacteristicRadius(r) => {
                write!(f, "characteristic radius must be positive and finite (got {r})")
            }
            ConfigError::InvalidSpeed(s) => {
                write!(f, "speed must be non-negative and finite (got {s})")
            }
            ConfigError::NonFiniteDirection => write!(f, "direction must be finite"),
            ConfigError::NonFiniteRotation => write!(f, "rotation rate must be finite"),
            ConfigError::ZeroPlacementAttempts => {
                write!(f, "max_placement_attempts must be at least 1")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors produced while building or stepping a field
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    InvalidConfiguration(ConfigError),
    /// No non-overlapping position was found within the retry ceiling
    PlacementInfeasible {
        /// Shapes the new position had to avoid
        placed: usize,
        characteristic_radius: f32,
        min_separation: f32,
        edge_margin: f32,
        width: u32,
        height: u32,
        attempts: u32,
    },
    /// A rotated rectangle collapsed to a zero-area box
    DegenerateGeometry { center: Vec2, angle_degrees: f32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            SimError::PlacementInfeasible {
                placed,
                characteristic_radius,
                min_separation,
                edge_margin,
                width,
                height,
                attempts,
            } => write!(
                f,
                "no valid position after {attempts} attempts: {placed} shapes of radius \
                 {characteristic_radius} need separation {min_separation} and edge margin \
                 {edge_margin} in a {width}x{height} frame"
            ),
            SimError::DegenerateGeometry {
                center,
                angle_degrees,
            } => write!(
                f,
                "rectangle at ({}, {}) rotated {angle_degrees}° has a zero-area bounding box",
                center.x, center.y
            ),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::InvalidConfiguration(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::InvalidConfiguration(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_message_names_constraints() {
        let err = SimError::PlacementInfeasible {
            placed: 12,
            characteristic_radius: 17.0,
            min_separation: 38.0,
            edge_margin: 51.0,
            width: 100,
            height: 100,
            attempts: 500,
        };
        let msg = err.to_string();
        assert!(msg.contains("500 attempts"));
        assert!(msg.contains("separation 38"));
        assert!(msg.contains("edge margin 51"));
        assert!(msg.contains("100x100"));
    }

    #[test]
    fn test_config_error_is_source() {
        let err: SimError = ConfigError::InvalidSpeed(-1.0).into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("speed"));
    }
}
