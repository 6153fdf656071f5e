//! Run configuration
//!
//! Everything here is fixed for the duration of one generated video.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_PLACEMENT_ATTEMPTS, DISABLED_LIFETIME};
use crate::error::ConfigError;

/// Shape drawn for every member of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Circle { radius: f32 },
    Rectangle { half_width: f32, half_height: f32 },
}

impl Default for ShapeSpec {
    fn default() -> Self {
        ShapeSpec::Circle { radius: 17.0 }
    }
}

impl ShapeSpec {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeSpec::Circle { .. } => "circle",
            ShapeSpec::Rectangle { .. } => "rectangle",
        }
    }
}

/// Field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Number of shapes (fixed for the run)
    pub shape_count: usize,
    pub shape: ShapeSpec,
    /// Radius used for separation and edge margin; derived from `shape` when unset
    pub characteristic_radius: Option<f32>,

    // === Motion ===
    /// Heading in degrees, 0 = up, clockwise
    pub direction_degrees: f32,
    /// Pixels per frame
    pub speed: f32,
    /// Rectangle spin in degrees per frame (sign is direction)
    pub rotation_rate: f32,

    // === Blinking ===
    /// Frames between respawns (0 = never respawn)
    pub lifetime: u32,

    // === Run ===
    pub frame_count: u32,
    /// Retry ceiling for a single placement
    pub max_placement_attempts: u32,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1600,
            shape_count: 16,
            shape: ShapeSpec::default(),
            characteristic_radius: None,

            direction_degrees: 0.0,
            speed: 6.0,
            rotation_rate: 0.0,

            lifetime: 0,

            // 77 fps for 2.3 seconds
            frame_count: 177,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            seed: 0,
        }
    }
}

impl FieldConfig {
    /// 20 rotating 42x22 bars on the default frame
    pub fn rectangles(rotation_rate: f32) -> Self {
        Self {
            shape_count: 20,
            shape: ShapeSpec::Rectangle {
                half_width: 21.0,
                half_height: 11.0,
            },
            rotation_rate,
            ..Self::default()
        }
    }

    /// Radius governing separation and edge margins
    pub fn effective_radius(&self) -> f32 {
        self.characteristic_radius.unwrap_or(match self.shape {
            ShapeSpec::Circle { radius } => radius,
            ShapeSpec::Rectangle {
                half_width,
                half_height,
            } => half_width.max(half_height),
        })
    }

    /// Lifetime a shape is reset to after respawning
    pub fn lifetime_period(&self) -> i64 {
        if self.lifetime == 0 {
            DISABLED_LIFETIME
        } else {
            self.lifetime as i64
        }
    }

    /// Spin applied per frame (circles never rotate)
    pub fn effective_rotation_rate(&self) -> f32 {
        match self.shape {
            ShapeSpec::Circle { .. } => 0.0,
            ShapeSpec::Rectangle { .. } => self.rotation_rate,
        }
    }

    /// Reject configurations the simulation cannot run.
    ///
    /// A shape count of zero is accepted and yields empty frames.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidFrameSize {
                width: self.width,
                height: self.height,
            });
        }
        match self.shape {
            ShapeSpec::Circle { radius } => {
                if !(radius.is_finite() && radius > 0.0) {
                    return Err(ConfigError::InvalidRadius(radius));
                }
            }
            ShapeSpec::Rectangle {
                half_width,
                half_height,
            } => {
                let ok = |v: f32| v.is_finite() && v > 0.0;
                if !(ok(half_width) && ok(half_height)) {
                    return Err(ConfigError::InvalidExtents {
                        half_width,
                        half_height,
                    });
                }
            }
        }
        if let Some(r) = self.characteristic_radius.filter(|r| !(r.is_finite() && *r > 0.0)) {
            return Err(ConfigError::InvalidCharacteristicRadius(r));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.direction_degrees.is_finite() {
            return Err(ConfigError::NonFiniteDirection);
        }
        if !self.rotation_rate.is_finite() {
            return Err(ConfigError::NonFiniteRotation);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        Ok(())
    }

    /// Parse a configuration from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded field config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
        assert_eq!(FieldConfig::rectangles(-8.0).validate(), Ok(()));
    }

    #[test]
    fn test_effective_radius() {
        let circles = FieldConfig::default();
        assert_eq!(circles.effective_radius(), 17.0);

        let rects = FieldConfig::rectangles(4.0);
        assert_eq!(rects.effective_radius(), 21.0);

        let overridden = FieldConfig {
            characteristic_radius: Some(42.0),
            ..FieldConfig::rectangles(4.0)
        };
        assert_eq!(overridden.effective_radius(), 42.0);
    }

    #[test]
    fn test_lifetime_zero_disables() {
        let config = FieldConfig::default();
        assert_eq!(config.lifetime_period(), DISABLED_LIFETIME);
        let blinking = FieldConfig {
            lifetime: 5,
            ..FieldConfig::default()
        };
        assert_eq!(blinking.lifetime_period(), 5);
    }

    #[test]
    fn test_circles_ignore_rotation() {
        let config = FieldConfig {
            rotation_rate: 16.0,
            ..FieldConfig::default()
        };
        assert_eq!(config.effective_rotation_rate(), 0.0);
        assert_eq!(FieldConfig::rectangles(-16.0).effective_rotation_rate(), -16.0);
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let bad_size = FieldConfig {
            width: 0,
            ..FieldConfig::default()
        };
        assert!(matches!(
            bad_size.validate(),
            Err(ConfigError::InvalidFrameSize { width: 0, .. })
        ));

        let bad_speed = FieldConfig {
            speed: -3.0,
            ..FieldConfig::default()
        };
        assert_eq!(bad_speed.validate(), Err(ConfigError::InvalidSpeed(-3.0)));

        let bad_radius = FieldConfig {
            shape: ShapeSpec::Circle { radius: 0.0 },
            ..FieldConfig::default()
        };
        assert_eq!(bad_radius.validate(), Err(ConfigError::InvalidRadius(0.0)));

        let bad_dir = FieldConfig {
            direction_degrees: f32::NAN,
            ..FieldConfig::default()
        };
        assert_eq!(bad_dir.validate(), Err(ConfigError::NonFiniteDirection));

        let bad_attempts = FieldConfig {
            max_placement_attempts: 0,
            ..FieldConfig::default()
        };
        assert_eq!(
            bad_attempts.validate(),
            Err(ConfigError::ZeroPlacementAttempts)
        );
    }

    #[test]
    fn test_validate_accepts_documented_no_ops() {
        let empty = FieldConfig {
            shape_count: 0,
            ..FieldConfig::default()
        };
        assert_eq!(empty.validate(), Ok(()));

        let wide_direction = FieldConfig {
            direction_degrees: 725.0,
            ..FieldConfig::default()
        };
        assert_eq!(wide_direction.validate(), Ok(()));
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = FieldConfig::from_json(
            r#"{ "width": 400, "shape": { "kind": "rectangle", "half_width": 21.0, "half_height": 11.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 1600);
        assert_eq!(config.shape.as_str(), "rectangle");

        let back = FieldConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }
}
