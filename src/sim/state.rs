//! Field state and core simulation types
//!
//! Shapes are created once per run and mutated in place; a respawn only moves
//! a shape and resets its lifetime.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::placement::{PlacementRules, PositionSource, sample_valid_position};
use crate::config::{FieldConfig, ShapeSpec};
use crate::error::SimError;
use crate::normalize_degrees;

/// Shape variant and its extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle {
        radius: f32,
    },
    Rectangle {
        half_width: f32,
        half_height: f32,
        /// Current angle, always in [0, 360)
        angle_degrees: f32,
    },
}

impl ShapeKind {
    /// Advance a rectangle's angle by `rate` degrees; circles are unchanged
    pub fn rotate(&mut self, rate: f32) {
        if let ShapeKind::Rectangle { angle_degrees, .. } = self {
            *angle_degrees = normalize_degrees(*angle_degrees + rate);
        }
    }
}

/// A single moving shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub center: Vec2,
    pub kind: ShapeKind,
    /// Frames until the next forced respawn
    pub lifetime_remaining: i64,
    /// Degrees per frame (0 for circles, sign is direction)
    pub rotation_rate: f32,
}

/// What the renderer draws for one shape in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Circle { center: Vec2, radius: f32 },
    /// Closed quadrilateral in integer pixel coordinates
    Polygon { corners: [IVec2; 4] },
}

/// A field of shapes driven by a random source
#[derive(Debug, Clone)]
pub struct Field<S: PositionSource = Pcg32> {
    pub(crate) config: FieldConfig,
    pub(crate) rules: PlacementRules,
    /// Stable iteration order for the whole run
    pub(crate) shapes: Vec<Shape>,
    pub(crate) source: S,
    pub(crate) frame_index: u64,
    pub(crate) respawns: u64,
}

impl Field<Pcg32> {
    /// Build a field seeded from `config.seed`
    pub fn from_config(config: FieldConfig) -> Result<Self, SimError> {
        let source = Pcg32::seed_from_u64(config.seed);
        Self::with_source(config, source)
    }
}

impl<S: PositionSource> Field<S> {
    /// Build a field drawing positions and angles from `source`.
    ///
    /// Each shape is placed against all shapes placed before it. Rectangle
    /// angles are drawn after every position is fixed.
    pub fn with_source(config: FieldConfig, mut source: S) -> Result<Self, SimError> {
        config.validate()?;
        let rules = PlacementRules::new(config.effective_radius(), config.width, config.height);

        let mut centers: Vec<Vec2> = Vec::with_capacity(config.shape_count);
        for _ in 0..config.shape_count {
            let p = sample_valid_position(
                &centers,
                &rules,
                &mut source,
                config.max_placement_attempts,
            )?;
            centers.push(p);
        }

        let lifetime = config.lifetime_period();
        let rotation_rate = config.effective_rotation_rate();
        let shapes = centers
            .into_iter()
            .map(|center| {
                let kind = match config.shape {
                    ShapeSpec::Circle { radius } => ShapeKind::Circle { radius },
                    ShapeSpec::Rectangle {
                        half_width,
                        half_height,
                    } => ShapeKind::Rectangle {
                        half_width,
                        half_height,
                        angle_degrees: normalize_degrees(source.draw_angle()),
                    },
                };
                Shape {
                    center,
                    kind,
                    lifetime_remaining: lifetime,
                    rotation_rate,
                }
            })
            .collect::<Vec<_>>();

        log::info!(
            "Field created: {} {}s in {}x{}, separation {}, margin {}",
            shapes.len(),
            config.shape.as_str(),
            config.width,
            config.height,
            rules.min_separation,
            rules.edge_margin
        );

        Ok(Self {
            config,
            rules,
            shapes,
            source,
            frame_index: 0,
            respawns: 0,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Mutable access for scripted scenarios (tests, replays)
    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    /// Completed calls to `step`
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Total respawns so far
    pub fn respawn_count(&self) -> u64 {
        self.respawns
    }

    /// Centers of every shape except the one at `skip`
    pub(crate) fn other_centers(&self, skip: usize) -> Vec<Vec2> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, s)| s.center)
            .collect()
    }
}
