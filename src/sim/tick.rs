//! Per-frame simulation step
//!
//! For each shape, in field order:
//! 1. Count down the lifetime and respawn when it runs out
//! 2. Spin rectangles and build this frame's primitive
//! 3. Move the shape for the next frame
//!
//! Drawing happens before moving, so the emitted position always lags the
//! lifetime and rotation updates by one frame.

use super::geometry::rectangle_box;
use super::kinematics::advance;
use super::placement::{PositionSource, sample_valid_position};
use super::state::{Field, Primitive, ShapeKind};
use crate::error::SimError;

impl<S: PositionSource> Field<S> {
    /// Count down one shape's lifetime, respawning it when it expires.
    ///
    /// The new position avoids every other shape's current center; the
    /// shape's own stale center is not considered. Returns whether a
    /// respawn happened.
    pub fn tick_lifetime(&mut self, index: usize) -> Result<bool, SimError> {
        self.shapes[index].lifetime_remaining -= 1;
        if self.shapes[index].lifetime_remaining > 0 {
            return Ok(false);
        }

        let others = self.other_centers(index);
        let center = sample_valid_position(
            &others,
            &self.rules,
            &mut self.source,
            self.config.max_placement_attempts,
        )?;

        let period = self.config.lifetime_period();
        let shape = &mut self.shapes[index];
        log::debug!(
            "Frame {}: shape {index} respawned ({:.1}, {:.1}) -> ({}, {})",
            self.frame_index,
            shape.center.x,
            shape.center.y,
            center.x,
            center.y
        );
        shape.center = center;
        shape.lifetime_remaining = period;
        self.respawns += 1;
        Ok(true)
    }

    /// Advance every shape one frame and return what to draw.
    pub fn step(&mut self) -> Result<Vec<Primitive>, SimError> {
        let mut primitives = Vec::with_capacity(self.shapes.len());
        self.step_into(&mut primitives)?;
        Ok(primitives)
    }

    /// Like `step`, reusing `out` (cleared first)
    pub fn step_into(&mut self, out: &mut Vec<Primitive>) -> Result<(), SimError> {
        out.clear();
        let (direction, speed) = (self.config.direction_degrees, self.config.speed);
        let (width, height) = (self.config.width, self.config.height);

        for index in 0..self.shapes.len() {
            self.tick_lifetime(index)?;

            let shape = &mut self.shapes[index];
            shape.kind.rotate(shape.rotation_rate);
            let primitive = match shape.kind {
                ShapeKind::Circle { radius } => Primitive::Circle {
                    center: shape.center,
                    radius,
                },
                ShapeKind::Rectangle {
                    half_width,
                    half_height,
                    angle_degrees,
                } => Primitive::Polygon {
                    corners: rectangle_box(shape.center, half_width, half_height, angle_degrees)?,
                },
            };
            out.push(primitive);

            shape.center = advance(shape.center, direction, speed, width, height);
        }

        self.frame_index += 1;
        Ok(())
    }

    /// Step `frames` times, collecting every frame
    pub fn run(&mut self, frames: u32) -> Result<Vec<Vec<Primitive>>, SimError> {
        (0..frames).map(|_| self.step()).collect()
    }
}
