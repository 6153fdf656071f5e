//! Collision-avoiding placement
//!
//! Positions are drawn uniformly on the integer pixel grid and rejected until
//! one keeps its distance from every existing center and stays inside the
//! edge margin. The retry loop is bounded; running out of attempts is
//! reported as `SimError::PlacementInfeasible`.

use glam::{IVec2, Vec2};
use rand::Rng;

use crate::consts::{EDGE_MARGIN_FACTOR, SEPARATION_FACTOR};
use crate::error::SimError;

/// Random draws consumed by the field
pub trait PositionSource {
    /// Uniform integer point in [0, width) × [0, height), x drawn first
    fn draw_position(&mut self, width: u32, height: u32) -> IVec2;

    /// Uniform whole-degree angle in [0, 360)
    fn draw_angle(&mut self) -> f32;
}

impl<R: Rng + ?Sized> PositionSource for R {
    fn draw_position(&mut self, width: u32, height: u32) -> IVec2 {
        let x = self.random_range(0..width);
        let y = self.random_range(0..height);
        IVec2::new(x as i32, y as i32)
    }

    fn draw_angle(&mut self) -> f32 {
        self.random_range(0..360u32) as f32
    }
}

/// Distance and margin constraints derived from a characteristic radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRules {
    pub characteristic_radius: f32,
    /// Minimum center-to-center distance
    pub min_separation: f32,
    /// Minimum distance from a center to each frame edge
    pub edge_margin: f32,
    pub width: u32,
    pub height: u32,
}

impl PlacementRules {
    pub fn new(characteristic_radius: f32, width: u32, height: u32) -> Self {
        Self {
            characteristic_radius,
            min_separation: (characteristic_radius * SEPARATION_FACTOR).ceil(),
            edge_margin: characteristic_radius * EDGE_MARGIN_FACTOR,
            width,
            height,
        }
    }

    /// Whether a center lies inside the margin band on both axes
    #[inline]
    pub fn within_margins(&self, p: Vec2) -> bool {
        let m = self.edge_margin;
        p.x >= m && p.x <= self.width as f32 - m && p.y >= m && p.y <= self.height as f32 - m
    }

    /// Whether a center keeps the minimum separation from `other`
    #[inline]
    pub fn separated(&self, p: Vec2, other: Vec2) -> bool {
        p.distance_squared(other) >= self.min_separation * self.min_separation
    }

    /// Whether a candidate satisfies every constraint
    pub fn accepts<'a>(&self, p: Vec2, existing: impl IntoIterator<Item = &'a Vec2>) -> bool {
        self.within_margins(p) && existing.into_iter().all(|c| self.separated(p, *c))
    }

    /// Whether any integer grid point fits inside the margins
    fn band_is_empty(&self) -> bool {
        if self.width == 0 || self.height == 0 {
            return true;
        }
        let m = self.edge_margin;
        m.ceil() > (self.width as f32 - m).floor() || m.ceil() > (self.height as f32 - m).floor()
    }

    fn infeasible(&self, placed: usize, attempts: u32) -> SimError {
        SimError::PlacementInfeasible {
            placed,
            characteristic_radius: self.characteristic_radius,
            min_separation: self.min_separation,
            edge_margin: self.edge_margin,
            width: self.width,
            height: self.height,
            attempts,
        }
    }
}

/// Find a position clear of every center in `existing`.
///
/// Takes the first of at most `max_attempts` independent draws that passes.
pub fn sample_valid_position<S: PositionSource + ?Sized>(
    existing: &[Vec2],
    rules: &PlacementRules,
    source: &mut S,
    max_attempts: u32,
) -> Result<Vec2, SimError> {
    if rules.band_is_empty() {
        return Err(rules.infeasible(existing.len(), 0));
    }

    let found = (1..=max_attempts)
        .map(|attempt| {
            let p = source.draw_position(rules.width, rules.height).as_vec2();
            (attempt, p)
        })
        .find(|(_, p)| rules.accepts(*p, existing));

    match found {
        Some((attempt, p)) => {
            log::trace!("Placed at ({}, {}) after {attempt} draws", p.x, p.y);
            Ok(p)
        }
        None => Err(rules.infeasible(existing.len(), max_attempts)),
    }
}
