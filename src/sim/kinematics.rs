//! Constant-velocity motion with wrap-around edges
//!
//! A coordinate that runs past `dimension - WRAP_INSET` teleports to
//! `WRAP_INSET`, and one that drops below `WRAP_INSET` teleports to
//! `dimension - WRAP_INSET`. The inset does not depend on shape size.

use glam::Vec2;

use crate::consts::WRAP_INSET;
use crate::heading_components;

/// Advance a center one frame along a heading, wrapping at the edges.
///
/// The step is taken in double precision and stored back as `f32`.
pub fn advance(center: Vec2, direction_degrees: f32, speed: f32, width: u32, height: u32) -> Vec2 {
    let (dx, dy) = heading_components(direction_degrees as f64, speed as f64);
    let moved = Vec2::new(
        (center.x as f64 + dx) as f32,
        (center.y as f64 + dy) as f32,
    );
    wrap(moved, width, height)
}

/// Apply the wrap teleport independently on each axis
#[inline]
pub fn wrap(p: Vec2, width: u32, height: u32) -> Vec2 {
    Vec2::new(wrap_axis(p.x, width as f32), wrap_axis(p.y, height as f32))
}

#[inline]
fn wrap_axis(v: f32, dimension: f32) -> f32 {
    let high = dimension - WRAP_INSET;
    if v > high {
        WRAP_INSET
    } else if v < WRAP_INSET {
        high
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_right_edge_teleports_to_inset() {
        // 98 + 5 = 103 is past 100 - 15
        let p = advance(Vec2::new(98.0, 50.0), 90.0, 5.0, 100, 100);
        assert_eq!(p.x, 15.0);
        assert!((p.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_left_edge_teleports_to_far_inset() {
        let p = advance(Vec2::new(18.0, 50.0), 270.0, 5.0, 100, 100);
        assert_eq!(p.x, 85.0);
    }

    #[test]
    fn test_wrap_vertical() {
        // Heading up leaves through the top
        let p = advance(Vec2::new(50.0, 16.0), 0.0, 3.0, 100, 200);
        assert_eq!(p.y, 185.0);
        // Heading down leaves through the bottom
        let p = advance(Vec2::new(50.0, 184.0), 180.0, 3.0, 100, 200);
        assert_eq!(p.y, 15.0);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(wrap(Vec2::new(85.0, 15.0), 100, 100), Vec2::new(85.0, 15.0));
        assert_eq!(wrap(Vec2::new(85.5, 14.5), 100, 100), Vec2::new(15.0, 85.0));
    }

    #[test]
    fn test_interior_motion() {
        let p = advance(Vec2::new(400.0, 400.0), 45.0, 10.0, 1600, 1600);
        let step = 10.0 / 2.0_f32.sqrt();
        assert!((p.x - (400.0 + step)).abs() < 1e-3);
        assert!((p.y - (400.0 - step)).abs() < 1e-3);
    }

    #[test]
    fn test_zero_speed_stays_put() {
        let p = advance(Vec2::new(123.0, 456.0), 210.0, 0.0, 1600, 1600);
        assert_eq!(p, Vec2::new(123.0, 456.0));
    }
}
