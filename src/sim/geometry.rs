//! Rotated rectangle geometry
//!
//! Rectangles are described by a center, half extents and an angle in degrees.
//! Rotation uses the standard counter-clockwise matrix:
//! - x' = x·cos(θ) - y·sin(θ)
//! - y' = x·sin(θ) + y·cos(θ)

use glam::{DVec2, IVec2, Vec2};

use crate::error::SimError;

/// Corners of a rectangle rotated about its center.
///
/// Unrotated order is (-hw, hh), (hw, hh), (hw, -hh), (-hw, -hh).
pub fn rectangle_vertices(
    center: Vec2,
    half_width: f32,
    half_height: f32,
    angle_degrees: f32,
) -> [Vec2; 4] {
    let rotation = Vec2::from_angle(angle_degrees.to_radians());
    unrotated_corners(half_width, half_height).map(|p| center + rotation.rotate(p))
}

#[inline]
fn unrotated_corners(half_width: f32, half_height: f32) -> [Vec2; 4] {
    [
        Vec2::new(-half_width, half_height),
        Vec2::new(half_width, half_height),
        Vec2::new(half_width, -half_height),
        Vec2::new(-half_width, -half_height),
    ]
}

/// Minimum-area bounding rectangle of a point set, in integer pixels.
///
/// Points are snapped to the pixel grid first. Every edge direction between
/// two distinct points is tried; the hull edges are among them, so the
/// smallest box found is the minimum-area one. Returns `None` when the
/// result has zero area.
pub fn minimal_bounding_box(points: &[Vec2]) -> Option<[IVec2; 4]> {
    let snapped: Vec<Vec2> = points.iter().map(|p| p.round()).collect();

    let mut best: Option<(f32, [Vec2; 4])> = None;
    for (i, a) in snapped.iter().enumerate() {
        for b in &snapped[i + 1..] {
            let edge = *b - *a;
            if edge == Vec2::ZERO {
                continue;
            }
            let u = edge.normalize();
            let v = u.perp();

            let (mut u_min, mut u_max) = (f32::INFINITY, f32::NEG_INFINITY);
            let (mut v_min, mut v_max) = (f32::INFINITY, f32::NEG_INFINITY);
            for p in &snapped {
                let (pu, pv) = (p.dot(u), p.dot(v));
                u_min = u_min.min(pu);
                u_max = u_max.max(pu);
                v_min = v_min.min(pv);
                v_max = v_max.max(pv);
            }

            let area = (u_max - u_min) * (v_max - v_min);
            if best.as_ref().is_none_or(|(best_area, _)| area < *best_area) {
                best = Some((
                    area,
                    [
                        u * u_min + v * v_min,
                        u * u_max + v * v_min,
                        u * u_max + v * v_max,
                        u * u_min + v * v_max,
                    ],
                ));
            }
        }
    }

    let corners = best?.1.map(|c| c.round().as_ivec2());
    (polygon_area2(&corners) != 0).then_some(corners)
}

/// Twice the signed area of a polygon (shoelace), exact on integer corners
pub fn polygon_area2(corners: &[IVec2]) -> i64 {
    let n = corners.len();
    (0..n)
        .map(|i| {
            let a = corners[i].as_i64vec2();
            let b = corners[(i + 1) % n].as_i64vec2();
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Drawable box for a rotated rectangle.
///
/// Falls back to rounding vertices rotated in double precision if the
/// bounding box collapses; fails if that collapses too.
pub fn rectangle_box(
    center: Vec2,
    half_width: f32,
    half_height: f32,
    angle_degrees: f32,
) -> Result<[IVec2; 4], SimError> {
    let vertices = rectangle_vertices(center, half_width, half_height, angle_degrees);
    if let Some(corners) = minimal_bounding_box(&vertices) {
        return Ok(corners);
    }

    let rotation = DVec2::from_angle((angle_degrees as f64).to_radians());
    let exact = unrotated_corners(half_width, half_height)
        .map(|p| (center.as_dvec2() + rotation.rotate(p.as_dvec2())).round().as_ivec2());
    if polygon_area2(&exact) != 0 {
        log::warn!(
            "Recovered degenerate box at ({:.1}, {:.1}) angle {angle_degrees}",
            center.x,
            center.y
        );
        return Ok(exact);
    }

    Err(SimError::DegenerateGeometry {
        center,
        angle_degrees,
    })
}
