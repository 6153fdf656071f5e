//! CPU rasterizer producing white-on-black stimulus frames

use glam::{I64Vec2, IVec2, Vec2};

use super::FrameRenderer;
use super::frame::{Frame, Rgb8, colors};
use crate::sim::Primitive;

/// Signed distance to a circle
#[inline]
pub fn sd_circle(p: Vec2, center: Vec2, radius: f32) -> f32 {
    (p - center).length() - radius
}

/// Fills primitives with a solid color on a cleared background.
///
/// A pixel is covered when its integer coordinate lies inside the shape,
/// edges included.
#[derive(Debug, Clone)]
pub struct MaskRenderer {
    frame: Frame,
    background: Rgb8,
    fill: Rgb8,
}

impl MaskRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: Frame::new(width, height),
            background: colors::BACKGROUND,
            fill: colors::SHAPE,
        }
    }

    pub fn with_colors(mut self, background: Rgb8, fill: Rgb8) -> Self {
        self.background = background;
        self.fill = fill;
        self
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        let min = (center - Vec2::splat(radius)).floor().as_ivec2();
        let max = (center + Vec2::splat(radius)).ceil().as_ivec2();
        self.fill_region(min, max, |p| sd_circle(p.as_vec2(), center, radius) <= 0.0);
    }

    fn fill_polygon(&mut self, corners: &[IVec2; 4]) {
        let min = corners.iter().copied().fold(IVec2::MAX, IVec2::min);
        let max = corners.iter().copied().fold(IVec2::MIN, IVec2::max);
        let corners = (*corners).map(|c| c.as_i64vec2());
        self.fill_region(min, max, |p| inside_convex(&corners, p.as_i64vec2()));
    }

    /// Paint every in-frame pixel of the box [min, max] that passes `inside`
    fn fill_region(&mut self, min: IVec2, max: IVec2, inside: impl Fn(IVec2) -> bool) {
        let lo = min.max(IVec2::ZERO);
        let hi = max.min(IVec2::new(
            self.frame.width() as i32 - 1,
            self.frame.height() as i32 - 1,
        ));
        for y in lo.y..=hi.y {
            for x in lo.x..=hi.x {
                let p = IVec2::new(x, y);
                if inside(p) {
                    self.frame.put(x as u32, y as u32, self.fill);
                }
            }
        }
    }
}

/// Point-in-convex-polygon test, boundary inclusive, either winding
fn inside_convex(corners: &[I64Vec2], p: I64Vec2) -> bool {
    let n = corners.len();
    let (mut positive, mut negative) = (false, false);
    for i in 0..n {
        let a = corners[i];
        let b = corners[(i + 1) % n];
        let cross = (b - a).perp_dot(p - a);
        positive |= cross > 0;
        negative |= cross < 0;
        if positive && negative {
            return false;
        }
    }
    true
}

impl FrameRenderer for MaskRenderer {
    fn render(&mut self, primitives: &[Primitive]) -> &Frame {
        self.frame.fill(self.background);
        for primitive in primitives {
            match primitive {
                Primitive::Circle { center, radius } => self.fill_circle(*center, *radius),
                Primitive::Polygon { corners } => self.fill_polygon(corners),
            }
        }
        &self.frame
    }
}
