//! Reference frame renderer
//!
//! Rasterizes the primitives emitted by the simulation into fixed-size RGB
//! buffers. Encoding the buffers into a video is left to the caller.

pub mod frame;
pub mod mask;

pub use frame::{Frame, Rgb8, colors};
pub use mask::{MaskRenderer, sd_circle};

use crate::sim::Primitive;

/// Turns one frame's primitives into a pixel buffer
pub trait FrameRenderer {
    /// Draw `primitives` in order onto a fresh frame and return it
    fn render(&mut self, primitives: &[Primitive]) -> &Frame;
}
