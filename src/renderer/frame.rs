//! Pixel buffer handed to the encoder

use bytemuck::{Pod, Zeroable};

/// 8-bit RGB pixel, tightly packed
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stimulus colors
pub mod colors {
    use super::Rgb8;

    pub const BACKGROUND: Rgb8 = Rgb8::new(0, 0, 0);
    pub const SHAPE: Rgb8 = Rgb8::new(255, 255, 255);
}

/// Row-major RGB frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to `color`
    pub fn fill(&mut self, color: Rgb8) {
        self.pixels.fill(color);
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb8> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel; coordinates outside the frame are ignored
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgb8) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Raw RGB24 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Pixels that differ from the background
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| **p != colors::BACKGROUND)
            .count()
    }
}
