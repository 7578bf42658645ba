//! Raster buffers used while composing an icon.

use crate::color::Color;

/// A 2D RGBA buffer.
#[derive(Debug, Clone)]
pub struct TextureBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Color>,
}

impl TextureBuffer {
    /// Create a new texture buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent buffer.
    pub fn new_transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::transparent())
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = color;
    }

    /// Get a pixel, or transparent outside the buffer.
    #[inline]
    pub fn get_or_transparent(&self, x: i64, y: i64) -> Color {
        if self.contains(x, y) {
            self.get(x as u32, y as u32)
        } else {
            Color::transparent()
        }
    }

    /// True when signed coordinates fall inside the buffer.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Composite `color` over the pixel at signed coordinates; no-op when
    /// the pixel is outside the buffer.
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if !self.contains(x, y) {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let existing = self.get(x, y);
        self.set(x, y, color.over(&existing));
    }

    /// Scale the alpha channel of every pixel.
    pub fn multiply_alpha(&mut self, factor: f64) {
        for c in &mut self.data {
            c.a = (c.a * factor).clamp(0.0, 1.0);
        }
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

/// Grayscale buffer (single channel), used for blend masks.
#[derive(Debug, Clone)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = (y * self.width + x) as usize;
        self.data[idx] = value;
    }
}
