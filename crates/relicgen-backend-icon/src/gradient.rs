//! Diagonal two-color background gradient.
//!
//! Distance is measured along a direction vector from the bottom-left corner
//! and normalized so the far corner is 1.0. The blend happens inside a
//! narrow band; outside it the background is one flat color or the other.

use crate::buffer::{GrayscaleBuffer, TextureBuffer};
use crate::color::Color;

/// Direction of the gradient in degrees, counter-clockwise from +x.
pub const DEFAULT_ANGLE_DEG: f64 = 30.0;

/// Normalized distance where the blend band starts.
pub const DEFAULT_BAND_START: f64 = 0.46;

/// Normalized distance where the blend band ends.
pub const DEFAULT_BAND_END: f64 = 0.54;

/// A diagonal blend band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagonalBand {
    /// Direction in degrees, measured from bottom-left.
    pub angle_deg: f64,
    /// Distance (0..1) below which the start color is used.
    pub band_start: f64,
    /// Distance (0..1) above which the end color is used.
    pub band_end: f64,
}

impl Default for DiagonalBand {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            band_start: DEFAULT_BAND_START,
            band_end: DEFAULT_BAND_END,
        }
    }
}

impl DiagonalBand {
    /// Band with the default 46/8/46 split at a given angle.
    pub fn new(angle_deg: f64) -> Self {
        Self {
            angle_deg,
            ..Self::default()
        }
    }

    /// Override the band limits.
    pub fn with_band(mut self, band_start: f64, band_end: f64) -> Self {
        self.band_start = band_start;
        self.band_end = band_end;
        self
    }

    /// Normalized distance of a pixel along the gradient direction.
    pub fn distance(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let angle = self.angle_deg.to_radians();
        let (vx, vy) = (angle.cos(), angle.sin());
        let max_dist = width as f64 * vx + height as f64 * vy;
        if max_dist.abs() < 1e-12 {
            return 0.0;
        }

        // Flip y so the origin is the bottom-left corner
        let y_inv = height as f64 - y as f64;
        (x as f64 * vx + y_inv * vy) / max_dist
    }

    /// Blend weight (0 = start color, 1 = end color) for a pixel.
    pub fn weight(&self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let dist = self.distance(x, y, width, height);
        if dist < self.band_start {
            0.0
        } else if dist > self.band_end {
            1.0
        } else {
            let span = self.band_end - self.band_start;
            if span <= 0.0 {
                1.0
            } else {
                (dist - self.band_start) / span
            }
        }
    }

    /// Render the blend mask, quantized to 8-bit steps.
    pub fn mask(&self, width: u32, height: u32) -> GrayscaleBuffer {
        let mut mask = GrayscaleBuffer::new(width, height, 0.0);
        for y in 0..height {
            for x in 0..width {
                let level = (self.weight(x, y, width, height) * 255.0).floor();
                mask.set(x, y, level / 255.0);
            }
        }
        mask
    }
}

/// Fill a buffer with `from` blending into `to` across the band.
pub fn diagonal_gradient(
    width: u32,
    height: u32,
    from: Color,
    to: Color,
    band: &DiagonalBand,
) -> TextureBuffer {
    let mask = band.mask(width, height);
    let mut buffer = TextureBuffer::new(width, height, from);
    for y in 0..height {
        for x in 0..width {
            buffer.set(x, y, from.lerp(&to, mask.get(x, y)));
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: [u8; 3] = [22, 101, 52];
    const BROWN: [u8; 3] = [133, 77, 14];

    fn icon_gradient() -> TextureBuffer {
        diagonal_gradient(
            256,
            256,
            Color::from_rgb8(GREEN),
            Color::from_rgb8(BROWN),
            &DiagonalBand::default(),
        )
    }

    #[test]
    fn corners_are_flat_colors() {
        let buffer = icon_gradient();
        assert_eq!(buffer.get(0, 255).to_rgba8(), [22, 101, 52, 255]);
        assert_eq!(buffer.get(255, 0).to_rgba8(), [133, 77, 14, 255]);
    }

    #[test]
    fn band_is_monotonic_along_diagonal() {
        let band = DiagonalBand::default();
        let mut last = 0.0;
        for i in 0..256u32 {
            let w = band.weight(i, 255 - i, 256, 256);
            assert!(w >= last, "weight dropped at {}: {} < {}", i, w, last);
            last = w;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn band_has_intermediate_values() {
        let mask = DiagonalBand::default().mask(256, 256);
        let partial = mask.data.iter().filter(|&&v| v > 0.0 && v < 1.0).count();
        assert!(partial > 0);
        // The band covers 8% of the distance range, so most pixels are flat
        assert!(partial < mask.data.len() / 4);
    }

    #[test]
    fn distance_is_normalized() {
        let band = DiagonalBand::new(30.0);
        assert!(band.distance(0, 256, 256, 256).abs() < 1e-12);
        assert!((band.distance(256, 0, 256, 256) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_width_band_is_a_hard_edge() {
        let band = DiagonalBand::new(45.0).with_band(0.5, 0.5);
        let mask = band.mask(16, 16);
        assert!(mask.data.iter().all(|&v| v == 0.0 || v == 1.0));
    }
}
