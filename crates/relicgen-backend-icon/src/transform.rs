//! Rotation with canvas expansion and bicubic resampling.

use crate::buffer::TextureBuffer;
use crate::color::Color;

/// Catmull-Rom style cubic kernel parameter.
const CUBIC_A: f64 = -0.5;

/// Size of the canvas that holds `width x height` rotated by `degrees`.
///
/// The rotated corners' extent is rounded outward to whole pixels.
pub fn rotated_size(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);

    let corners = [
        (0.0, 0.0),
        (width as f64, 0.0),
        (width as f64, height as f64),
        (0.0, height as f64),
    ];

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in corners {
        let dx = x - cx;
        let dy = y - cy;
        let rx = dx * cos - dy * sin + cx;
        let ry = dx * sin + dy * cos + cy;
        min_x = min_x.min(rx);
        max_x = max_x.max(rx);
        min_y = min_y.min(ry);
        max_y = max_y.max(ry);
    }

    // Snap away float noise so 0 and 90 degree turns stay exact
    let snap = |v: f64| (v * 1e6).round() / 1e6;
    let w = snap(max_x).ceil() - snap(min_x).floor();
    let h = snap(max_y).ceil() - snap(min_y).floor();
    (w as u32, h as u32)
}

/// Rotate clockwise (on screen, y down) by `degrees`, growing the canvas to
/// fit the result. Content stays centered; new area is transparent.
pub fn rotate_expand(src: &TextureBuffer, degrees: f64) -> TextureBuffer {
    let (out_w, out_h) = rotated_size(src.width, src.height, degrees);
    let mut out = TextureBuffer::new_transparent(out_w, out_h);

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (src_cx, src_cy) = (src.width as f64 / 2.0, src.height as f64 / 2.0);
    let (out_cx, out_cy) = (out_w as f64 / 2.0, out_h as f64 / 2.0);

    for oy in 0..out_h {
        for ox in 0..out_w {
            let dx = ox as f64 + 0.5 - out_cx;
            let dy = oy as f64 + 0.5 - out_cy;

            // Inverse rotation back into source space
            let sx = dx * cos + dy * sin + src_cx;
            let sy = -dx * sin + dy * cos + src_cy;

            out.set(ox, oy, sample_bicubic(src, sx - 0.5, sy - 0.5));
        }
    }

    out
}

/// Sample at continuous pixel coordinates (pixel centers on integers).
/// Outside the buffer reads as transparent.
pub fn sample_bicubic(src: &TextureBuffer, x: f64, y: f64) -> Color {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    // Skip the kernel entirely when all 16 taps fall outside
    if x0 + 2 < 0 || y0 + 2 < 0 || x0 - 1 >= src.width as i64 || y0 - 1 >= src.height as i64 {
        return Color::transparent();
    }

    let wx = cubic_weights(fx);
    let wy = cubic_weights(fy);

    let mut acc = Color::transparent();
    for (j, wyj) in wy.iter().enumerate() {
        for (i, wxi) in wx.iter().enumerate() {
            let c = src
                .get_or_transparent(x0 - 1 + i as i64, y0 - 1 + j as i64)
                .premultiplied();
            let w = wxi * wyj;
            acc.r += c.r * w;
            acc.g += c.g * w;
            acc.b += c.b * w;
            acc.a += c.a * w;
        }
    }

    let alpha = acc.a.clamp(0.0, 1.0);
    if alpha <= 1e-6 {
        return Color::transparent();
    }
    Color::rgba(acc.r, acc.g, acc.b, alpha).unpremultiplied().clamp()
}

fn cubic_weights(t: f64) -> [f64; 4] {
    [
        cubic(1.0 + t),
        cubic(t),
        cubic(1.0 - t),
        cubic(2.0 - t),
    ]
}

fn cubic(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        ((CUBIC_A + 2.0) * x - (CUBIC_A + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        (((x - 5.0) * x + 8.0) * x - 4.0) * CUBIC_A
    } else {
        0.0
    }
}

/// Composite `src` over `dst` with its top-left corner at `(x, y)`.
/// Parts falling outside `dst` are clipped.
pub fn paste_over(dst: &mut TextureBuffer, src: &TextureBuffer, x: i64, y: i64) {
    for sy in 0..src.height {
        let ty = y + sy as i64;
        if ty < 0 || ty >= dst.height as i64 {
            continue;
        }
        for sx in 0..src.width {
            let color = src.get(sx, sy);
            if color.a <= 0.0 {
                continue;
            }
            dst.blend_pixel(x + sx as i64, ty, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rotation_keeps_size_and_pixels() {
        let mut src = TextureBuffer::new(4, 3, Color::white());
        src.set(1, 1, Color::black());
        let out = rotate_expand(&src, 0.0);
        assert_eq!((out.width, out.height), (4, 3));
        assert_eq!(out.get(1, 1).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(out.get(3, 2).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn quarter_turn_swaps_dimensions() {
        assert_eq!(rotated_size(180, 260, 90.0), (260, 180));
        assert_eq!(rotated_size(180, 260, -90.0), (260, 180));
    }

    #[test]
    fn small_angles_expand_canvas() {
        let (w, h) = rotated_size(180, 260, 5.0);
        assert!(w > 180 && h > 260);
        // Extents -10.99..190.99 and -7.35..267.35 round outward
        assert_eq!((w, h), (202, 276));
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        // Mark the top-left corner; a clockwise turn moves it to top-right
        let mut src = TextureBuffer::new(4, 2, Color::white());
        src.set(0, 0, Color::black());
        let out = rotate_expand(&src, 90.0);
        assert_eq!((out.width, out.height), (2, 4));
        assert_eq!(out.get(1, 0).to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(out.get(0, 0).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn corners_become_transparent() {
        let src = TextureBuffer::new(40, 40, Color::white());
        let out = rotate_expand(&src, 45.0);
        assert_eq!(out.get(0, 0).a, 0.0);
        let center = out.get(out.width / 2, out.height / 2);
        assert_eq!(center.to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn paste_clips_and_blends() {
        let mut dst = TextureBuffer::new(4, 4, Color::white());
        let mut src = TextureBuffer::new(3, 3, Color::black().with_alpha(0.5));
        src.set(1, 1, Color::transparent());
        paste_over(&mut dst, &src, 2, -1);

        assert_eq!(dst.get(2, 0).to_rgba8(), [128, 128, 128, 255]);
        assert_eq!(dst.get(3, 1).to_rgba8(), [128, 128, 128, 255]);
        assert_eq!(dst.get(3, 0).to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(dst.get(1, 0).to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(dst.get(2, 2).to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn paste_never_lowers_destination_alpha() {
        let edge = Color::black().with_alpha(0.25);
        let src = TextureBuffer::new(1, 1, edge);

        let mut opaque = TextureBuffer::new(1, 1, Color::white());
        paste_over(&mut opaque, &src, 0, 0);
        assert_eq!(opaque.get(0, 0).to_rgba8(), [191, 191, 191, 255]);

        let mut empty = TextureBuffer::new_transparent(1, 1);
        paste_over(&mut empty, &src, 0, 0);
        assert_eq!(empty.get(0, 0).to_rgba8(), [0, 0, 0, 64]);
    }

    #[test]
    fn kernel_weights_sum_to_one() {
        for t in [0.0, 0.25, 0.5, 0.9] {
            let sum: f64 = cubic_weights(t).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }
}
