//! Built-in 5x7 bitmap font, the last entry of every font chain.
//!
//! Only the characters card faces need are included: digits, `A J Q K`, the
//! four suit symbols, and `?` for anything else. Glyphs are scaled up in
//! whole pixel blocks so edges stay crisp.

use super::GlyphFace;
use crate::buffer::TextureBuffer;
use crate::color::Color;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

/// Rows top to bottom, bit 4 = leftmost column.
type Pattern = [u8; GLYPH_HEIGHT as usize];

const UNKNOWN: Pattern = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100];

fn pattern(ch: char) -> Option<Pattern> {
    let rows = match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        '?' => UNKNOWN,
        '♥' => [0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000],
        '♦' => [0b00000, 0b00100, 0b01110, 0b11111, 0b01110, 0b00100, 0b00000],
        '♠' => [0b00100, 0b01110, 0b11111, 0b11111, 0b00100, 0b01110, 0b00000],
        '♣' => [0b01110, 0b01110, 0b11111, 0b11111, 0b00100, 0b01110, 0b00000],
        _ => return None,
    };
    Some(rows)
}

/// The built-in bitmap face.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitmapFace;

impl BitmapFace {
    pub fn new() -> Self {
        Self
    }

    /// Size of one font pixel for an em size, at least 1.
    fn cell_size(size: f64) -> u32 {
        ((size * 0.1).round() as u32).max(1)
    }
}

impl GlyphFace for BitmapFace {
    fn name(&self) -> &str {
        "built-in 5x7"
    }

    fn has_glyph(&self, ch: char) -> bool {
        ch == ' ' || pattern(ch).is_some()
    }

    fn draw_text(
        &self,
        target: &mut TextureBuffer,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        color: Color,
    ) {
        let cell = Self::cell_size(size) as i64;
        // Cap height sits roughly a fifth of an em below the ascender line
        let top = (y + (size * 0.2).round()) as i64;
        let mut pen_x = x as i64;

        for ch in text.chars() {
            if ch != ' ' {
                let rows = pattern(ch).unwrap_or(UNKNOWN);
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..GLYPH_WIDTH {
                        if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        let x0 = pen_x + col as i64 * cell;
                        let y0 = top + row as i64 * cell;
                        for dy in 0..cell {
                            for dx in 0..cell {
                                target.blend_pixel(x0 + dx, y0 + dy, color);
                            }
                        }
                    }
                }
            }
            pen_x += (GLYPH_WIDTH as i64 + 1) * cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(buffer: &TextureBuffer) -> usize {
        buffer.data.iter().filter(|c| c.a > 0.0).count()
    }

    #[test]
    fn covers_card_glyphs() {
        let face = BitmapFace::new();
        assert!(face.covers("A 10 J Q K ♥♦♠♣"));
        assert!(!face.has_glyph('Z'));
    }

    #[test]
    fn draws_scaled_blocks() {
        let face = BitmapFace::new();
        let mut buffer = TextureBuffer::new_transparent(100, 100);
        face.draw_text(&mut buffer, 0.0, 0.0, "1", 80.0, Color::black());
        // '1' has 10 lit cells, 8x8 pixels each at size 80
        assert_eq!(lit_pixels(&buffer), 10 * 64);
    }

    #[test]
    fn unknown_characters_draw_placeholder() {
        let face = BitmapFace::new();
        let mut unknown = TextureBuffer::new_transparent(40, 40);
        let mut question = TextureBuffer::new_transparent(40, 40);
        face.draw_text(&mut unknown, 0.0, 0.0, "Z", 10.0, Color::black());
        face.draw_text(&mut question, 0.0, 0.0, "?", 10.0, Color::black());
        assert_eq!(unknown.data, question.data);
    }

    #[test]
    fn clips_at_buffer_edges() {
        let face = BitmapFace::new();
        let mut buffer = TextureBuffer::new_transparent(10, 10);
        face.draw_text(&mut buffer, -20.0, -20.0, "8", 80.0, Color::black());
        face.draw_text(&mut buffer, 5.0, 5.0, "8", 80.0, Color::black());
        assert!(lit_pixels(&buffer) > 0);
    }
}
