//! TrueType/OpenType faces rasterized with rusttype.

use std::path::Path;

use rusttype::{point, Font, Scale};

use super::{FontError, GlyphFace};
use crate::buffer::TextureBuffer;
use crate::color::Color;

/// A scalable font loaded from disk.
pub struct TrueTypeFace {
    name: String,
    font: Font<'static>,
}

impl TrueTypeFace {
    /// Load a `.ttf`, `.otf`, or the first face of a `.ttc` collection.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| FontError::Parse(path.to_path_buf()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, font })
    }

    /// rusttype scales by ascent-to-descent height; convert an em size in
    /// pixels to that scale.
    fn scale_for_em(&self, size: f64) -> Scale {
        let units_per_em = self.font.units_per_em() as f32;
        if units_per_em <= 0.0 {
            return Scale::uniform(size as f32);
        }
        let v = self.font.v_metrics_unscaled();
        Scale::uniform(size as f32 * (v.ascent - v.descent) / units_per_em)
    }
}

impl GlyphFace for TrueTypeFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_glyph(&self, ch: char) -> bool {
        ch.is_whitespace() || self.font.glyph(ch).id().0 != 0
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
        let scale = self.scale_for_em(size);
        let ascent = self.font.v_metrics(scale).ascent;
        let origin = point(x as f32, y as f32 + ascent);

        for glyph in self.font.layout(text, scale, origin) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x as i64 + gx as i64;
                let py = bb.min.y as i64 + gy as i64;
                target.blend_pixel(px, py, color.with_alpha(color.a * coverage as f64));
            });
        }
    }
}
