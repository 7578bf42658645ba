//! Glyph rendering for card faces.
//!
//! Card glyphs are drawn with the first TrueType/OpenType font that loads
//! from an ordered list of system paths. If none loads, or the loaded font
//! lacks a symbol, the built-in bitmap font is used instead, so rendering
//! never fails because of fonts.

mod bitmap;
mod truetype;

pub use bitmap::BitmapFace;
pub use truetype::TrueTypeFace;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::buffer::TextureBuffer;
use crate::color::Color;

/// System fonts tried in order before falling back to the built-in font.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
];

/// Errors from loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a usable TrueType/OpenType font", .0.display())]
    Parse(PathBuf),
}

/// A font that can draw text into a buffer.
pub trait GlyphFace {
    /// Human-readable font name for logs.
    fn name(&self) -> &str;

    /// True when the font has a real glyph for `ch`.
    fn has_glyph(&self, ch: char) -> bool;

    /// Draw `text` with its top-left (ascender line) at `(x, y)`.
    ///
    /// `size` is the em size in pixels.
    fn draw_text(
        &self,
        target: &mut TextureBuffer,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        color: Color,
    );

    /// True when every character of `text` has a glyph.
    fn covers(&self, text: &str) -> bool {
        text.chars().all(|ch| self.has_glyph(ch))
    }
}

/// Ordered font fallback chain ending in the built-in bitmap font.
pub struct FontChain {
    primary: Option<TrueTypeFace>,
    builtin: BitmapFace,
}

impl FontChain {
    /// Try `extra` paths first, then [`SYSTEM_FONT_PATHS`]. The first font
    /// that loads becomes the primary face.
    pub fn load(extra: &[PathBuf]) -> Self {
        let candidates = extra
            .iter()
            .cloned()
            .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            match TrueTypeFace::load(&path) {
                Ok(face) => {
                    info!(font = %path.display(), "using font");
                    return Self::with_primary(face);
                }
                Err(e) => warn!("{e}"),
            }
        }

        warn!("no system font could be loaded, using the built-in bitmap font");
        Self::builtin_only()
    }

    /// Load a chain from explicit paths only, skipping the system list.
    pub fn load_paths(paths: &[&Path]) -> Self {
        for path in paths {
            match TrueTypeFace::load(path) {
                Ok(face) => return Self::with_primary(face),
                Err(e) => warn!("{e}"),
            }
        }
        Self::builtin_only()
    }

    /// Chain with only the built-in bitmap font.
    pub fn builtin_only() -> Self {
        Self {
            primary: None,
            builtin: BitmapFace::new(),
        }
    }

    fn with_primary(face: TrueTypeFace) -> Self {
        Self {
            primary: Some(face),
            builtin: BitmapFace::new(),
        }
    }

    /// Name of the font used for text it covers.
    pub fn primary_name(&self) -> &str {
        match &self.primary {
            Some(face) => face.name(),
            None => self.builtin.name(),
        }
    }

    /// Face to draw `text` with: the primary font when it covers the text,
    /// otherwise the built-in font.
    pub fn face_for(&self, text: &str) -> &dyn GlyphFace {
        match &self.primary {
            Some(face) if face.covers(text) => face as &dyn GlyphFace,
            Some(face) => {
                debug!(font = face.name(), text, "glyph missing, using built-in font");
                &self.builtin
            }
            None => &self.builtin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_paths_fall_back_to_builtin() {
        let chain = FontChain::load_paths(&[Path::new("/nonexistent/font.ttf")]);
        assert_eq!(chain.primary_name(), "built-in 5x7");
        assert!(chain.face_for("♠").covers("♠"));
    }

    #[test]
    fn unparseable_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(TrueTypeFace::load(&path), Err(FontError::Parse(_))));

        let chain = FontChain::load_paths(&[path.as_path()]);
        assert_eq!(chain.primary_name(), "built-in 5x7");
    }

    /// First system font that loads on this machine, if any.
    fn system_font() -> Option<(PathBuf, TrueTypeFace)> {
        SYSTEM_FONT_PATHS.iter().find_map(|p| {
            let path = PathBuf::from(p);
            TrueTypeFace::load(&path).ok().map(|face| (path, face))
        })
    }

    /// Rows and columns holding mostly-covered pixels: (min_x, min_y, max_x, max_y).
    fn ink_box(buffer: &TextureBuffer) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for y in 0..buffer.height {
            for x in 0..buffer.width {
                if buffer.get(x, y).a <= 0.5 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }

    fn draw(face: &dyn GlyphFace, text: &str, size: f64) -> TextureBuffer {
        let mut buffer = TextureBuffer::new_transparent(180, 260);
        face.draw_text(&mut buffer, 15.0, 10.0, text, size, Color::black());
        buffer
    }

    #[test]
    fn truetype_text_hangs_from_the_ascender_line() {
        let Some((path, face)) = system_font() else {
            eprintln!("no system font installed, skipping");
            return;
        };

        let (x0, top, _, bottom) = ink_box(&draw(&face, "A", 80.0)).unwrap();
        let cap_height = (bottom - top + 1) as f64;

        // Cap height of the usual sans faces is roughly 0.7 em
        assert!(
            (0.6 * 80.0..=0.8 * 80.0).contains(&cap_height),
            "{}: cap height {}",
            path.display(),
            cap_height
        );
        // Ink starts below the ascender line at y=10, not above it
        assert!(top > 10 && top < 10 + 28, "{}: ink top {}", path.display(), top);
        assert!(x0 >= 14, "{}: ink left {}", path.display(), x0);
    }

    #[test]
    fn truetype_size_is_an_em_size() {
        let Some((_, face)) = system_font() else {
            eprintln!("no system font installed, skipping");
            return;
        };

        let (_, top_small, _, bottom_small) = ink_box(&draw(&face, "A", 40.0)).unwrap();
        let (_, top_large, _, bottom_large) = ink_box(&draw(&face, "A", 80.0)).unwrap();
        let small = (bottom_small - top_small + 1) as f64;
        let large = (bottom_large - top_large + 1) as f64;
        assert!((large - 2.0 * small).abs() <= 3.0, "{} vs {}", small, large);
    }

    #[test]
    fn extra_fonts_win_over_system_fonts() {
        let Some((path, _)) = system_font() else {
            eprintln!("no system font installed, skipping");
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let extension = path.extension().unwrap_or_default();
        let extra = dir.path().join("extra-face").with_extension(extension);
        std::fs::copy(&path, &extra).unwrap();

        let chain = FontChain::load(&[extra]);
        assert_eq!(chain.primary_name(), "extra-face");

        // A broken extra path falls through to the system list
        let chain = FontChain::load(&[dir.path().join("missing.ttf")]);
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        assert_eq!(chain.primary_name(), stem);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = TrueTypeFace::load(Path::new("/nonexistent/font.ttf")).err().unwrap();
        assert!(matches!(err, FontError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }
}
