//! Relic Icon Rendering Backend
//!
//! This crate turns relic table entries into 256x256 PNG badges: a flat or
//! gradient background with a fan of playing cards across it. Output is
//! byte-identical for the same entry and fonts.
//!
//! # Features
//!
//! - **Card faces**: Rounded cards with a rank or suit glyph
//! - **Fan layouts**: Fixed placements for pairs, triples and runs
//! - **Font chain**: System TrueType fonts with a built-in bitmap fallback
//! - **Deterministic PNG**: Fixed compression settings and BLAKE3 hashes
//!
//! # Example
//!
//! ```no_run
//! use relicgen_backend_icon::{render_icon_png, FontChain, PngConfig};
//! use relicgen_spec::RelicTable;
//!
//! let table = RelicTable::builtin();
//! let fonts = FontChain::load(&[]);
//! let relic = table.get("rank_pair_chips").unwrap();
//!
//! let result = render_icon_png(relic, &fonts, &PngConfig::default()).unwrap();
//! std::fs::write(relic.file_name(), &result.png_data).unwrap();
//! ```

pub mod buffer;
pub mod card;
pub mod color;
pub mod font;
pub mod gradient;
pub mod icon;
pub mod layout;
pub mod png;
pub mod transform;

// Re-export main types for convenience
pub use buffer::{GrayscaleBuffer, TextureBuffer};
pub use card::{render_card, CardFace, CardGlyph};
pub use color::Color;
pub use font::{FontChain, FontError, GlyphFace};
pub use gradient::{diagonal_gradient, DiagonalBand};
pub use icon::{generate_icon, render_background, render_icon_png, IconError, IconResult, ICON_SIZE};
pub use layout::{fan_layout, CardPlacement};
pub use png::{PngConfig, PngError};
pub use transform::{paste_over, rotate_expand};
