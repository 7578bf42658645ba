//! Relic icon composition.
//!
//! An icon is a 256x256 background (flat category color or the chips-to-mult
//! gradient) with the relic's cards fanned across it. Cards are drawn in
//! table order, each rendered upright, rotated, then pasted.

use relicgen_spec::{Category, HandFamily, RelicIcon};
use thiserror::Error;
use tracing::debug;

use crate::buffer::TextureBuffer;
use crate::card::{render_card, CardFace};
use crate::color::Color;
use crate::font::FontChain;
use crate::gradient::{diagonal_gradient, DiagonalBand};
use crate::layout::fan_layout;
use crate::png::{write_rgba_to_vec_with_hash, PngConfig, PngError};
use crate::transform::{paste_over, rotate_expand};

/// Icon edge length in pixels.
pub const ICON_SIZE: u32 = 256;

/// Errors from icon generation.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("relic '{id}' has {count} cards; icons support 2, 3 or 4")]
    UnsupportedCardCount { id: String, count: usize },

    #[error(transparent)]
    Png(#[from] PngError),
}

/// Result of rendering one icon to PNG.
#[derive(Debug, Clone)]
pub struct IconResult {
    /// Encoded PNG bytes.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of `png_data`, hex.
    pub hash: String,
    pub width: u32,
    pub height: u32,
}

/// Background for a relic: the gradient when flagged, else its category
/// color.
pub fn render_background(relic: &RelicIcon) -> TextureBuffer {
    if relic.gradient {
        diagonal_gradient(
            ICON_SIZE,
            ICON_SIZE,
            Color::from_rgb8(Category::Chips.background()),
            Color::from_rgb8(Category::Mult.background()),
            &DiagonalBand::default(),
        )
    } else {
        TextureBuffer::new(
            ICON_SIZE,
            ICON_SIZE,
            Color::from_rgb8(relic.category.background()),
        )
    }
}

/// Compose the icon for one relic.
pub fn generate_icon(relic: &RelicIcon, fonts: &FontChain) -> Result<TextureBuffer, IconError> {
    let family = relic.family().ok_or_else(|| IconError::UnsupportedCardCount {
        id: relic.id.clone(),
        count: relic.cards.len(),
    })?;

    let mut icon = render_background(relic);

    // Spade tweaks only apply to the four-card layout
    let flush_run = family == HandFamily::Run && relic.is_flush_run();

    for placement in fan_layout(family) {
        let card = &relic.cards[placement.index];
        let face = CardFace::for_card(card, relic.mode).with_flush_run(flush_run);
        let upright = render_card(&face, fonts);
        let rotated = rotate_expand(&upright, placement.angle_deg);
        let (x, y) = placement.top_left(rotated.width, rotated.height);

        debug!(
            relic = %relic.id,
            card = %card,
            x,
            y,
            angle = placement.angle_deg,
            "placing card"
        );
        paste_over(&mut icon, &rotated, x, y);
    }

    Ok(icon)
}

/// Compose an icon and encode it as PNG.
pub fn render_icon_png(
    relic: &RelicIcon,
    fonts: &FontChain,
    config: &PngConfig,
) -> Result<IconResult, IconError> {
    let icon = generate_icon(relic, fonts)?;
    let (png_data, hash) = write_rgba_to_vec_with_hash(&icon, config)?;

    Ok(IconResult {
        png_data,
        hash,
        width: icon.width,
        height: icon.height,
    })
}
