//! Card face rendering.
//!
//! A card face is a white rounded rectangle with a black outline and one
//! glyph in its top-left corner: either the rank label or the suit symbol.

use relicgen_spec::{Card, LayoutMode, Suit};

use crate::buffer::TextureBuffer;
use crate::color::Color;
use crate::font::FontChain;

/// Card width in pixels. Cards are larger than the icon on purpose so only
/// their top corners show.
pub const CARD_WIDTH: u32 = 180;

/// Card height in pixels.
pub const CARD_HEIGHT: u32 = 260;

/// Corner radius of the card outline.
pub const CORNER_RADIUS: f64 = 16.0;

/// Outline width.
pub const BORDER_WIDTH: f64 = 3.0;

/// Glyph offset from the card's top-left corner.
pub const GLYPH_PADDING: (i32, i32) = (15, 10);

/// Em size for rank labels (all ranks share one size).
pub const RANK_FONT_SIZE: u32 = 80;

/// Em size for suit symbols.
pub const SUIT_FONT_SIZE: u32 = 77;

const CARD_FILL: Color = Color::white();
const CARD_BORDER: Color = Color::black();
const RANK_COLOR: Color = Color::black();

/// What a card face shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardGlyph {
    Rank(String),
    Suit(Suit),
}

impl CardGlyph {
    /// Glyph for a card under a layout mode. Suit mode shows the suit,
    /// every other mode the rank. Falls back to whatever the card carries.
    pub fn for_card(card: &Card, mode: LayoutMode) -> Option<Self> {
        let rank = card.rank.as_ref().map(|r| CardGlyph::Rank(r.label().to_string()));
        let suit = card.suit.map(CardGlyph::Suit);
        if mode.shows_suit() {
            suit.or(rank)
        } else {
            rank.or(suit)
        }
    }

    /// Text to draw.
    pub fn text(&self) -> String {
        match self {
            CardGlyph::Rank(label) => label.clone(),
            CardGlyph::Suit(suit) => suit.symbol().to_string(),
        }
    }

    /// Glyph color; suits use the four-color deck.
    pub fn color(&self) -> Color {
        match self {
            CardGlyph::Rank(_) => RANK_COLOR,
            CardGlyph::Suit(suit) => Color::from_rgb8(suit.color()),
        }
    }

    /// Em size in pixels.
    ///
    /// Spades are drawn 20% larger than the other suits; on flush runs they
    /// get a further 1.15 x 0.93 tweak.
    pub fn font_size(&self, flush_run: bool) -> u32 {
        match self {
            CardGlyph::Rank(_) => RANK_FONT_SIZE,
            CardGlyph::Suit(Suit::Spades) => {
                let size = (SUIT_FONT_SIZE as f64 * 1.2) as u32;
                if flush_run {
                    (size as f64 * 1.15 * 0.93) as u32
                } else {
                    size
                }
            }
            CardGlyph::Suit(_) => SUIT_FONT_SIZE,
        }
    }

    /// Glyph position on the card.
    pub fn origin(&self, flush_run: bool) -> (i32, i32) {
        let (mut x, mut y) = GLYPH_PADDING;
        if flush_run && matches!(self, CardGlyph::Suit(Suit::Spades)) {
            // Nudge the larger spade up and left by 3% of the card
            x -= (CARD_WIDTH as f64 * 0.03) as i32;
            y -= (CARD_HEIGHT as f64 * 0.03) as i32;
        }
        (x, y)
    }
}

/// Everything needed to render one card face.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFace {
    /// Glyph to draw, if any.
    pub glyph: Option<CardGlyph>,
    /// Apply the flush-run spade tweaks.
    pub flush_run: bool,
    /// Alpha multiplier for the whole card (1.0 = opaque).
    pub opacity: f64,
}

impl CardFace {
    pub fn new(glyph: Option<CardGlyph>) -> Self {
        Self {
            glyph,
            flush_run: false,
            opacity: 1.0,
        }
    }

    /// Face for a card under a layout mode.
    pub fn for_card(card: &Card, mode: LayoutMode) -> Self {
        Self::new(CardGlyph::for_card(card, mode))
    }

    pub fn with_flush_run(mut self, flush_run: bool) -> Self {
        self.flush_run = flush_run;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// Render a card face on a transparent `CARD_WIDTH x CARD_HEIGHT` canvas.
pub fn render_card(face: &CardFace, fonts: &FontChain) -> TextureBuffer {
    let mut card = TextureBuffer::new_transparent(CARD_WIDTH, CARD_HEIGHT);
    draw_card_body(&mut card);

    if let Some(glyph) = &face.glyph {
        let text = glyph.text();
        let (x, y) = glyph.origin(face.flush_run);
        let size = glyph.font_size(face.flush_run) as f64;
        fonts
            .face_for(&text)
            .draw_text(&mut card, x as f64, y as f64, &text, size, glyph.color());
    }

    if face.opacity < 1.0 {
        card.multiply_alpha(face.opacity);
    }

    card
}

/// White rounded rectangle with a black outline, anti-aliased by coverage.
fn draw_card_body(card: &mut TextureBuffer) {
    let (w, h) = (card.width as f64, card.height as f64);
    let half = (w / 2.0, h / 2.0);

    for y in 0..card.height {
        for x in 0..card.width {
            let px = x as f64 + 0.5 - half.0;
            let py = y as f64 + 0.5 - half.1;
            let dist = rounded_rect_sdf(px, py, half.0, half.1, CORNER_RADIUS);

            let outer = (0.5 - dist).clamp(0.0, 1.0);
            if outer <= 0.0 {
                continue;
            }
            let inner = (0.5 - (dist + BORDER_WIDTH)).clamp(0.0, 1.0);
            let color = CARD_BORDER.lerp(&CARD_FILL, inner).with_alpha(outer);
            card.set(x, y, color);
        }
    }
}

/// Signed distance from a point to a rounded rectangle centered on the origin.
fn rounded_rect_sdf(px: f64, py: f64, half_w: f64, half_h: f64, radius: f64) -> f64 {
    let qx = px.abs() - (half_w - radius);
    let qy = py.abs() - (half_h - radius);
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    let inside = qx.max(qy).min(0.0);
    outside + inside - radius
}
