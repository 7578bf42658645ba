//! A single relic icon entry.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Prefix of every generated file name.
pub const FILE_PREFIX: &str = "angle_";

/// Which scoring stat the relic boosts. Drives the background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Chip bonus (dark green).
    Chips,
    /// Multiplier bonus (dark yellow/brown).
    Mult,
}

impl Category {
    /// Returns the category as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chips => "chips",
            Category::Mult => "mult",
        }
    }

    /// Background colour, matching the in-game special effect indicators.
    pub fn background(&self) -> [u8; 3] {
        match self {
            // #166534
            Category::Chips => [22, 101, 52],
            // #854d0e
            Category::Mult => [133, 77, 14],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which glyph each card face shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Matching ranks.
    Rank,
    /// Matching suits; cards show the suit symbol.
    Suit,
    /// Consecutive ranks.
    RankOnly,
    /// Consecutive ranks on cards of different suits. Only the rank is drawn.
    RankOnlyDiffSuit,
}

impl LayoutMode {
    /// Returns the mode as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Rank => "rank",
            LayoutMode::Suit => "suit",
            LayoutMode::RankOnly => "rank_only",
            LayoutMode::RankOnlyDiffSuit => "rank_only_diff_suit",
        }
    }

    /// True when card faces show the suit symbol instead of the rank.
    pub fn shows_suit(&self) -> bool {
        matches!(self, LayoutMode::Suit)
    }
}

impl std::fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hand shape, derived from the number of cards on the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandFamily {
    Pair,
    Triple,
    Run,
}

impl HandFamily {
    /// Family for a card count, if one exists.
    pub fn from_card_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(HandFamily::Pair),
            3 => Some(HandFamily::Triple),
            4 => Some(HandFamily::Run),
            _ => None,
        }
    }
}

/// One relic icon to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelicIcon {
    /// Relic identifier, also used to name the output file.
    pub id: String,
    /// Display name of the scoring rule.
    pub name: String,
    /// Chips or mult.
    pub category: Category,
    /// Cards shown on the icon, in drawing order.
    pub cards: Vec<Card>,
    /// Which glyph each card shows.
    pub mode: LayoutMode,
    /// Use the chips-to-mult diagonal gradient instead of a solid background.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub gradient: bool,
}

impl RelicIcon {
    /// Create a solid-background relic entry.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        cards: Vec<Card>,
        mode: LayoutMode,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            cards,
            mode,
            gradient: false,
        }
    }

    /// Switch the background to the diagonal gradient.
    pub fn with_gradient(mut self) -> Self {
        self.gradient = true;
        self
    }

    /// Output file name, e.g. `angle_rank_pair_chips.png`.
    pub fn file_name(&self) -> String {
        format!("{}{}.png", FILE_PREFIX, self.id)
    }

    /// Flush runs get slightly re-tuned spade glyphs.
    pub fn is_flush_run(&self) -> bool {
        self.id.starts_with("flush_run")
    }

    /// Hand family, or `None` for an unsupported card count.
    pub fn family(&self) -> Option<HandFamily> {
        HandFamily::from_card_count(self.cards.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn file_name_uses_prefix() {
        let relic = RelicIcon::new(
            "rank_pair_mult",
            "Rank Pair",
            Category::Mult,
            vec![Card::rank("2").unwrap(), Card::rank("2").unwrap()],
            LayoutMode::Rank,
        );
        assert_eq!(relic.file_name(), "angle_rank_pair_mult.png");
        assert_eq!(relic.family(), Some(HandFamily::Pair));
        assert!(!relic.is_flush_run());
    }

    #[test]
    fn flush_run_detected_from_id() {
        let relic = RelicIcon::new(
            "flush_run_mult",
            "Flush Run",
            Category::Mult,
            vec![Card::suit(Suit::Spades); 4],
            LayoutMode::Suit,
        );
        assert!(relic.is_flush_run());
        assert_eq!(relic.family(), Some(HandFamily::Run));
    }

    #[test]
    fn gradient_defaults_to_false_in_json() {
        let json = r#"{
            "id": "flush_pair_chips",
            "name": "Flush Pair",
            "category": "chips",
            "cards": [{"suit": "hearts"}, {"suit": "hearts"}],
            "mode": "suit"
        }"#;
        let relic: RelicIcon = serde_json::from_str(json).unwrap();
        assert!(!relic.gradient);
        assert_eq!(relic.mode, LayoutMode::Suit);
    }

    #[test]
    fn category_backgrounds() {
        assert_eq!(Category::Chips.background(), [22, 101, 52]);
        assert_eq!(Category::Mult.background(), [133, 77, 14]);
    }
}
