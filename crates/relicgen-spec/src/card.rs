//! Playing card types shown on relic icons.
//!
//! Icons only ever show one glyph per card, so a card may carry just a rank,
//! just a suit, or both (the layout mode decides which one is drawn).

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Rank labels accepted on cards. `1` is used for ace-low straights.
const RANK_LABELS: &[&str] = &[
    "A", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A card rank, stored as the label printed on the card face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank(String);

impl Rank {
    /// Create a rank from its printed label.
    pub fn new(label: impl Into<String>) -> Result<Self, SpecError> {
        let label = label.into();
        if RANK_LABELS.contains(&label.as_str()) {
            Ok(Self(label))
        } else {
            Err(SpecError::InvalidRank(label))
        }
    }

    /// Rank from a label already known to be valid (built-in table).
    pub(crate) fn known(label: &'static str) -> Self {
        debug_assert!(RANK_LABELS.contains(&label), "unknown rank label {label}");
        Self(label.to_string())
    }

    /// The printed label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Rank {
    type Error = SpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// Returns the suit as a string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
        }
    }

    /// The symbol drawn for suit-only cards.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    /// Glyph colour in the four-colour deck the game uses.
    pub fn color(&self) -> [u8; 3] {
        match self {
            Suit::Hearts => [231, 76, 60],
            Suit::Diamonds => [52, 152, 219],
            Suit::Spades | Suit::Clubs => [0, 0, 0],
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A card on a relic icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Printed rank, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
    /// Suit, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,
}

impl Card {
    /// A card that only shows its rank.
    pub fn rank(label: &str) -> Result<Self, SpecError> {
        Ok(Self {
            rank: Some(Rank::new(label)?),
            suit: None,
        })
    }

    /// A card that only shows its suit.
    pub fn suit(suit: Suit) -> Self {
        Self {
            rank: None,
            suit: Some(suit),
        }
    }

    /// A card with both rank and suit.
    pub fn ranked(label: &str, suit: Suit) -> Result<Self, SpecError> {
        Ok(Self {
            rank: Some(Rank::new(label)?),
            suit: Some(suit),
        })
    }

    /// True when the card carries neither a rank nor a suit.
    pub fn is_empty(&self) -> bool {
        self.rank.is_none() && self.suit.is_none()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.rank, self.suit) {
            (Some(rank), Some(suit)) => write!(f, "{}{}", rank, suit.symbol()),
            (Some(rank), None) => write!(f, "{}", rank),
            (None, Some(suit)) => write!(f, "{}", suit.symbol()),
            (None, None) => f.write_str("?"),
        }
    }
}
