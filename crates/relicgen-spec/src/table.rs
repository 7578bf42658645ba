//! The relic table: every icon the game ships, in generation order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::SpecError;
use crate::relic::{Category, LayoutMode, RelicIcon};

/// Ordered list of relic icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelicTable {
    relics: Vec<RelicIcon>,
}

impl RelicTable {
    /// Wrap a list of entries. Call [`crate::validate_table`] before rendering.
    pub fn new(relics: Vec<RelicIcon>) -> Self {
        Self { relics }
    }

    /// The table shipped with the game: rank, flush and straight combos in
    /// pair, triple and run shapes, each in a chips and a mult variant.
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        let straight_pair = || vec![ranked("5", Suit::Spades), ranked("6", Suit::Hearts)];

        let relics = vec![
            // Rank combos: same rank, rank glyph only
            entry("rank_pair_chips", "Rank Pair", Category::Chips, ranks(&["2", "2"]), LayoutMode::Rank).with_gradient(),
            entry("rank_pair_mult", "Rank Pair", Category::Mult, ranks(&["2", "2"]), LayoutMode::Rank),
            entry("rank_triple_chips", "Rank Triple", Category::Chips, ranks(&["3", "3", "3"]), LayoutMode::Rank),
            entry("rank_triple_mult", "Rank Triple", Category::Mult, ranks(&["3", "3", "3"]), LayoutMode::Rank),
            entry("rank_run_chips", "Rank Run", Category::Chips, ranks(&["A", "A", "A", "A"]), LayoutMode::Rank),
            entry("rank_run_mult", "Rank Run", Category::Mult, ranks(&["A", "A", "A", "A"]), LayoutMode::Rank),

            // Flush combos: same suit, suit glyph only
            entry("flush_pair_chips", "Flush Pair", Category::Chips, suits(Suit::Hearts, 2), LayoutMode::Suit),
            entry("flush_pair_mult", "Flush Pair", Category::Mult, suits(Suit::Hearts, 2), LayoutMode::Suit),
            entry("flush_triple_chips", "Flush Triple", Category::Chips, suits(Suit::Clubs, 3), LayoutMode::Suit),
            entry("flush_triple_mult", "Flush Triple", Category::Mult, suits(Suit::Clubs, 3), LayoutMode::Suit),
            entry("flush_run_chips", "Flush Run", Category::Chips, suits(Suit::Spades, 4), LayoutMode::Suit),
            entry("flush_run_mult", "Flush Run", Category::Mult, suits(Suit::Spades, 4), LayoutMode::Suit),

            // Straight combos: consecutive ranks
            entry("straight_pair_chips", "Straight Pair", Category::Chips, straight_pair(), LayoutMode::RankOnlyDiffSuit),
            entry("straight_pair_mult", "Straight Pair", Category::Mult, straight_pair(), LayoutMode::RankOnlyDiffSuit),
            entry("straight_triple_chips", "Straight Triple", Category::Chips, ranks(&["5", "6", "7"]), LayoutMode::RankOnly),
            entry("straight_triple_mult", "Straight Triple", Category::Mult, ranks(&["5", "6", "7"]), LayoutMode::RankOnly),
            entry("straight_run_chips", "Straight Run", Category::Chips, ranks(&["1", "2", "3", "4"]), LayoutMode::RankOnly),
            entry("straight_run_mult", "Straight Run", Category::Mult, ranks(&["1", "2", "3", "4"]), LayoutMode::RankOnly),
        ];

        Self { relics }
    }

    /// Parse a table from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON table file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the table as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&RelicIcon> {
        self.relics.iter().find(|r| r.id == id)
    }

    /// Entries in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, RelicIcon> {
        self.relics.iter()
    }

    pub fn len(&self) -> usize {
        self.relics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relics.is_empty()
    }
}

impl<'a> IntoIterator for &'a RelicTable {
    type Item = &'a RelicIcon;
    type IntoIter = std::slice::Iter<'a, RelicIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.relics.iter()
    }
}

fn entry(
    id: &str,
    name: &str,
    category: Category,
    cards: Vec<Card>,
    mode: LayoutMode,
) -> RelicIcon {
    RelicIcon::new(id, name, category, cards, mode)
}

fn ranks(labels: &[&'static str]) -> Vec<Card> {
    labels
        .iter()
        .map(|&label| Card {
            rank: Some(Rank::known(label)),
            suit: None,
        })
        .collect()
}

fn suits(suit: Suit, count: usize) -> Vec<Card> {
    vec![Card::suit(suit); count]
}

fn ranked(label: &'static str, suit: Suit) -> Card {
    Card {
        rank: Some(Rank::known(label)),
        suit: Some(suit),
    }
}
