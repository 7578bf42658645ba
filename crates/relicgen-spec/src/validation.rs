//! Relic entry and table validation.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::SpecError;
use crate::relic::RelicIcon;
use crate::table::RelicTable;

/// Fewest cards an icon can show (pair).
pub const MIN_CARDS: usize = 2;

/// Most cards an icon can show (run).
pub const MAX_CARDS: usize = 4;

const RELIC_ID_PATTERN: &str = r"^[a-z0-9][a-z0-9_]*$";

static RELIC_ID_REGEX: OnceLock<Regex> = OnceLock::new();

fn relic_id_regex() -> &'static Regex {
    RELIC_ID_REGEX.get_or_init(|| Regex::new(RELIC_ID_PATTERN).expect("invalid regex pattern"))
}

/// Checks if a relic id is safe to use in a file name.
pub fn is_valid_relic_id(id: &str) -> bool {
    relic_id_regex().is_match(id)
}

/// Validates a single relic entry.
///
/// Every card must carry the glyph its layout mode draws: suit mode needs a
/// suit on each card, the rank modes need a rank.
pub fn validate_relic(relic: &RelicIcon) -> Result<(), SpecError> {
    if !is_valid_relic_id(&relic.id) {
        return Err(SpecError::InvalidId(relic.id.clone()));
    }

    let count = relic.cards.len();
    if !(MIN_CARDS..=MAX_CARDS).contains(&count) {
        return Err(SpecError::CardCount {
            relic: relic.id.clone(),
            count,
            min: MIN_CARDS,
            max: MAX_CARDS,
        });
    }

    for (index, card) in relic.cards.iter().enumerate() {
        if card.is_empty() {
            return Err(SpecError::EmptyCard {
                relic: relic.id.clone(),
                index,
            });
        }

        let missing = if relic.mode.shows_suit() {
            card.suit.is_none().then_some("suit")
        } else {
            card.rank.is_none().then_some("rank")
        };

        if let Some(missing) = missing {
            return Err(SpecError::ModeMismatch {
                relic: relic.id.clone(),
                index,
                missing,
                mode: relic.mode.as_str(),
            });
        }
    }

    Ok(())
}

/// Validates every entry and checks ids are unique.
pub fn validate_table(table: &RelicTable) -> Result<(), SpecError> {
    let mut seen = HashSet::new();
    for relic in table {
        validate_relic(relic)?;
        if !seen.insert(relic.id.as_str()) {
            return Err(SpecError::DuplicateId(relic.id.clone()));
        }
    }
    Ok(())
}
