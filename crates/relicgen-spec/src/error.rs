//! Error types for relic table loading and validation.

use thiserror::Error;

/// Errors produced while building, loading, or validating relic entries.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Rank label outside the accepted set.
    #[error("invalid rank label '{0}' (expected A, 1-10, J, Q or K)")]
    InvalidRank(String),

    /// Card carries neither a rank nor a suit.
    #[error("relic '{relic}': card {index} has neither a rank nor a suit")]
    EmptyCard { relic: String, index: usize },

    /// Relic id is not lowercase `[a-z0-9_]`.
    #[error("invalid relic id '{0}' (expected lowercase letters, digits, and underscores)")]
    InvalidId(String),

    /// Card count outside the supported layouts.
    #[error("relic '{relic}' has {count} cards (supported: {min}-{max})")]
    CardCount {
        relic: String,
        count: usize,
        min: usize,
        max: usize,
    },

    /// Card does not carry the glyph its layout mode displays.
    #[error("relic '{relic}': card {index} has no {missing} but the layout mode is '{mode}'")]
    ModeMismatch {
        relic: String,
        index: usize,
        missing: &'static str,
        mode: &'static str,
    },

    /// Two entries share an id.
    #[error("duplicate relic id '{0}'")]
    DuplicateId(String),

    /// Table file could not be read.
    #[error("failed to read relic table: {0}")]
    Io(#[from] std::io::Error),

    /// Table JSON could not be parsed.
    #[error("failed to parse relic table: {0}")]
    Json(#[from] serde_json::Error),
}
