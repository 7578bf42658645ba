//! Relic Icon Table Library
//!
//! This crate describes the relic icons a card game shows for its scoring
//! combinations: which cards appear on each icon, how they are labelled,
//! and which background the icon uses.
//!
//! # Example
//!
//! ```
//! use relicgen_spec::{RelicTable, validate_table};
//!
//! let table = RelicTable::builtin();
//! validate_table(&table).unwrap();
//!
//! let relic = table.get("flush_run_chips").unwrap();
//! assert_eq!(relic.file_name(), "angle_flush_run_chips.png");
//! assert!(relic.is_flush_run());
//! ```
//!
//! # Modules
//!
//! - [`card`]: Ranks, suits, and cards
//! - [`relic`]: A single icon entry, its category and layout mode
//! - [`table`]: The built-in relic table and JSON loading
//! - [`validation`]: Entry and table validation
//! - [`error`]: Error types

pub mod card;
pub mod error;
pub mod relic;
pub mod table;
pub mod validation;

pub use card::{Card, Rank, Suit};
pub use error::SpecError;
pub use relic::{Category, HandFamily, LayoutMode, RelicIcon, FILE_PREFIX};
pub use table::RelicTable;
pub use validation::{is_valid_relic_id, validate_relic, validate_table, MAX_CARDS, MIN_CARDS};
