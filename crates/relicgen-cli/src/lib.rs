//! Relicgen CLI library.
//!
//! Command implementations and terminal logging for the `relicgen` binary,
//! which renders the relic icon table to PNG files.

pub mod commands;
pub mod logging;
