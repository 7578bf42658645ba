//! List command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use relicgen_spec::{Category, RelicIcon};
use std::path::Path;
use std::process::ExitCode;

/// Run the list command
///
/// # Arguments
/// * `table` - JSON table replacing the built-in one
/// * `json` - Print the table as JSON instead of a listing
pub fn run(table: Option<&Path>, json: bool) -> Result<ExitCode> {
    let table = super::load_table(table)?;

    if json {
        let out = table.to_json_pretty().context("Failed to serialize relic table")?;
        println!("{}", out);
        return Ok(ExitCode::SUCCESS);
    }

    for relic in &table {
        println!("{}", format_relic(relic));
    }
    println!();
    println!("{} {} relics", "Total:".blue().bold(), table.len());

    Ok(ExitCode::SUCCESS)
}

/// One listing line: file name, category, layout mode and cards.
pub fn format_relic(relic: &RelicIcon) -> String {
    let category = match relic.category {
        Category::Chips => relic.category.as_str().green(),
        Category::Mult => relic.category.as_str().yellow(),
    };
    let cards: Vec<String> = relic.cards.iter().map(|card| card.to_string()).collect();
    let gradient = if relic.gradient { " gradient" } else { "" };

    format!(
        "{:<32} {:<6} {:<20} {}{}",
        relic.file_name().bold(),
        category,
        relic.mode.as_str(),
        cards.join(" "),
        gradient.dimmed()
    )
}
