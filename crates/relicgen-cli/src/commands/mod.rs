//! CLI command implementations

pub mod generate;
pub mod list;

use anyhow::{Context, Result};
use relicgen_spec::{validate_table, RelicTable};
use std::path::Path;
use tracing::info;

/// Load the relic table: the built-in one, or a JSON replacement.
///
/// Either way the table is validated before it is returned.
pub fn load_table(path: Option<&Path>) -> Result<RelicTable> {
    let table = match path {
        Some(path) => {
            let table = RelicTable::from_json_file(path)
                .with_context(|| format!("Failed to load relic table: {}", path.display()))?;
            info!(table = %path.display(), relics = table.len(), "loaded relic table");
            table
        }
        None => RelicTable::builtin(),
    };

    validate_table(&table).context("Invalid relic table")?;
    Ok(table)
}
