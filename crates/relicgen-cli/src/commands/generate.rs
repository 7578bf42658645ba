//! Generate command implementation
//!
//! Renders every selected relic to `angle_<id>.png` in the output directory,
//! one icon at a time, and optionally writes a manifest of what was written.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use relicgen_backend_icon::{render_icon_png, FontChain, PngConfig};
use relicgen_spec::{RelicIcon, RelicTable, FILE_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

/// Output directory used when none is given.
pub const DEFAULT_OUT_DIR: &str = "public/relics";

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Options for one generate run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the PNGs are written to; created if missing.
    pub out_dir: PathBuf,
    /// Relic ids to generate. Empty means the whole table.
    pub only: Vec<String>,
    /// JSON table replacing the built-in one.
    pub table: Option<PathBuf>,
    /// Font files tried before the system fonts.
    pub fonts: Vec<PathBuf>,
    /// Also try the system font paths.
    pub system_fonts: bool,
    /// Write `manifest.json` next to the icons.
    pub manifest: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            only: Vec::new(),
            table: None,
            fonts: Vec::new(),
            system_fonts: true,
            manifest: false,
        }
    }
}

/// One generated icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Relic id
    pub id: String,
    /// Display name
    pub name: String,
    /// File name relative to the output directory
    pub file: String,
    pub width: u32,
    pub height: u32,
    /// BLAKE3 hash of the PNG file
    pub blake3: String,
}

/// Contents of `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Font used for glyphs the primary font covers
    pub font: String,
    /// Icons in generation order
    pub icons: Vec<ManifestEntry>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 when every icon was written
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let entries = generate_icons(options)?;

    println!();
    println!(
        "{} Generated {} icon{} in {}",
        "SUCCESS".green().bold(),
        entries.len(),
        if entries.len() == 1 { "" } else { "s" },
        options.out_dir.display()
    );
    if options.manifest {
        println!(
            "{} {}",
            "Manifest:".blue().bold(),
            options.out_dir.join(MANIFEST_FILE).display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Generate the selected icons and return what was written.
///
/// Stops at the first icon that cannot be rendered or written.
pub fn generate_icons(options: &GenerateOptions) -> Result<Vec<ManifestEntry>> {
    let table = super::load_table(options.table.as_deref())?;
    let selected = select_relics(&table, &options.only)?;

    fs::create_dir_all(&options.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.out_dir.display()
        )
    })?;

    let fonts = load_fonts(options);
    let config = PngConfig::default();
    let mut entries = Vec::with_capacity(selected.len());

    for relic in selected {
        println!("Generating {}{}...", FILE_PREFIX, relic.id);
        entries.push(write_icon(relic, &fonts, &config, &options.out_dir)?);
    }

    if options.manifest {
        let manifest = Manifest {
            font: fonts.primary_name().to_string(),
            icons: entries.clone(),
        };
        write_manifest(&manifest, &options.out_dir)?;
    }

    info!(count = entries.len(), out_dir = %options.out_dir.display(), "generation complete");
    Ok(entries)
}

/// Pick the relics named in `only`, keeping table order. An empty list
/// selects everything.
pub fn select_relics<'a>(table: &'a RelicTable, only: &[String]) -> Result<Vec<&'a RelicIcon>> {
    if only.is_empty() {
        return Ok(table.iter().collect());
    }

    for id in only {
        if table.get(id).is_none() {
            bail!("Unknown relic id: {} (see `relicgen list`)", id);
        }
    }

    Ok(table
        .iter()
        .filter(|relic| only.iter().any(|id| *id == relic.id))
        .collect())
}

fn load_fonts(options: &GenerateOptions) -> FontChain {
    if options.system_fonts {
        FontChain::load(&options.fonts)
    } else {
        let paths: Vec<&Path> = options.fonts.iter().map(PathBuf::as_path).collect();
        FontChain::load_paths(&paths)
    }
}

fn write_icon(
    relic: &RelicIcon,
    fonts: &FontChain,
    config: &PngConfig,
    out_dir: &Path,
) -> Result<ManifestEntry> {
    let result = render_icon_png(relic, fonts, config)
        .with_context(|| format!("Failed to render icon for relic: {}", relic.id))?;

    let file = relic.file_name();
    let path = out_dir.join(&file);
    fs::write(&path, &result.png_data)
        .with_context(|| format!("Failed to write icon: {}", path.display()))?;
    debug!(path = %path.display(), hash = %result.hash, "wrote icon");

    Ok(ManifestEntry {
        id: relic.id.clone(),
        name: relic.name.clone(),
        file,
        width: result.width,
        height: result.height,
        blake3: result.hash,
    })
}

fn write_manifest(manifest: &Manifest, out_dir: &Path) -> Result<()> {
    let path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
    Ok(())
}
