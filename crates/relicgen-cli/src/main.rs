//! Relicgen CLI - renders relic icons for the card game UI
//!
//! With no arguments this writes every icon of the built-in table to
//! `public/relics/`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use relicgen_cli::commands::generate::{GenerateOptions, DEFAULT_OUT_DIR};
use relicgen_cli::{commands, logging};

/// Relicgen - Relic Icon Generator
#[derive(Parser)]
#[command(name = "relicgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render relic icons to PNG files (the default command)
    Generate(GenerateArgs),

    /// List the relic table
    List {
        /// JSON file replacing the built-in relic table
        #[arg(long)]
        table: Option<PathBuf>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Clone)]
struct GenerateArgs {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Only generate this relic id (repeatable)
    #[arg(long, value_name = "ID")]
    only: Vec<String>,

    /// JSON file replacing the built-in relic table
    #[arg(long)]
    table: Option<PathBuf>,

    /// Font file tried before the system fonts (repeatable)
    #[arg(long, value_name = "PATH")]
    font: Vec<PathBuf>,

    /// Skip the system fonts; use --font files and the built-in font only
    #[arg(long)]
    no_system_fonts: bool,

    /// Write manifest.json with sizes and BLAKE3 hashes
    #[arg(long)]
    manifest: bool,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            out_dir: args.out_dir,
            only: args.only,
            table: args.table,
            fonts: args.font,
            system_fonts: !args.no_system_fonts,
            manifest: args.manifest,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(&args.into()),
        Some(Commands::List { table, json }) => commands::list::run(table.as_deref(), json),
        None => commands::generate::run(&cli.generate.into()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
