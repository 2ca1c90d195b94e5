use chrono::NaiveDate;
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `setlist` binary.
#[derive(Debug, Parser)]
#[command(
    name = "setlist",
    version,
    about = "setlist - service-day lookup, song rankings and usage trends"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colours: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Record file (JSON array or JSON Lines); defaults to `source.path` from config
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    /// Sheet to read from a multi-sheet record file
    #[arg(short, long, global = true)]
    pub sheet: Option<String>,

    /// Reference day (YYYY-MM-DD) instead of the local clock
    #[arg(short, long, global = true)]
    pub today: Option<NaiveDate>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            input: self.input.clone(),
            sheet: self.sheet.clone(),
            today: self.today,
        }
    }
}
