use clap::{Args, Subcommand, ValueEnum};
use setlist_core::{MAX_SERIES_WEEKS, Window};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Songs for the nearest service day on or after today.
    Upcoming,
    /// Songs for the most recent service day before today.
    Previous,
    /// Most used songs over a trailing window (one use per service day).
    Top(WindowArgs),
    /// Song count per week, zero-filled.
    Weekly(WeeklyArgs),
    /// Song count per songbook / source.
    Sources(WindowArgs),
    /// Rotation KPIs: average gap between uses, overused and underused songs.
    Rotation(RotationArgs),
    /// One row per song per service day with gaps and calendar attributes.
    Facts,
    /// One row per song with its first CCLI number, topic and source.
    Songs,
    /// One row per service day with calendar attributes.
    Dates,
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

/// Arguments for commands that take a trailing window.
#[derive(Clone, Debug, Args)]
pub struct WindowArgs {
    /// Trailing window: a week count (`52`, `12w`) or `all`
    #[arg(short, long)]
    pub weeks: Option<Window>,
}

/// Arguments for `setlist weekly`.
#[derive(Clone, Debug, Args)]
pub struct WeeklyArgs {
    /// Number of weeks in the series, ending with the current week
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_SERIES_WEEKS))
    )]
    pub weeks: Option<u32>,
}

/// Which rotation flag to list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RotationFilter {
    Overused,
    Underused,
}

/// Arguments for `setlist rotation`.
#[derive(Clone, Debug, Args)]
pub struct RotationArgs {
    /// Average gap (days) below which a song counts as overused
    #[arg(long)]
    pub overused_days: Option<u32>,
    /// Idle days above which a song counts as underused
    #[arg(long)]
    pub underused_days: Option<u32>,
    /// Only list songs carrying this flag
    #[arg(long)]
    pub only: Option<RotationFilter>,
}

/// Output types with a published schema.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Event,
    Day,
    Ranked,
    Week,
    Source,
    Rotation,
    Fact,
    Song,
    Date,
}

/// Arguments for `setlist schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
