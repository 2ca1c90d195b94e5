use std::path::PathBuf;

use anyhow::bail;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use setlist_config::SetlistConfig;
use setlist_core::{Event, normalize};

use crate::cli::GlobalFlags;
use crate::source;

/// Shared application state initialized once at startup.
pub struct AppContext {
    pub config: SetlistConfig,
    pub events: Vec<Event>,
    /// Reference instant for every time-relative query.
    pub now: NaiveDateTime,
}

impl AppContext {
    /// Load the record file and normalize it into events.
    pub fn init(config: SetlistConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = input_path(&config, flags)?;
        let sheet = flags.sheet.as_deref().or_else(|| config.source.sheet());

        let records = source::load_records(&path, sheet)?;
        let events = normalize(&records);
        tracing::debug!(
            records = records.len(),
            events = events.len(),
            "normalized record file"
        );

        Ok(Self {
            config,
            events,
            now: reference_instant(flags.today),
        })
    }

    /// Reference day for day-granular queries.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

fn input_path(config: &SetlistConfig, flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    if let Some(input) = flags.input.as_deref() {
        return Ok(PathBuf::from(input));
    }
    if config.source.is_configured() {
        return Ok(PathBuf::from(config.source.path.trim()));
    }
    bail!("no record file: pass --input or set source.path (SETLIST_SOURCE__PATH)")
}

/// `--today` pins the reference to midnight of that day; otherwise the local clock.
fn reference_instant(today: Option<NaiveDate>) -> NaiveDateTime {
    today.map_or_else(
        || chrono::Local::now().naive_local(),
        |day| day.and_time(NaiveTime::MIN),
    )
}
