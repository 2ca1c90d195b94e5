//! # setlist-core
//!
//! Event normalization and temporal aggregation for setlist spreadsheets.
//!
//! Raw rows come in with inconsistent headers and mixed date encodings. This
//! crate turns them into canonical [`Event`]s and answers the queries the
//! reporting layer needs:
//! - Column resolution against ordered candidate header names
//! - Date decoding (native dates, Excel serials, ISO and US strings)
//! - Nearest upcoming / previous service day lookup
//! - Per-day deduplicated title ranking over a trailing window
//! - Zero-filled weekly series (Sunday week start)
//! - Source tally, rotation KPIs, usage fact rows and song / date dimensions
//!
//! Every time-relative operation takes the reference day or instant as an
//! argument. Nothing in this crate reads the system clock or performs I/O.

pub mod columns;
pub mod dates;
pub mod errors;
pub mod event;
pub mod facts;
pub mod index;
pub mod normalize;
pub mod ranking;
pub mod record;
pub mod rotation;
pub mod tally;
pub mod weekly;
pub mod window;

pub use event::{Event, UNKNOWN_SOURCE};
pub use facts::{
    DateDimension, SongDimension, UsageFact, date_dimension, song_dimension, usage_facts,
};
pub use index::{DayEvents, TemporalIndex, nearest_previous, nearest_upcoming};
pub use normalize::normalize;
pub use ranking::{RankedTitle, top_ranked};
pub use record::{CellValue, RawRecord};
pub use rotation::{RotationReport, RotationThresholds, TitleRotation, rotation_report};
pub use tally::{SourceCount, category_tally};
pub use weekly::{MAX_SERIES_WEEKS, WeekCount, weekly_series};
pub use window::Window;
