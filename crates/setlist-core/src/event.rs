use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source bucket for rows that name no songbook or category.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// A song used in a service on a given day.
///
/// Built only by [`crate::normalize`]; a row without a decodable date or a
/// non-blank title never becomes an `Event`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Event {
    pub date: NaiveDate,
    pub title: String,
    /// Empty when the sheet has no topic for the row.
    #[serde(default)]
    pub topic: String,
    pub source: String,
    /// CCLI licensing number, empty when absent.
    #[serde(default)]
    pub ccli: String,
}

impl Event {
    /// Identity key used for deduplication and ranking.
    #[must_use]
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }
}

/// Lower-case and trim a title.
#[must_use]
pub fn title_key(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Titles that are placeholders rather than songs: blank, `na`, `n/a`, or a
/// "church closed" note. Applies to ranking, weekly series and rotation, not
/// to the source tally.
#[must_use]
pub fn is_excluded_title(key: &str) -> bool {
    key.is_empty() || key == "na" || key == "n/a" || key.contains("church close")
}
