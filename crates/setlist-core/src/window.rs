//! Trailing time windows.
//!
//! A bounded window of `n` weeks covers the `n * 7` days ending at, and
//! including, the reference day: `[reference - (n*7 - 1), reference]`.
//! A zero-week window covers nothing.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// Every event, past and future.
    AllTime,
    /// The trailing `n` weeks ending at the reference day.
    TrailingWeeks(u32),
}

impl Window {
    /// Inclusive `(first, last)` days covered, `None` for [`Window::AllTime`].
    ///
    /// A zero-week window returns a range whose first day is after its last,
    /// so nothing is [`contains`](Self::contains)-ed.
    #[must_use]
    pub fn bounds(self, reference: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::AllTime => None,
            Self::TrailingWeeks(0) => Some((reference.succ_opt().unwrap_or(reference), reference)),
            Self::TrailingWeeks(weeks) => {
                let span = Duration::days(i64::from(weeks) * 7 - 1);
                let first = reference
                    .checked_sub_signed(span)
                    .unwrap_or(NaiveDate::MIN);
                Some((first, reference))
            }
        }
    }

    #[must_use]
    pub fn contains(self, day: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::AllTime => true,
            Self::TrailingWeeks(0) => false,
            Self::TrailingWeeks(_) => self
                .bounds(reference)
                .is_some_and(|(first, last)| first <= day && day <= last),
        }
    }

    /// Events whose day falls inside the window.
    pub fn filter<'a>(
        self,
        events: &'a [Event],
        reference: NaiveDate,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        events
            .iter()
            .filter(move |event| self.contains(event.date, reference))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllTime => f.write_str("all"),
            Self::TrailingWeeks(weeks) => write!(f, "{weeks}w"),
        }
    }
}

impl FromStr for Window {
    type Err = CoreError;

    /// Accepts `all` (or `all-time`), a bare week count, or a count with a
    /// trailing `w`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        match trimmed.as_str() {
            "all" | "all-time" | "alltime" | "all_time" => Ok(Self::AllTime),
            other => other
                .strip_suffix('w')
                .unwrap_or(other)
                .parse::<u32>()
                .map(Self::TrailingWeeks)
                .map_err(|_| CoreError::InvalidWindow {
                    input: s.to_string(),
                }),
        }
    }
}
