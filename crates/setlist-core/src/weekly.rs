//! Zero-filled weekly usage series.
//!
//! Weeks start on Sunday. Unlike [`crate::ranking`], every countable event is
//! tallied, including same-day repeats: the series measures volume.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::event::{Event, is_excluded_title};

/// Longest series callers should request: one hundred years of weeks.
pub const MAX_SERIES_WEEKS: u32 = 5200;

/// Count for one Sunday-started week.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WeekCount {
    pub week_start: NaiveDate,
    /// `week_start` as `YYYY-MM-DD`.
    pub label: String,
    pub count: u32,
}

/// The Sunday on or before `day`.
#[must_use]
pub fn week_start(day: NaiveDate) -> NaiveDate {
    let offset = i64::from(day.weekday().num_days_from_sunday());
    day.checked_sub_signed(Duration::days(offset)).unwrap_or(day)
}

/// Exactly `weeks` entries, oldest first, ending with the week containing
/// `reference`. Weeks without events are present with a zero count; `weeks`
/// of zero yields an empty series.
#[must_use]
pub fn weekly_series(events: &[Event], weeks: u32, reference: NaiveDateTime) -> Vec<WeekCount> {
    let current = week_start(reference.date());

    let mut buckets: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for back in 0..weeks {
        let offset = Duration::weeks(i64::from(back));
        if let Some(start) = current.checked_sub_signed(offset) {
            buckets.insert(start, 0);
        }
    }

    for event in events {
        if is_excluded_title(&event.title_key()) {
            continue;
        }
        if let Some(count) = buckets.get_mut(&week_start(event.date)) {
            *count += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(week_start, count)| WeekCount {
            week_start,
            label: week_start.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::UNKNOWN_SOURCE;
    use chrono::{NaiveTime, Weekday};
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at_noon(day: NaiveDate) -> NaiveDateTime {
        day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    }

    fn event(date: NaiveDate, title: &str) -> Event {
        Event {
            date,
            title: title.into(),
            topic: String::new(),
            source: UNKNOWN_SOURCE.into(),
            ccli: String::new(),
        }
    }

    #[test]
    fn week_start_is_previous_or_same_sunday() {
        assert_eq!(week_start(ymd(2024, 1, 7)), ymd(2024, 1, 7));
        assert_eq!(week_start(ymd(2024, 1, 13)), ymd(2024, 1, 7));
        assert_eq!(week_start(ymd(2024, 1, 10)).weekday(), Weekday::Sun);
    }

    #[test]
    fn empty_input_is_zero_filled() {
        let series = weekly_series(&[], 4, at_noon(ymd(2024, 1, 17)));
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|week| week.count == 0));
        let labels: Vec<&str> = series.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2023-12-24", "2023-12-31", "2024-01-07", "2024-01-14"]
        );
    }

    #[test]
    fn counts_raw_volume_including_same_day_repeats() {
        let events = vec![
            event(ymd(2024, 1, 7), "Amazing Grace"),
            event(ymd(2024, 1, 7), "Amazing Grace"),
            event(ymd(2024, 1, 10), "Doxology"),
            event(ymd(2024, 1, 14), "It Is Well"),
        ];
        let series = weekly_series(&events, 2, at_noon(ymd(2024, 1, 16)));
        let counts: Vec<u32> = series.iter().map(|w| w.count).collect();
        assert_eq!(counts, vec![3, 1]);
    }

    #[test]
    fn placeholders_and_out_of_range_events_are_ignored() {
        let events = vec![
            event(ymd(2023, 12, 1), "Too Old"),
            event(ymd(2024, 1, 14), "N/A"),
            event(ymd(2024, 1, 14), "Church closed"),
            event(ymd(2024, 1, 21), "Next Week"),
            event(ymd(2024, 1, 14), "Counted"),
        ];
        let series = weekly_series(&events, 3, at_noon(ymd(2024, 1, 14)));
        let counts: Vec<u32> = series.iter().map(|w| w.count).collect();
        assert_eq!(counts, vec![0, 0, 1]);
    }

    #[test]
    fn zero_weeks_yields_empty_series() {
        let events = vec![event(ymd(2024, 1, 14), "Doxology")];
        assert!(weekly_series(&events, 0, at_noon(ymd(2024, 1, 14))).is_empty());
    }

    #[test]
    fn always_returns_requested_length() {
        let events = vec![event(ymd(2020, 6, 7), "Old Hymn")];
        for weeks in [1, 12, 52] {
            assert_eq!(
                weekly_series(&events, weeks, at_noon(ymd(2024, 1, 14))).len(),
                weeks as usize
            );
        }
    }
}
