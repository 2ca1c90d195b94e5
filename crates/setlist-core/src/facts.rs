//! Reporting tables: usage fact rows (one per title per service day, with the
//! gap since the title's previous use), plus song and date dimensions keyed
//! the same way.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::event::{Event, is_excluded_title};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct UsageFact {
    pub date: NaiveDate,
    pub title: String,
    pub topic: String,
    pub source: String,
    pub ccli: String,
    pub days_since_last: Option<i64>,
    pub weeks_since_last: Option<f64>,
    pub is_first_occurrence: bool,
    pub year: i32,
    pub month: u32,
    /// Abbreviated English month name (`Jan`, `Feb`, ...).
    pub month_name: String,
    /// Calendar quarter as `YYYYQn`.
    pub quarter: String,
    pub iso_week: u32,
}

/// Build fact rows ordered by title (case-insensitive), then date.
///
/// Same-day repeats of a title collapse into the first row seen for that day.
/// Placeholder titles are skipped.
#[must_use]
pub fn usage_facts(events: &[Event]) -> Vec<UsageFact> {
    let mut firsts: BTreeMap<(String, NaiveDate), &Event> = BTreeMap::new();
    for event in events {
        let key = event.title_key();
        if is_excluded_title(&key) {
            continue;
        }
        firsts.entry((key, event.date)).or_insert(event);
    }

    let mut facts = Vec::with_capacity(firsts.len());
    let mut previous: Option<(&str, NaiveDate)> = None;

    for ((key, date), event) in &firsts {
        let days_since_last = previous
            .filter(|(prev_key, _)| *prev_key == key.as_str())
            .map(|(_, prev_date)| (*date - prev_date).num_days());

        #[allow(clippy::cast_precision_loss)]
        let weeks_since_last = days_since_last.map(|days| days as f64 / 7.0);

        facts.push(UsageFact {
            date: *date,
            title: event.title.trim().to_string(),
            topic: event.topic.clone(),
            source: event.source.clone(),
            ccli: event.ccli.clone(),
            days_since_last,
            weeks_since_last,
            is_first_occurrence: days_since_last.is_none(),
            year: date.year(),
            month: date.month(),
            month_name: month_name(*date),
            quarter: quarter(*date),
            iso_week: date.iso_week().week(),
        });

        previous = Some((key.as_str(), *date));
    }

    facts
}

/// One row per distinct title.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SongDimension {
    /// Surrogate key, 1-based, in case-insensitive title order.
    pub song_id: u32,
    pub title: String,
    pub ccli: String,
    pub topic: String,
    pub source: String,
}

/// One row per distinct service day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DateDimension {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub quarter: String,
    pub iso_week: u32,
}

/// Build the song dimension.
///
/// Each attribute is the first non-empty value in date order. The display
/// title is the spelling of the earliest use. Placeholder titles are skipped.
#[must_use]
pub fn song_dimension(events: &[Event]) -> Vec<SongDimension> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by_key(|event| event.date);

    let mut songs: BTreeMap<String, SongDimension> = BTreeMap::new();
    for event in ordered {
        let key = event.title_key();
        if is_excluded_title(&key) {
            continue;
        }
        let song = songs.entry(key).or_insert_with(|| SongDimension {
            song_id: 0,
            title: event.title.trim().to_string(),
            ccli: String::new(),
            topic: String::new(),
            source: String::new(),
        });
        fill_first(&mut song.ccli, &event.ccli);
        fill_first(&mut song.topic, &event.topic);
        fill_first(&mut song.source, &event.source);
    }

    songs
        .into_values()
        .zip(1..)
        .map(|(song, song_id)| SongDimension { song_id, ..song })
        .collect()
}

/// Build the date dimension: distinct days carrying at least one counted
/// title, oldest first.
#[must_use]
pub fn date_dimension(events: &[Event]) -> Vec<DateDimension> {
    let days: BTreeSet<NaiveDate> = events
        .iter()
        .filter(|event| !is_excluded_title(&event.title_key()))
        .map(|event| event.date)
        .collect();

    days.into_iter()
        .map(|date| DateDimension {
            date,
            year: date.year(),
            month: date.month(),
            month_name: month_name(date),
            quarter: quarter(date),
            iso_week: date.iso_week().week(),
        })
        .collect()
}

fn fill_first(slot: &mut String, value: &str) {
    let value = value.trim();
    if slot.is_empty() && !value.is_empty() {
        *slot = value.to_string();
    }
}

/// Abbreviated English month name.
fn month_name(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Calendar quarter as `YYYYQn`.
fn quarter(date: NaiveDate) -> String {
    format!("{}Q{}", date.year(), date.month0() / 3 + 1)
}
