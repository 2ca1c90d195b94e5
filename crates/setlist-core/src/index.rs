//! Day-keyed index over events with nearest upcoming / previous lookup.

use std::collections::BTreeMap;
use std::ops::Bound;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// All events of a single service day, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// Events grouped by calendar day. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct TemporalIndex {
    days: BTreeMap<NaiveDate, Vec<Event>>,
}

impl TemporalIndex {
    #[must_use]
    pub fn build(events: &[Event]) -> Self {
        let mut days: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for event in events {
            days.entry(event.date).or_default().push(event.clone());
        }
        Self { days }
    }

    /// Earliest indexed day on or after `reference`.
    #[must_use]
    pub fn nearest_upcoming(&self, reference: NaiveDate) -> Option<DayEvents> {
        self.days
            .range(reference..)
            .next()
            .map(|(date, events)| DayEvents {
                date: *date,
                events: events.clone(),
            })
    }

    /// Latest indexed day strictly before `reference`.
    #[must_use]
    pub fn nearest_previous(&self, reference: NaiveDate) -> Option<DayEvents> {
        self.days
            .range((Bound::Unbounded, Bound::Excluded(reference)))
            .next_back()
            .map(|(date, events)| DayEvents {
                date: *date,
                events: events.clone(),
            })
    }

    /// Events on exactly `day`; empty when nothing is indexed for it.
    #[must_use]
    pub fn on(&self, day: NaiveDate) -> &[Event] {
        self.days.get(&day).map_or(&[][..], Vec::as_slice)
    }

    /// Distinct indexed days, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Stable, sortable string key for a calendar day (`YYYY-MM-DD`).
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Build an index over `events` and return the nearest day on or after
/// `reference`.
#[must_use]
pub fn nearest_upcoming(events: &[Event], reference: NaiveDate) -> Option<DayEvents> {
    TemporalIndex::build(events).nearest_upcoming(reference)
}

/// Build an index over `events` and return the nearest day before
/// `reference`.
#[must_use]
pub fn nearest_previous(events: &[Event], reference: NaiveDate) -> Option<DayEvents> {
    TemporalIndex::build(events).nearest_previous(reference)
}
