//! Title frequency ranking with per-day deduplication.
//!
//! A title counts at most once per calendar day no matter how many rows
//! repeat it; uses on different days all count. Placeholder titles (see
//! [`is_excluded_title`]) never count.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::event::{Event, is_excluded_title};
use crate::window::Window;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RankedTitle {
    pub title: String,
    pub count: u32,
}

/// Distinct use days of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TitleUses {
    /// First spelling seen in input order.
    pub title: String,
    pub days: BTreeSet<NaiveDate>,
}

/// Group countable events by title key, collecting the distinct days each
/// title was used on.
pub(crate) fn use_days<'a>(
    events: impl IntoIterator<Item = &'a Event>,
) -> BTreeMap<String, TitleUses> {
    let mut uses: BTreeMap<String, TitleUses> = BTreeMap::new();
    for event in events {
        let key = event.title_key();
        if is_excluded_title(&key) {
            continue;
        }
        uses.entry(key)
            .or_insert_with(|| TitleUses {
                title: event.title.trim().to_string(),
                days: BTreeSet::new(),
            })
            .days
            .insert(event.date);
    }
    uses
}

/// Rank titles by the number of distinct days used within `window`.
///
/// Sorted by count descending, then case-insensitive title ascending. `limit`
/// truncates the result; `None` returns every title.
#[must_use]
pub fn top_ranked(
    events: &[Event],
    window: Window,
    reference: NaiveDate,
    limit: Option<usize>,
) -> Vec<RankedTitle> {
    let uses = use_days(window.filter(events, reference));

    let mut ranked: Vec<(String, RankedTitle)> = uses
        .into_iter()
        .map(|(key, uses)| {
            let count = u32::try_from(uses.days.len()).unwrap_or(u32::MAX);
            (
                key,
                RankedTitle {
                    title: uses.title,
                    count,
                },
            )
        })
        .collect();

    ranked.sort_by(|(a_key, a), (b_key, b)| b.count.cmp(&a.count).then_with(|| a_key.cmp(b_key)));

    let ranked = ranked.into_iter().map(|(_, entry)| entry);
    match limit {
        Some(limit) => ranked.take(limit).collect(),
        None => ranked.collect(),
    }
}
