//! Event counts per source (songbook, category, collection).

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::event::Event;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: u32,
}

/// Count events per source, highest count first, ties by source name.
///
/// Every event counts, placeholders included; `"Unknown"` is an ordinary
/// bucket. Pass [`crate::Window::filter`] output to tally a window.
#[must_use]
pub fn category_tally<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<SourceCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for event in events {
        *counts.entry(event.source.as_str()).or_insert(0) += 1;
    }

    let mut tally: Vec<SourceCount> = counts
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.source.cmp(&b.source)));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::UNKNOWN_SOURCE;
    use crate::window::Window;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event(day: u32, title: &str, source: &str) -> Event {
        Event {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            title: title.into(),
            topic: String::new(),
            source: source.into(),
            ccli: String::new(),
        }
    }

    #[test]
    fn counts_sorted_descending_with_unknown_bucket() {
        let events = vec![
            event(7, "A", "HBNA Songbook"),
            event(7, "B", UNKNOWN_SOURCE),
            event(14, "C", "HBNA Songbook"),
            event(14, "N/A", "Contemporary"),
            event(21, "D", UNKNOWN_SOURCE),
            event(21, "E", "HBNA Songbook"),
        ];
        assert_eq!(
            category_tally(&events),
            vec![
                SourceCount {
                    source: "HBNA Songbook".into(),
                    count: 3
                },
                SourceCount {
                    source: UNKNOWN_SOURCE.into(),
                    count: 2
                },
                SourceCount {
                    source: "Contemporary".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn tallies_a_window() {
        let events = vec![
            event(1, "A", "Old Book"),
            event(14, "B", "New Book"),
        ];
        let reference = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        let tally = category_tally(Window::TrailingWeeks(1).filter(&events, reference));
        assert_eq!(
            tally,
            vec![SourceCount {
                source: "New Book".into(),
                count: 1
            }]
        );
    }

    #[test]
    fn empty_input_tallies_nothing() {
        assert!(category_tally(&[]).is_empty());
    }
}
