//! Raw rows to canonical [`Event`]s.
//!
//! Each row is resolved through [`crate::columns`] and [`crate::dates`]. Rows
//! without a decodable date or a non-blank title are dropped without error;
//! downstream consumers only ever see `Event`s.

use crate::columns::{
    CCLI_COLUMNS, DATE_COLUMNS, SOURCE_COLUMNS, TITLE_COLUMNS, TOPIC_COLUMNS, resolve,
    resolve_text,
};
use crate::dates;
use crate::event::{Event, UNKNOWN_SOURCE};
use crate::record::RawRecord;

/// Normalize a batch of rows. The result is never longer than the input.
#[must_use]
pub fn normalize(records: &[RawRecord]) -> Vec<Event> {
    let events: Vec<Event> = records
        .iter()
        .enumerate()
        .filter_map(|(row, record)| {
            let event = normalize_record(record);
            if event.is_none() {
                tracing::trace!(row, "dropping row without a usable date or title");
            }
            event
        })
        .collect();

    tracing::debug!(
        rows = records.len(),
        kept = events.len(),
        dropped = records.len() - events.len(),
        "normalized setlist rows"
    );

    events
}

/// Normalize a single row, or `None` when it has no date or title.
#[must_use]
pub fn normalize_record(record: &RawRecord) -> Option<Event> {
    let title = resolve_text(record, TITLE_COLUMNS);
    if title.is_empty() {
        return None;
    }

    let date = dates::decode_day(resolve(record, DATE_COLUMNS))?;

    let source = resolve_text(record, SOURCE_COLUMNS);
    let source = if source.is_empty() {
        UNKNOWN_SOURCE.to_string()
    } else {
        source
    };

    Some(Event {
        date,
        title,
        topic: resolve_text(record, TOPIC_COLUMNS),
        source,
        ccli: resolve_text(record, CCLI_COLUMNS),
    })
}
