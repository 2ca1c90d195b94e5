//! Column resolution against inconsistent spreadsheet headers.
//!
//! Headers are compared after lower-casing and stripping everything that is
//! not alphanumeric, so `"Service Date"`, `"service_date"` and `"ServiceDate"`
//! all match the candidate `ServiceDate`.

use crate::record::{CellValue, RawRecord};

/// Candidate headers for the event date, in priority order.
pub const DATE_COLUMNS: &[&str] = &["Date", "ServiceDate", "Day", "Service Date"];

/// Candidate headers for the event title.
pub const TITLE_COLUMNS: &[&str] = &["Song", "Title", "Hymn", "Hymn Title"];

/// Candidate headers for the optional topic.
pub const TOPIC_COLUMNS: &[&str] = &["Topic", "Notes", "Theme"];

/// Candidate headers for the source / songbook category.
///
/// `Column1` is what an unnamed source column comes out as after export.
pub const SOURCE_COLUMNS: &[&str] = &[
    "Book",
    "Source",
    "Songbook",
    "Category",
    "Collection",
    "Column1",
];

/// Candidate headers for the licensing catalogue number.
pub const CCLI_COLUMNS: &[&str] = &["CCLI Number", "CCLI", "CCLI #"];

static EMPTY: CellValue = CellValue::Empty;

/// Lower-case a header and drop every non-alphanumeric character.
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return the first non-blank cell found under any candidate header.
///
/// Candidates are tried in order; a candidate whose column exists but is blank
/// falls through to the next one. Within a candidate, the first matching
/// column in record order wins. Returns [`CellValue::Empty`] when nothing
/// matches.
#[must_use]
pub fn resolve<'a>(record: &'a RawRecord, candidates: &[&str]) -> &'a CellValue {
    candidates
        .iter()
        .map(|candidate| normalize_label(candidate))
        .find_map(|wanted| {
            record
                .iter()
                .find(|(label, value)| !value.is_blank() && normalize_label(label) == wanted)
                .map(|(_, value)| value)
        })
        .unwrap_or(&EMPTY)
}

/// [`resolve`] rendered as trimmed text.
#[must_use]
pub fn resolve_text(record: &RawRecord, candidates: &[&str]) -> String {
    resolve(record, candidates).to_text()
}
