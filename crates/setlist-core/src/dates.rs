//! Date decoding for spreadsheet cells.
//!
//! Sheets mix native date cells, Excel serial numbers and hand-typed strings
//! in the same column. [`decode`] tries each encoding in a fixed order and
//! returns `None` instead of failing, so one bad row never aborts a sheet.
//!
//! Order of attempts:
//! 1. native date value
//! 2. Excel 1900-system serial (see [`from_serial`])
//! 3. ISO-like `YYYY-MM-DD` prefix
//! 4. US `M/D/YYYY`
//! 5. a fixed list of generic calendar formats

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::record::CellValue;

/// Largest serial Excel accepts (9999-12-31).
pub const MAX_SERIAL: i64 = 2_958_465;

/// Excel's fictitious 1900-02-29.
pub const PHANTOM_LEAP_DAY_SERIAL: i64 = 60;

const SECONDS_PER_DAY: i64 = 86_400;

static ISO_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("ISO prefix pattern is valid")
});

static US_SLASHED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})(?:\s|$)").expect("US date pattern is valid")
});

/// Date-time layouts tried by the generic fallback.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts tried by the generic fallback.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m-%d-%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %b %d %Y",
    "%A, %B %d, %Y",
    "%m/%d/%y",
];

/// Decode a cell into a date-time, or `None` when no encoding applies.
#[must_use]
pub fn decode(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Empty => None,
        CellValue::Date(dt) => Some(*dt),
        CellValue::Number(serial) => from_serial(*serial),
        CellValue::Text(text) => parse_text(text),
    }
}

/// [`decode`] truncated to the calendar day.
#[must_use]
pub fn decode_day(value: &CellValue) -> Option<NaiveDate> {
    decode(value).map(|dt| dt.date())
}

/// Convert an Excel 1900-system serial to a date-time.
///
/// Serial 1 is 1900-01-01. Excel counts a 1900-02-29 that never existed, so
/// serials 1..=59 sit one day later against the 1899-12-30 epoch than serials
/// from 61 on. Serial 60 itself rolls over to 1900-03-01. The fraction is the
/// time of day, rounded to the second.
#[must_use]
pub fn from_serial(serial: f64) -> Option<NaiveDateTime> {
    #[allow(clippy::cast_precision_loss)]
    let upper = (MAX_SERIAL + 1) as f64;
    if !serial.is_finite() || serial < 1.0 || serial >= upper {
        return None;
    }

    #[allow(clippy::cast_possible_truncation)]
    let mut days = serial.trunc() as i64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    let mut seconds = (serial.fract() * SECONDS_PER_DAY as f64).round() as i64;
    if seconds >= SECONDS_PER_DAY {
        days += 1;
        seconds -= SECONDS_PER_DAY;
    }

    let date = match days {
        d if d < PHANTOM_LEAP_DAY_SERIAL => {
            epoch_pre_leap()?.checked_add_signed(Duration::days(d))?
        }
        PHANTOM_LEAP_DAY_SERIAL => NaiveDate::from_ymd_opt(1900, 3, 1)?,
        _ => epoch()?.checked_add_signed(Duration::days(days))?,
    };

    date.and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::seconds(seconds))
}

/// Re-encode a calendar day as an Excel 1900-system serial.
///
/// Inverse of [`from_serial`] for every serial except 60, which decodes to
/// 1900-03-01 and therefore re-encodes as 61. Days before 1900-01-01 or after
/// 9999-12-31 have no serial.
#[must_use]
pub fn to_serial(day: NaiveDate) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let last_before_leap = NaiveDate::from_ymd_opt(1900, 2, 28)?;

    if day < first {
        return None;
    }

    let serial = if day <= last_before_leap {
        (day - epoch_pre_leap()?).num_days()
    } else {
        (day - epoch()?).num_days()
    };

    (serial <= MAX_SERIAL).then_some(serial)
}

fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

fn epoch_pre_leap() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 31)
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    parse_iso_prefix(text)
        .or_else(|| parse_us_slashed(text))
        .or_else(|| parse_generic(text))
}

fn parse_iso_prefix(text: &str) -> Option<NaiveDateTime> {
    let caps = ISO_PREFIX.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

fn parse_us_slashed(text: &str) -> Option<NaiveDateTime> {
    let caps = US_SLASHED.captures(text)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day).map(|d| d.and_time(NaiveTime::MIN))
}

fn parse_generic(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(1.0, ymd(1900, 1, 1))]
    #[case(59.0, ymd(1900, 2, 28))]
    #[case(60.0, ymd(1900, 3, 1))]
    #[case(61.0, ymd(1900, 3, 1))]
    #[case(45_298.0, ymd(2024, 1, 7))]
    #[case(2_958_465.0, ymd(9999, 12, 31))]
    fn serials_decode_to_calendar_days(#[case] serial: f64, #[case] expected: NaiveDate) {
        assert_eq!(from_serial(serial).map(|dt| dt.date()), Some(expected));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(2_958_466.0)]
    fn out_of_range_serials_have_no_date(#[case] serial: f64) {
        assert_eq!(from_serial(serial), None);
    }

    #[test]
    fn serial_fraction_becomes_time_of_day() {
        let dt = from_serial(45_298.75).unwrap();
        assert_eq!(dt.date(), ymd(2024, 1, 7));
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    }

    #[test]
    fn serial_fraction_rounding_carries_into_next_day() {
        let dt = from_serial(45_298.999_999_9).unwrap();
        assert_eq!(dt.date(), ymd(2024, 1, 8));
        assert_eq!(dt.time(), NaiveTime::MIN);
    }

    #[test]
    fn serial_round_trip_outside_phantom_leap_day() {
        for serial in (1..=59).chain(61..=400).chain([45_298, 50_000, MAX_SERIAL]) {
            #[allow(clippy::cast_precision_loss)]
            let day = from_serial(serial as f64).unwrap().date();
            assert_eq!(to_serial(day), Some(serial), "serial {serial}");
        }
    }

    #[test]
    fn phantom_leap_day_reencodes_as_march_first() {
        let day = from_serial(60.0).unwrap().date();
        assert_eq!(to_serial(day), Some(61));
    }

    #[test]
    fn to_serial_rejects_days_before_epoch() {
        assert_eq!(to_serial(ymd(1899, 12, 31)), None);
    }

    #[rstest]
    #[case("2024-01-07", ymd(2024, 1, 7))]
    #[case("2024-01-07T09:30:00Z", ymd(2024, 1, 7))]
    #[case("  2024-01-07 extra", ymd(2024, 1, 7))]
    #[case("2024-1-7", ymd(2024, 1, 7))]
    #[case("2024-01-7", ymd(2024, 1, 7))]
    #[case("1-7-2024", ymd(2024, 1, 7))]
    #[case("12-25-2023", ymd(2023, 12, 25))]
    #[case("1/7/2024", ymd(2024, 1, 7))]
    #[case("01/07/2024", ymd(2024, 1, 7))]
    #[case("12/25/2023 10:00", ymd(2023, 12, 25))]
    #[case("2024/01/07", ymd(2024, 1, 7))]
    #[case("January 7, 2024", ymd(2024, 1, 7))]
    #[case("Jan 7, 2024", ymd(2024, 1, 7))]
    #[case("7 January 2024", ymd(2024, 1, 7))]
    #[case("Sun Jan 07 2024", ymd(2024, 1, 7))]
    #[case("Sun, 07 Jan 2024 10:00:00 +0000", ymd(2024, 1, 7))]
    fn text_encodings_decode(#[case] text: &str, #[case] expected: NaiveDate) {
        assert_eq!(decode_day(&CellValue::from(text)), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("not a date")]
    #[case("2024-13-40")]
    #[case("13/40/2024")]
    #[case("45298")]
    fn undecodable_text_has_no_date(#[case] text: &str) {
        assert_eq!(decode(&CellValue::from(text)), None);
    }

    #[test]
    fn native_dates_pass_through() {
        let dt = ymd(2024, 1, 7).and_hms_opt(11, 0, 0).unwrap();
        assert_eq!(decode(&CellValue::Date(dt)), Some(dt));
    }

    #[test]
    fn empty_cell_has_no_date() {
        assert_eq!(decode(&CellValue::Empty), None);
    }
}
