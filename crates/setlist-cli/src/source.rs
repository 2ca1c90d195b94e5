//! Record file loading.
//!
//! Accepted layouts:
//! - a JSON array of row objects
//! - JSON Lines, one row object per line
//! - an object of named sheets, each an array of row objects
//! - a single row object

use std::path::Path;

use anyhow::{Context, bail};
use serde_json::{Map, Value};
use setlist_core::{CellValue, RawRecord};

/// Read and parse the record file at `path`.
pub fn load_records(path: &Path, sheet: Option<&str>) -> anyhow::Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read record file {}", path.display()))?;
    let records = parse_records(&content, sheet)
        .with_context(|| format!("failed to parse record file {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = records.len(), "loaded records");
    Ok(records)
}

/// Parse record file content. Blank content yields no rows.
pub fn parse_records(content: &str, sheet: Option<&str>) -> anyhow::Result<Vec<RawRecord>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(content) {
        Ok(Value::Array(rows)) => Ok(rows_to_records(&rows)),
        Ok(Value::Object(map)) => object_to_records(map, sheet),
        Ok(other) => bail!("expected an array or object of rows, found {}", kind(&other)),
        Err(_) => parse_json_lines(content),
    }
}

fn object_to_records(
    map: Map<String, Value>,
    sheet: Option<&str>,
) -> anyhow::Result<Vec<RawRecord>> {
    if let Some(name) = sheet {
        return match map.get(name) {
            Some(Value::Array(rows)) => Ok(rows_to_records(rows)),
            Some(other) => bail!("sheet '{name}' is {}, not an array of rows", kind(other)),
            None => bail!("sheet '{name}' not found"),
        };
    }

    if let Some((name, Value::Array(rows))) = map.iter().find(|(_, value)| value.is_array()) {
        tracing::debug!(sheet = %name, "using first sheet");
        return Ok(rows_to_records(rows));
    }

    Ok(vec![object_to_record(&map)])
}

fn parse_json_lines(content: &str) -> anyhow::Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("invalid JSON on line {}", index + 1))?;
        match value {
            Value::Object(map) => records.push(object_to_record(&map)),
            other => bail!("line {} is {}, not a row object", index + 1, kind(&other)),
        }
    }
    Ok(records)
}

fn rows_to_records(rows: &[Value]) -> Vec<RawRecord> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if let Value::Object(map) = row {
                Some(object_to_record(map))
            } else {
                tracing::warn!(row = index, kind = kind(row), "skipping non-object row");
                None
            }
        })
        .collect()
}

fn object_to_record(map: &Map<String, Value>) -> RawRecord {
    map.iter()
        .map(|(label, value)| (label.as_str(), to_cell(value)))
        .collect()
}

fn to_cell(value: &Value) -> CellValue {
    match value {
        Value::Null => CellValue::Empty,
        Value::Bool(flag) => CellValue::Text(flag.to_string()),
        Value::Number(number) => number
            .as_f64()
            .map_or_else(|| CellValue::Text(number.to_string()), CellValue::Number),
        Value::String(text) => CellValue::Text(text.clone()),
        nested => CellValue::Text(nested.to_string()),
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use setlist_core::{CellValue, RawRecord};

    use super::{load_records, parse_records};

    #[test]
    fn array_of_objects_keeps_column_order() {
        let records = parse_records(
            r#"[{"Date": 45298, "Song": "Amazing Grace", "Book": null, "Live": true}]"#,
            None,
        )
        .unwrap();
        let expected = RawRecord::new()
            .with("Date", 45_298.0)
            .with("Song", "Amazing Grace")
            .with("Book", CellValue::Empty)
            .with("Live", "true");
        assert_eq!(records, vec![expected]);
    }

    #[test]
    fn json_lines_are_accepted() {
        let content = "{\"Date\": \"2024-01-07\", \"Song\": \"Doxology\"}\n\n{\"Date\": \"2024-01-14\", \"Song\": \"It Is Well\"}\n";
        let records = parse_records(content, None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            RawRecord::new().with("Date", "2024-01-14").with("Song", "It Is Well")
        );
    }

    #[test]
    fn json_lines_report_the_bad_line() {
        let content = "{\"Song\": \"Doxology\"}\n{\"Song\": \n";
        let error = parse_records(content, None).unwrap_err();
        assert!(format!("{error:#}").contains("line 2"));
    }

    #[test]
    fn sheets_default_to_the_first_array() {
        let content = r#"{"title": "2024 services", "2024": [{"Song": "A"}], "2023": [{"Song": "B"}, {"Song": "C"}]}"#;
        assert_eq!(parse_records(content, None).unwrap().len(), 1);
        assert_eq!(parse_records(content, Some("2023")).unwrap().len(), 2);
    }

    #[test]
    fn unknown_sheet_is_an_error() {
        let content = r#"{"2024": []}"#;
        let error = parse_records(content, Some("2022")).unwrap_err();
        assert!(error.to_string().contains("'2022' not found"));
    }

    #[test]
    fn lone_object_is_one_row() {
        let records = parse_records(r#"{"Song": "Doxology"}"#, None).unwrap();
        assert_eq!(records, vec![RawRecord::new().with("Song", "Doxology")]);
    }

    #[test]
    fn non_object_rows_are_skipped() {
        let records = parse_records(r#"[{"Song": "A"}, 3, "x", {"Song": "B"}]"#, None).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn blank_file_has_no_rows() {
        assert!(parse_records("  \n", None).unwrap().is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(parse_records("42", None).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"Date": "2024-01-07", "Song": "Doxology"}}]"#).unwrap();
        let records = load_records(file.path(), None).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let error = load_records(&path, None).unwrap_err();
        assert!(error.to_string().contains("missing.json"));
    }
}
