//! CSV input for the importer
//!
//! Expected header columns: `title`, `body`, `assignee`, `label`. Missing
//! columns are treated as empty and unknown columns are ignored.

use crate::error::{Error, Result};
use crate::types::SubmissionRequest;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    title: String,
    body: String,
    assignee: String,
    label: String,
}

/// A row that did not become a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the input file
    pub line: u64,
    /// Why the row was dropped
    pub reason: String,
}

/// Parsed CSV contents
#[derive(Debug, Clone, Default)]
pub struct CsvImport {
    /// Valid requests, in file order
    pub requests: Vec<SubmissionRequest>,
    /// Rows that were dropped
    pub skipped: Vec<SkippedRow>,
}

/// Read issue requests from a CSV file
pub fn read_requests(path: &Path) -> Result<CsvImport> {
    let file = File::open(path).map_err(|e| {
        Error::Config(format!("cannot open CSV file {}: {e}", path.display()))
    })?;
    read_requests_from(file)
}

/// Read issue requests from any CSV source
///
/// Rows with an empty title or undecodable fields are skipped, not fatal.
pub fn read_requests_from<R: Read>(input: R) -> Result<CsvImport> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);
    let headers = reader.headers()?.clone();

    let mut import = CsvImport::default();
    let mut record = StringRecord::new();
    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                import.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        }
        let line = record.position().map_or(line, csv::Position::line);

        let row: CsvRow = match record.deserialize(Some(&headers)) {
            Ok(row) => row,
            Err(e) => {
                import.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if row.title.is_empty() {
            import.skipped.push(SkippedRow {
                line,
                reason: "empty title".to_string(),
            });
            continue;
        }

        match SubmissionRequest::new(
            row.title,
            row.body,
            parse_assignees(&row.assignee),
            parse_labels(&row.label),
        ) {
            Ok(request) => import.requests.push(request),
            Err(e) => import.skipped.push(SkippedRow {
                line,
                reason: e.to_string(),
            }),
        }
    }

    debug!(
        requests = import.requests.len(),
        skipped = import.skipped.len(),
        "read CSV input"
    );
    Ok(import)
}

/// Parse a label cell
///
/// Accepts a JSON array literal (`["bug", "ui"]`) or a comma-separated list
/// (`bug, ui`). Surrounding quotes on items are stripped and blanks dropped.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if raw.starts_with('[') && raw.ends_with(']') {
        if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw) {
            return values
                .into_iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .filter(|s| !s.is_empty())
                .collect();
        }
    }

    let list = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(raw);
    split_list(list)
}

/// Parse an assignee cell: one login or a comma-separated list
pub fn parse_assignees(raw: &str) -> Vec<String> {
    split_list(raw)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().trim_matches(['"', '\'']).trim())
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
