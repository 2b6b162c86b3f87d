//! CSV ingestion — turns an uploaded export into a normalised `Dataset`.

use std::path::Path;

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::dataset::models::Dataset;

/// Cell values treated as missing and stored as an empty string.
/// Matches the markers spreadsheet/pandas exports use for NaN.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file has no header row")]
    MissingHeader,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parses CSV bytes into a `Dataset`.
///
/// - Missing cells and NaN markers become empty strings.
/// - Short rows are padded, long rows truncated, to the header width.
/// - Duplicate header names get a `.1`, `.2`, ... suffix.
pub fn parse_csv(bytes: &[u8], source: &str) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let header = reader.byte_headers()?.clone();
    if header.is_empty() || (header.len() == 1 && header[0].is_empty()) {
        return Err(IngestError::MissingHeader);
    }
    let columns = dedup_columns(
        header
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string()),
    );
    let width = columns.len();

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let mut row: Vec<String> = record
            .iter()
            .take(width)
            .map(|cell| normalise_cell(&String::from_utf8_lossy(cell)))
            .collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    info!(
        "Loaded dataset '{source}': {} rows, {} columns",
        rows.len(),
        width
    );

    Ok(Dataset {
        id: Uuid::new_v4(),
        source: source.to_string(),
        loaded_at: Utc::now(),
        columns,
        rows,
    })
}

/// Reads and parses a CSV file from disk.
pub fn load_csv_file(path: &Path) -> Result<Dataset, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_csv(&bytes, &source)
}

fn normalise_cell(cell: &str) -> String {
    if MISSING_MARKERS.contains(&cell) {
        String::new()
    } else {
        cell.to_string()
    }
}

fn dedup_columns<I: Iterator<Item = String>>(names: I) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 1;
        while columns.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        columns.push(candidate);
    }
    columns
}
