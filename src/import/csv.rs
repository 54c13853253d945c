// src/import/csv.rs

use crate::errors::AppResult;
use crate::models::{Cell, RawRow};
use csv::ReaderBuilder;
use std::path::Path;

/// Read a CSV file with a header row into raw rows.
///
/// Cells stay textual; the normalizer decides what is numeric. Fully blank
/// rows (spreadsheet exports love trailing ones) are skipped.
pub(crate) fn read_csv(path: &Path) -> AppResult<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;

        let mut row = RawRow::new();
        for (i, header) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or("");
            let cell = if value.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(value.to_string())
            };
            row.insert(header.to_string(), cell);
        }

        if row.values().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }

    Ok(rows)
}
