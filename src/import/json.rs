// src/import/json.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Cell, RawRow};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON array of flat objects into raw rows (the shape produced by
/// spreadsheet-to-JSON exporters). Numbers stay numeric, which is how
/// serial dates survive into the normalizer.
pub(crate) fn read_json(path: &Path) -> AppResult<Vec<RawRow>> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text)?;

    let Value::Array(items) = value else {
        return Err(AppError::Other(format!(
            "{}: expected a top-level JSON array of row objects",
            path.display()
        )));
    };

    let mut rows = Vec::new();
    for item in items {
        let Value::Object(map) = item else {
            return Err(AppError::Other(format!(
                "{}: expected each row to be a JSON object",
                path.display()
            )));
        };

        let mut row = RawRow::new();
        for (key, v) in map {
            row.insert(key, json_cell(v));
        }

        if row.values().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn json_cell(v: Value) -> Cell {
    match v {
        Value::Null => Cell::Empty,
        Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        Value::String(s) if s.trim().is_empty() => Cell::Empty,
        Value::String(s) => Cell::Text(s),
        Value::Bool(b) => Cell::Text(b.to_string()),
        other => Cell::Text(other.to_string()),
    }
}
