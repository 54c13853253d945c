// src/import/mod.rs

mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use std::path::Path;

/// Decode a supported file into raw rows.
///
/// The extension gate runs before anything is opened, so the core never
/// sees an unsupported selection. The core itself stays format-blind: it
/// receives row sets and uses the file name only in error messages.
pub fn read_rows(path: &Path) -> AppResult<Vec<RawRow>> {
    match extension_of(path).as_deref() {
        Some("csv") => csv::read_csv(path),
        Some("json") => json::read_json(path),
        _ => Err(AppError::InvalidFileType(path.display().to_string())),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}
