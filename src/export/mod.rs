// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod xlsx;

use crate::errors::AppResult;
use crate::models::AttendanceReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Write the report to `path` in the requested format. `force` skips the
/// overwrite confirmation.
pub fn export_report(
    report: &AttendanceReport,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => json_csv::export_csv(report, path),
        ExportFormat::Json => json_csv::export_json(report, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(report, path),
    }
}
