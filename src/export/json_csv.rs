// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::{AttendanceReport, PivotRow};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &AttendanceReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: the three tables stacked in one file, a leading `table`
/// column plus one column per day label.
pub(crate) fn export_csv(report: &AttendanceReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["table".to_string()];
    header.extend(report.days.iter().cloned());
    wtr.write_record(&header)?;

    write_section(&mut wtr, "present", &report.present, &report.days)?;
    write_section(&mut wtr, "absent", &report.absent, &report.days)?;
    write_section(&mut wtr, "unmatched", &report.unmatched, &report.days)?;

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn write_section(
    wtr: &mut csv::Writer<File>,
    label: &str,
    rows: &[PivotRow],
    days: &[String],
) -> AppResult<()> {
    for row in rows {
        let mut record = vec![label.to_string()];
        record.extend(days.iter().map(|d| row.get(d).to_string()));
        wtr.write_record(&record)?;
    }
    Ok(())
}
