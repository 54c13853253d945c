// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::{AttendanceReport, PivotRow};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: one styled worksheet per table, auto-sized columns.
pub(crate) fn export_xlsx(report: &AttendanceReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    if report.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_io_app_error)?;
        workbook.save(path_str(path)?).map_err(to_io_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let tables: [(&str, &[PivotRow]); 3] = [
        ("Present", &report.present),
        ("Absent", &report.absent),
        ("Unmatched", &report.unmatched),
    ];

    for (title, rows) in tables {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(title).map_err(to_io_app_error)?;
        write_table(worksheet, &report.days, rows)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, days: &[String], rows: &[PivotRow]) -> AppResult<()> {
    // ---------------------------
    // Header: one column per day
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, day) in days.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, day.as_str(), &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = days
        .iter()
        .map(|d| UnicodeWidthStr::width(d.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, row) in rows.iter().enumerate() {
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };
        let fmt = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, day) in days.iter().enumerate() {
            let v = row.get(day);

            worksheet
                .write_with_format((row_index + 1) as u32, col as u16, v, &fmt)
                .map_err(to_io_app_error)?;

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
