use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::{self, RowSchema};
use crate::core::pivot;
use crate::errors::AppResult;
use crate::export;
use crate::import;
use crate::models::{AttendanceReport, PivotRow};
use crate::ui::messages::warning;
use crate::utils::table::render_table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        roster,
        attendance,
        format,
        out,
        force,
    } = cmd
    {
        // The roster must pass validation in full before the attendance
        // file is even opened; an invalid roster aborts the whole run.
        let roster_schema = RowSchema::roster(&cfg.roster_headers);
        let roster_rows = import::read_rows(Path::new(roster))?;
        let roster = normalize::roster_from_rows(&roster_rows, &roster_schema, roster)?;

        let attendance_schema = RowSchema::attendance(&cfg.attendance_headers);
        let event_rows = import::read_rows(Path::new(attendance))?;
        let checkins = normalize::checkins_from_rows(&event_rows, &attendance_schema, attendance)?;

        let report = pivot::build_report(&roster, &checkins)?;

        if report.is_empty() {
            warning("No check-in rows found; nothing to report.");
            return Ok(());
        }

        match out {
            Some(file) => export::export_report(&report, *format, Path::new(file), *force)?,
            None => print_report(&report),
        }
    }
    Ok(())
}

fn print_report(report: &AttendanceReport) {
    print_section("Present", &report.days, &report.present);
    print_section("Absent", &report.days, &report.absent);
    print_section("Unmatched", &report.days, &report.unmatched);
}

fn print_section(title: &str, days: &[String], rows: &[PivotRow]) {
    println!("\n=== {} ===", title);

    if rows.is_empty() {
        println!("(none)");
        return;
    }

    print!("{}", render_table(days, rows));
}
