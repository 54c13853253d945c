//! Day Pivot Engine: turns a validated roster and a flat check-in list into
//! per-day present/absent/unmatched tables.

use crate::core::day;
use crate::errors::AppResult;
use crate::models::{AttendanceReport, CheckIn, PivotRow, Roster};
use std::collections::{HashMap, HashSet};

/// Distinct day labels across `checkins`, in first-occurrence order.
///
/// The order deliberately follows the source sheet, not the calendar: a
/// sheet whose rows start mid-month keeps that column order in the output.
pub fn distinct_days(checkins: &[CheckIn]) -> AppResult<Vec<String>> {
    let mut days: Vec<String> = Vec::new();
    for c in checkins {
        let d = day::day_label(&c.timestamp)?;
        if !days.contains(&d) {
            days.push(d);
        }
    }
    Ok(days)
}

/// Build the full attendance report.
///
/// Pure function of its inputs: calling it twice with the same roster and
/// check-ins yields identical tables. Neither argument is mutated.
pub fn build_report(roster: &Roster, checkins: &[CheckIn]) -> AppResult<AttendanceReport> {
    // 1. attach the calendar day to every event
    let mut dated: Vec<(String, &CheckIn)> = Vec::with_capacity(checkins.len());
    for c in checkins {
        dated.push((day::day_label(&c.timestamp)?, c));
    }

    // 2. distinct days, first-occurrence order
    let mut days: Vec<String> = Vec::new();
    for (d, _) in &dated {
        if !days.contains(d) {
            days.push(d.clone());
        }
    }

    // 3. stable partition: within a day, events keep their input order
    let mut partitions: HashMap<String, Vec<&CheckIn>> =
        days.iter().map(|d| (d.clone(), Vec::new())).collect();
    for (d, c) in &dated {
        if let Some(part) = partitions.get_mut(d) {
            part.push(*c);
        }
    }

    let mut present: HashMap<String, Vec<String>> = HashMap::new();
    let mut absent: HashMap<String, Vec<String>> = HashMap::new();
    let mut unmatched: HashMap<String, Vec<String>> = HashMap::new();

    for d in &days {
        let part = &partitions[d.as_str()];

        // Present and unmatched mirror each other position by position: slot
        // i holds the roster name OR the unmatched composite, never both.
        // Repeat check-ins by one ID on one day keep their separate slots.
        let mut present_col = Vec::with_capacity(part.len());
        let mut unmatched_col = Vec::with_capacity(part.len());
        for c in part {
            match roster.name_of(c.id) {
                Some(name) => {
                    present_col.push(name.to_string());
                    unmatched_col.push(String::new());
                }
                None => {
                    present_col.push(String::new());
                    unmatched_col.push(unmatched_cell(c));
                }
            }
        }

        // Absent: roster order, minus the IDs seen on this day.
        let seen: HashSet<i64> = part.iter().map(|c| c.id).collect();
        let absent_col = roster
            .entries()
            .iter()
            .filter(|e| !seen.contains(&e.id))
            .map(|e| e.display_name.clone())
            .collect();

        present.insert(d.clone(), present_col);
        absent.insert(d.clone(), absent_col);
        unmatched.insert(d.clone(), unmatched_col);
    }

    Ok(AttendanceReport {
        present: aligned_rows(&days, &present),
        absent: aligned_rows(&days, &absent),
        unmatched: aligned_rows(&days, &unmatched),
        days,
    })
}

fn unmatched_cell(c: &CheckIn) -> String {
    if c.display_name.is_empty() {
        c.id.to_string()
    } else {
        format!("{} - {}", c.id, c.display_name)
    }
}

/// Build an index-aligned table from per-day ordered cell sequences.
///
/// Row `i` holds, for each day, the `i`-th cell of that day's sequence;
/// `""` cells are holes. Days are independent sequences aligned only by row
/// index. Rows blank across every day are dropped, so shorter columns just
/// end early.
fn aligned_rows(days: &[String], columns: &HashMap<String, Vec<String>>) -> Vec<PivotRow> {
    let height = days
        .iter()
        .filter_map(|d| columns.get(d).map(Vec::len))
        .max()
        .unwrap_or(0);

    let mut rows = Vec::new();
    for i in 0..height {
        let mut row = PivotRow::default();
        for d in days {
            if let Some(cell) = columns.get(d).and_then(|col| col.get(i)) {
                row.set(d, cell);
            }
        }
        if !row.is_blank() {
            rows.push(row);
        }
    }

    rows
}
