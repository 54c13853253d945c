//! Plain-text table rendering for CLI outputs.

use crate::models::PivotRow;
use unicode_width::UnicodeWidthStr;

/// Render one pivot table with the day labels as headers.
///
/// Column widths follow the widest cell (unicode-aware), cells are
/// left-aligned, and a dash rule separates the header from the rows.
pub fn render_table(days: &[String], rows: &[PivotRow]) -> String {
    let widths: Vec<usize> = days
        .iter()
        .map(|d| {
            rows.iter()
                .map(|r| UnicodeWidthStr::width(r.get(d)))
                .chain([UnicodeWidthStr::width(d.as_str())])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    for (day, w) in days.iter().zip(&widths) {
        out.push_str(&pad(day, *w));
        out.push(' ');
    }
    out.push('\n');

    for w in &widths {
        out.push_str(&"-".repeat(*w));
        out.push(' ');
    }
    out.push('\n');

    for row in rows {
        for (day, w) in days.iter().zip(&widths) {
            out.push_str(&pad(row.get(day), *w));
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
