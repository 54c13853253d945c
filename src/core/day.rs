//! Calendar-day derivation from raw sheet timestamps.

use crate::errors::{AppError, AppResult};
use crate::models::Timestamp;
use chrono::{Duration, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Resolve a raw timestamp to its `DD/MM/YYYY` day label.
///
/// Serial day-counts and structured date/time text both resolve to the same
/// calendar-date semantics. Text matching no known format passes through
/// verbatim: pre-formatted `DD/MM/YYYY` cells are already labels.
pub fn day_label(ts: &Timestamp) -> AppResult<String> {
    match ts {
        Timestamp::Serial(n) => serial_to_date(*n).map(format_day).ok_or_else(|| {
            AppError::InvalidTimestamp(format!("serial value {n} is out of range"))
        }),
        Timestamp::Text(s) => Ok(text_day_label(s)),
    }
}

fn text_day_label(s: &str) -> String {
    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return format_day(dt.date());
        }
    }

    for fmt in DATE_FORMATS.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return format_day(d);
        }
    }

    s.to_string()
}

/// Spreadsheet serial (days since the Excel epoch, 1899-12-30) to calendar
/// date. Time-of-day fractions are floored away.
pub(crate) fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.floor() as i64))
}

fn format_day(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
