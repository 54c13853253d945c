/// Raw temporal value of a check-in, exactly as it came off the sheet.
///
/// `Serial` is a spreadsheet day-count (days since the 1899-12-30 Excel
/// epoch, possibly with a time-of-day fraction); `Text` is anything else and
/// is resolved to a calendar day later, during pivoting.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Serial(f64),
    Text(String),
}

/// One timestamped check-in record referencing a person by ID.
///
/// The calendar-day bucket is NOT stored here: it is derived from
/// `timestamp` by the pivot engine, so a `CheckIn` stays immutable from
/// normalization onward.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub id: i64,
    pub display_name: String,
    pub timestamp: Timestamp,
}
