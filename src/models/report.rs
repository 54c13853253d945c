use serde::Serialize;
use std::collections::BTreeMap;

/// A single row of an output table: day label → cell text.
///
/// Only populated cells are stored; `get` returns `""` for holes. The map
/// is ordered so serializing the same report twice yields identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PivotRow(BTreeMap<String, String>);

impl PivotRow {
    pub fn set(&mut self, day: &str, value: &str) {
        if !value.is_empty() {
            self.0.insert(day.to_string(), value.to_string());
        }
    }

    pub fn get(&self, day: &str) -> &str {
        self.0.get(day).map(String::as_str).unwrap_or("")
    }

    /// True when every cell is empty across all days.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }
}

/// The pivot engine's full output: the ordered day labels plus the three
/// positionally-aligned tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    /// Distinct `DD/MM/YYYY` labels, first-occurrence order.
    pub days: Vec<String>,
    pub present: Vec<PivotRow>,
    pub absent: Vec<PivotRow>,
    pub unmatched: Vec<PivotRow>,
}

impl AttendanceReport {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
