//! Row Normalizer: maps raw parsed rows onto the fixed semantic schemas and
//! validates them before any pivoting happens.

use crate::errors::{AppError, AppResult};
use crate::models::{Cell, CheckIn, RawRow, Roster, RosterEntry, Timestamp};
use std::collections::{BTreeSet, HashMap};

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_TIMESTAMP: &str = "timestamp";

/// One canonical field and the header spellings that map onto it.
/// Matching is case-insensitive and ignores surrounding whitespace.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub canonical: &'static str,
    pub synonyms: Vec<String>,
}

impl FieldSpec {
    fn matches(&self, header: &str) -> bool {
        let h = header.trim().to_lowercase();
        self.synonyms.iter().any(|s| *s == h)
    }
}

/// The synonym table for one source kind. New spellings are data: built-in
/// defaults below, extended per-field through the config file.
#[derive(Debug, Clone)]
pub struct RowSchema {
    pub fields: Vec<FieldSpec>,
}

impl RowSchema {
    /// Roster rows: ID + display name.
    pub fn roster(extra: &HashMap<String, Vec<String>>) -> Self {
        Self::build(
            &[
                (FIELD_ID, &["legajo", "id"]),
                (
                    FIELD_NAME,
                    &["alumno", "apellido", "nombre y apellido", "nombre", "name"],
                ),
            ],
            extra,
        )
    }

    /// Attendance rows: ID + display name + raw timestamp.
    pub fn attendance(extra: &HashMap<String, Vec<String>>) -> Self {
        Self::build(
            &[
                (FIELD_ID, &["legajo", "id"]),
                (
                    FIELD_NAME,
                    &["alumno", "apellido", "nombre y apellido", "nombre", "name"],
                ),
                (
                    FIELD_TIMESTAMP,
                    &["dia", "fecha", "fecha y hora", "day", "timestamp"],
                ),
            ],
            extra,
        )
    }

    fn build(defaults: &[(&'static str, &[&str])], extra: &HashMap<String, Vec<String>>) -> Self {
        let fields = defaults
            .iter()
            .map(|&(canonical, spellings)| {
                let mut synonyms: Vec<String> =
                    spellings.iter().map(|s| s.to_string()).collect();
                if let Some(more) = extra.get(canonical) {
                    synonyms.extend(more.iter().map(|s| s.trim().to_lowercase()));
                }
                FieldSpec {
                    canonical,
                    synonyms,
                }
            })
            .collect();

        Self { fields }
    }
}

/// A row after normalization: canonical field → cell. Empty cells are not
/// carried over, so "field present" means "field has a value".
type NormalRow = HashMap<&'static str, Cell>;

/// Map raw rows onto `schema`, then check the first row for every required
/// field. Fully blank rows are dropped. Inputs are never mutated.
fn normalize_rows(rows: &[RawRow], schema: &RowSchema, file: &str) -> AppResult<Vec<NormalRow>> {
    let normalized: Vec<NormalRow> = rows
        .iter()
        .filter(|row| row.values().any(|c| !c.is_empty()))
        .map(|row| {
            let mut out = NormalRow::new();
            for field in &schema.fields {
                let hit = row
                    .iter()
                    .find(|(header, cell)| !cell.is_empty() && field.matches(header));
                if let Some((_, cell)) = hit {
                    out.insert(field.canonical, cell.clone());
                }
            }
            out
        })
        .collect();

    require_columns(&normalized, schema, file)?;
    Ok(normalized)
}

/// Only the first row is inspected. Known limitation: a column that is blank
/// from row two onward slips through; checking every row was judged not
/// worth the cost.
fn require_columns(rows: &[NormalRow], schema: &RowSchema, file: &str) -> AppResult<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };

    for field in &schema.fields {
        if !first.contains_key(field.canonical) {
            return Err(AppError::MissingColumn {
                file: file.to_string(),
                column: field.canonical.to_string(),
            });
        }
    }

    Ok(())
}

/// Normalize and validate roster rows. Fails wholesale on an empty roster or
/// any duplicated ID; no partial roster is ever returned.
pub fn roster_from_rows(rows: &[RawRow], schema: &RowSchema, file: &str) -> AppResult<Roster> {
    let rows = normalize_rows(rows, schema, file)?;

    if rows.is_empty() {
        return Err(AppError::EmptyRoster);
    }

    let mut entries = Vec::with_capacity(rows.len());
    for row in &rows {
        entries.push(RosterEntry {
            id: parse_id(row.get(FIELD_ID), file)?,
            display_name: row.get(FIELD_NAME).map(Cell::display).unwrap_or_default(),
        });
    }

    let distinct: BTreeSet<i64> = entries.iter().map(|e| e.id).collect();
    if distinct.len() < entries.len() {
        let mut seen = BTreeSet::new();
        let mut dups = BTreeSet::new();
        for e in &entries {
            if !seen.insert(e.id) {
                dups.insert(e.id);
            }
        }
        let list = dups
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(AppError::DuplicateRoster(list));
    }

    Ok(Roster::from_entries(entries))
}

/// Normalize attendance rows into check-in events. The calendar day is NOT
/// derived here; that belongs to the pivot engine.
pub fn checkins_from_rows(
    rows: &[RawRow],
    schema: &RowSchema,
    file: &str,
) -> AppResult<Vec<CheckIn>> {
    let rows = normalize_rows(rows, schema, file)?;

    rows.iter()
        .map(|row| {
            Ok(CheckIn {
                id: parse_id(row.get(FIELD_ID), file)?,
                display_name: row.get(FIELD_NAME).map(Cell::display).unwrap_or_default(),
                timestamp: parse_timestamp(row.get(FIELD_TIMESTAMP), file)?,
            })
        })
        .collect()
}

/// IDs compare by exact numeric equality, so anything non-integral is
/// rejected here rather than silently never matching.
fn parse_id(cell: Option<&Cell>, file: &str) -> AppResult<i64> {
    let invalid = |value: String| AppError::InvalidId {
        file: file.to_string(),
        value,
    };

    match cell {
        Some(Cell::Number(n)) if n.fract() == 0.0 => Ok(*n as i64),
        Some(Cell::Number(n)) => Err(invalid(n.to_string())),
        Some(Cell::Text(s)) => {
            let t = s.trim();
            t.parse::<i64>().map_err(|_| invalid(t.to_string()))
        }
        Some(Cell::Empty) | None => Err(invalid(String::new())),
    }
}

fn parse_timestamp(cell: Option<&Cell>, file: &str) -> AppResult<Timestamp> {
    match cell {
        Some(Cell::Number(n)) => Ok(Timestamp::Serial(*n)),
        Some(Cell::Text(s)) => {
            let t = s.trim();
            // CSV keeps everything textual; a fully numeric string is a
            // spreadsheet serial date
            match t.parse::<f64>() {
                Ok(n) => Ok(Timestamp::Serial(n)),
                Err(_) => Ok(Timestamp::Text(t.to_string())),
            }
        }
        Some(Cell::Empty) | None => Err(AppError::InvalidTimestamp(format!(
            "empty timestamp cell in {file}"
        ))),
    }
}
