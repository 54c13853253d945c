use std::collections::HashMap;

/// One enrolled person. IDs are unique across the roster; uniqueness is
/// enforced by the normalizer before a `Roster` is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: i64,
    pub display_name: String,
}

/// The validated roster: entries in source order plus an ID index for the
/// pivot's matched/unmatched lookups.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    by_id: HashMap<i64, usize>,
}

impl Roster {
    /// Build from already-validated entries (unique IDs, non-empty).
    pub(crate) fn from_entries(entries: Vec<RosterEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id, i))
            .collect();
        Self { entries, by_id }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|&i| self.entries[i].display_name.as_str())
    }
}
