//! Purpose: Own the in-memory ordered collection of student records.
//! Exports: `Roster`, `RemoveOutcome`.
//! Role: The single mutable store behind every CLI command.
//! Invariants: Insertion order is preserved modulo removals; duplicate names are allowed.
//! Invariants: Removal deletes at most the first case-insensitive name match.
//! Invariants: A missing name is a normal outcome; no operation here can fail.
use crate::core::record::Record;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemoveOutcome {
    Removed { requested: String },
    NotFound { requested: String },
}

impl RemoveOutcome {
    pub fn removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed { .. })
    }

    /// The name exactly as the caller gave it, not the stored casing.
    pub fn requested(&self) -> &str {
        match self {
            RemoveOutcome::Removed { requested } | RemoveOutcome::NotFound { requested } => {
                requested
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    students: Vec<Record>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Appends unconditionally; duplicates (including duplicate names) are accepted.
    pub fn add(&mut self, record: Record) {
        self.students.push(record);
    }

    /// Removes the first record whose name matches `name` case-insensitively.
    pub fn remove(&mut self, name: &str) -> RemoveOutcome {
        let found = self
            .students
            .iter()
            .position(|record| names_equal(&record.name, name));
        match found {
            Some(index) => {
                self.students.remove(index);
                RemoveOutcome::Removed {
                    requested: name.to_string(),
                }
            }
            None => RemoveOutcome::NotFound {
                requested: name.to_string(),
            },
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

// Unicode simple case folding on both sides; equivalent to an ordinal
// ignore-case comparison for ASCII names.
fn names_equal(stored: &str, requested: &str) -> bool {
    stored.to_lowercase() == requested.to_lowercase()
}
