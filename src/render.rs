//! Purpose: Produce the console lines the roster contract promises.
//! Exports: `added_line`, `remove_line`, `listing_lines`.
//! Role: Single home of the observable message templates; every driver goes through here.
//! Invariants: Templates are stable once published.
//! Invariants: Remove messages echo the caller's name verbatim, not the stored casing.
use crate::core::record::Record;
use crate::core::roster::RemoveOutcome;

pub fn added_line(name: &str) -> String {
    format!("Student {name} added.")
}

pub fn remove_line(outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed { requested } => format!("Student {requested} removed."),
        RemoveOutcome::NotFound { requested } => format!("Student {requested} not found."),
    }
}

pub fn listing_lines(records: &[Record]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No students found.".to_string()];
    }
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("List of students:".to_string());
    lines.extend(records.iter().map(|record| record.to_string()));
    lines
}

#[cfg(test)]
mod tests {
    use super::{added_line, listing_lines, remove_line};
    use crate::core::record::Record;
    use crate::core::roster::RemoveOutcome;

    #[test]
    fn add_and_remove_templates_are_stable() {
        assert_eq!(added_line("Alice"), "Student Alice added.");
        assert_eq!(
            remove_line(&RemoveOutcome::Removed {
                requested: "bob".to_string()
            }),
            "Student bob removed."
        );
        assert_eq!(
            remove_line(&RemoveOutcome::NotFound {
                requested: "David".to_string()
            }),
            "Student David not found."
        );
    }

    #[test]
    fn empty_listing_is_a_single_line() {
        assert_eq!(listing_lines(&[]), ["No students found."]);
    }

    #[test]
    fn listing_renders_header_then_records_in_order() {
        let records = [
            Record::new("Alice", 20, "Computer Science"),
            Record::new("Charlie", 21, "Physics"),
        ];
        assert_eq!(
            listing_lines(&records),
            [
                "List of students:",
                "Name: Alice, Age: 20, Major: Computer Science",
                "Name: Charlie, Age: 21, Major: Physics",
            ]
        );
    }
}
