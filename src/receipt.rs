//! Purpose: Define a stable, structured schema for script-mode receipts.
//! Exports: `Receipt`, `receipt_line`, `now_rfc3339`.
//! Role: Shared contract helper for JSONL output (one object per applied operation).
//! Invariants: Receipts never alter the text-mode console contract.
//! Invariants: JSON schema is stable once published; fields are additive-only.
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::core::error::{Error, ErrorKind};
use crate::core::record::Record;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Receipt {
    Add {
        time: String,
        student: Record,
    },
    Remove {
        time: String,
        student: String,
        removed: bool,
    },
    List {
        time: String,
        count: usize,
        students: Vec<Record>,
    },
}

impl Receipt {
    pub fn add(student: Record) -> Self {
        Receipt::Add {
            time: now_rfc3339().unwrap_or_default(),
            student,
        }
    }

    pub fn remove(student: impl Into<String>, removed: bool) -> Self {
        Receipt::Remove {
            time: now_rfc3339().unwrap_or_default(),
            student: student.into(),
            removed,
        }
    }

    pub fn list(students: &[Record]) -> Self {
        Receipt::List {
            time: now_rfc3339().unwrap_or_default(),
            count: students.len(),
            students: students.to_vec(),
        }
    }
}

pub fn receipt_line(receipt: &Receipt) -> Result<String, Error> {
    serde_json::to_string(receipt).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode receipt")
            .with_source(err)
    })
}

pub fn now_rfc3339() -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    let duration = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = time::OffsetDateTime::from_unix_timestamp_nanos(duration.as_nanos() as i128).ok()?;
    ts.format(&Rfc3339).ok()
}
