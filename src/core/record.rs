//! Purpose: Define the student record value stored by the roster.
//! Exports: `Record`.
//! Role: Pure data carrier shared by the roster, the renderer, and script ops.
//! Invariants: Construction performs no validation; any name, age, or major is accepted.
//! Invariants: The rendering `Name: {name}, Age: {age}, Major: {major}` is stable.
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: i32,
    pub major: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i32, major: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            major: major.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Major: {}",
            self.name, self.age, self.major
        )
    }
}
