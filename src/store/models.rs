/// Data models for roster entries
///
/// Field names are serialized as "Name" and "Grade" to match the data file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single student record, keyed externally by its ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Grade")]
    pub grade: String, // free-form level, e.g. "5" or "Year 2"
}

impl Student {
    pub fn new(name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: grade.into(),
        }
    }
}

/// Student ID -> record. Iteration order carries no meaning.
pub type Roster = BTreeMap<String, Student>;
