use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pipeline::Record;

/// Named batch of records, e.g. one split of a text-to-SQL corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(name: &str, records: Vec<Record>) -> Self {
        Self {
            name: name.to_string(),
            records,
        }
    }

    /// Normalizes every element of a JSON array. Elements that are not
    /// objects become empty records, which the pipeline counts as skipped.
    pub fn from_json(name: &str, rows: &Value) -> Self {
        let records = rows
            .as_array()
            .map(|rows| {
                rows.iter()
                    .map(|row| Record::normalize(row).unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default();

        Self::new(name, records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
