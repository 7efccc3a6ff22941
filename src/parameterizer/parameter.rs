use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::parser::Clause;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Date,
}

impl Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterType::String => f.write_str("string"),
            ParameterType::Number => f.write_str("number"),
            ParameterType::Date => f.write_str("date"),
        }
    }
}

/// One named slot of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique within its template.
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    pub description: String,
    pub source_clause: Clause,
    /// Exact source text the placeholder replaced, quotes included.
    pub original_value: String,
}

impl Parameter {
    pub fn new(
        name: String,
        param_type: ParameterType,
        description: String,
        source_clause: Clause,
        original_value: String,
    ) -> Self {
        Self {
            name,
            param_type,
            description,
            source_clause,
            original_value,
        }
    }

    pub fn is_table(&self) -> bool {
        self.name == "table" || self.name.starts_with("table_")
    }

    pub fn is_column(&self) -> bool {
        self.name.contains("_col")
    }

    /// Values, limits and offsets: the knobs a caller turns per invocation.
    pub fn is_filter(&self) -> bool {
        ["value", "limit_n", "offset_n"]
            .iter()
            .any(|base| self.name == *base || self.name.starts_with(&format!("{base}_")))
    }
}
