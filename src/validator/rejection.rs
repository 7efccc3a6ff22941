use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    UnsafeOperation,
    InsufficientParameters,
    BelowQualityThreshold,
    InternalError,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::UnsafeOperation => "unsafe_operation",
            RejectionReason::InsufficientParameters => "insufficient_parameters",
            RejectionReason::BelowQualityThreshold => "below_quality_threshold",
            RejectionReason::InternalError => "internal_error",
        }
    }
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-record diagnostic for a record that did not become a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub record_index: usize,
    pub dataset: String,
    pub reason: RejectionReason,
    pub detail: String,
}

impl Rejection {
    pub fn new(record_index: usize, dataset: &str, reason: RejectionReason, detail: String) -> Self {
        Self {
            record_index,
            dataset: dataset.to_string(),
            reason,
            detail,
        }
    }
}
