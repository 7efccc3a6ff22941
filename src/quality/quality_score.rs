use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: f64 = 100.0;

/// Score in `[0, 100]` plus the sub-score of every metric, in metric order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScore {
    pub value: f64,
    pub breakdown: IndexMap<String, f64>,
}

impl QualityScore {
    /// `value` is the breakdown sum, clipped to `[0, 100]`.
    pub fn from_breakdown(breakdown: IndexMap<String, f64>) -> Self {
        let value = breakdown.values().sum::<f64>().clamp(0.0, MAX_SCORE);
        Self { value, breakdown }
    }

    /// Stand-in when scoring is switched off; always passes the threshold.
    pub fn unscored() -> Self {
        let mut breakdown = IndexMap::new();
        breakdown.insert("unscored".to_string(), MAX_SCORE);
        Self::from_breakdown(breakdown)
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.breakdown.get(metric).copied()
    }
}
