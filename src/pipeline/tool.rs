use serde::{Deserialize, Serialize};

use crate::{labels::LabelSet, parameterizer::ParameterizedQuery, quality::QualityScore};

/// An accepted, reusable SQL template with everything needed to index it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    /// Structural name with a short content hash, e.g. `select_filtered_0600`.
    pub name: String,
    pub description: String,
    pub question: String,
    pub parameterized_query: ParameterizedQuery,
    pub quality_score: QualityScore,
    pub labels: LabelSet,
    pub db_id: String,
    pub source: String,
}
