use serde::{Deserialize, Serialize};

use crate::{
    parameterizer::ParameterizeOptions,
    pipeline::IdType,
    quality::MAX_SCORE,
    validator::ValidationOptions,
    Result, ToolError,
};

/// Pipeline configuration.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Score tools; when off every tool gets the `unscored` score.
    pub use_quality_scoring: bool,
    /// Replace literals and names with placeholders; when off the template
    /// is the original SQL.
    pub use_parameterization: bool,
    pub use_labeling: bool,
    pub parameterize_tables: bool,
    pub parameterize_columns: bool,
    /// Must lie in `[0, 100]`.
    pub min_quality_score: f64,
    pub min_params: usize,
    /// Accept statements other than SELECT.
    pub allow_destructive: bool,
    pub id_prefix: String,
    pub id_type: IdType,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            use_quality_scoring: true,
            use_parameterization: true,
            use_labeling: true,
            parameterize_tables: true,
            parameterize_columns: true,
            min_quality_score: 50.0,
            min_params: 2,
            allow_destructive: false,
            id_prefix: "sql_tool".to_string(),
            id_type: IdType::Int,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON config; missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_SCORE).contains(&self.min_quality_score) {
            return Err(ToolError::InvalidConfig(format!(
                "min_quality_score must lie in [0, 100], got {}",
                self.min_quality_score
            )));
        }
        if self.id_prefix.trim().is_empty() {
            return Err(ToolError::InvalidConfig("id_prefix must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn parameterize_options(&self) -> ParameterizeOptions {
        ParameterizeOptions {
            parameterize_tables: self.parameterize_tables,
            parameterize_columns: self.parameterize_columns,
            min_params: self.min_params,
        }
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            min_params: self.min_params,
            allow_destructive: self.allow_destructive,
        }
    }

    pub fn with_min_quality_score(mut self, min_quality_score: f64) -> Self {
        self.min_quality_score = min_quality_score;
        self
    }

    pub fn with_min_params(mut self, min_params: usize) -> Self {
        self.min_params = min_params;
        self
    }
}
