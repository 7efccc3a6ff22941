use serde::{Deserialize, Serialize};

/// Knobs recognized by the parameterizer.
///
/// `min_params` is carried along for the validator; the parameterizer itself
/// never rejects a query for having too few placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterizeOptions {
    pub parameterize_tables: bool,
    pub parameterize_columns: bool,
    pub min_params: usize,
}

impl Default for ParameterizeOptions {
    fn default() -> Self {
        Self {
            parameterize_tables: true,
            parameterize_columns: true,
            min_params: 2,
        }
    }
}

impl ParameterizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only literals are replaced.
    pub fn literals_only() -> Self {
        Self {
            parameterize_tables: false,
            parameterize_columns: false,
            ..Self::default()
        }
    }

    pub fn with_tables(mut self, enabled: bool) -> Self {
        self.parameterize_tables = enabled;
        self
    }

    pub fn with_columns(mut self, enabled: bool) -> Self {
        self.parameterize_columns = enabled;
        self
    }

    pub fn with_min_params(mut self, min_params: usize) -> Self {
        self.min_params = min_params;
        self
    }
}
