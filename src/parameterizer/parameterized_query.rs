use std::collections::HashSet;

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::{
    parameterizer::{placeholder_names, Parameter, PLACEHOLDER_RE},
    Result, ToolError,
};

/// SQL template with `{{.name}}` placeholders and the parameters filling them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterizedQuery {
    pub template: String,
    pub parameters: Vec<Parameter>,
}

impl ParameterizedQuery {
    pub fn new(template: String, parameters: Vec<Parameter>) -> Self {
        Self { template, parameters }
    }

    /// The statement as-is, used when parameterization is switched off.
    pub fn unparameterized(sql: &str) -> Self {
        Self {
            template: sql.to_string(),
            parameters: Vec::new(),
        }
    }

    pub fn placeholders(&self) -> Vec<String> {
        placeholder_names(&self.template)
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters.iter().map(|parameter| parameter.name.as_str()).collect()
    }

    /// Every placeholder names exactly one parameter and every parameter is
    /// used exactly once.
    pub fn check_consistency(&self) -> Result<()> {
        let placeholders = self.placeholders();
        let names = self.parameter_names();

        let placeholder_set: HashSet<&str> = placeholders.iter().map(String::as_str).collect();
        let name_set: HashSet<&str> = names.iter().copied().collect();

        let consistent = placeholder_set.len() == placeholders.len()
            && name_set.len() == names.len()
            && placeholder_set == name_set;

        if consistent {
            return Ok(());
        }

        Err(ToolError::InconsistentTemplate {
            placeholders,
            parameters: names.into_iter().map(str::to_string).collect(),
        })
    }

    /// Puts every parameter's original value back in place of its
    /// placeholder. Unknown placeholders are left untouched.
    pub fn substitute_original_values(&self) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.template, |captures: &Captures| {
                self.parameter(&captures[1])
                    .map(|parameter| parameter.original_value.clone())
                    .unwrap_or_else(|| captures[0].to_string())
            })
            .into_owned()
    }
}
