use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("template placeholders {placeholders:?} do not match parameters {parameters:?}")]
    InconsistentTemplate {
        placeholders: Vec<String>,
        parameters: Vec<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ToolError>;
