pub mod error;
pub use error::{Result, ToolError};

pub mod parser;
pub use parser::{tokenize, Clause, Token, TokenKind};

pub mod parameterizer;
pub use parameterizer::{parameterize, Parameter, ParameterType, ParameterizeOptions, ParameterizedQuery};

pub mod quality;
pub use quality::{score, QualityScore};

pub mod labels;
pub use labels::{label, LabelSet};

pub mod validator;
pub use validator::{validate, Rejection, RejectionReason, ValidationOptions, Verdict};

pub mod pipeline;
pub use pipeline::{Dataset, IdAllocator, IdType, Pipeline, PipelineConfig, PipelineOutput, Record, RunSummary, Tool};

pub mod dialect;
pub use dialect::{render, Dialect, RenderedStatement};
