use crate::{
    parameterizer::ParameterizedQuery,
    parser::{Operation, Token},
    quality::QualityScore,
    validator::RejectionReason,
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationOptions {
    pub min_params: usize,
    pub allow_destructive: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_params: 2,
            allow_destructive: false,
        }
    }
}

/// Everything the pipeline assembled for one record, before it becomes a tool.
#[derive(Debug, Clone, Copy)]
pub struct ToolCandidate<'a> {
    pub tokens: &'a [Token],
    pub query: &'a ParameterizedQuery,
}

impl<'a> ToolCandidate<'a> {
    pub fn new(tokens: &'a [Token], query: &'a ParameterizedQuery) -> Self {
        Self { tokens, query }
    }

    pub fn operation(&self) -> Operation {
        Operation::from_tokens(self.tokens)
    }

    /// First statement that is not read-only, if any.
    pub fn unsafe_operation(&self) -> Option<Operation> {
        Operation::statements(self.tokens)
            .into_iter()
            .find(|operation| !operation.is_read_only())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accept,
    Reject(RejectionReason, String),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Structural and safety checks, first failure wins.
///
/// A template that disagrees with its parameter list is an internal fault
/// and comes back as `Err`, not as a rejection.
pub fn validate(candidate: &ToolCandidate, options: &ValidationOptions) -> Result<Verdict> {
    candidate.query.check_consistency()?;

    if let Some(operation) = candidate.unsafe_operation().filter(|_| !options.allow_destructive) {
        return Ok(Verdict::Reject(
            RejectionReason::UnsafeOperation,
            format!("{operation} statements are not accepted"),
        ));
    }

    let count = candidate.query.parameters.len();
    if count < options.min_params {
        return Ok(Verdict::Reject(
            RejectionReason::InsufficientParameters,
            format!("{count} parameters, at least {} required", options.min_params),
        ));
    }

    Ok(Verdict::Accept)
}

/// Threshold check applied once the score is known.
pub fn check_quality(score: &QualityScore, min_quality_score: f64) -> Verdict {
    if score.value >= min_quality_score {
        return Verdict::Accept;
    }

    Verdict::Reject(
        RejectionReason::BelowQualityThreshold,
        format!("quality {:.1} below {:.1}", score.value, min_quality_score),
    )
}
