use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, trace};

use crate::{
    labels::{label, LabelSet},
    parameterizer::{parameterize, ParameterizedQuery},
    parser::tokenize,
    pipeline::{describe, tool_name, Dataset, IdAllocator, PipelineConfig, PipelineOutput, Record, Tool},
    quality::{score, QualityScore},
    validator::{check_quality, validate, Rejection, RejectionReason, ToolCandidate, Verdict},
    Result,
};

/// What became of a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted(Box<Tool>),
    Rejected(RejectionReason, String),
}

/// Runs records through tokenize, parameterize, score, label and validate.
///
/// Cloning is cheap and clones share the id allocator, so tools produced by
/// any clone never share an id.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    allocator: Arc<IdAllocator>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let allocator = Arc::new(IdAllocator::new(&config.id_prefix, config.id_type));
        Self::with_allocator(config, allocator)
    }

    /// Pipeline drawing ids from an allocator shared with other pipelines.
    pub fn with_allocator(config: PipelineConfig, allocator: Arc<IdAllocator>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, allocator })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn allocator(&self) -> &Arc<IdAllocator> {
        &self.allocator
    }

    /// Runs every stage on one record. `Err` means an internal fault, not
    /// a rejection.
    pub fn evaluate(&self, record: &Record) -> Result<Outcome> {
        let tokens = tokenize(&record.sql);

        let query = if self.config.use_parameterization {
            parameterize(&tokens, &self.config.parameterize_options())
        } else {
            ParameterizedQuery::unparameterized(record.sql.trim())
        };
        trace!(template = %query.template, parameters = query.parameters.len(), "parameterized");

        let quality = if self.config.use_quality_scoring {
            score(&query)
        } else {
            QualityScore::unscored()
        };

        let labels = if self.config.use_labeling {
            label(&tokens, &query)
        } else {
            LabelSet::new()
        };

        let candidate = ToolCandidate::new(&tokens, &query);
        if let Verdict::Reject(reason, detail) = validate(&candidate, &self.config.validation_options())? {
            return Ok(Outcome::Rejected(reason, detail));
        }
        if let Verdict::Reject(reason, detail) = check_quality(&quality, self.config.min_quality_score) {
            return Ok(Outcome::Rejected(reason, detail));
        }

        let description = describe(&tokens, &query, &labels, &record.question);

        Ok(Outcome::Accepted(Box::new(Tool {
            id: self.allocator.next_id(),
            name: tool_name(&tokens, &record.sql, &record.question),
            description,
            question: record.question.clone(),
            parameterized_query: query,
            quality_score: quality,
            labels,
            db_id: record.db_id.clone(),
            source: record.source.clone(),
        })))
    }

    /// Processes a dataset in record order.
    pub fn run(&self, dataset: &Dataset) -> PipelineOutput {
        let mut output = PipelineOutput::new();
        output.records_total = dataset.len();

        for (index, record) in dataset.records.iter().enumerate() {
            if !record.has_sql() {
                debug!(dataset = %dataset.name, index, "skipping record without SQL");
                output.skipped += 1;
                continue;
            }

            match self.evaluate(record) {
                Ok(Outcome::Accepted(tool)) => {
                    trace!(dataset = %dataset.name, index, id = %tool.id, "accepted");
                    output.tools.push(*tool);
                }
                Ok(Outcome::Rejected(reason, detail)) => {
                    debug!(dataset = %dataset.name, index, %reason, %detail, "rejected");
                    output.rejections.push(Rejection::new(index, &dataset.name, reason, detail));
                }
                Err(err) => {
                    error!(dataset = %dataset.name, index, error = %err, "internal error");
                    output.rejections.push(Rejection::new(
                        index,
                        &dataset.name,
                        RejectionReason::InternalError,
                        err.to_string(),
                    ));
                }
            }
        }

        output.finished_at = Utc::now();
        info!(
            dataset = %dataset.name,
            records = output.records_total,
            accepted = output.tools.len(),
            rejected = output.rejections.len(),
            skipped = output.skipped,
            "dataset processed"
        );
        output
    }

    /// Processes datasets one after another into a single output.
    pub fn run_datasets(&self, datasets: &[Dataset]) -> PipelineOutput {
        let mut output = PipelineOutput::new();
        for dataset in datasets {
            output.absorb(self.run(dataset));
        }
        output
    }

    /// Processes datasets on blocking tasks. The output keeps the dataset
    /// order of `datasets`; id order across datasets is unspecified.
    pub async fn run_datasets_concurrently(&self, datasets: Vec<Dataset>) -> Result<PipelineOutput> {
        let mut tasks = JoinSet::new();
        for (position, dataset) in datasets.into_iter().enumerate() {
            let pipeline = self.clone();
            tasks.spawn_blocking(move || (position, pipeline.run(&dataset)));
        }

        let mut outputs = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            outputs.push(joined?);
        }
        outputs.sort_by_key(|(position, _)| *position);

        let mut output = PipelineOutput::new();
        for (_, dataset_output) in outputs {
            output.absorb(dataset_output);
        }
        Ok(output)
    }
}
