use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    pipeline::{IdAllocator, Tool},
    validator::Rejection,
};

/// Result of running one or more datasets through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub tools: Vec<Tool>,
    pub rejections: Vec<Rejection>,
    /// Records dropped before the pipeline because they carried no SQL.
    pub skipped: usize,
    pub records_total: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl Default for PipelineOutput {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            tools: Vec::new(),
            rejections: Vec::new(),
            skipped: 0,
            records_total: 0,
            started_at: now,
            finished_at: now,
        }
    }
}

impl PipelineOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends another output produced against the same id allocator.
    pub fn absorb(&mut self, other: PipelineOutput) {
        self.tools.extend(other.tools);
        self.rejections.extend(other.rejections);
        self.skipped += other.skipped;
        self.records_total += other.records_total;
        self.started_at = self.started_at.min(other.started_at);
        self.finished_at = self.finished_at.max(other.finished_at);
    }

    /// Combines outputs produced independently. Every tool id is claimed
    /// from `allocator`, so ids that collide across outputs come out distinct.
    pub fn merge(outputs: Vec<PipelineOutput>, allocator: &IdAllocator) -> PipelineOutput {
        let mut outputs = outputs.into_iter();
        let Some(mut merged) = outputs.next() else {
            return PipelineOutput::new();
        };
        for output in outputs {
            merged.absorb(output);
        }

        for tool in merged.tools.iter_mut() {
            tool.id = allocator.claim(&tool.id);
        }
        merged
    }

    /// Tools by descending quality; ties keep their original order.
    pub fn ranked(&self) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self.tools.iter().collect();
        tools.sort_by_key(|tool| std::cmp::Reverse(OrderedFloat(tool.quality_score.value)));
        tools
    }

    /// Tools keyed by id, in output order.
    pub fn tool_map(&self) -> IndexMap<&str, &Tool> {
        self.tools.iter().map(|tool| (tool.id.as_str(), tool)).collect()
    }

    pub fn summary(&self) -> RunSummary {
        let average_quality = match self.tools.len() {
            0 => 0.0,
            count => self.tools.iter().map(|tool| tool.quality_score.value).sum::<f64>() / count as f64,
        };

        let mut label_counts: IndexMap<String, usize> = IndexMap::new();
        for label in self.tools.iter().flat_map(|tool| tool.labels.iter()) {
            *label_counts.entry(label.to_string()).or_default() += 1;
        }

        let mut rejection_counts: IndexMap<String, usize> = IndexMap::new();
        for rejection in &self.rejections {
            *rejection_counts.entry(rejection.reason.to_string()).or_default() += 1;
        }

        RunSummary {
            started_at: self.started_at,
            finished_at: self.finished_at,
            records_total: self.records_total,
            accepted: self.tools.len(),
            rejected: self.rejections.len(),
            skipped: self.skipped,
            average_quality,
            label_counts,
            rejection_counts,
        }
    }
}

/// Run statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub records_total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub average_quality: f64,
    /// Label -> number of tools carrying it, by first appearance.
    pub label_counts: IndexMap<String, usize>,
    pub rejection_counts: IndexMap<String, usize>,
}

impl RunSummary {
    pub fn acceptance_rate(&self) -> f64 {
        match self.records_total.saturating_sub(self.skipped) {
            0 => 0.0,
            processed => self.accepted as f64 / processed as f64,
        }
    }
}
