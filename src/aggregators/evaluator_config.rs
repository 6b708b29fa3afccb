use serde::{Deserialize, Serialize};

/// Knobs for [`AggregateEvaluator`](crate::aggregators::AggregateEvaluator).
///
/// - `partition_fallback` lets identity partition constants stand in for missing
///   column statistics when a partition tuple is supplied.
/// - `invalidate_on_deletes` gives up on the whole group as soon as a file
///   reports row-level deletes, since its statistics still count deleted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Use identity partition values when statistics are missing
    pub partition_fallback: bool,
    /// Invalidate every aggregate when a file carries deletes
    pub invalidate_on_deletes: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self { partition_fallback: true, invalidate_on_deletes: true }
    }
}

impl EvaluatorConfig {
    /// Create default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore partition tuples and rely on file statistics alone.
    pub fn file_stats_only() -> Self {
        Self { partition_fallback: false, ..Self::default() }
    }
}
