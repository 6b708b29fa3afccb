use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    aggregators::{Aggregator, EvaluatorConfig},
    expressions::{BoundAggregate, FieldType, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// Evaluates a list of aggregates over one file group at once.
pub struct AggregateEvaluator {
    aggregates: Vec<Arc<BoundAggregate>>,
    aggregators: Vec<Box<dyn Aggregator>>,
    config: EvaluatorConfig,
}

impl AggregateEvaluator {
    pub fn create(aggregates: Vec<Arc<BoundAggregate>>, config: EvaluatorConfig) -> Self {
        let aggregators = aggregates.iter().map(|agg| agg.new_aggregator()).collect();
        Self { aggregates, aggregators, config }
    }

    pub fn aggregates(&self) -> &[Arc<BoundAggregate>] {
        &self.aggregates
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Feed one file of the group, with its partition tuple when the caller has it.
    pub fn update(&mut self, file: &dyn DataFileStats, partition: Option<&dyn PartitionData>) {
        trace!(records = file.record_count(), partitioned = partition.is_some(), "aggregating file statistics");

        if self.config.invalidate_on_deletes && file.has_deletes() {
            if self.all_aggregators_valid() {
                debug!("file carries row-level deletes, statistics can not answer the aggregates");
            }
            self.set_invalid();
            return;
        }

        let partition = partition.filter(|_| self.config.partition_fallback);
        for aggregator in &mut self.aggregators {
            match partition {
                Some(p) => aggregator.update_with_partition(file, p),
                None => aggregator.update(file),
            }
        }
    }

    pub fn all_aggregators_valid(&self) -> bool {
        self.aggregators.iter().all(|a| a.is_valid())
    }

    pub fn set_invalid(&mut self) {
        for aggregator in &mut self.aggregators {
            aggregator.set_invalid();
        }
    }

    /// One entry per aggregate, in creation order.
    pub fn result(&self) -> Vec<Option<Literal>> {
        self.aggregators.iter().map(|a| a.result()).collect()
    }

    /// `(describe(), result type)` per aggregate, in creation order.
    pub fn result_type(&self) -> Vec<(String, FieldType)> {
        self.aggregates.iter().map(|a| (a.describe(), a.result_type())).collect()
    }

    /// Results as a JSON row keyed by each aggregate's description. Unknown
    /// results are `null`.
    pub fn result_row(&self) -> Map<String, Value> {
        self.aggregates
            .iter()
            .zip(&self.aggregators)
            .map(|(agg, acc)| (agg.describe(), acc.result().map(|v| v.to_json()).unwrap_or(Value::Null)))
            .collect()
    }

    /// Fold in an evaluator built from the same aggregates over other files.
    pub fn merge(&mut self, other: &AggregateEvaluator) {
        assert_eq!(
            self.aggregators.len(),
            other.aggregators.len(),
            "cannot merge evaluators over different aggregate lists"
        );
        for (mine, theirs) in self.aggregators.iter_mut().zip(&other.aggregators) {
            mine.merge(&**theirs);
        }
    }
}
