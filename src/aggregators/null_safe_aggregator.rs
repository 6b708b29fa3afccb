use std::{any::Any, sync::Arc};

use tracing::debug;

use crate::{
    aggregators::{AggregatePolicy, Aggregator},
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// Trust state of an aggregator. `Invalid` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Valid,
    Invalid,
}

/// Wraps an [`AggregatePolicy`] with the rule shared by every operation: a file
/// whose contribution cannot be proven makes the whole result unknown, for good.
pub struct NullSafeAggregator<P: AggregatePolicy> {
    aggregate: Arc<BoundAggregate>,
    policy: P,
    validity: Validity,
}

impl<P: AggregatePolicy> NullSafeAggregator<P> {
    pub fn new(aggregate: Arc<BoundAggregate>, policy: P) -> Self {
        Self { aggregate, policy, validity: Validity::Valid }
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    fn invalidate(&mut self, reason: &str) {
        if self.validity == Validity::Valid {
            debug!(aggregate = %self.aggregate, reason, "aggregate is not answerable from statistics");
            self.validity = Validity::Invalid;
        }
    }

    fn fold(&mut self, value: P::Value) {
        if !self.policy.update(value) {
            self.invalidate("accumulator overflow");
        }
    }

    fn missing_value_reason(&self, file: &dyn DataFileStats) -> &'static str {
        if self.aggregate.has_column_stats(file) { "statistic unusable" } else { "column untracked" }
    }
}

impl<P: AggregatePolicy> Aggregator for NullSafeAggregator<P> {
    fn aggregate(&self) -> &BoundAggregate {
        &self.aggregate
    }

    fn update_with_partition(&mut self, file: &dyn DataFileStats, partition: &dyn PartitionData) {
        if self.validity == Validity::Invalid {
            return;
        }
        match P::eval(&self.aggregate, file, partition) {
            Some(value) => self.fold(value),
            // constant null column: nothing to contribute
            None if self.aggregate.has_null_partition_constant(partition) => {}
            None => {
                let reason = self.missing_value_reason(file);
                self.invalidate(reason);
            }
        }
    }

    fn update(&mut self, file: &dyn DataFileStats) {
        if self.validity == Validity::Invalid {
            return;
        }
        if P::has_value(&self.aggregate, file) {
            if let Some(value) = P::eval_file(&self.aggregate, file) {
                self.fold(value);
            }
        } else {
            let reason = self.missing_value_reason(file);
            self.invalidate(reason);
        }
    }

    fn has_value(&self, file: &dyn DataFileStats) -> bool {
        P::has_value(&self.aggregate, file)
    }

    fn has_column_stats(&self, file: &dyn DataFileStats) -> bool {
        self.aggregate.has_column_stats(file)
    }

    fn is_identity_partition_column(&self, partition: &dyn PartitionData) -> bool {
        self.aggregate.is_identity_partition_column(partition)
    }

    fn set_invalid(&mut self) {
        self.invalidate("forced");
    }

    fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    fn result(&self) -> Option<Literal> {
        match self.validity {
            Validity::Valid => self.policy.current(),
            Validity::Invalid => None,
        }
    }

    fn merge(&mut self, other: &dyn Aggregator) {
        let partial = match other.as_any().downcast_ref::<Self>() {
            Some(partial) if partial.aggregate == self.aggregate => partial,
            _ => panic!("cannot merge an aggregator for {} into one for {}", other.aggregate(), self.aggregate),
        };
        if partial.validity == Validity::Invalid {
            self.invalidate("merged invalid partial");
        } else if self.validity == Validity::Valid && !self.policy.merge(&partial.policy) {
            self.invalidate("accumulator overflow");
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
