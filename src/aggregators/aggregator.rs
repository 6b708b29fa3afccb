use std::any::Any;

use crate::{
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// The per-run state of one aggregate over one file group.
///
/// The planner:
///   1) feeds every file of the group, with its partition tuple when known
///   2) may force `set_invalid()` when the group is unsafe to aggregate
///   3) reads `result()` once; `None` means "scan the rows instead"
pub trait Aggregator: Send {
    fn aggregate(&self) -> &BoundAggregate;

    /// Fold in a file whose partition tuple is available.
    fn update_with_partition(&mut self, file: &dyn DataFileStats, partition: &dyn PartitionData);

    /// Fold in a file using its statistics only.
    fn update(&mut self, file: &dyn DataFileStats);

    fn has_value(&self, file: &dyn DataFileStats) -> bool;

    fn has_column_stats(&self, file: &dyn DataFileStats) -> bool;

    fn is_identity_partition_column(&self, partition: &dyn PartitionData) -> bool;

    fn set_invalid(&mut self);

    fn is_valid(&self) -> bool;

    /// `None` when the aggregate could not be proven from statistics.
    fn result(&self) -> Option<Literal>;

    /// Fold in a partial aggregator built for the same aggregate over other
    /// files. Panics when `other` aggregates a different operation.
    fn merge(&mut self, other: &dyn Aggregator);

    fn as_any(&self) -> &dyn Any;
}
