use crate::{
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// How one aggregate operation reads statistics and folds them into a
/// running value.
///
/// The associated functions decide what a file (or its partition constant)
/// contributes; the methods own the running state. Every implementation must be
/// commutative and associative over `update` and `merge` so files can be fed in
/// any order and partial results combined.
pub trait AggregatePolicy: Send + 'static {
    /// What a single file contributes.
    type Value: Into<Literal>;

    /// Whether `file` carries enough statistics to contribute exactly.
    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool;

    fn eval_file(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<Self::Value>;

    fn eval_partition(
        aggregate: &BoundAggregate,
        file: &dyn DataFileStats,
        partition: &dyn PartitionData,
    ) -> Option<Self::Value>;

    fn eval(aggregate: &BoundAggregate, file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Self::Value> {
        Self::eval_file(aggregate, file).or_else(|| Self::eval_partition(aggregate, file, partition))
    }

    /// Fold in one contribution. `false` when it can not be represented exactly
    /// (count overflow); the running value is then meaningless.
    fn update(&mut self, value: Self::Value) -> bool;

    /// Running result; defined even before the first update.
    fn current(&self) -> Option<Literal>;

    /// Same contract as `update`.
    fn merge(&mut self, other: &Self) -> bool;
}
