use std::{fmt::{self, Display}, sync::Arc};

use crate::{
    aggregators::{
        AggregatePolicy, Aggregator, CountAggregator, CountDistinctAggregator, CountStarAggregator,
        MaxAggregator, MinAggregator, NullSafeAggregator,
    },
    expressions::{AggregateError, BoundReference, FieldType, Literal, Operation},
    partition::PartitionData,
    stats::DataFileStats,
};

/// An aggregate operation bound to a column (or to nothing, for `count(*)`).
///
/// Immutable once built; share it as `Arc<BoundAggregate>` across evaluation
/// runs. Each run asks it for a fresh [`Aggregator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundAggregate {
    op: Operation,
    term: Option<BoundReference>,
}

impl BoundAggregate {
    /// `count(*)` takes no term; every other operation requires one.
    pub fn new(op: Operation, term: Option<BoundReference>) -> Result<Self, AggregateError> {
        match (op.needs_term(), &term) {
            (true, None) => Err(AggregateError::MissingTerm(op)),
            (false, Some(_)) => Err(AggregateError::UnexpectedTerm(op)),
            _ => Ok(Self { op, term }),
        }
    }

    pub fn count_star() -> Self {
        Self { op: Operation::CountStar, term: None }
    }

    pub fn count(term: BoundReference) -> Self {
        Self { op: Operation::Count, term: Some(term) }
    }

    pub fn count_distinct(term: BoundReference) -> Self {
        Self { op: Operation::CountDistinct, term: Some(term) }
    }

    pub fn min(term: BoundReference) -> Self {
        Self { op: Operation::Min, term: Some(term) }
    }

    pub fn max(term: BoundReference) -> Self {
        Self { op: Operation::Max, term: Some(term) }
    }

    pub fn op(&self) -> Operation {
        self.op
    }

    pub fn term(&self) -> Option<&BoundReference> {
        self.term.as_ref()
    }

    /// The aggregated column. `count(*)` has none.
    pub fn reference(&self) -> Result<&BoundReference, AggregateError> {
        self.term.as_ref().ok_or_else(|| {
            AggregateError::UnsupportedOperation(format!("{} has no column reference", self.describe()))
        })
    }

    pub fn result_type(&self) -> FieldType {
        match (self.op, &self.term) {
            (Operation::Count | Operation::CountStar, _) => FieldType::Long,
            (Operation::CountDistinct, _) => FieldType::Integer,
            (Operation::Min | Operation::Max, Some(term)) => term.field_type(),
            (Operation::Min | Operation::Max, None) => unreachable!("{} is always built with a term", self.op),
        }
    }

    pub fn column_name(&self) -> &str {
        match &self.term {
            Some(term) => term.name(),
            None => "*",
        }
    }

    pub fn describe(&self) -> String {
        let col = self.column_name();
        match self.op {
            Operation::CountStar => "count(*)".to_string(),
            Operation::Count => format!("count({col})"),
            Operation::CountDistinct => format!("count(distinct {col})"),
            Operation::Max => format!("max({col})"),
            Operation::Min => format!("min({col})"),
        }
    }

    /// Value derived from the file's own statistics, `None` when the needed
    /// statistic is missing or unusable.
    pub fn eval_on_file(&self, file: &dyn DataFileStats) -> Option<Literal> {
        match self.op {
            Operation::CountStar => CountStarAggregator::eval_file(self, file).map(Into::into),
            Operation::Count => CountAggregator::eval_file(self, file).map(Into::into),
            Operation::CountDistinct => CountDistinctAggregator::eval_file(self, file),
            Operation::Min => MinAggregator::eval_file(self, file),
            Operation::Max => MaxAggregator::eval_file(self, file),
        }
    }

    /// Value derived from the file's identity partition constant. The file is
    /// needed by `count(col)`, which turns a non-null constant into the file's
    /// record count.
    pub fn eval_on_partition(&self, file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Literal> {
        match self.op {
            Operation::CountStar => CountStarAggregator::eval_partition(self, file, partition).map(Into::into),
            Operation::Count => CountAggregator::eval_partition(self, file, partition).map(Into::into),
            Operation::CountDistinct => CountDistinctAggregator::eval_partition(self, file, partition),
            Operation::Min => MinAggregator::eval_partition(self, file, partition),
            Operation::Max => MaxAggregator::eval_partition(self, file, partition),
        }
    }

    /// File statistics first, then the partition constant.
    pub fn eval(&self, file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Literal> {
        self.eval_on_file(file).or_else(|| self.eval_on_partition(file, partition))
    }

    /// Whether the file carries the statistic this operation needs.
    pub fn has_value(&self, file: &dyn DataFileStats) -> bool {
        match self.op {
            Operation::CountStar => CountStarAggregator::has_value(self, file),
            Operation::Count => CountAggregator::has_value(self, file),
            Operation::CountDistinct => CountDistinctAggregator::has_value(self, file),
            Operation::Min => MinAggregator::has_value(self, file),
            Operation::Max => MaxAggregator::has_value(self, file),
        }
    }

    /// Whether any statistic at all is recorded for the column in this file.
    pub fn has_column_stats(&self, file: &dyn DataFileStats) -> bool {
        let Some(term) = &self.term else {
            return true;
        };
        let id = term.field_id();
        file.value_count(id).is_some()
            || file.null_value_count(id).is_some()
            || file.nan_value_count(id).is_some()
            || file.lower_bound(id).is_some()
            || file.upper_bound(id).is_some()
    }

    pub fn is_identity_partition_column(&self, partition: &dyn PartitionData) -> bool {
        self.term
            .as_ref()
            .is_some_and(|term| partition.is_identity_partition_column(term.field_id()))
    }

    /// The column is an identity partition column whose constant is null in
    /// this file, so the file holds no non-null value for it. A constant of the
    /// wrong type does not qualify.
    pub fn has_null_partition_constant(&self, partition: &dyn PartitionData) -> bool {
        self.term.as_ref().is_some_and(|term| {
            partition.is_identity_partition_column(term.field_id())
                && partition.partition_value(term.field_id()).is_none()
        })
    }

    /// A fresh, valid aggregator for one file group.
    pub fn new_aggregator(self: &Arc<Self>) -> Box<dyn Aggregator> {
        match self.op {
            Operation::CountStar => Box::new(NullSafeAggregator::new(self.clone(), CountStarAggregator::default())),
            Operation::Count => Box::new(NullSafeAggregator::new(self.clone(), CountAggregator::default())),
            Operation::CountDistinct => Box::new(NullSafeAggregator::new(self.clone(), CountDistinctAggregator::default())),
            Operation::Min => Box::new(NullSafeAggregator::new(self.clone(), MinAggregator::default())),
            Operation::Max => Box::new(NullSafeAggregator::new(self.clone(), MaxAggregator::default())),
        }
    }
}

impl Display for BoundAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
