use crate::{
    aggregators::AggregatePolicy,
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// `count(*)`: sum of record counts. Always answerable.
#[derive(Debug, Default)]
pub struct CountStarAggregator {
    count: i64,
}

impl AggregatePolicy for CountStarAggregator {
    type Value = i64;

    /// Only a record count beyond `i64::MAX` is unusable.
    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool {
        Self::eval_file(aggregate, file).is_some()
    }

    fn eval_file(_aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<i64> {
        i64::try_from(file.record_count()).ok()
    }

    fn eval_partition(_: &BoundAggregate, _: &dyn DataFileStats, _: &dyn PartitionData) -> Option<i64> {
        None
    }

    fn update(&mut self, value: i64) -> bool {
        match self.count.checked_add(value) {
            Some(count) => {
                self.count = count;
                true
            }
            None => false,
        }
    }

    fn current(&self) -> Option<Literal> {
        Some(Literal::Long(self.count))
    }

    fn merge(&mut self, other: &Self) -> bool {
        self.update(other.count)
    }
}

/// `count(col)`: sum of non-null values per file.
#[derive(Debug, Default)]
pub struct CountAggregator {
    count: i64,
}

impl AggregatePolicy for CountAggregator {
    type Value = i64;

    /// Both counts recorded and consistent (`null_count <= value_count`).
    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool {
        Self::eval_file(aggregate, file).is_some()
    }

    fn eval_file(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<i64> {
        let id = aggregate.term()?.field_id();
        let non_null = file.value_count(id)?.checked_sub(file.null_value_count(id)?)?;
        i64::try_from(non_null).ok()
    }

    /// A non-null identity constant means every row counts; a null one means none do.
    fn eval_partition(aggregate: &BoundAggregate, file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<i64> {
        let id = aggregate.term()?.field_id();
        if !partition.is_identity_partition_column(id) {
            return None;
        }
        match partition.partition_value(id) {
            Some(_) => i64::try_from(file.record_count()).ok(),
            None => Some(0),
        }
    }

    fn update(&mut self, value: i64) -> bool {
        match self.count.checked_add(value) {
            Some(count) => {
                self.count = count;
                true
            }
            None => false,
        }
    }

    fn current(&self) -> Option<Literal> {
        Some(Literal::Long(self.count))
    }

    fn merge(&mut self, other: &Self) -> bool {
        self.update(other.count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        expressions::{BoundReference, FieldType},
        partition::{PartitionRecord, PartitionSpec},
        stats::DataFile,
    };

    fn qty() -> BoundAggregate { BoundAggregate::count(BoundReference::new(3, "qty", FieldType::Integer)) }

    #[test]
    fn count_star_sums_record_counts() {
        let mut acc = CountStarAggregator::default();
        assert_eq!(acc.current(), Some(Literal::Long(0)));
        for file in [DataFile::new("a", 10), DataFile::new("b", 0), DataFile::new("c", 32)] {
            acc.update(CountStarAggregator::eval_file(&BoundAggregate::count_star(), &file).unwrap());
        }
        assert_eq!(acc.current(), Some(Literal::Long(42)));
    }

    #[test]
    fn count_subtracts_nulls() {
        let agg = qty();
        let file = DataFile::new("a", 10).with_counts(3, 10, 2);
        assert!(CountAggregator::has_value(&agg, &file));
        assert_eq!(CountAggregator::eval_file(&agg, &file), Some(8));
    }

    #[test]
    fn count_needs_both_value_and_null_counts() {
        let agg = qty();
        let values_only = DataFile::new("a", 10).with_value_count(3, 10);
        assert!(!CountAggregator::has_value(&agg, &values_only));
        assert_eq!(CountAggregator::eval_file(&agg, &values_only), None);
    }

    #[test]
    fn more_nulls_than_values_is_not_a_value() {
        let agg = qty();
        let file = DataFile::new("a", 7).with_counts(3, 5, 7);
        assert!(!CountAggregator::has_value(&agg, &file));
        assert_eq!(CountAggregator::eval_file(&agg, &file), None);
    }

    #[test]
    fn overflowing_update_is_rejected() {
        let mut acc = CountStarAggregator::default();
        assert!(acc.update(i64::MAX));
        assert!(!acc.update(1));

        let star = BoundAggregate::count_star();
        assert!(!CountStarAggregator::has_value(&star, &DataFile::new("a", u64::MAX)));
    }

    #[test]
    fn count_from_identity_partition_constant() {
        let agg = qty();
        let spec = Arc::new(PartitionSpec::new(1).identity("qty", 3));
        let file = DataFile::new("a", 12);

        let non_null = PartitionRecord::new(spec.clone(), vec![Some(Literal::Int(5))]).unwrap();
        assert_eq!(CountAggregator::eval_partition(&agg, &file, &non_null), Some(12));

        let null = PartitionRecord::new(spec, vec![None]).unwrap();
        assert_eq!(CountAggregator::eval_partition(&agg, &file, &null), Some(0));
    }

    #[test]
    fn merge_adds_partials() {
        let mut a = CountAggregator::default();
        let mut b = CountAggregator::default();
        a.update(3);
        b.update(4);
        a.merge(&b);
        assert_eq!(a.current(), Some(Literal::Long(7)));
    }
}
