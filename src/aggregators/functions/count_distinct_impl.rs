use std::collections::BTreeSet;

use crate::{
    aggregators::{functions::{nan_free, typed, typed_constant}, AggregatePolicy},
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// `count(distinct col)`.
///
/// Summary statistics say nothing about how values overlap between files, so a
/// file is only trusted when it proves the column holds one non-null constant.
/// The distinct set is then the set of those constants across the group.
#[derive(Debug, Default)]
pub struct CountDistinctAggregator {
    values: BTreeSet<Literal>,
}

impl CountDistinctAggregator {
    fn single_constant<'a>(aggregate: &BoundAggregate, file: &'a dyn DataFileStats) -> Option<&'a Literal> {
        let term = aggregate.term()?;
        let id = term.field_id();
        let lower = typed(term, file.lower_bound(id))?;
        let upper = typed(term, file.upper_bound(id))?;
        let constant = lower == upper && file.null_value_count(id) == Some(0) && nan_free(term, file);
        constant.then_some(lower)
    }
}

impl AggregatePolicy for CountDistinctAggregator {
    type Value = Literal;

    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool {
        Self::single_constant(aggregate, file).is_some()
    }

    fn eval_file(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<Literal> {
        Self::single_constant(aggregate, file).cloned()
    }

    fn eval_partition(aggregate: &BoundAggregate, _file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Literal> {
        typed_constant(aggregate.term()?, partition)
    }

    /// The result is an `Integer`; a set larger than `i32::MAX` is not representable.
    fn update(&mut self, value: Literal) -> bool {
        self.values.insert(value);
        i32::try_from(self.values.len()).is_ok()
    }

    fn current(&self) -> Option<Literal> {
        i32::try_from(self.values.len()).ok().map(Literal::Int)
    }

    fn merge(&mut self, other: &Self) -> bool {
        self.values.extend(other.values.iter().cloned());
        i32::try_from(self.values.len()).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expressions::{BoundReference, FieldType}, stats::DataFile};

    fn agg(ty: FieldType) -> BoundAggregate { BoundAggregate::count_distinct(BoundReference::new(5, "k", ty)) }

    #[test]
    fn single_constant_file_contributes_its_value() {
        let file = DataFile::new("a", 8).with_counts(5, 8, 0).with_bounds(5, Literal::Long(1), Literal::Long(1));
        assert!(CountDistinctAggregator::has_value(&agg(FieldType::Long), &file));
        assert_eq!(CountDistinctAggregator::eval_file(&agg(FieldType::Long), &file), Some(Literal::Long(1)));
    }

    #[test]
    fn range_or_nulls_are_not_trusted() {
        let a = agg(FieldType::Long);
        let range = DataFile::new("a", 8).with_counts(5, 8, 0).with_bounds(5, Literal::Long(1), Literal::Long(5));
        assert!(!CountDistinctAggregator::has_value(&a, &range));

        let nulls = DataFile::new("b", 8).with_counts(5, 8, 1).with_bounds(5, Literal::Long(1), Literal::Long(1));
        assert!(!CountDistinctAggregator::has_value(&a, &nulls));

        let unknown_nulls = DataFile::new("c", 8).with_bounds(5, Literal::Long(1), Literal::Long(1));
        assert!(!CountDistinctAggregator::has_value(&a, &unknown_nulls));
    }

    #[test]
    fn floating_point_constant_needs_a_recorded_zero_nan_count() {
        let a = agg(FieldType::Double);
        let one = Literal::double(1.0).unwrap();
        let base = DataFile::new("a", 3).with_counts(5, 3, 0).with_bounds(5, one.clone(), one.clone());
        assert!(!CountDistinctAggregator::has_value(&a, &base));
        assert!(CountDistinctAggregator::has_value(&a, &base.clone().with_nan_count(5, 0)));
        assert!(!CountDistinctAggregator::has_value(&a, &base.with_nan_count(5, 1)));
    }

    #[test]
    fn equal_constants_count_once() {
        let mut acc = CountDistinctAggregator::default();
        assert_eq!(acc.current(), Some(Literal::Int(0)));
        acc.update(Literal::Long(1));
        acc.update(Literal::Long(5));
        acc.update(Literal::Long(1));
        assert_eq!(acc.current(), Some(Literal::Int(2)));

        let mut other = CountDistinctAggregator::default();
        other.update(Literal::Long(5));
        other.update(Literal::Long(9));
        acc.merge(&other);
        assert_eq!(acc.current(), Some(Literal::Int(3)));
    }
}
