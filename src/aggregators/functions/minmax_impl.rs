use crate::{
    aggregators::{functions::{all_null, nan_free, typed, typed_constant}, AggregatePolicy},
    expressions::{BoundAggregate, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// `min(col)`: smallest lower bound. A file whose column is entirely null is
/// answerable but contributes nothing.
#[derive(Debug, Default)]
pub struct MinAggregator {
    current: Option<Literal>,
}

/// `max(col)`: largest upper bound. NaN orders above every value and is not
/// reflected in the upper bound, so a file holding NaNs is not answerable.
#[derive(Debug, Default)]
pub struct MaxAggregator {
    current: Option<Literal>,
}

fn identity_constant(aggregate: &BoundAggregate, partition: &dyn PartitionData) -> Option<Literal> {
    typed_constant(aggregate.term()?, partition)
}

impl AggregatePolicy for MinAggregator {
    type Value = Literal;

    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool {
        aggregate.term().is_some_and(|term| {
            typed(term, file.lower_bound(term.field_id())).is_some() || all_null(term, file)
        })
    }

    fn eval_file(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<Literal> {
        let term = aggregate.term()?;
        typed(term, file.lower_bound(term.field_id())).cloned()
    }

    fn eval_partition(aggregate: &BoundAggregate, _file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Literal> {
        identity_constant(aggregate, partition)
    }

    fn update(&mut self, value: Literal) -> bool {
        if self.current.as_ref().is_none_or(|cur| value < *cur) {
            self.current = Some(value);
        }
        true
    }

    fn current(&self) -> Option<Literal> {
        self.current.clone()
    }

    fn merge(&mut self, other: &Self) -> bool {
        match &other.current {
            Some(value) => self.update(value.clone()),
            None => true,
        }
    }
}

impl AggregatePolicy for MaxAggregator {
    type Value = Literal;

    fn has_value(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> bool {
        aggregate.term().is_some_and(|term| {
            let bounded = typed(term, file.upper_bound(term.field_id())).is_some() && nan_free(term, file);
            bounded || all_null(term, file)
        })
    }

    fn eval_file(aggregate: &BoundAggregate, file: &dyn DataFileStats) -> Option<Literal> {
        let term = aggregate.term()?;
        if !nan_free(term, file) {
            return None;
        }
        typed(term, file.upper_bound(term.field_id())).cloned()
    }

    fn eval_partition(aggregate: &BoundAggregate, _file: &dyn DataFileStats, partition: &dyn PartitionData) -> Option<Literal> {
        identity_constant(aggregate, partition)
    }

    fn update(&mut self, value: Literal) -> bool {
        if self.current.as_ref().is_none_or(|cur| value > *cur) {
            self.current = Some(value);
        }
        true
    }

    fn current(&self) -> Option<Literal> {
        self.current.clone()
    }

    fn merge(&mut self, other: &Self) -> bool {
        match &other.current {
            Some(value) => self.update(value.clone()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{expressions::{BoundReference, FieldType}, stats::DataFile};

    fn price() -> BoundReference { BoundReference::new(1, "price", FieldType::Long) }
    fn score() -> BoundReference { BoundReference::new(2, "score", FieldType::Double) }
    fn d(v: f64) -> Literal { Literal::double(v).unwrap() }

    #[test]
    fn min_max_track_extremes() {
        let mut min = MinAggregator::default();
        let mut max = MaxAggregator::default();
        assert_eq!(min.current(), None);
        assert_eq!(max.current(), None);

        for v in [5, 2, 9] {
            min.update(Literal::Long(v));
            max.update(Literal::Long(v));
        }
        assert_eq!(min.current(), Some(Literal::Long(2)));
        assert_eq!(max.current(), Some(Literal::Long(9)));
    }

    #[test]
    fn strings_compare_lexicographically() {
        let mut min = MinAggregator::default();
        let mut max = MaxAggregator::default();
        for s in ["pear", "apple", "plum"] {
            min.update(Literal::from(s));
            max.update(Literal::from(s));
        }
        assert_eq!(min.current(), Some(Literal::from("apple")));
        assert_eq!(max.current(), Some(Literal::from("plum")));
    }

    #[test]
    fn all_null_file_is_answerable_without_a_bound() {
        let agg = BoundAggregate::min(price());
        let file = DataFile::new("a", 4).with_counts(1, 4, 4);
        assert!(MinAggregator::has_value(&agg, &file));
        assert_eq!(MinAggregator::eval_file(&agg, &file), None);
        assert!(MaxAggregator::has_value(&BoundAggregate::max(price()), &file));
    }

    #[test]
    fn bound_of_the_wrong_type_is_ignored() {
        let agg = BoundAggregate::max(price());
        let file = DataFile::new("a", 4).with_counts(1, 4, 0).with_upper_bound(1, Literal::from("100"));
        assert!(!MaxAggregator::has_value(&agg, &file));
        assert_eq!(MaxAggregator::eval_file(&agg, &file), None);
    }

    #[test]
    fn max_refuses_files_with_nan() {
        let agg = BoundAggregate::max(score());
        let clean = DataFile::new("a", 4).with_counts(2, 4, 0).with_nan_count(2, 0).with_bounds(2, d(0.5), d(3.5));
        assert!(MaxAggregator::has_value(&agg, &clean));
        assert_eq!(MaxAggregator::eval_file(&agg, &clean), Some(d(3.5)));

        let with_nan = clean.clone().with_nan_count(2, 1);
        assert!(!MaxAggregator::has_value(&agg, &with_nan));
        assert_eq!(MaxAggregator::eval_file(&agg, &with_nan), None);

        // the lower bound stays exact: NaN sorts above it
        let min = BoundAggregate::min(score());
        assert_eq!(MinAggregator::eval_file(&min, &with_nan), Some(d(0.5)));
    }

    #[test]
    fn merge_keeps_the_overall_extreme() {
        let mut a = MaxAggregator::default();
        let mut b = MaxAggregator::default();
        a.update(Literal::Long(100));
        b.update(Literal::Long(250));
        a.merge(&b);
        assert_eq!(a.current(), Some(Literal::Long(250)));

        let mut m = MinAggregator::default();
        m.merge(&MinAggregator::default());
        assert_eq!(m.current(), None);
    }
}
