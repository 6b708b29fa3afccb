use std::sync::Arc;

use crate::{
    expressions::{AggregateError, Literal},
    partition::{PartitionData, PartitionSpec},
};

/// Partition tuple of one data file, bound to the spec the file was written with.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionRecord {
    spec: Arc<PartitionSpec>,
    values: Vec<Option<Literal>>,
}

impl PartitionRecord {
    pub fn new(spec: Arc<PartitionSpec>, values: Vec<Option<Literal>>) -> Result<Self, AggregateError> {
        if spec.len() != values.len() {
            return Err(AggregateError::PartitionArity { expected: spec.len(), got: values.len() });
        }
        Ok(Self { spec, values })
    }

    pub fn spec(&self) -> &PartitionSpec {
        &self.spec
    }

    pub fn get(&self, pos: usize) -> Option<&Literal> {
        self.values.get(pos).and_then(Option::as_ref)
    }
}

impl PartitionData for PartitionRecord {
    fn is_identity_partition_column(&self, field_id: i32) -> bool {
        self.spec.identity_position(field_id).is_some()
    }

    fn partition_value(&self, field_id: i32) -> Option<Literal> {
        self.spec.identity_position(field_id).and_then(|pos| self.get(pos).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Transform;

    fn spec() -> Arc<PartitionSpec> {
        Arc::new(PartitionSpec::new(1).identity("region", 2).with_field("day", 3, Transform::Day))
    }

    #[test]
    fn identity_value_is_read_from_the_tuple() {
        let rec = PartitionRecord::new(spec(), vec![Some(Literal::from("eu")), Some(Literal::Int(19000))]).unwrap();
        assert!(rec.is_identity_partition_column(2));
        assert_eq!(rec.partition_value(2), Some(Literal::from("eu")));

        // transformed value is never exposed as the column's constant
        assert!(!rec.is_identity_partition_column(3));
        assert_eq!(rec.partition_value(3), None);
    }

    #[test]
    fn null_constant_is_still_an_identity_column() {
        let rec = PartitionRecord::new(spec(), vec![None, None]).unwrap();
        assert!(rec.is_identity_partition_column(2));
        assert_eq!(rec.partition_value(2), None);
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let err = PartitionRecord::new(spec(), vec![None]).unwrap_err();
        assert_eq!(err, AggregateError::PartitionArity { expected: 2, got: 1 });
    }
}
