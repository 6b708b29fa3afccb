pub mod partition_spec;
pub use partition_spec::*;

pub mod partition_record;
pub use partition_record::*;

/// Identity-partition lookups for the file a partition tuple belongs to.
pub trait PartitionData {
    /// Whether the column with `field_id` is constant in the file and stored
    /// untransformed in its partition tuple.
    fn is_identity_partition_column(&self, field_id: i32) -> bool;

    /// The constant value of an identity partition column. `None` both when the
    /// column is not an identity partition column and when the constant is null;
    /// callers tell the two apart with `is_identity_partition_column`.
    fn partition_value(&self, field_id: i32) -> Option<crate::expressions::Literal>;
}
