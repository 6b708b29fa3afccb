pub mod count_impl;
pub use count_impl::*;

pub mod count_distinct_impl;
pub use count_distinct_impl::*;

pub mod minmax_impl;
pub use minmax_impl::*;

use crate::{
    expressions::{BoundReference, Literal},
    partition::PartitionData,
    stats::DataFileStats,
};

/// Every value of the column in this file is null.
pub(crate) fn all_null(term: &BoundReference, file: &dyn DataFileStats) -> bool {
    let id = term.field_id();
    match (file.value_count(id), file.null_value_count(id)) {
        (Some(values), Some(nulls)) => values > 0 && values == nulls,
        _ => false,
    }
}

/// No NaN can hide behind the bounds. Floating point columns must prove it
/// with a recorded zero; other columns never hold NaN.
pub(crate) fn nan_free(term: &BoundReference, file: &dyn DataFileStats) -> bool {
    if term.field_type().is_floating_point() {
        file.nan_value_count(term.field_id()) == Some(0)
    } else {
        file.nan_value_count(term.field_id()).unwrap_or(0) == 0
    }
}

/// Bounds recorded with a type other than the column's are unusable.
pub(crate) fn typed<'a>(term: &BoundReference, bound: Option<&'a Literal>) -> Option<&'a Literal> {
    bound.filter(|b| b.is_type(term.field_type()))
}

/// Identity partition constant of the column, `None` when it is null or was
/// recorded with a type other than the column's.
pub(crate) fn typed_constant(term: &BoundReference, partition: &dyn PartitionData) -> Option<Literal> {
    partition
        .partition_value(term.field_id())
        .filter(|v| v.is_type(term.field_type()))
}
