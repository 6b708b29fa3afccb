use crate::expressions::Literal;

/// Read access to the summary statistics recorded for one data file.
///
/// Implementations hand out statistics already materialized in memory; every
/// per-field accessor returns `None` when the statistic was not recorded. A
/// bound must only be reported when it is exact for the file (not truncated or
/// otherwise approximated).
pub trait DataFileStats {
    /// Total number of rows in the file. Always known.
    fn record_count(&self) -> u64;

    /// Number of values (nulls and NaNs included) for the field.
    fn value_count(&self, field_id: i32) -> Option<u64>;

    fn null_value_count(&self, field_id: i32) -> Option<u64>;

    /// Only floating point columns record NaN counts.
    fn nan_value_count(&self, field_id: i32) -> Option<u64>;

    fn lower_bound(&self, field_id: i32) -> Option<&Literal>;

    fn upper_bound(&self, field_id: i32) -> Option<&Literal>;

    /// Whether row-level deletes apply to this file. Statistics of such a file
    /// describe rows that may no longer be visible.
    fn has_deletes(&self) -> bool {
        false
    }
}
