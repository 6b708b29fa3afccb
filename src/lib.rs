//! Aggregate pushdown over data-file summary statistics.
//!
//! `count(*)`, `count(col)`, `count(distinct col)`, `min(col)` and `max(col)`
//! are answered from per-file value/null/NaN counts, column bounds and identity
//! partition constants, never from rows. An answer is either exact or `None`.

pub mod expressions;
pub use expressions::{AggregateError, BoundAggregate, BoundReference, FieldType, Literal, Operation};

pub mod stats;
pub use stats::{DataFile, DataFileStats};

pub mod partition;
pub use partition::{PartitionData, PartitionRecord, PartitionSpec, Transform};

pub mod aggregators;
pub use aggregators::{AggregateEvaluator, Aggregator, EvaluatorConfig};
