use std::fmt::{self, Display};

use crate::expressions::Operation;

/// Misuse of the aggregate API. Missing statistics are never reported here:
/// they make an aggregator invalid and its result `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateError {
    UnsupportedOperation(String),
    MissingTerm(Operation),
    UnexpectedTerm(Operation),
    PartitionArity { expected: usize, got: usize },
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateError::UnsupportedOperation(msg) => write!(f, "AggregateError: {}", msg),
            AggregateError::MissingTerm(op) => write!(f, "AggregateError: {} requires a column reference", op),
            AggregateError::UnexpectedTerm(op) => write!(f, "AggregateError: {} does not take a column reference", op),
            AggregateError::PartitionArity { expected, got } => write!(
                f,
                "AggregateError: partition spec has {} fields but the record has {} values",
                expected, got
            ),
        }
    }
}

impl std::error::Error for AggregateError {}
