use std::{fmt::{self, Display}, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::expressions::AggregateError;

/// The closed set of aggregates that can be answered from file statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Count,
    CountStar,
    CountDistinct,
    Min,
    Max,
}

impl Operation {
    /// Whether this operation aggregates a column (everything but `count(*)`).
    pub fn needs_term(&self) -> bool {
        !matches!(self, Operation::CountStar)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Operation::Count => "count",
            Operation::CountStar => "count_star",
            Operation::CountDistinct => "count_distinct",
            Operation::Min => "min",
            Operation::Max => "max",
        };
        f.write_str(tag)
    }
}

impl FromStr for Operation {
    type Err = AggregateError;

    /// Case-insensitive; accepts the snake_case tags produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(Operation::Count),
            "count_star" => Ok(Operation::CountStar),
            "count_distinct" => Ok(Operation::CountDistinct),
            "min" => Ok(Operation::Min),
            "max" => Ok(Operation::Max),
            _ => Err(AggregateError::UnsupportedOperation(format!("Unsupported aggregate type: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!("COUNT".parse::<Operation>().unwrap(), Operation::Count);
        assert_eq!("Count_Distinct".parse::<Operation>().unwrap(), Operation::CountDistinct);
        for op in [Operation::Count, Operation::CountStar, Operation::CountDistinct, Operation::Min, Operation::Max] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_tag_is_unsupported() {
        let err = "avg".parse::<Operation>().unwrap_err();
        assert!(matches!(err, AggregateError::UnsupportedOperation(ref m) if m.contains("avg")));
    }

    #[test]
    fn only_count_star_has_no_term() {
        assert!(!Operation::CountStar.needs_term());
        assert!(Operation::Min.needs_term());
    }
}
