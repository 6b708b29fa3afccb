use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Primitive column types that can carry summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// true / false
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit IEEE 754 float
    Float,
    /// 64-bit IEEE 754 float
    Double,
    /// Calendar date without time zone
    Date,
    /// Timestamp without time zone, microsecond precision
    Timestamp,
    /// UTF-8 string
    String,
    /// RFC 4122 uuid
    Uuid,
    /// Arbitrary bytes
    Binary,
}

impl FieldType {
    /// Floating point columns are the only ones that track NaN counts.
    pub fn is_floating_point(&self) -> bool {
        matches!(self, FieldType::Float | FieldType::Double)
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Boolean => "boolean",
            FieldType::Integer => "int",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::Date => "date",
            FieldType::Timestamp => "timestamp",
            FieldType::String => "string",
            FieldType::Uuid => "uuid",
            FieldType::Binary => "binary",
        };
        f.write_str(name)
    }
}
