use std::fmt::{self, Display};

use chrono::{NaiveDate, NaiveDateTime};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use uuid::Uuid;

use crate::expressions::FieldType;

/// A typed scalar as it appears in a column bound, a partition tuple or an
/// aggregate result.
///
/// Floating point values are `NotNan`: NaN is never a bound (it is tracked by
/// the NaN count instead), which gives every variant a total natural order.
/// Comparing literals of different variants orders by variant and only
/// happens inside sets; extremum tracking always compares same-typed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Literal {
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(NotNan<f32>),
    Double(NotNan<f64>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    String(String),
    Uuid(Uuid),
    Binary(Vec<u8>),
}

impl Literal {
    /// `None` when `value` is NaN.
    pub fn float(value: f32) -> Option<Literal> {
        NotNan::new(value).ok().map(Literal::Float)
    }

    /// `None` when `value` is NaN.
    pub fn double(value: f64) -> Option<Literal> {
        NotNan::new(value).ok().map(Literal::Double)
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Literal::Boolean(_) => FieldType::Boolean,
            Literal::Int(_) => FieldType::Integer,
            Literal::Long(_) => FieldType::Long,
            Literal::Float(_) => FieldType::Float,
            Literal::Double(_) => FieldType::Double,
            Literal::Date(_) => FieldType::Date,
            Literal::Timestamp(_) => FieldType::Timestamp,
            Literal::String(_) => FieldType::String,
            Literal::Uuid(_) => FieldType::Uuid,
            Literal::Binary(_) => FieldType::Binary,
        }
    }

    pub fn is_type(&self, ty: FieldType) -> bool {
        self.field_type() == ty
    }

    /// Render as JSON for result rows. Dates, timestamps and uuids become
    /// strings; binary becomes a lowercase hex string.
    pub fn to_json(&self) -> Value {
        match self {
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::Int(i) => Value::Number(Number::from(*i)),
            Literal::Long(l) => Value::Number(Number::from(*l)),
            Literal::Float(f) => Number::from_f64(f64::from(f.into_inner()))
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Literal::Double(d) => Number::from_f64(d.into_inner())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Literal::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Literal::Timestamp(ts) => Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Uuid(u) => Value::String(u.to_string()),
            Literal::Binary(bytes) => Value::String(hex(bytes)),
        }
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Binary(bytes) => write!(f, "X'{}'", hex(bytes)),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Long(l) => write!(f, "{}L", l),
            Literal::Float(v) => write!(f, "{}F", v.into_inner()),
            Literal::Double(v) => write!(f, "{}D", v.into_inner()),
            Literal::Date(d) => write!(f, "DATE '{}'", d),
            Literal::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts),
            Literal::Uuid(u) => write!(f, "UUID '{}'", u),
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self { Literal::Boolean(value) }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self { Literal::Int(value) }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self { Literal::Long(value) }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self { Literal::String(value.to_string()) }
}

impl From<String> for Literal {
    fn from(value: String) -> Self { Literal::String(value) }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self { Literal::Date(value) }
}

impl From<NaiveDateTime> for Literal {
    fn from(value: NaiveDateTime) -> Self { Literal::Timestamp(value) }
}

impl From<Uuid> for Literal {
    fn from(value: Uuid) -> Self { Literal::Uuid(value) }
}
