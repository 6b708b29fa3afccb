use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{expressions::Literal, stats::DataFileStats};

/// In-memory summary of one data file, keyed by field id.
///
/// Deserializes from the JSON shape planners usually keep manifests in:
///
/// ```json
/// { "file_path": "s3://b/t/data/00000.parquet", "record_count": 10,
///   "value_counts": { "1": 10 }, "null_value_counts": { "1": 2 },
///   "lower_bounds": { "1": { "Long": 3 } }, "upper_bounds": { "1": { "Long": 99 } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    pub file_path: String,
    pub record_count: u64,
    #[serde(default)]
    pub value_counts: HashMap<i32, u64>,
    #[serde(default)]
    pub null_value_counts: HashMap<i32, u64>,
    #[serde(default)]
    pub nan_value_counts: HashMap<i32, u64>,
    #[serde(default)]
    pub lower_bounds: HashMap<i32, Literal>,
    #[serde(default)]
    pub upper_bounds: HashMap<i32, Literal>,
    /// Rows removed by position or equality delete files.
    #[serde(default)]
    pub delete_count: u64,
}

impl DataFile {
    /// A file with only its record count known.
    pub fn new(file_path: &str, record_count: u64) -> Self {
        Self {
            file_path: file_path.to_string(),
            record_count,
            ..Default::default()
        }
    }

    /// Record value and null counts for `field_id`.
    pub fn with_counts(mut self, field_id: i32, value_count: u64, null_count: u64) -> Self {
        self.value_counts.insert(field_id, value_count);
        self.null_value_counts.insert(field_id, null_count);
        self
    }

    pub fn with_value_count(mut self, field_id: i32, value_count: u64) -> Self {
        self.value_counts.insert(field_id, value_count);
        self
    }

    pub fn with_null_count(mut self, field_id: i32, null_count: u64) -> Self {
        self.null_value_counts.insert(field_id, null_count);
        self
    }

    pub fn with_nan_count(mut self, field_id: i32, nan_count: u64) -> Self {
        self.nan_value_counts.insert(field_id, nan_count);
        self
    }

    pub fn with_lower_bound(mut self, field_id: i32, bound: Literal) -> Self {
        self.lower_bounds.insert(field_id, bound);
        self
    }

    pub fn with_upper_bound(mut self, field_id: i32, bound: Literal) -> Self {
        self.upper_bounds.insert(field_id, bound);
        self
    }

    /// Record both bounds for `field_id`.
    pub fn with_bounds(self, field_id: i32, lower: Literal, upper: Literal) -> Self {
        self.with_lower_bound(field_id, lower).with_upper_bound(field_id, upper)
    }

    pub fn with_deletes(mut self, delete_count: u64) -> Self {
        self.delete_count = delete_count;
        self
    }
}

impl DataFileStats for DataFile {
    fn record_count(&self) -> u64 {
        self.record_count
    }

    fn value_count(&self, field_id: i32) -> Option<u64> {
        self.value_counts.get(&field_id).copied()
    }

    fn null_value_count(&self, field_id: i32) -> Option<u64> {
        self.null_value_counts.get(&field_id).copied()
    }

    fn nan_value_count(&self, field_id: i32) -> Option<u64> {
        self.nan_value_counts.get(&field_id).copied()
    }

    fn lower_bound(&self, field_id: i32) -> Option<&Literal> {
        self.lower_bounds.get(&field_id)
    }

    fn upper_bound(&self, field_id: i32) -> Option<&Literal> {
        self.upper_bounds.get(&field_id)
    }

    fn has_deletes(&self) -> bool {
        self.delete_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_populates_statistics() {
        let file = DataFile::new("a.parquet", 10)
            .with_counts(1, 10, 2)
            .with_bounds(1, Literal::Long(3), Literal::Long(99))
            .with_nan_count(2, 0);

        assert_eq!(file.record_count(), 10);
        assert_eq!(file.value_count(1), Some(10));
        assert_eq!(file.null_value_count(1), Some(2));
        assert_eq!(file.nan_value_count(2), Some(0));
        assert_eq!(file.lower_bound(1), Some(&Literal::Long(3)));
        assert_eq!(file.upper_bound(1), Some(&Literal::Long(99)));
        assert_eq!(file.value_count(7), None);
        assert!(!file.has_deletes());
    }

    #[test]
    fn loads_from_manifest_json() {
        let file: DataFile = serde_json::from_value(json!({
            "file_path": "s3://bucket/t/data/00000.parquet",
            "record_count": 10,
            "value_counts": { "1": 10 },
            "null_value_counts": { "1": 2 },
            "lower_bounds": { "1": { "Long": 3 } },
            "upper_bounds": { "1": { "Long": 99 } },
            "delete_count": 4
        })).unwrap();

        assert_eq!(file.value_count(1), Some(10));
        assert_eq!(file.upper_bound(1), Some(&Literal::Long(99)));
        assert_eq!(file.nan_value_count(1), None);
        assert!(file.has_deletes());
    }
}
