use indexmap::IndexMap;

/// Transform applied to a source column to derive a partition value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    Bucket(u32),
    Truncate(u32),
    Year,
    Month,
    Day,
    Hour,
    Void,
}

/// One field of a partition tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionField {
    pub source_id: i32,
    pub transform: Transform,
}

/// Ordered partition fields, keyed by partition field name. The position of a
/// field in the map is its position in the partition tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSpec {
    pub spec_id: i32,
    pub fields: IndexMap<String, PartitionField>,
}

impl PartitionSpec {
    pub fn new(spec_id: i32) -> Self {
        Self { spec_id, fields: IndexMap::new() }
    }

    pub fn unpartitioned() -> Self {
        Self::new(0)
    }

    /// Append a field; a field with the same name is replaced in place.
    pub fn with_field(mut self, name: &str, source_id: i32, transform: Transform) -> Self {
        self.fields.insert(name.to_string(), PartitionField { source_id, transform });
        self
    }

    pub fn identity(self, name: &str, source_id: i32) -> Self {
        self.with_field(name, source_id, Transform::Identity)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tuple position of the identity field sourced from `source_id`.
    pub fn identity_position(&self, source_id: i32) -> Option<usize> {
        self.fields
            .values()
            .position(|f| f.source_id == source_id && f.transform == Transform::Identity)
    }
}
