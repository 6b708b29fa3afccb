use crate::expressions::FieldType;

/// A column reference already resolved against a schema: its field id, type and
/// name are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundReference {
    field_id: i32,
    name: String,
    field_type: FieldType,
}

impl BoundReference {
    pub fn new(field_id: i32, name: &str, field_type: FieldType) -> Self {
        Self { field_id, name: name.to_string(), field_type }
    }

    pub fn field_id(&self) -> i32 {
        self.field_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}
