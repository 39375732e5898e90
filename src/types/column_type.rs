use crate::types::column_value::ColumnValue;

/// The value type of a field, as declared by an entity's schema.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ColumnType {
    Int,
    Text,
    Boolean,
    Timestamp,
}

impl ColumnType {
    pub(crate) fn accepts(&self, value: &ColumnValue) -> bool {
        matches!(
            (self, value),
            (ColumnType::Int, ColumnValue::Int(_))
                | (ColumnType::Text, ColumnValue::Text(_))
                | (ColumnType::Boolean, ColumnValue::Boolean(_))
                | (ColumnType::Timestamp, ColumnValue::Timestamp(_))
        )
    }
}
