use crate::types::column_type::ColumnType;

/// A single field value read off an entity.
///
/// Values of the same variant compare by their natural ordering. Sorting never
/// compares values of different variants because every field has one declared
/// [`ColumnType`], which the schema checks on insert.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum ColumnValue {
    Int(i64),
    Text(String),
    Boolean(bool),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
}

impl ColumnValue {
    pub fn int(value: i64) -> Self {
        ColumnValue::Int(value)
    }

    pub fn text<S: Into<String>>(value: S) -> Self {
        ColumnValue::Text(value.into())
    }

    pub fn timestamp(millis: i64) -> Self {
        ColumnValue::Timestamp(millis)
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValue::Int(_) => ColumnType::Int,
            ColumnValue::Text(_) => ColumnType::Text,
            ColumnValue::Boolean(_) => ColumnType::Boolean,
            ColumnValue::Timestamp(_) => ColumnType::Timestamp,
        }
    }

    pub fn int_value(&self) -> Option<i64> {
        if let ColumnValue::Int(value) = self {
            return Some(*value);
        }
        None
    }

    pub fn text_value(&self) -> Option<&str> {
        if let ColumnValue::Text(ref value) = self {
            return Some(value);
        }
        None
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        ColumnValue::Int(value)
    }
}

impl From<i32> for ColumnValue {
    fn from(value: i32) -> Self {
        ColumnValue::Int(value as i64)
    }
}

impl From<u32> for ColumnValue {
    fn from(value: u32) -> Self {
        ColumnValue::Int(value as i64)
    }
}

impl From<bool> for ColumnValue {
    fn from(value: bool) -> Self {
        ColumnValue::Boolean(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(value.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}
