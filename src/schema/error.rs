use crate::types::column_type::ColumnType;

/// Errors raised while declaring a schema or validating an entity against it.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// A field with the same name (ignoring ASCII case) is already declared.
    #[error("field '{0}' is already defined")]
    DuplicateFieldName(String),

    /// A field's accessor produced a value of a type other than the declared one.
    #[error("field '{field}' expected {expected:?} but accessor produced {actual:?}")]
    FieldTypeMismatch {
        field: String,
        expected: ColumnType,
        actual: ColumnType,
    },
}
