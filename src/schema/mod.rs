pub mod error;
pub(crate) mod field;

pub use crate::schema::field::{Accessor, Field};

use crate::schema::error::SchemaError;
use crate::types::column_type::ColumnType;

/// The sortable fields of an entity type `E`.
///
/// A `Schema` is an explicit registry from field name to [`Field`] metadata and
/// accessor. It is built once per entity type (see [`Entity`]) and shared by every
/// descriptor parsed against that type.
///
/// # Examples
///
/// ```
/// use relsort::schema::Schema;
/// use relsort::types::column_type::ColumnType;
/// use relsort::types::column_value::ColumnValue;
///
/// struct Widget {
///     id: i64,
/// }
///
/// let schema = Schema::<Widget>::new()
///     .add_field("Id", ColumnType::Int, |widget| ColumnValue::Int(widget.id))
///     .unwrap();
///
/// assert_eq!("Id", schema.resolve("id").unwrap().name());
/// ```
pub struct Schema<E> {
    fields: Vec<Field<E>>,
}

/// An entity type whose fields can be sorted on by name.
///
/// Implementations hand out a schema that lives for the whole program, typically
/// built lazily:
///
/// ```
/// use std::sync::LazyLock;
/// use relsort::schema::{Entity, Schema};
/// use relsort::types::column_type::ColumnType;
/// use relsort::types::column_value::ColumnValue;
///
/// struct Widget {
///     id: i64,
///     name: String,
/// }
///
/// impl Entity for Widget {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: LazyLock<Schema<Widget>> = LazyLock::new(|| {
///             Schema::<Widget>::new()
///                 .add_field("Id", ColumnType::Int, |widget| ColumnValue::Int(widget.id))
///                 .and_then(|schema| {
///                     schema.add_field("Name", ColumnType::Text, |widget| {
///                         ColumnValue::text(widget.name.as_str())
///                     })
///                 })
///                 .unwrap_or_default()
///         });
///         &SCHEMA
///     }
/// }
///
/// assert_eq!(2, Widget::schema().field_count());
/// ```
pub trait Entity: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

impl<E> Default for Schema<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Schema<E> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn add_field(
        mut self,
        name: &str,
        column_type: ColumnType,
        accessor: Accessor<E>,
    ) -> Result<Self, SchemaError> {
        self.ensure_field_not_already_defined(name)?;

        self.fields.push(Field::new(name, column_type, accessor));
        Ok(self)
    }

    /// Finds the field whose name matches `field_name`, ignoring ASCII case.
    ///
    /// `None` is not an error: callers parsing sort tokens skip names that do not resolve.
    pub fn resolve(&self, field_name: &str) -> Option<&Field<E>> {
        self.fields
            .iter()
            .find(|field| field.matches_name(field_name))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name()).collect()
    }

    /// Verifies that every accessor of this schema produces a value of its declared type
    /// for the given entity.
    pub fn check_type_compatibility(&self, entity: &E) -> Result<(), SchemaError> {
        for field in &self.fields {
            let value = field.value_of(entity);
            if !field.column_type().accepts(&value) {
                return Err(SchemaError::FieldTypeMismatch {
                    field: field.name().to_string(),
                    expected: field.column_type(),
                    actual: value.column_type(),
                });
            }
        }
        Ok(())
    }

    fn ensure_field_not_already_defined(&self, name: &str) -> Result<(), SchemaError> {
        if self.resolve(name).is_some() {
            return Err(SchemaError::DuplicateFieldName(name.to_string()));
        }
        Ok(())
    }
}
