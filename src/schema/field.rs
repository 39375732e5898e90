use crate::types::column_type::ColumnType;
use crate::types::column_value::ColumnValue;

/// Reads one field's value off an entity.
pub type Accessor<E> = fn(&E) -> ColumnValue;

/// Metadata for one field of an entity, paired with the accessor that reads it.
///
/// The accessor is fixed when the field is registered in a [`Schema`](crate::schema::Schema)
/// and reused by every sort key built from it.
pub struct Field<E> {
    name: String,
    column_type: ColumnType,
    accessor: Accessor<E>,
}

impl<E> Field<E> {
    pub(crate) fn new(name: &str, column_type: ColumnType, accessor: Accessor<E>) -> Field<E> {
        Field {
            name: name.to_string(),
            column_type,
            accessor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn value_of(&self, entity: &E) -> ColumnValue {
        (self.accessor)(entity)
    }

    pub(crate) fn accessor(&self) -> Accessor<E> {
        self.accessor
    }

    pub(crate) fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl<E> std::fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("column_type", &self.column_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Thing;

    fn id_field() -> Field<Thing> {
        Field::new("Id", ColumnType::Int, |thing| ColumnValue::Int(thing.id))
    }

    #[test]
    fn matches_field_name() {
        assert!(id_field().matches_name("Id"));
    }

    #[test]
    fn matches_field_name_with_ignored_case() {
        assert!(id_field().matches_name("iD"));
    }

    #[test]
    fn does_not_match_field_name() {
        assert!(!id_field().matches_name("CreatedAt"));
    }

    #[test]
    fn read_value_of_field() {
        let thing = Thing::new(42, "widget", 0);
        assert_eq!(ColumnValue::Int(42), id_field().value_of(&thing));
    }
}
