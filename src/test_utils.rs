use crate::query::Query;
use crate::schema::{Entity, Schema};
use crate::storage::entity_store::EntityStore;
use crate::types::column_type::ColumnType;
use crate::types::column_value::ColumnValue;
use std::sync::{Arc, LazyLock};

/// An entity used across tests, exposing the fields `Id`, `Name` and `CreatedAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Thing {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

impl Thing {
    pub fn new(id: i64, name: &str, created_at: i64) -> Thing {
        Thing {
            id,
            name: name.to_string(),
            created_at,
        }
    }
}

static THING_SCHEMA: LazyLock<Schema<Thing>> = LazyLock::new(|| {
    Schema::<Thing>::new()
        .add_field("Id", ColumnType::Int, |thing| ColumnValue::Int(thing.id))
        .unwrap()
        .add_field("Name", ColumnType::Text, |thing| {
            ColumnValue::text(thing.name.as_str())
        })
        .unwrap()
        .add_field("CreatedAt", ColumnType::Timestamp, |thing| {
            ColumnValue::Timestamp(thing.created_at)
        })
        .unwrap()
});

impl Entity for Thing {
    fn schema() -> &'static Schema<Self> {
        &THING_SCHEMA
    }
}

/// Creates things numbered `1..=count`, all named "Test" and sharing one creation time.
pub fn things(count: i64) -> Vec<Thing> {
    (1..=count)
        .map(|id| Thing::new(id, "Test", 1_700_000_000_000))
        .collect()
}

/// Creates a `Query` over the given things, in insertion order.
pub fn query_of(things: Vec<Thing>) -> Query<Thing> {
    let store = EntityStore::new();
    store.insert_all(things).unwrap();
    Query::new(Arc::new(store))
}

/// Materializes the query and returns the ids in iteration order.
pub fn ids_of(query: &Query<Thing>) -> Vec<i64> {
    query.to_vec().iter().map(|thing| thing.id).collect()
}

/// Returns true if the ids are in non-decreasing order.
pub fn is_ascending(ids: &[i64]) -> bool {
    ids.windows(2).all(|pair| pair[0] <= pair[1])
}
