use crate::schema::error::SchemaError;
use crate::schema::Entity;
use crossbeam_skiplist::SkipMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::AcqRel;

pub type EntityId = u64;

/// An in-memory, insertion-ordered source of entities.
///
/// Entities are keyed by a monotonically increasing [`EntityId`], so iterating the
/// store yields them in the order they were inserted. That order is the "unordered"
/// order a [`Query`](crate::query::Query) reports before any sort is applied, and the
/// order in which ties are left by a stable sort.
pub struct EntityStore<E> {
    entries: SkipMap<EntityId, E>,
    current_entity_id: AtomicU64,
}

impl<E: Entity + Clone + Send + 'static> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity + Clone + Send + 'static> EntityStore<E> {
    pub fn new() -> EntityStore<E> {
        Self {
            entries: SkipMap::new(),
            current_entity_id: AtomicU64::new(1),
        }
    }

    /// Inserts an entity after checking that its field values match the declared schema types.
    pub fn insert(&self, entity: E) -> Result<EntityId, SchemaError> {
        E::schema().check_type_compatibility(&entity)?;

        let entity_id = self.current_entity_id.fetch_add(1, AcqRel);
        self.entries.insert(entity_id, entity);
        Ok(entity_id)
    }

    pub fn insert_all<I: IntoIterator<Item = E>>(
        &self,
        entities: I,
    ) -> Result<Vec<EntityId>, SchemaError> {
        entities
            .into_iter()
            .map(|entity| self.insert(entity))
            .collect()
    }

    pub fn get(&self, entity_id: EntityId) -> Option<E> {
        self.entries
            .get(&entity_id)
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn scan(&self) -> Vec<E> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::test_utils::Thing;
    use crate::types::column_type::ColumnType;
    use crate::types::column_value::ColumnValue;
    use std::sync::LazyLock;

    #[test]
    fn insert_entity_and_get_entity_id() {
        let store = EntityStore::new();
        let entity_id = store.insert(Thing::new(10, "relsort", 0)).unwrap();

        assert_eq!(1, entity_id);
    }

    #[test]
    fn insert_entities_and_scan_in_insertion_order() {
        let store = EntityStore::new();
        store
            .insert_all(vec![
                Thing::new(20, "query", 0),
                Thing::new(10, "relsort", 0),
            ])
            .unwrap();

        let ids: Vec<i64> = store.scan().iter().map(|thing| thing.id).collect();
        assert_eq!(vec![20, 10], ids);
    }

    #[test]
    fn insert_entity_and_get_by_entity_id() {
        let store = EntityStore::new();
        let entity_id = store.insert(Thing::new(10, "relsort", 0)).unwrap();

        assert_eq!(Thing::new(10, "relsort", 0), store.get(entity_id).unwrap());
    }

    #[test]
    fn insert_entity_and_attempt_to_get_by_non_existent_entity_id() {
        let store = EntityStore::new();
        store.insert(Thing::new(10, "relsort", 0)).unwrap();

        assert!(store.get(1000).is_none());
    }

    #[test]
    fn empty_store() {
        let store: EntityStore<Thing> = EntityStore::new();

        assert!(store.is_empty());
        assert_eq!(0, store.len());
    }

    #[derive(Clone)]
    struct Mislabeled {
        id: i64,
    }

    static MISLABELED_SCHEMA: LazyLock<Schema<Mislabeled>> = LazyLock::new(|| {
        Schema::<Mislabeled>::new()
            .add_field("Id", ColumnType::Text, |entity| ColumnValue::Int(entity.id))
            .unwrap()
    });

    impl Entity for Mislabeled {
        fn schema() -> &'static Schema<Self> {
            &MISLABELED_SCHEMA
        }
    }

    #[test]
    fn attempt_to_insert_entity_whose_accessor_disagrees_with_its_declared_type() {
        let store = EntityStore::new();
        let result = store.insert(Mislabeled { id: 1 });

        assert!(matches!(
            result,
            Err(SchemaError::FieldTypeMismatch { ref field, .. }) if field == "Id"
        ));
        assert!(store.is_empty());
    }
}
