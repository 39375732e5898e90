//! The query handle that sort descriptors extend.
//!
//! A [`Query`] is an immutable description of a pending retrieval: a shared
//! [`EntityStore`] plus an accumulated ordering chain. Extending a query never
//! touches the handle it was derived from; each call returns a new handle.

pub mod error;
pub mod ordering;

use crate::query::error::QueryError;
use crate::query::ordering::{EntityComparator, OrderingState, OrderingStep};
use crate::schema::Entity;
use crate::sort::direction::Direction;
use crate::storage::entity_store::EntityStore;
use std::sync::Arc;

/// A pending, orderable retrieval over an [`EntityStore`].
///
/// # Ordering semantics
///
/// - [`Query::order_by`] issues a **primary** ordering. It starts a new chain,
///   discarding any ordering the query already carried.
/// - [`Query::then_by`] issues a **secondary** ordering. It extends the chain,
///   breaking ties left by earlier steps without disturbing them, and is only
///   valid on a query that is already ordered.
///
/// Materializing the query ([`Query::to_vec`]) performs a stable in-memory sort,
/// so entities that compare equal on the whole chain keep their insertion order.
pub struct Query<E> {
    store: Arc<EntityStore<E>>,
    chain: Vec<OrderingStep<E>>,
}

impl<E> Clone for Query<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<E: Entity + Clone + Send> Query<E> {
    pub fn new(store: Arc<EntityStore<E>>) -> Self {
        Self {
            store,
            chain: Vec::new(),
        }
    }

    /// Creates a query over a fresh store holding `entities` in iteration order.
    pub fn from_entities<I: IntoIterator<Item = E>>(entities: I) -> Result<Self, QueryError> {
        let store = EntityStore::new();
        store.insert_all(entities)?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn ordering_state(&self) -> OrderingState {
        if self.chain.is_empty() {
            return OrderingState::Unordered;
        }
        OrderingState::Ordered
    }

    pub fn is_ordered(&self) -> bool {
        self.ordering_state() == OrderingState::Ordered
    }

    /// The ordering chain as (field name, direction) pairs, primary first.
    pub fn ordering(&self) -> Vec<(&str, Direction)> {
        self.chain
            .iter()
            .map(|step| (step.field_name(), step.direction()))
            .collect()
    }

    /// Issues a primary ordering, replacing any ordering already on the chain.
    pub fn order_by(&self, step: OrderingStep<E>) -> Self {
        Self {
            store: self.store.clone(),
            chain: vec![step],
        }
    }

    /// Issues a secondary ordering that breaks ties left by the existing chain.
    pub fn then_by(&self, step: OrderingStep<E>) -> Result<Self, QueryError> {
        if !self.is_ordered() {
            return Err(QueryError::NotOrdered(step.field_name().to_string()));
        }

        let mut chain = self.chain.clone();
        chain.push(step);
        Ok(Self {
            store: self.store.clone(),
            chain,
        })
    }

    pub fn order_by_field(&self, field_name: &str, direction: Direction) -> Result<Self, QueryError> {
        let step = Self::step_on(field_name, direction)?;
        Ok(self.order_by(step))
    }

    pub fn then_by_field(&self, field_name: &str, direction: Direction) -> Result<Self, QueryError> {
        let step = Self::step_on(field_name, direction)?;
        self.then_by(step)
    }

    /// Materializes the query into its entities, in the order given by the chain.
    pub fn to_vec(&self) -> Vec<E> {
        let mut entities = self.store.scan();
        if self.chain.is_empty() {
            return entities;
        }

        let comparator = EntityComparator::new(&self.chain);
        entities.sort_by(|left, right| comparator.compare(left, right));
        entities
    }

    pub fn iter(&self) -> impl Iterator<Item = E> {
        self.to_vec().into_iter()
    }

    pub fn first(&self) -> Option<E> {
        self.to_vec().into_iter().next()
    }

    fn step_on(field_name: &str, direction: Direction) -> Result<OrderingStep<E>, QueryError> {
        let field = E::schema()
            .resolve(field_name)
            .ok_or_else(|| QueryError::UnknownField(field_name.to_string()))?;
        Ok(OrderingStep::on(field, direction))
    }
}
