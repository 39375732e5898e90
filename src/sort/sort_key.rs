use crate::query::error::QueryError;
use crate::query::ordering::OrderingStep;
use crate::query::Query;
use crate::schema::{Entity, Field};
use crate::sort::direction::Direction;

/// One field of a sort descriptor, with its direction.
///
/// The field name is stored in the casing declared by the schema, so a key parsed
/// from `"createdat"` renders as `CreatedAt`. The accessor is taken from the schema
/// once, when the key is built.
pub struct SortKey<E> {
    step: OrderingStep<E>,
}

impl<E> SortKey<E> {
    pub(crate) fn new(field: &Field<E>, direction: Direction) -> Self {
        Self {
            step: OrderingStep::on(field, direction),
        }
    }

    pub fn field_name(&self) -> &str {
        self.step.field_name()
    }

    pub fn direction(&self) -> Direction {
        self.step.direction()
    }

    /// Renders the key as a descriptor token: the field name, prefixed with `-` when descending.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn toggle_direction(&mut self) {
        self.step = self.step.with_direction(self.direction().toggled());
    }

    pub(crate) fn same_field_as(&self, other: &SortKey<E>) -> bool {
        self.field_name() == other.field_name()
    }
}

impl<E: Entity + Clone + Send> SortKey<E> {
    /// Extends `query` with this key: as its primary ordering when `is_first`,
    /// otherwise as a secondary ordering after the ones already on the query.
    pub(crate) fn extend(&self, query: Query<E>, is_first: bool) -> Result<Query<E>, QueryError> {
        if is_first {
            return Ok(query.order_by(self.step.clone()));
        }
        query.then_by(self.step.clone())
    }
}

impl<E> Clone for SortKey<E> {
    fn clone(&self) -> Self {
        Self {
            step: self.step.clone(),
        }
    }
}

impl<E> std::fmt::Display for SortKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.direction().is_descending() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.field_name())
    }
}

impl<E> std::fmt::Debug for SortKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortKey")
            .field("field_name", &self.field_name())
            .field("direction", &self.direction())
            .finish()
    }
}
