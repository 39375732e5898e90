use crate::query::error::QueryError;
use crate::query::Query;
use crate::schema::Entity;
use crate::sort::sort_key::SortKey;

/// Applies a sequence of sort keys to a query.
///
/// Before each key, the applier asks the query whether it is already ordered.
/// An unordered query gets a primary ordering; an ordered one, including a query
/// that arrived ordered before any key was applied, gets a secondary ordering.
/// Issuing a primary ordering on an ordered query would discard the order it
/// already carries.
pub(crate) struct OrderingApplier;

impl OrderingApplier {
    pub(crate) fn apply<E: Entity + Clone + Send>(
        query: Query<E>,
        keys: &[SortKey<E>],
    ) -> Result<Query<E>, QueryError> {
        let mut query = query;
        for key in keys {
            let is_first = !query.is_ordered();
            tracing::trace!(
                field = key.field_name(),
                direction = ?key.direction(),
                primary = is_first,
                "applying sort key"
            );
            query = key.extend(query, is_first)?;
        }
        Ok(query)
    }
}
