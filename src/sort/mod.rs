//! Sort descriptors: parsing `"-Id,CreatedAt"`-style text into sort keys, applying
//! them to a [`Query`], and computing the next descriptor when a user toggles,
//! adds or removes a field.

mod applier;
pub mod config;
pub mod descriptor;
pub mod direction;
pub mod sort_key;

use crate::query::error::QueryError;
use crate::query::Query;
use crate::schema::Entity;
use crate::sort::descriptor::SortDescriptor;

/// Orders a query directly by descriptor text or tokens.
///
/// ```
/// use std::sync::LazyLock;
/// use relsort::query::Query;
/// use relsort::schema::{Entity, Schema};
/// use relsort::sort::OrderBySorts;
/// use relsort::types::column_type::ColumnType;
/// use relsort::types::column_value::ColumnValue;
///
/// #[derive(Clone)]
/// struct Widget {
///     id: i64,
/// }
///
/// impl Entity for Widget {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: LazyLock<Schema<Widget>> = LazyLock::new(|| {
///             Schema::<Widget>::new()
///                 .add_field("Id", ColumnType::Int, |widget| ColumnValue::Int(widget.id))
///                 .unwrap_or_default()
///         });
///         &SCHEMA
///     }
/// }
///
/// let widgets = Query::from_entities((1..=3).map(|id| Widget { id })).unwrap();
/// let ordered = widgets.order_by_sorts("-Id").unwrap();
///
/// assert_eq!(3, ordered.first().unwrap().id);
/// ```
pub trait OrderBySorts: Sized {
    fn order_by_sorts(self, sorts: &str) -> Result<Self, QueryError>;

    fn order_by_sort_tokens<I, S>(self, tokens: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl<E: Entity + Clone + Send> OrderBySorts for Query<E> {
    fn order_by_sorts(self, sorts: &str) -> Result<Self, QueryError> {
        SortDescriptor::<E>::parse(sorts).apply(self)
    }

    fn order_by_sort_tokens<I, S>(self, tokens: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SortDescriptor::<E>::from_tokens(tokens).apply(self)
    }
}
