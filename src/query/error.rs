use crate::schema::error::SchemaError;

/// Errors raised while building or extending a [`Query`](crate::query::Query).
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A secondary ordering was requested on a query that has no primary ordering.
    #[error("cannot apply a secondary ordering on '{0}' to a query that is not ordered")]
    NotOrdered(String),

    /// A field name did not resolve against the entity's schema.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Entities could not be loaded into the query's store.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
