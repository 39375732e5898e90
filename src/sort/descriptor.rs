use crate::query::error::QueryError;
use crate::query::Query;
use crate::schema::Entity;
use crate::sort::applier::OrderingApplier;
use crate::sort::config::{DuplicateFieldPolicy, SortConfig};
use crate::sort::direction::Direction;
use crate::sort::sort_key::SortKey;
use std::convert::Infallible;
use std::str::FromStr;

/// An ordered list of sort keys, parsed from text like `"-Id,CreatedAt"`.
///
/// The first key is the primary sort; each later key breaks ties left by the keys
/// before it.
///
/// # Parsing
///
/// Text is split on `,` and empty segments are skipped. Each token is trimmed; a
/// leading `-` marks the key descending. The rest is looked up in the entity's
/// schema, ignoring case. Tokens that name no field are dropped, so stale or
/// hand-edited descriptors degrade to the part that still makes sense.
///
/// # Mutation
///
/// [`SortDescriptor::add_or_update`] and [`SortDescriptor::remove`] never change
/// the descriptor they are called on. They rebuild a working copy from the
/// descriptor's canonical text, change that, and return its text. This is how a
/// page builds the sort links for its column headers from the current request's
/// descriptor.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
/// use relsort::schema::{Entity, Schema};
/// use relsort::sort::descriptor::SortDescriptor;
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
/// let sorts = SortDescriptor::<Widget>::parse("-id, bogus");
/// assert_eq!("-Id", sorts.to_string());
/// assert_eq!("Id", sorts.add_or_update("Id"));
/// assert_eq!("-Id,Name", sorts.add_or_update("name"));
/// assert_eq!("", sorts.remove("Id"));
/// ```
pub struct SortDescriptor<E> {
    keys: Vec<SortKey<E>>,
    config: SortConfig,
}

impl<E: Entity> SortDescriptor<E> {
    pub fn new() -> Self {
        Self::with_config(SortConfig::default())
    }

    pub fn with_config(config: SortConfig) -> Self {
        Self {
            keys: Vec::new(),
            config,
        }
    }

    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, SortConfig::default())
    }

    pub fn parse_with(text: &str, config: SortConfig) -> Self {
        Self::from_tokens_with(text.split(',').filter(|segment| !segment.is_empty()), config)
    }

    /// Parses an optional descriptor, such as a query parameter that may be absent.
    /// `None` yields an empty descriptor.
    pub fn parse_optional(text: Option<&str>) -> Self {
        match text {
            Some(text) => Self::parse(text),
            None => Self::new(),
        }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_tokens_with(tokens, SortConfig::default())
    }

    pub fn from_tokens_with<I, S>(tokens: I, config: SortConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut descriptor = Self::with_config(config);
        for token in tokens {
            if let Some(key) = Self::parse_token(token.as_ref()) {
                descriptor.push(key);
            }
        }
        descriptor
    }

    pub fn sorts(&self) -> &[SortKey<E>] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn config(&self) -> SortConfig {
        self.config
    }

    /// Adds `token`'s field to the end of the descriptor, or flips its direction if
    /// the field is already present. Returns the resulting descriptor text.
    ///
    /// A token naming no field returns the current text unchanged. The direction
    /// carried by `token` only matters when the field is appended.
    pub fn add_or_update(&self, token: &str) -> String {
        let Some(candidate) = Self::parse_token(token) else {
            return self.to_string();
        };

        let mut working_copy = self.working_copy();
        match working_copy
            .keys
            .iter_mut()
            .find(|key| key.same_field_as(&candidate))
        {
            Some(key) => key.toggle_direction(),
            None => working_copy.keys.push(candidate),
        }
        working_copy.to_string()
    }

    /// Removes `token`'s field from the descriptor and returns the resulting text.
    /// The remaining keys keep their relative order.
    pub fn remove(&self, token: &str) -> String {
        let Some(candidate) = Self::parse_token(token) else {
            return self.to_string();
        };

        let mut working_copy = self.working_copy();
        if let Some(position) = working_copy
            .keys
            .iter()
            .position(|key| key.same_field_as(&candidate))
        {
            working_copy.keys.remove(position);
        }
        working_copy.to_string()
    }

    fn working_copy(&self) -> Self {
        Self::parse_with(&self.to_string(), self.config)
    }

    fn push(&mut self, key: SortKey<E>) {
        let already_present = self.keys.iter().any(|existing| existing.same_field_as(&key));
        if already_present && self.config.duplicate_fields == DuplicateFieldPolicy::KeepFirst {
            tracing::debug!(field = key.field_name(), "dropping repeated sort field");
            return;
        }
        self.keys.push(key);
    }

    fn parse_token(token: &str) -> Option<SortKey<E>> {
        let name = token.trim();
        let (direction, name) = match name.strip_prefix('-') {
            Some(name) => (Direction::Descending, name),
            None => (Direction::Ascending, name),
        };

        match E::schema().resolve(name) {
            Some(field) => Some(SortKey::new(field, direction)),
            None => {
                tracing::debug!(token, "dropping sort token naming an unknown field");
                None
            }
        }
    }
}

impl<E: Entity + Clone + Send> SortDescriptor<E> {
    /// Orders `query` by the keys of this descriptor, after any ordering the query
    /// already carries. An empty descriptor returns the query as it is.
    pub fn apply(&self, query: Query<E>) -> Result<Query<E>, QueryError> {
        if self.is_empty() {
            return Ok(query);
        }
        OrderingApplier::apply(query, &self.keys)
    }
}

impl<E: Entity> Default for SortDescriptor<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> FromStr for SortDescriptor<E> {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

impl<E> Clone for SortDescriptor<E> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            config: self.config,
        }
    }
}

impl<E> std::fmt::Display for SortDescriptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                write!(f, ",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl<E> std::fmt::Debug for SortDescriptor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("keys", &self.keys)
            .field("config", &self.config)
            .finish()
    }
}
