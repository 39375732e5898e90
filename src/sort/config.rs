use serde::{Deserialize, Serialize};

/// What parsing does with a token naming a field that an earlier token already named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateFieldPolicy {
    /// Keep the first key for a field and drop later ones.
    #[default]
    KeepFirst,
    /// Keep every key, duplicates included, in token order.
    Retain,
}

/// Options that control how sort descriptors are parsed.
///
/// Hosts usually embed this in their own configuration; every field has a default.
///
/// ```
/// use relsort::sort::config::{DuplicateFieldPolicy, SortConfig};
///
/// let config = SortConfig::default();
/// assert_eq!(DuplicateFieldPolicy::KeepFirst, config.duplicate_fields);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub duplicate_fields: DuplicateFieldPolicy,
}

impl SortConfig {
    pub fn with_duplicate_fields(mut self, policy: DuplicateFieldPolicy) -> Self {
        self.duplicate_fields = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_config_to_defaults() {
        let config: SortConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(SortConfig::default(), config);
    }

    #[test]
    fn deserialize_retain_policy() {
        let config: SortConfig =
            serde_json::from_str(r#"{ "duplicate_fields": "retain" }"#).unwrap();
        assert_eq!(DuplicateFieldPolicy::Retain, config.duplicate_fields);
    }

    #[test]
    fn attempt_to_deserialize_an_unknown_policy() {
        let result = serde_json::from_str::<SortConfig>(r#"{ "duplicate_fields": "reject" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_config() {
        let config = SortConfig::default().with_duplicate_fields(DuplicateFieldPolicy::Retain);
        assert_eq!(
            r#"{"duplicate_fields":"retain"}"#,
            serde_json::to_string(&config).unwrap()
        );
    }
}
