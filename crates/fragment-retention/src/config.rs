//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::error::RetentionResult;

/// Configuration for a [`FragmentModelStore`](crate::FragmentModelStore)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Label attached to every tracing event emitted by the store
    pub host_label: String,
    /// Never enumerate attached fragments, even if the host can
    pub history_only: bool,
    /// Emit one debug event per bucket dropped during clean-up
    pub trace_dropped_tags: bool,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        RetentionConfig {
            host_label: "default".to_string(),
            history_only: false,
            trace_dropped_tags: false,
        }
    }
}

impl RetentionConfig {
    /// Config for a named host, everything else defaulted.
    pub fn for_host(host_label: impl Into<String>) -> Self {
        RetentionConfig {
            host_label: host_label.into(),
            ..Self::default()
        }
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> RetentionResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RetentionError;

    #[test]
    fn test_default_config() {
        let config = RetentionConfig::default();
        assert_eq!(config.host_label, "default");
        assert!(!config.history_only);
        assert!(!config.trace_dropped_tags);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RetentionConfig::from_json(r#"{"history_only": true}"#).unwrap();
        assert!(config.history_only);
        assert_eq!(config.host_label, "default");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RetentionConfig::from_json(r#"{"history_only": "yes"}"#).unwrap_err();
        assert!(matches!(err, RetentionError::Config(_)));
    }

    #[test]
    fn test_from_toml_table() {
        let raw = r#"
            host_label = "checkout"
            trace_dropped_tags = true
        "#;
        let config: RetentionConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.host_label, "checkout");
        assert!(config.trace_dropped_tags);
        assert!(!config.history_only);
    }

    #[test]
    fn test_for_host() {
        let config = RetentionConfig::for_host("main-activity");
        assert_eq!(config.host_label, "main-activity");
        assert!(!config.history_only);
    }
}
