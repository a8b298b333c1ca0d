//! Error types for fragment-retention

/// Errors produced by the strict lookup and configuration surfaces.
///
/// The store's ordinary operations never fail; these variants only
/// appear where a caller explicitly asks for a reason.
#[derive(Debug, thiserror::Error)]
pub enum RetentionError {
    #[error("no bucket retained for tag: {tag}")]
    TagNotFound { tag: String },

    #[error("no model under key {key} for tag {tag}")]
    KeyNotFound { tag: String, key: String },

    #[error("model under key {key} for tag {tag} is not a {expected}")]
    TypeMismatch {
        tag: String,
        key: String,
        expected: &'static str,
    },

    #[error("invalid retention config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for fragment-retention operations.
pub type RetentionResult<T> = std::result::Result<T, RetentionError>;
