//! Compatibility table error types.

/// Errors that can occur while loading a table or building its matrix.
#[derive(Debug, thiserror::Error)]
pub enum CompatError {
    /// A referenced version is not in `all_versions`.
    #[error("version not found: '{version}' (referenced by {context})")]
    VersionNotFound { version: String, context: String },

    /// A directive does not start with `>`, `<` or `+`.
    #[error("invalid directive '{directive}' for version '{version}': expected '>', '<' or '+' prefix")]
    InvalidDirective { version: String, directive: String },

    /// The same version appears twice in `all_versions`.
    #[error("duplicate version '{version}' at positions {first} and {second}")]
    DuplicateVersion {
        version: String,
        first: usize,
        second: usize,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for compatibility operations.
pub type Result<T> = std::result::Result<T, CompatError>;
