//! Error types for mdtoc

/// Main error type for mdtoc operations
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// Source or destination path does not carry a `.md` suffix
    #[error("Not a markdown file (expected a .md suffix): {0}")]
    InvalidExtension(String),

    /// Source file missing or unreadable
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Destination does not contain the insertion marker line
    #[error("Marker line '{marker}' not found in {path}")]
    MissingMarker {
        /// Destination path (or `-` for in-memory content)
        path: String,
        /// The marker that was searched for
        marker: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Atomic replacement of the destination failed
    #[error("Could not replace destination file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Async runtime error
    #[cfg(feature = "async")]
    #[error("Async runtime error: {0}")]
    AsyncRuntime(String),
}

/// Result type alias for mdtoc operations
pub type Result<T> = std::result::Result<T, TocError>;
