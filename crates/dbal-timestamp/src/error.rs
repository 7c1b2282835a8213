//! Error types for column type resolution.

use thiserror::Error;

/// Main error type for declaration and registry operations.
#[derive(Error, Debug)]
pub enum DbalError {
    /// Platform identifier matches none of the supported families.
    #[error("Invalid platform: {0}")]
    UnsupportedPlatform(String),

    /// No column type is registered under the requested name.
    #[error("Unknown column type: {0}")]
    UnknownType(String),

    /// A column type with this name is already registered.
    #[error("Column type already registered: {0}")]
    DuplicateType(String),

    /// Configuration error (missing columns, duplicate names, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl DbalError {
    /// Create an UnsupportedPlatform error for the given identifier.
    pub fn unsupported_platform(name: impl Into<String>) -> Self {
        DbalError::UnsupportedPlatform(name.into())
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, DbalError>;
