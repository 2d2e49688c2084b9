//! Catalog error types

use thiserror::Error;

/// Errors that can occur while loading or validating a plant catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file is not valid JSON for a plant table
    #[error("Invalid JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catalog file is not valid TOML for a plant table
    #[error("Invalid TOML catalog: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A record has an empty (or whitespace-only) name
    #[error("Catalog entry #{index} has an empty name")]
    EmptyName {
        /// Zero-based position of the offending record
        index: usize,
    },

    /// Two records share the same name
    #[error("Duplicate plant name in catalog: '{0}'")]
    DuplicateName(String),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported catalog format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
