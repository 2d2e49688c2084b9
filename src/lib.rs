//! gardenplan - plan a vegetable garden from a catalog of edible plants
//!
//! The library holds everything the binary needs:
//!
//! - [`catalog`]: the immutable plant table (builtin or loaded from a file)
//! - [`search`]: case-insensitive name filtering and locale-style ordering
//! - [`garden`]: the selection list, the plant selector state machine and
//!   card field resolution
//! - [`ui`]: the ratatui planner/guide and plain-text output
//! - [`config`], [`logging`], [`cli`]: the ambient plumbing

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod completions;
pub mod config;
pub mod garden;
pub mod logging;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GardenError {
    /// Catalog loading or validation error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for gardenplan operations
pub type Result<T> = std::result::Result<T, GardenError>;
