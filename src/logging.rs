//! Tracing subscriber setup
//!
//! The filter comes from `GARDENPLAN_LOG` when set (e.g.
//! `GARDENPLAN_LOG=gardenplan=debug`), otherwise from the configured level.
//! The interactive screens own the terminal, so they only log when a log
//! file is configured.

use crate::{GardenError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GARDENPLAN_LOG";

/// Where log events go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for the non-interactive commands
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// No subscriber is installed
    Disabled,
}

impl LogTarget {
    /// Pick a target for a command
    #[must_use]
    pub fn choose(log_file: Option<&Path>, interactive: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Disabled,
            None => Self::Stderr,
        }
    }
}

/// Build the filter from `GARDENPLAN_LOG` or the configured level
///
/// # Errors
///
/// Returns `GardenError::Logging` if neither is a valid filter directive.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| GardenError::Logging(format!("invalid log filter: {e}")))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened, the filter is
/// invalid, or a subscriber is already installed.
pub fn init(target: &LogTarget, configured_level: &str) -> Result<()> {
    let filter = env_filter(configured_level)?;

    let installed = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    installed.map_err(|e| GardenError::Logging(e.to_string()))
}
