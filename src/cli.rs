//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for gardenplan using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **plan**: Interactive garden planner (default)
//! - **guide**: Interactive plant guide, optionally with a prefilled search
//! - **list**: Print the filtered, name-sorted catalog
//! - **show**: Print one plant's info card
//! - **config**: Locate, print or create the configuration file
//! - **completions**: Print shell completions
//!
//! # Examples
//!
//! ```
//! use gardenplan::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["gardenplan", "list", "bean", "--json"]);
//! assert!(matches!(cli.get_command(), Commands::List { json: true, .. }));
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "gardenplan")]
#[command(about = "Plan a vegetable garden from a catalog of edible plants", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Use this config file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Load plants from a JSON or TOML catalog instead of the builtin one
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Write logs to this file (overrides config)
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive garden planner (default)
    #[command(visible_alias = "p")]
    Plan,

    /// Open the interactive plant guide
    #[command(visible_alias = "g")]
    Guide {
        /// Initial search query
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },

    /// List plants whose name contains QUERY, sorted by name
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive name filter
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Print records as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the info card for one plant
    Show {
        /// Exact plant name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Plan | Self::Guide { .. })
    }
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Plan if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Plan)
    }
}
