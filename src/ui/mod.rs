//! UI layer
//!
//! Two front ends share the domain types from [`crate::garden`]:
//!
//! - **[`ratatui_adapter`]** - the interactive garden planner and plant guide
//! - **[`output`]** - colored stdout output for the non-interactive commands
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Domain Layer                       │
//! │   (catalog, search, garden)             │
//! └────────────────┬────────────────────────┘
//!                  │ Rendered by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ CLI Output    │  │ TUI Adapter       │
//! │ - StdoutWriter│  │ - GardenApp       │
//! │ - text cards  │  │   (ratatui)       │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Running the TUI
//!
//! ```no_run
//! use gardenplan::catalog::Catalog;
//! use gardenplan::ui::ratatui_adapter::{AppOptions, GardenApp};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::builtin()?;
//! GardenApp::new(AppOptions::default()).run(&catalog)?;
//! # Ok(())
//! # }
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::{AppOptions, GardenApp, Screen};
