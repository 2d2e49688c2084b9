//! Output abstraction layer
//!
//! This module provides a backend-agnostic interface for output operations,
//! plus plain-text renderings of plant cards for the non-interactive
//! commands. The TUI keeps its own status messages and only shares
//! [`MessageLevel`] with this module.

use crate::catalog::PlantRecord;
use crate::garden::CardFields;
use crate::garden::card::capitalize_words;
use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use gardenplan::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Normal message");
/// output.success("Plant added!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// In quiet mode only results and errors are written.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// One-line listing entry: emoji, name, and capitalized category
#[must_use]
pub fn format_plant_line(record: &PlantRecord) -> String {
    let fields = CardFields::from_record(record);
    format!(
        "{}  {}  {}",
        fields.emoji,
        fields.name.bold(),
        capitalize_words(fields.category).dimmed()
    )
}

/// Multi-line info card for a plant
///
/// The description block and detail items are omitted when the record does
/// not have them.
#[must_use]
pub fn format_info_card(fields: &CardFields<'_>) -> String {
    let mut lines = vec![
        format!("{}  {}", fields.emoji, fields.name.bold().green()),
        format!("    {}", fields.category.to_uppercase().green()),
    ];

    if let Some(description) = fields.description {
        lines.push(String::new());
        lines.push(format!("    {description}"));
    }

    let mut details = Vec::new();
    if let Some(season) = fields.season {
        details.push(format!("{} {season}", "Season:".dimmed()));
    }
    if let Some(difficulty) = fields.difficulty {
        details.push(format!("{} {difficulty}", "Difficulty:".dimmed()));
    }
    if !details.is_empty() {
        lines.push(String::new());
        lines.push(format!("    {}", details.join("   ")));
    }

    lines.join("\n")
}
