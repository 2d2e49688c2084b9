//! Ratatui-based garden TUI
//!
//! The interactive front end: the garden planner with its plant selector
//! overlay, and the plant guide.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                GardenApp                    │
//! │      (terminal setup, loop, rendering)      │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │  (garden)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! Every loop iteration advances the selector's deferred timers with the
//! current instant, expires status messages, redraws, and then polls input
//! with a short timeout.

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::{AppOptions, GardenApp};
pub use events::{EventResult, handle_key};
pub use state::{AppState, GuideState, Screen, StatusMessage};
pub use theme::Theme;
