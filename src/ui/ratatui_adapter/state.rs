//! Application state for the ratatui TUI
//!
//! Holds the planner, the guide, the active screen and status messages.
//! Nothing in here touches the terminal, so key handling and timers can be
//! driven from tests with explicit instants.

use crate::catalog::{Catalog, PlantRecord};
use crate::garden::{Planner, SelectorTimings};
use crate::search::{QueryText, filter_in_order};
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Screen shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Garden planner with the plant selector and selected cards
    #[default]
    Planner,
    /// Searchable plant guide
    Guide,
}

impl Screen {
    /// All screens in tab order
    pub const ALL: [Self; 2] = [Self::Planner, Self::Guide];

    /// Tab label
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Planner => "🌱 Planner",
            Self::Guide => "📚 Guide",
        }
    }

    /// Position in [`Screen::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Planner => 0,
            Self::Guide => 1,
        }
    }

    /// Next screen, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Planner => Self::Guide,
            Self::Guide => Self::Planner,
        }
    }

    /// Previous screen, wrapping around
    #[must_use]
    pub const fn prev(self) -> Self {
        // Two screens, so previous and next coincide.
        self.next()
    }
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub const fn new(level: MessageLevel, text: String, created_at: Instant) -> Self {
        Self {
            level,
            text,
            created_at,
        }
    }

    /// Check if the message has expired at `now` based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > ttl
    }
}

/// State behind the plant guide screen
#[derive(Debug, Clone, Default)]
pub struct GuideState {
    /// Search query; the guide's field is always focused
    pub query: QueryText,
    /// Index of the first visible card in the filtered list
    pub scroll: usize,
}

impl GuideState {
    /// Guide with a prefilled query
    #[must_use]
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: QueryText::with_text(query),
            scroll: 0,
        }
    }

    /// Records matching the query, in catalog order
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PlantRecord> {
        filter_in_order(catalog.plants(), self.query.as_str())
    }

    /// Results line shown above the cards
    #[must_use]
    pub fn results_label(count: usize) -> String {
        format!("{count} plants found")
    }

    /// Scroll by `delta` cards, keeping at least one card in view
    pub fn scroll_by(&mut self, delta: isize, matches: usize) {
        let last = matches.saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(last);
    }

    /// Apply a query edit and return to the top of the results
    pub fn edit(&mut self, edit: impl FnOnce(&mut QueryText) -> bool) -> bool {
        let changed = edit(&mut self.query);
        if changed {
            self.scroll = 0;
        }
        changed
    }
}

/// Application state for the garden TUI
#[derive(Debug)]
pub struct AppState {
    /// Active screen
    pub screen: Screen,
    /// Planner screen state
    pub planner: Planner,
    /// Guide screen state
    pub guide: GuideState,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the app should exit
    pub should_exit: bool,
    /// Minimum terminal width for the card grid layout
    pub wide_layout_min_width: u16,
    /// Card columns in the last rendered planner grid (set during render)
    pub grid_columns: usize,
    /// Visible selector rows in the last rendered overlay (set during render)
    pub selector_page: usize,
    /// Instant of the last tick, used to stamp new messages
    now: Instant,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(timings: SelectorTimings, message_ttl: Duration, now: Instant) -> Self {
        Self {
            screen: Screen::Planner,
            planner: Planner::new(timings),
            guide: GuideState::default(),
            messages: Vec::new(),
            message_ttl,
            should_exit: false,
            wide_layout_min_width: 100,
            grid_columns: 1,
            selector_page: 10,
            now,
        }
    }

    /// Start on a given screen
    #[must_use]
    pub const fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    /// Prefill the guide's search query
    #[must_use]
    pub fn with_guide_query(mut self, query: impl Into<String>) -> Self {
        self.guide = GuideState::with_query(query);
        self
    }

    /// Set the minimum width for the card grid layout
    #[must_use]
    pub const fn with_wide_layout_min_width(mut self, width: u16) -> Self {
        self.wide_layout_min_width = width;
        self
    }

    /// Instant of the last tick
    #[must_use]
    pub const fn now(&self) -> Instant {
        self.now
    }

    /// Whether the planner's selector overlay is open
    #[must_use]
    pub fn selector_open(&self) -> bool {
        self.screen == Screen::Planner && self.planner.selector().is_open()
    }

    /// Switch to the next screen; the selector closes when leaving the planner
    pub fn next_screen(&mut self) {
        self.switch_screen(self.screen.next());
    }

    /// Switch to the previous screen
    pub fn prev_screen(&mut self) {
        self.switch_screen(self.screen.prev());
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen != self.screen {
            self.planner.selector_mut().close();
            self.screen = screen;
            tracing::debug!(?screen, "switched screen");
        }
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages
            .push(StatusMessage::new(level, text.into(), self.now));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl, self.now))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        let (ttl, now) = (self.message_ttl, self.now);
        self.messages.retain(|m| !m.is_expired(ttl, now));
    }

    /// Advance deferred timers and expire messages
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.planner.tick(now);
        self.cleanup_messages();
    }

    /// How long to wait for input before the next timer is due, capped at `max`
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.planner
            .next_deadline()
            .map_or(max, |due| due.saturating_duration_since(now).min(max))
    }

    /// Mark the app to exit
    pub fn exit(&mut self) {
        self.should_exit = true;
    }
}
