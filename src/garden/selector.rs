//! Searchable plant selector
//!
//! The selector is a two-state machine:
//!
//! ```text
//!            open()                      select_highlighted()
//!   Closed ───────────▶ Open ──────────────────────────────────▶ Closed
//!     ▲                   │    emits name, clears query,           │
//!     └──── close() ──────┘    shows confirmation text             │
//!                                                                   ▼
//!                                          confirmation reset after a delay
//! ```
//!
//! Opening does not focus the search field right away: focus is requested by
//! a deferred timer so the overlay can finish appearing first. Both deferred
//! actions carry the epoch they were scheduled in and are dropped when a
//! newer open or selection has superseded them.

use super::timer::TimerQueue;
use crate::catalog::{Catalog, PlantRecord};
use crate::search::{QueryText, filter_sorted};
use std::time::{Duration, Instant};

/// Text shown in the closed selector when nothing was just picked
pub const PLACEHOLDER: &str = "🌿 Select a plant to add to your garden";

/// Delays for the selector's cosmetic timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorTimings {
    /// Delay between opening and focusing the search field
    pub focus_delay: Duration,
    /// How long the picked name replaces the placeholder
    pub confirmation: Duration,
}

impl Default for SelectorTimings {
    fn default() -> Self {
        Self {
            focus_delay: Duration::from_millis(100),
            confirmation: Duration::from_millis(500),
        }
    }
}

/// Visibility of the selector overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// Only the selector field is shown
    #[default]
    Closed,
    /// The search overlay is shown
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectorTimer {
    FocusSearch { epoch: u64 },
    ClearConfirmation { epoch: u64 },
}

/// State of the plant selector control
#[derive(Debug, Clone)]
pub struct PlantSelector {
    state: SelectorState,
    query: QueryText,
    highlighted: usize,
    search_focused: bool,
    confirmation: Option<String>,
    open_epoch: u64,
    confirm_epoch: u64,
    timings: SelectorTimings,
    timers: TimerQueue<SelectorTimer>,
}

impl Default for PlantSelector {
    fn default() -> Self {
        Self::new(SelectorTimings::default())
    }
}

impl PlantSelector {
    /// Create a closed selector
    #[must_use]
    pub const fn new(timings: SelectorTimings) -> Self {
        Self {
            state: SelectorState::Closed,
            query: QueryText::new(),
            highlighted: 0,
            search_focused: false,
            confirmation: None,
            open_epoch: 0,
            confirm_epoch: 0,
            timings,
            timers: TimerQueue::new(),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SelectorState {
        self.state
    }

    /// Whether the overlay is open
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SelectorState::Open
    }

    /// Whether the search field has received focus
    #[must_use]
    pub const fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    /// Current search query
    #[must_use]
    pub const fn query(&self) -> &QueryText {
        &self.query
    }

    /// Index of the highlighted row in the filtered view
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Name of the plant that was just picked, while it is still shown
    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    /// Text for the closed selector field
    #[must_use]
    pub fn label(&self) -> &str {
        self.confirmation().unwrap_or(PLACEHOLDER)
    }

    /// Configured delays
    #[must_use]
    pub const fn timings(&self) -> SelectorTimings {
        self.timings
    }

    /// Filtered, name-sorted view of the catalog for the current query
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a PlantRecord> {
        filter_sorted(catalog.plants(), self.query.as_str())
    }

    /// Results line shown above the list
    #[must_use]
    pub fn results_label(count: usize) -> String {
        format!("{count} plants available")
    }

    /// Open the overlay and schedule the search focus request
    pub fn open(&mut self, now: Instant) {
        if self.is_open() {
            return;
        }
        self.state = SelectorState::Open;
        self.open_epoch += 1;
        self.highlighted = 0;
        self.search_focused = self.timings.focus_delay.is_zero();
        if !self.search_focused {
            self.timers.schedule(
                now,
                self.timings.focus_delay,
                SelectorTimer::FocusSearch {
                    epoch: self.open_epoch,
                },
            );
        }
        tracing::debug!(epoch = self.open_epoch, "plant selector opened");
    }

    /// Close the overlay without picking anything
    ///
    /// The query is kept for the next time the overlay opens.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = SelectorState::Closed;
        self.search_focused = false;
        tracing::debug!("plant selector closed");
    }

    /// Type a character into the search field
    ///
    /// Returns `true` if the query changed. Input is dropped while the
    /// overlay is closed or before the search field has focus.
    pub fn input_char(&mut self, c: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.query.push(c);
        self.highlighted = 0;
        true
    }

    /// Delete the character before the search cursor
    pub fn backspace(&mut self) -> bool {
        self.edit_query(QueryText::backspace)
    }

    /// Delete the word before the search cursor
    pub fn delete_word(&mut self) -> bool {
        self.edit_query(QueryText::delete_word)
    }

    /// Clear the search field
    pub fn clear_query(&mut self) -> bool {
        self.edit_query(QueryText::clear)
    }

    /// Move the search cursor left
    pub fn query_cursor_left(&mut self) {
        if self.accepts_input() {
            self.query.cursor_left();
        }
    }

    /// Move the search cursor right
    pub fn query_cursor_right(&mut self) {
        if self.accepts_input() {
            self.query.cursor_right();
        }
    }

    /// Move the highlight up one row
    pub const fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move the highlight down one row, given the number of visible matches
    pub const fn highlight_next(&mut self, matches: usize) {
        if self.highlighted + 1 < matches {
            self.highlighted += 1;
        }
    }

    /// Move the highlight by a page
    pub fn highlight_page(&mut self, matches: usize, page: usize, down: bool) {
        self.highlighted = if down {
            (self.highlighted + page).min(matches.saturating_sub(1))
        } else {
            self.highlighted.saturating_sub(page)
        };
    }

    /// Pick the highlighted plant
    ///
    /// Returns the picked name, which the owner adds to its selection. The
    /// query is cleared, the overlay closes, and the name is shown as
    /// confirmation until the reset timer fires. Returns `None` while closed
    /// or when nothing matches.
    pub fn select_highlighted(&mut self, catalog: &Catalog, now: Instant) -> Option<String> {
        if !self.is_open() {
            return None;
        }
        let name = self
            .filtered(catalog)
            .get(self.highlighted)
            .map(|record| record.name.clone())?;

        self.query.clear();
        self.highlighted = 0;
        self.state = SelectorState::Closed;
        self.search_focused = false;
        self.confirm_epoch += 1;
        self.confirmation = Some(name.clone());
        self.timers.schedule(
            now,
            self.timings.confirmation,
            SelectorTimer::ClearConfirmation {
                epoch: self.confirm_epoch,
            },
        );

        tracing::info!(plant = %name, "plant selected");
        Some(name)
    }

    /// Apply every deferred action due at `now`
    pub fn tick(&mut self, now: Instant) {
        for timer in self.timers.take_due(now) {
            match timer {
                SelectorTimer::FocusSearch { epoch } => {
                    if self.is_open() && epoch == self.open_epoch {
                        self.search_focused = true;
                    }
                }
                SelectorTimer::ClearConfirmation { epoch } => {
                    if epoch == self.confirm_epoch {
                        self.confirmation = None;
                    }
                }
            }
        }
    }

    /// When the next deferred action is due
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    fn accepts_input(&self) -> bool {
        self.is_open() && self.search_focused
    }

    fn edit_query(&mut self, edit: fn(&mut QueryText) -> bool) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let changed = edit(&mut self.query);
        if changed {
            self.highlighted = 0;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    const FOCUS: Duration = Duration::from_millis(100);
    const CONFIRM: Duration = Duration::from_millis(500);

    fn open_and_focus(selector: &mut PlantSelector, now: Instant) {
        selector.open(now);
        selector.tick(now + FOCUS);
        assert!(selector.is_search_focused());
    }

    fn type_query(selector: &mut PlantSelector, text: &str) {
        for c in text.chars() {
            assert!(selector.input_char(c));
        }
    }

    #[test]
    fn test_starts_closed_with_placeholder() {
        let selector = PlantSelector::default();
        assert_eq!(selector.state(), SelectorState::Closed);
        assert_eq!(selector.label(), PLACEHOLDER);
        assert!(selector.query().is_empty());
    }

    #[test]
    fn test_focus_arrives_after_delay() {
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        selector.open(now);

        assert!(selector.is_open());
        assert!(!selector.is_search_focused());
        assert!(!selector.input_char('b'));
        assert!(selector.query().is_empty());

        selector.tick(now + FOCUS / 2);
        assert!(!selector.is_search_focused());

        selector.tick(now + FOCUS);
        assert!(selector.is_search_focused());
        assert!(selector.input_char('b'));
        assert_eq!(selector.query().as_str(), "b");
    }

    #[test]
    fn test_zero_focus_delay_focuses_immediately() {
        let mut selector = PlantSelector::new(SelectorTimings {
            focus_delay: Duration::ZERO,
            confirmation: CONFIRM,
        });
        selector.open(Instant::now());
        assert!(selector.is_search_focused());
        assert_eq!(selector.next_deadline(), None);
    }

    #[test]
    fn test_next_deadline_follows_pending_timers() {
        let now = Instant::now();
        let catalog = sample_catalog();
        let mut selector = PlantSelector::default();
        assert_eq!(selector.next_deadline(), None);

        selector.open(now);
        assert_eq!(selector.next_deadline(), Some(now + FOCUS));

        selector.tick(now + FOCUS);
        assert_eq!(selector.next_deadline(), None);

        let later = now + FOCUS;
        assert!(selector.select_highlighted(&catalog, later).is_some());
        assert_eq!(selector.next_deadline(), Some(later + CONFIRM));
    }

    #[test]
    fn test_stale_focus_request_is_ignored() {
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        selector.open(now);
        selector.close();
        selector.open(now + FOCUS / 2);

        // First request belongs to the previous open and must not focus early
        selector.tick(now + FOCUS);
        assert!(!selector.is_search_focused());

        selector.tick(now + FOCUS / 2 + FOCUS);
        assert!(selector.is_search_focused());
    }

    #[test]
    fn test_focus_request_after_close_does_nothing() {
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        selector.open(now);
        selector.close();
        selector.tick(now + FOCUS);
        assert!(!selector.is_open());
        assert!(!selector.is_search_focused());
    }

    #[test]
    fn test_select_emits_name_and_resets() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        open_and_focus(&mut selector, now);
        type_query(&mut selector, "bas");

        let filtered: Vec<&str> = selector
            .filtered(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(filtered, vec!["Basil", "basilisk fern"]);

        selector.highlight_next(filtered.len());
        let picked = selector.select_highlighted(&catalog, now + FOCUS);
        assert_eq!(picked.as_deref(), Some("basilisk fern"));
        assert!(!selector.is_open());
        assert!(selector.query().is_empty());
        assert_eq!(selector.label(), "basilisk fern");

        selector.tick(now + FOCUS + CONFIRM);
        assert_eq!(selector.label(), PLACEHOLDER);
    }

    #[test]
    fn test_select_while_closed_emits_nothing() {
        let catalog = sample_catalog();
        let mut selector = PlantSelector::default();
        assert_eq!(selector.select_highlighted(&catalog, Instant::now()), None);
    }

    #[test]
    fn test_second_select_after_close_emits_nothing() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        open_and_focus(&mut selector, now);

        assert!(selector.select_highlighted(&catalog, now).is_some());
        assert_eq!(selector.select_highlighted(&catalog, now), None);
    }

    #[test]
    fn test_zero_matches_emits_nothing_and_stays_open() {
        let catalog = sample_catalog();
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        open_and_focus(&mut selector, now);
        type_query(&mut selector, "zzz");

        assert!(selector.filtered(&catalog).is_empty());
        assert_eq!(selector.select_highlighted(&catalog, now), None);
        assert!(selector.is_open());
        assert_eq!(selector.query().as_str(), "zzz");
    }

    #[test]
    fn test_emitted_names_are_always_in_catalog() {
        let catalog = sample_catalog();
        let now = Instant::now();
        for query in ["", "a", "ro", "FERN", "k"] {
            let matches = catalog
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&query.to_lowercase()))
                .count();
            for row in 0..matches + 2 {
                let mut selector = PlantSelector::default();
                open_and_focus(&mut selector, now);
                type_query(&mut selector, query);
                for _ in 0..row {
                    selector.highlight_next(matches);
                }
                if let Some(name) = selector.select_highlighted(&catalog, now) {
                    assert!(catalog.contains(&name), "{name} not in catalog");
                }
            }
        }
    }

    #[test]
    fn test_old_reset_does_not_clear_newer_confirmation() {
        let catalog = sample_catalog();
        let start = Instant::now();
        let mut selector = PlantSelector::default();

        open_and_focus(&mut selector, start);
        let first_pick = start + FOCUS;
        selector.select_highlighted(&catalog, first_pick);

        let reopen = first_pick + Duration::from_millis(200);
        open_and_focus(&mut selector, reopen);
        selector.highlight_next(catalog.len());
        let second_pick = reopen + FOCUS;
        let second = selector.select_highlighted(&catalog, second_pick).unwrap();

        selector.tick(first_pick + CONFIRM);
        assert_eq!(selector.label(), second);

        selector.tick(second_pick + CONFIRM);
        assert_eq!(selector.label(), PLACEHOLDER);
    }

    #[test]
    fn test_close_keeps_query() {
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        open_and_focus(&mut selector, now);
        type_query(&mut selector, "mi");
        selector.close();

        assert_eq!(selector.query().as_str(), "mi");
        assert_eq!(selector.label(), PLACEHOLDER);
    }

    #[test]
    fn test_typing_resets_highlight() {
        let now = Instant::now();
        let mut selector = PlantSelector::default();
        open_and_focus(&mut selector, now);
        selector.highlight_next(5);
        selector.highlight_next(5);
        assert_eq!(selector.highlighted(), 2);

        selector.input_char('a');
        assert_eq!(selector.highlighted(), 0);
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let mut selector = PlantSelector::default();
        selector.highlight_prev();
        assert_eq!(selector.highlighted(), 0);
        selector.highlight_next(2);
        selector.highlight_next(2);
        assert_eq!(selector.highlighted(), 1);
        selector.highlight_page(2, 10, true);
        assert_eq!(selector.highlighted(), 1);
        selector.highlight_page(2, 10, false);
        assert_eq!(selector.highlighted(), 0);
    }

    #[test]
    fn test_results_label() {
        assert_eq!(PlantSelector::results_label(2), "2 plants available");
    }
}
