//! Garden planner state
//!
//! The planner owns the selection list and the selector that feeds it. The
//! selector hands each picked name back to the planner, which appends it if
//! it is not already there. A card cursor picks which card a remove request
//! targets.

use super::selection::SelectionSet;
use super::selector::{PlantSelector, SelectorTimings};
use crate::catalog::Catalog;
use std::time::Instant;

/// Result of confirming a pick in the selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Picked plant name
    pub name: String,
    /// Whether it was newly added (false if already selected)
    pub added: bool,
}

/// State behind the garden planner screen
#[derive(Debug, Clone, Default)]
pub struct Planner {
    selection: SelectionSet,
    selector: PlantSelector,
    card_cursor: usize,
    scroll_row: usize,
}

impl Planner {
    /// Create a planner with an empty selection
    #[must_use]
    pub const fn new(timings: SelectorTimings) -> Self {
        Self {
            selection: SelectionSet::new(),
            selector: PlantSelector::new(timings),
            card_cursor: 0,
            scroll_row: 0,
        }
    }

    /// Selected plants
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The plant selector
    #[must_use]
    pub const fn selector(&self) -> &PlantSelector {
        &self.selector
    }

    /// The plant selector, mutably
    pub const fn selector_mut(&mut self) -> &mut PlantSelector {
        &mut self.selector
    }

    /// Handle a name emitted by the selector
    ///
    /// Returns `true` if the name was added.
    pub fn on_plant_select(&mut self, name: &str) -> bool {
        let added = self.selection.add(name);
        if added {
            tracing::info!(plant = name, total = self.selection.len(), "added plant");
        }
        added
    }

    /// Handle a remove request from a card
    ///
    /// Returns `true` if the name was present.
    pub fn on_plant_remove(&mut self, name: &str) -> bool {
        let removed = self.selection.remove(name);
        if removed {
            tracing::info!(plant = name, total = self.selection.len(), "removed plant");
        }
        self.clamp_cursor();
        removed
    }

    /// Confirm the selector's highlighted row and feed it into the selection
    pub fn confirm_selection(&mut self, catalog: &Catalog, now: Instant) -> Option<SelectOutcome> {
        let name = self.selector.select_highlighted(catalog, now)?;
        let added = self.on_plant_select(&name);
        if added {
            self.card_cursor = self.selection.len() - 1;
        }
        Some(SelectOutcome { name, added })
    }

    /// Remove the card under the cursor
    pub fn remove_focused(&mut self) -> Option<String> {
        let name = self.focused_plant()?.to_string();
        self.on_plant_remove(&name);
        Some(name)
    }

    /// Name on the card under the cursor
    #[must_use]
    pub fn focused_plant(&self) -> Option<&str> {
        self.selection.get(self.card_cursor)
    }

    /// Index of the card under the cursor
    #[must_use]
    pub const fn card_cursor(&self) -> usize {
        self.card_cursor
    }

    /// Move the card cursor by `delta` cards, staying within the selection
    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.selection.len().saturating_sub(1);
        self.card_cursor = self.card_cursor.saturating_add_signed(delta).min(last);
    }

    /// First visible row of the card grid
    #[must_use]
    pub const fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Adjust scrolling so the cursor's row is within `visible_rows`
    pub const fn ensure_cursor_visible(&mut self, columns: usize, visible_rows: usize) {
        let columns = if columns == 0 { 1 } else { columns };
        let visible_rows = if visible_rows == 0 { 1 } else { visible_rows };
        let cursor_row = self.card_cursor / columns;
        if cursor_row < self.scroll_row {
            self.scroll_row = cursor_row;
        } else if cursor_row >= self.scroll_row + visible_rows {
            self.scroll_row = cursor_row + 1 - visible_rows;
        }
    }

    /// Advance the selector's deferred timers
    pub fn tick(&mut self, now: Instant) {
        self.selector.tick(now);
    }

    /// When the selector next needs a tick
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.selector.next_deadline()
    }

    fn clamp_cursor(&mut self) {
        self.card_cursor = self.card_cursor.min(self.selection.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;
    use std::time::Duration;

    fn focused_planner(now: Instant) -> Planner {
        let mut planner = Planner::new(SelectorTimings {
            focus_delay: Duration::ZERO,
            confirmation: Duration::from_millis(500),
        });
        planner.selector_mut().open(now);
        planner
    }

    #[test]
    fn test_selection_scenario_through_callbacks() {
        let mut planner = Planner::default();
        assert!(planner.on_plant_select("Basil"));
        assert!(!planner.on_plant_select("Basil"));
        assert_eq!(planner.selection().as_slice(), ["Basil"]);

        assert!(planner.on_plant_select("Carrot"));
        assert_eq!(planner.selection().as_slice(), ["Basil", "Carrot"]);

        assert!(planner.on_plant_remove("Basil"));
        assert_eq!(planner.selection().as_slice(), ["Carrot"]);
        assert!(!planner.on_plant_remove("Basil"));
    }

    #[test]
    fn test_confirm_selection_adds_once() {
        let catalog = sample_catalog();
        let now = Instant::now();

        let mut planner = focused_planner(now);
        let first = planner.confirm_selection(&catalog, now).unwrap();
        assert!(first.added);

        planner.selector_mut().open(now);
        let second = planner.confirm_selection(&catalog, now).unwrap();
        assert_eq!(second.name, first.name);
        assert!(!second.added);
        assert_eq!(planner.selection().len(), 1);
    }

    #[test]
    fn test_confirm_while_closed_is_noop() {
        let catalog = sample_catalog();
        let mut planner = Planner::default();
        assert_eq!(planner.confirm_selection(&catalog, Instant::now()), None);
        assert!(planner.selection().is_empty());
    }

    #[test]
    fn test_remove_focused_clamps_cursor() {
        let mut planner = Planner::default();
        for name in ["Pea", "Leek", "Fig"] {
            planner.on_plant_select(name);
        }
        planner.move_cursor(2);
        assert_eq!(planner.focused_plant(), Some("Fig"));

        assert_eq!(planner.remove_focused().as_deref(), Some("Fig"));
        assert_eq!(planner.focused_plant(), Some("Leek"));

        planner.remove_focused();
        planner.remove_focused();
        assert!(planner.selection().is_empty());
        assert_eq!(planner.remove_focused(), None);
        assert_eq!(planner.card_cursor(), 0);
    }

    #[test]
    fn test_move_cursor_is_bounded() {
        let mut planner = Planner::default();
        planner.on_plant_select("Pea");
        planner.on_plant_select("Leek");
        planner.move_cursor(-3);
        assert_eq!(planner.card_cursor(), 0);
        planner.move_cursor(10);
        assert_eq!(planner.card_cursor(), 1);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut planner = Planner::default();
        for i in 0..12 {
            planner.on_plant_select(&format!("Plant {i}"));
        }
        planner.move_cursor(11);
        planner.ensure_cursor_visible(3, 2);
        assert_eq!(planner.scroll_row(), 2);

        planner.move_cursor(-11);
        planner.ensure_cursor_visible(3, 2);
        assert_eq!(planner.scroll_row(), 0);
    }
}
