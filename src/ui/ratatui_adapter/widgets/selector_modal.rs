//! Plant selector overlay
//!
//! A centered modal with the search field, the results line and the
//! filtered, name-sorted plant list.

use super::search_bar::SearchBar;
use crate::catalog::PlantRecord;
use crate::garden::{CardFields, PlantSelector};
use crate::garden::card::capitalize_words;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

/// Modal title
pub const SELECTOR_TITLE: &str = " Select a Plant 🌱 ";

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 24;

/// Rows taken by the search field and results line inside the modal
const HEADER_ROWS: u16 = 4;

/// Selector overlay widget
pub struct SelectorModal<'a> {
    selector: &'a PlantSelector,
    matches: &'a [&'a PlantRecord],
    theme: &'a Theme,
}

impl<'a> SelectorModal<'a> {
    /// Create a new selector modal
    #[must_use]
    pub const fn new(
        selector: &'a PlantSelector,
        matches: &'a [&'a PlantRecord],
        theme: &'a Theme,
    ) -> Self {
        Self {
            selector,
            matches,
            theme,
        }
    }

    /// Area the modal occupies within `area`
    #[must_use]
    pub fn popup_area(area: Rect) -> Rect {
        let [vertical] = Layout::vertical([Constraint::Length(MODAL_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(MODAL_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(vertical);
        popup
    }

    /// Number of list rows visible when the modal is drawn in `area`
    #[must_use]
    pub fn visible_rows(area: Rect) -> usize {
        let popup = Self::popup_area(area);
        // Border top and bottom
        usize::from(popup.height.saturating_sub(2 + HEADER_ROWS))
    }

    fn render_row(&self, record: &PlantRecord, highlighted: bool) -> ListItem<'a> {
        let fields = CardFields::from_record(record);
        let marker = if highlighted { "▶ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, self.theme.cursor_style()),
            Span::raw(format!("{} ", fields.emoji)),
            Span::raw(record.name.clone()),
            Span::raw("  "),
            Span::styled(capitalize_words(fields.category), self.theme.dimmed_style()),
        ]);

        if highlighted {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for SelectorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);

        // Clear background
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(Line::styled(SELECTOR_TITLE, self.theme.heading_style()).centered())
            .title_bottom(
                Line::styled(" Enter: add  Esc: close ", self.theme.dimmed_style()).centered(),
            );
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [search_area, results_area, list_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        SearchBar::new(self.selector.query(), self.theme)
            .focused(self.selector.is_search_focused())
            .render(search_area, buf);

        Paragraph::new(Line::styled(
            PlantSelector::results_label(self.matches.len()),
            self.theme.dimmed_style(),
        ))
        .render(results_area, buf);

        if self.matches.is_empty() {
            Paragraph::new(Line::styled("No plants match", self.theme.dimmed_style()))
                .render(list_area, buf);
            return;
        }

        // Keep the highlighted row in view
        let rows = usize::from(list_area.height).max(1);
        let highlighted = self.selector.highlighted();
        let offset = (highlighted + 1).saturating_sub(rows);

        let items: Vec<ListItem> = self
            .matches
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(index, record)| self.render_row(record, index == highlighted))
            .collect();

        List::new(items).render(list_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::SelectorTimings;
    use crate::testing::{buffer_text, sample_catalog};
    use std::time::{Duration, Instant};

    fn open_selector() -> PlantSelector {
        let mut selector = PlantSelector::new(SelectorTimings {
            focus_delay: Duration::ZERO,
            confirmation: Duration::from_millis(500),
        });
        selector.open(Instant::now());
        selector
    }

    #[test]
    fn test_lists_sorted_matches() {
        let catalog = sample_catalog();
        let theme = Theme::default();
        let mut selector = open_selector();
        selector.input_char('b');
        selector.input_char('a');
        selector.input_char('s');
        let matches = selector.filtered(&catalog);

        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        SelectorModal::new(&selector, &matches, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("Select a Plant"));
        assert!(text.contains("2 plants available"));
        let basil = text.find("Basil").unwrap();
        let fern = text.find("basilisk fern").unwrap();
        assert!(basil < fern);
        assert!(text.contains("Herb"));
        assert!(!text.contains("Carrot"));
    }

    #[test]
    fn test_no_matches() {
        let catalog = sample_catalog();
        let theme = Theme::default();
        let mut selector = open_selector();
        selector.input_char('z');
        let matches = selector.filtered(&catalog);

        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        SelectorModal::new(&selector, &matches, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);

        assert!(text.contains("0 plants available"));
        assert!(text.contains("No plants match"));
    }

    #[test]
    fn test_visible_rows_fit_small_terminals() {
        assert_eq!(SelectorModal::visible_rows(Rect::new(0, 0, 80, 40)), 18);
        assert_eq!(SelectorModal::visible_rows(Rect::new(0, 0, 80, 10)), 4);
        assert_eq!(SelectorModal::visible_rows(Rect::new(0, 0, 80, 4)), 0);
    }
}
