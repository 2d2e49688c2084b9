//! Search bar widget for query input

use crate::search::QueryText;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown in empty search fields
pub const SEARCH_PLACEHOLDER: &str = "Search plants...";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query
    query: &'a QueryText,
    /// Text shown while the query is empty
    placeholder: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a QueryText, theme: &'a Theme) -> Self {
        Self {
            query,
            placeholder: SEARCH_PLACEHOLDER,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let cursor = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("🔍 ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            if self.focused {
                spans.push(cursor);
            }
            spans.push(Span::styled(self.placeholder, self.theme.dimmed_style()));
        } else if self.focused {
            // Split query at cursor position
            let (before, after) = self.query.as_str().split_at(self.query.cursor());
            spans.push(Span::raw(before));
            spans.push(cursor);
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.query.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_text;

    fn render(query: &QueryText, focused: bool) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        SearchBar::new(query, &theme).focused(focused).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_empty_query_shows_placeholder() {
        let text = render(&QueryText::new(), false);
        let row: Vec<char> = text.lines().nth(1).unwrap().chars().collect();
        let inside: String = row[1..row.len() - 1].iter().collect();
        assert!(inside.contains("Search plants..."));
        assert!(!inside.contains('│'));
    }

    #[test]
    fn test_focused_empty_query_shows_cursor_before_placeholder() {
        let text = render(&QueryText::new(), true);
        assert!(text.lines().nth(1).unwrap().contains("│Search plants..."));
    }

    #[test]
    fn test_focused_query_shows_cursor() {
        let text = render(&QueryText::with_text("bas"), true);
        assert!(text.contains("bas│"));
        assert!(!text.contains("Search plants..."));
    }
}
