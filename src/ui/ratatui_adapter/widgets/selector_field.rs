//! Closed plant selector field

use crate::garden::PlantSelector;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// The selector as shown on the planner: the placeholder, or the name that
/// was just picked
pub struct SelectorField<'a> {
    selector: &'a PlantSelector,
    theme: &'a Theme,
}

impl<'a> SelectorField<'a> {
    /// Create a new selector field widget
    #[must_use]
    pub const fn new(selector: &'a PlantSelector, theme: &'a Theme) -> Self {
        Self { selector, theme }
    }
}

impl Widget for SelectorField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selector.is_open() {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_top(Line::styled(" ▾ ", self.theme.dimmed_style()).right_aligned());

        let label = match self.selector.confirmation() {
            Some(name) => Span::styled(name, self.theme.heading_style()),
            None => Span::styled(self.selector.label(), self.theme.normal_style()),
        };

        Paragraph::new(Line::from(label))
            .block(block)
            .render(area, buf);
    }
}
