//! Selected plant card
//!
//! Fixed-size card used on the planner. Shows the emoji and name, the
//! uppercased category, and up to two lines of description, with a `✕`
//! remove affordance in the top border.

use super::wrap::wrap_clamped;
use crate::garden::CardFields;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

/// Card height including borders
pub const CARD_HEIGHT: u16 = 7;

/// Card width in the grid layout
pub const CARD_WIDTH: u16 = 34;

/// Description lines shown on a card
const DESCRIPTION_LINES: usize = 2;

/// Planner card for one selected plant
pub struct PlantCard<'a> {
    fields: CardFields<'a>,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PlantCard<'a> {
    /// Create a new plant card widget
    #[must_use]
    pub const fn new(fields: CardFields<'a>, theme: &'a Theme) -> Self {
        Self {
            fields,
            theme,
            focused: false,
        }
    }

    /// Mark the card as the target of remove requests
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for PlantCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, border_type) = if self.focused {
            (self.theme.cursor_style(), BorderType::Thick)
        } else {
            (self.theme.border_style(), BorderType::Rounded)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title_top(Line::styled(" ✕ ", self.theme.remove_style()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", self.fields.emoji)),
                Span::styled(self.fields.name, self.theme.heading_style()),
            ]),
            Line::styled(
                self.fields.category.to_uppercase(),
                self.theme.category_style(),
            ),
        ];

        if let Some(description) = self.fields.description {
            lines.push(Line::default());
            lines.extend(
                wrap_clamped(description, usize::from(inner.width), DESCRIPTION_LINES)
                    .into_iter()
                    .map(|line| Line::styled(line, self.theme.dimmed_style())),
            );
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
