//! Plant guide info card

use super::wrap::wrap_words;
use crate::garden::CardFields;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

/// Border plus horizontal padding on each side
const FRAME_WIDTH: u16 = 4;

/// Info card listing everything the catalog knows about a plant
///
/// The description block and the `Season:` / `Difficulty:` items are only
/// drawn when the record has them.
pub struct PlantInfoCard<'a> {
    fields: CardFields<'a>,
    theme: &'a Theme,
}

impl<'a> PlantInfoCard<'a> {
    /// Create a new info card widget
    #[must_use]
    pub const fn new(fields: CardFields<'a>, theme: &'a Theme) -> Self {
        Self { fields, theme }
    }

    /// Height needed to draw `fields` at `width` columns, borders included
    #[must_use]
    pub fn height(fields: &CardFields<'_>, width: u16) -> u16 {
        let content_width = usize::from(width.saturating_sub(FRAME_WIDTH));
        let mut rows = 2 + 2;
        if let Some(description) = fields.description {
            rows += 1 + wrap_words(description, content_width).len();
        }
        if fields.season.is_some() || fields.difficulty.is_some() {
            rows += 2;
        }
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn detail_line(&self) -> Option<Line<'a>> {
        let mut spans = Vec::new();
        if let Some(season) = self.fields.season {
            spans.push(Span::styled("Season: ", self.theme.dimmed_style()));
            spans.push(Span::raw(season));
        }
        if let Some(difficulty) = self.fields.difficulty {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled("Difficulty: ", self.theme.dimmed_style()));
            spans.push(Span::raw(difficulty));
        }
        (!spans.is_empty()).then(|| Line::from(spans))
    }
}

impl Widget for PlantInfoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", self.fields.emoji)),
                Span::styled(self.fields.name, self.theme.heading_style()),
            ]),
            Line::styled(
                format!("   {}", self.fields.category.to_uppercase()),
                self.theme.category_style(),
            ),
        ];

        if let Some(description) = self.fields.description {
            lines.push(Line::default());
            lines.extend(
                wrap_words(description, usize::from(inner.width))
                    .into_iter()
                    .map(Line::raw),
            );
        }

        if let Some(details) = self.detail_line() {
            lines.push(Line::default());
            lines.push(details);
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
