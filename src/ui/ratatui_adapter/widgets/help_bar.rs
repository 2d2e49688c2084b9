//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "Tab")
    pub key: &'static str,
    /// Action description (e.g., "add plant", "guide")
    pub action: &'static str,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints while the planner's selector is closed
pub const PLANNER_HINTS: &[KeyHint] = &[
    KeyHint::new("Enter", "add plant"),
    KeyHint::new("←↑↓→", "move"),
    KeyHint::new("d", "remove"),
    KeyHint::new("Tab", "guide"),
    KeyHint::new("q", "quit"),
];

/// Hints while the selector overlay is open
pub const SELECTOR_HINTS: &[KeyHint] = &[
    KeyHint::new("↑↓", "highlight"),
    KeyHint::new("Enter", "select"),
    KeyHint::new("ctrl+u", "clear"),
    KeyHint::new("Esc", "close"),
];

/// Hints on the guide screen
pub const GUIDE_HINTS: &[KeyHint] = &[
    KeyHint::new("type", "search"),
    KeyHint::new("↑↓", "scroll"),
    KeyHint::new("Esc", "clear/quit"),
    KeyHint::new("Tab", "planner"),
];

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
