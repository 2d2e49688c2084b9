//! Word wrapping for card text
//!
//! Card heights are computed before rendering, so wrapping is done here
//! rather than by `Paragraph`.

use ratatui::text::Span;

/// Display width of `text` in terminal columns
#[must_use]
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Wrap `text` on whitespace into lines at most `width` columns wide
///
/// Words longer than a full line are split at character boundaries.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if line_width > 0 && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }

        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
        } else {
            for c in word.chars() {
                let char_width = display_width(c.encode_utf8(&mut [0; 4]));
                if line_width + char_width > width && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += char_width;
            }
        }
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}

/// Wrap `text` and keep at most `max_lines`, ending with `…` if cut
#[must_use]
pub fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_words(text, width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        while !last.is_empty() && display_width(last) + 1 > width.max(1) {
            last.pop();
        }
        last.push('…');
    }
    lines
}
