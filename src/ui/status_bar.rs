//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    // One column of left padding
    let room = (area.width as usize).saturating_sub(1);
    let text = format!(" {}", truncate(status, room));

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

/// Cut `text` to at most `max` display columns, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
