//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str = "1-4:probe | w:walk | s:stand | r:run | c:clear | T:theme | q:quit";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.keymap_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
