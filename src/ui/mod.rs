//! User interface rendering.

mod backdrop;
mod foot_view;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let bars = app.layout.bars;

    // Foot view, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(bars.status_height),
            Constraint::Length(bars.keymap_height),
        ])
        .split(f.area());

    foot_view::draw_foot(f, app, chunks[0], &colors);

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);
}
