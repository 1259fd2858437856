//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Keymap bar foreground color.
    pub keymap_fg: Color,
    /// Background the heatmap is composited over.
    pub paper: [u8; 3],
    /// Foot silhouette fill.
    pub sole: [u8; 3],
    /// Foot silhouette outline.
    pub edge: [u8; 3],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(168, 153, 132),
                paper: [235, 219, 178],
                sole: [213, 196, 161],
                edge: [124, 111, 100],
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(124, 111, 100),
                paper: [251, 245, 234],
                sole: [242, 229, 188],
                edge: [168, 153, 132],
            },
        }
    }
}
