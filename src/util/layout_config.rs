//! Layout configuration constants for the foot view.

/// Configuration for the foot heatmap view.
#[derive(Debug, Clone)]
pub struct FootViewConfig {
    /// Surface pixels averaged into one half-block terminal pixel.
    pub dots_per_pixel: usize,
    /// Width / height of the foot outline (the default headless frame is 300x600).
    pub aspect: f64,
}

impl Default for FootViewConfig {
    fn default() -> Self {
        Self {
            dots_per_pixel: 5,
            aspect: 0.5,
        }
    }
}

/// Configuration for the bars under the foot view.
#[derive(Debug, Clone, Copy)]
pub struct BarLayoutConfig {
    /// Height of the status bar.
    pub status_height: u16,
    /// Height of the keymap bar.
    pub keymap_height: u16,
}

impl Default for BarLayoutConfig {
    fn default() -> Self {
        Self {
            status_height: 1,
            keymap_height: 1,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the foot view.
    pub foot: FootViewConfig,
    /// Configuration for the bars.
    pub bars: BarLayoutConfig,
}
