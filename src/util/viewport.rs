//! Fitting the foot outline into a block of terminal cells.

use super::layout_config::FootViewConfig;

/// Where the foot box sits inside the view, and how big its surface is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Columns skipped on the left to center the box.
    pub col_offset: u16,
    /// Rows skipped on top to center the box.
    pub row_offset: u16,
    /// Box width in cells (one cell = one pixel wide).
    pub cols: u16,
    /// Box height in cells (one cell = two pixels high).
    pub rows: u16,
    /// Drawing surface width.
    pub surface_width: usize,
    /// Drawing surface height.
    pub surface_height: usize,
}

impl Viewport {
    /// Fit a box of `config.aspect` into `cols` x `rows` half-block cells.
    pub fn fit(cols: u16, rows: u16, config: &FootViewConfig) -> Self {
        let aspect = if config.aspect > 0.0 { config.aspect } else { 1.0 };
        let px_w = cols as f64;
        let px_h = rows as f64 * 2.0;
        if px_w < 1.0 || px_h < 2.0 {
            return Self::default();
        }

        let (box_w, box_h) = if px_w > px_h * aspect {
            ((px_h * aspect).round().max(1.0), px_h)
        } else {
            (px_w, (px_w / aspect).min(px_h))
        };

        let box_cols = (box_w as u16).min(cols);
        let box_rows = ((box_h / 2.0).floor() as u16).clamp(1, rows);
        let dots = config.dots_per_pixel.max(1);

        Self {
            col_offset: (cols - box_cols) / 2,
            row_offset: (rows - box_rows) / 2,
            cols: box_cols,
            rows: box_rows,
            surface_width: box_cols as usize * dots,
            surface_height: box_rows as usize * 2 * dots,
        }
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_area_is_height_bound() {
        let vp = Viewport::fit(100, 30, &FootViewConfig::default());
        // 60 pixels tall, half as wide
        assert_eq!((vp.cols, vp.rows), (30, 30));
        assert_eq!(vp.col_offset, 35);
        assert_eq!(vp.row_offset, 0);
        assert_eq!((vp.surface_width, vp.surface_height), (150, 300));
    }

    #[test]
    fn test_narrow_area_is_width_bound() {
        let vp = Viewport::fit(20, 40, &FootViewConfig::default());
        // 20 wide -> 40 pixels tall -> 20 rows
        assert_eq!((vp.cols, vp.rows), (20, 20));
        assert_eq!(vp.row_offset, 10);
        assert_eq!(vp.col_offset, 0);
    }

    #[test]
    fn test_degenerate_area() {
        assert!(Viewport::fit(0, 10, &FootViewConfig::default()).is_empty());
        assert!(Viewport::fit(10, 0, &FootViewConfig::default()).is_empty());
        let vp = Viewport::fit(1, 1, &FootViewConfig::default());
        assert!(!vp.is_empty());
        assert_eq!((vp.cols, vp.rows), (1, 1));
    }
}
