//! Foot view: the heatmap surface downsampled onto half-block cells.

use super::backdrop::{self, Shade};
use super::ThemeColors;
use crate::app::App;
use crate::heatmap::Surface;
use crate::util::Viewport;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: char = '▀';

/// Draw the foot view into `area`.
pub(super) fn draw_foot(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Plantar Pressure ")
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let vp = Viewport::fit(inner.width, inner.height, &app.layout.foot);
    if vp.is_empty() {
        return;
    }
    app.resize_view(vp.surface_width, vp.surface_height);

    let dots = app.layout.foot.dots_per_pixel.max(1);
    let px_rows = vp.rows as usize * 2;
    for row in 0..vp.rows {
        for col in 0..vp.cols {
            let top = pixel_color(&app.surface, &vp, dots, col as usize, row as usize * 2, px_rows, colors);
            let bottom =
                pixel_color(&app.surface, &vp, dots, col as usize, row as usize * 2 + 1, px_rows, colors);

            let x = inner.x + vp.col_offset + col;
            let y = inner.y + vp.row_offset + row;
            if let Some(cell) = f.buffer_mut().cell_mut((x, y)) {
                cell.set_char(HALF_BLOCK).set_fg(top).set_bg(bottom);
            }
        }
    }
}

/// Final color of one half-block pixel: the averaged heatmap over the backdrop.
fn pixel_color(
    surface: &Surface,
    vp: &Viewport,
    dots: usize,
    px: usize,
    py: usize,
    px_rows: usize,
    colors: &ThemeColors,
) -> Color {
    let u = (px as f64 + 0.5) / vp.cols as f64 * 100.0;
    let v = (py as f64 + 0.5) / px_rows as f64 * 100.0;
    let under = match backdrop::shade(u, v) {
        Shade::Paper => colors.paper,
        Shade::Sole => colors.sole,
        Shade::Edge => colors.edge,
    };

    let [r, g, b] = over(average(surface, px * dots, py * dots, dots), under);
    Color::Rgb(r, g, b)
}

/// Mean premultiplied color of the `dots` x `dots` block at (x0, y0).
fn average(surface: &Surface, x0: usize, y0: usize, dots: usize) -> [f32; 4] {
    let x1 = (x0 + dots).min(surface.width());
    let y1 = (y0 + dots).min(surface.height());
    if x1 <= x0 || y1 <= y0 {
        return [0.0; 4];
    }

    let mut sum = [0.0f32; 4];
    for y in y0..y1 {
        for x in x0..x1 {
            let px = surface.premultiplied_at(x, y);
            for (acc, v) in sum.iter_mut().zip(px) {
                *acc += v;
            }
        }
    }
    let n = ((x1 - x0) * (y1 - y0)) as f32;
    sum.map(|v| v / n)
}

/// Source-over a premultiplied pixel onto an opaque backdrop.
fn over(src: [f32; 4], under: [u8; 3]) -> [u8; 3] {
    let keep = 1.0 - src[3].clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for ((o, s), u) in out.iter_mut().zip(src).zip(under) {
        let v = s + u as f32 / 255.0 * keep;
        *o = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_transparent_keeps_backdrop() {
        assert_eq!(over([0.0; 4], [10, 20, 30]), [10, 20, 30]);
    }

    #[test]
    fn test_over_opaque_hides_backdrop() {
        assert_eq!(over([1.0, 0.0, 0.0, 1.0], [10, 20, 30]), [255, 0, 0]);
    }

    #[test]
    fn test_over_half_alpha() {
        // 50% white over black
        assert_eq!(over([0.5, 0.5, 0.5, 0.5], [0, 0, 0]), [128, 128, 128]);
    }

    #[test]
    fn test_average_clips_to_surface() {
        let surface = Surface::new(4, 4);
        assert_eq!(average(&surface, 2, 2, 5), [0.0; 4]);
        assert_eq!(average(&surface, 4, 0, 2), [0.0; 4]);
    }
}
