//! RGBA drawing surface with canvas-style compositing.
//!
//! Pixels are stored premultiplied in `[0, 1]`. The surface tracks two
//! sizes: the display size its container currently has, and the size of the
//! backing buffer. [`Surface::fit_to_display`] brings the two back in line.

use super::color::Rgba;
use super::font::{self, ADVANCE, GLYPH_HEIGHT};

/// How new paint combines with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Normal alpha blending.
    #[default]
    SourceOver,
    /// Multiply blending: overlapping paint darkens.
    Multiply,
}

/// One stop of a radial gradient. Offsets run from 0 (center) to 1 (edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position along the radius, 0.0 to 1.0.
    pub offset: f64,
    /// Color at this position.
    pub color: Rgba,
}

impl ColorStop {
    /// Create a color stop.
    pub const fn new(offset: f64, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// RGBA pixel surface that mirrors an HTML canvas.
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    display_width: usize,
    display_height: usize,
    pixels: Vec<[f32; 4]>,
    mode: CompositeMode,
}

impl Surface {
    /// Create a cleared surface whose display and buffer sizes match.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            display_width: width,
            display_height: height,
            pixels: vec![[0.0; 4]; width * height],
            mode: CompositeMode::default(),
        }
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Record the size the surface is currently displayed at.
    pub fn set_display_size(&mut self, width: usize, height: usize) {
        self.display_width = width;
        self.display_height = height;
    }

    /// Current display size.
    pub fn display_size(&self) -> (usize, usize) {
        (self.display_width, self.display_height)
    }

    /// Resize the buffer to the display size and clear it to transparent.
    /// Like a canvas resize, this also resets the composite mode.
    pub fn fit_to_display(&mut self) {
        self.width = self.display_width;
        self.height = self.display_height;
        self.pixels.clear();
        self.pixels.resize(self.width * self.height, [0.0; 4]);
        self.mode = CompositeMode::SourceOver;
    }

    /// Active composite mode.
    pub fn composite(&self) -> CompositeMode {
        self.mode
    }

    /// Set the composite mode for subsequent drawing.
    pub fn set_composite(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    /// Fill the disc around `center` with a radial gradient.
    ///
    /// Each pixel takes the stop ramp sampled at `distance / radius`.
    /// `stops` must be sorted by offset.
    pub fn fill_radial_layer(&mut self, center: (f64, f64), radius: f64, stops: &[ColorStop]) {
        if stops.is_empty() || radius.is_nan() || radius <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }
        debug_assert!(stops.windows(2).all(|w| w[0].offset <= w[1].offset));

        let (cx, cy) = center;
        let x0 = clip(cx - radius, self.width);
        let x1 = clip((cx + radius).ceil(), self.width);
        let y0 = clip(cy - radius, self.height);
        let y1 = clip((cy + radius).ceil(), self.height);

        for y in y0..y1 {
            let dy = y as f64 + 0.5 - cy;
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - cx;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }
                let src = sample_stops(stops, dist / radius);
                self.blend(y * self.width + x, src);
            }
        }
    }

    /// Draw text with its baseline at `baseline` and left edge at `x`.
    /// Glyphs falling outside the surface are clipped.
    pub fn draw_text(&mut self, x: f64, baseline: f64, text: &str, color: Rgba) {
        let src = color.premultiplied();
        let left = x.floor() as i64;
        let top = baseline.floor() as i64 - GLYPH_HEIGHT as i64;

        for (i, ch) in text.chars().enumerate() {
            let gx = left + (i * ADVANCE) as i64;
            for (dx, dy) in font::lit_pixels(ch) {
                let px = gx + dx as i64;
                let py = top + dy as i64;
                if px < 0 || py < 0 || px >= self.width as i64 || py >= self.height as i64 {
                    continue;
                }
                self.blend(py as usize * self.width + px as usize, src);
            }
        }
    }

    /// Premultiplied pixel value, or transparent outside the buffer.
    pub fn premultiplied_at(&self, x: usize, y: usize) -> [f32; 4] {
        if x >= self.width || y >= self.height {
            return [0.0; 4];
        }
        self.pixels[y * self.width + x]
    }

    /// Straight-alpha color of one pixel.
    pub fn color_at(&self, x: usize, y: usize) -> Rgba {
        let [r, g, b, a] = self.premultiplied_at(x, y);
        if a <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let un = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::rgba(un(r), un(g), un(b), a as f64)
    }

    /// All pixels, row-major, premultiplied.
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    fn blend(&mut self, idx: usize, src: [f32; 4]) {
        let dst = self.pixels[idx];
        let (sa, da) = (src[3], dst[3]);
        let mut out = [0.0f32; 4];
        match self.mode {
            CompositeMode::SourceOver => {
                for c in 0..4 {
                    out[c] = src[c] + dst[c] * (1.0 - sa);
                }
            }
            CompositeMode::Multiply => {
                for c in 0..3 {
                    out[c] = src[c] * dst[c] + src[c] * (1.0 - da) + dst[c] * (1.0 - sa);
                }
                out[3] = sa + da - sa * da;
            }
        }
        for v in &mut out {
            *v = v.clamp(0.0, 1.0);
        }
        self.pixels[idx] = out;
    }
}

/// Clamp a coordinate to `0..=limit` as a pixel index.
#[inline]
fn clip(v: f64, limit: usize) -> usize {
    if v <= 0.0 {
        0
    } else {
        (v.floor() as usize).min(limit)
    }
}

/// Sample a sorted stop ramp at `t`, interpolating premultiplied colors.
fn sample_stops(stops: &[ColorStop], t: f64) -> [f32; 4] {
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if t <= first.offset {
        return first.color.premultiplied();
    }
    if t >= last.offset {
        return last.color.premultiplied();
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color.premultiplied();
            }
            let s = ((t - a.offset) / span) as f32;
            let (ca, cb) = (a.color.premultiplied(), b.color.premultiplied());
            let mut out = [0.0f32; 4];
            for c in 0..4 {
                out[c] = ca[c] + s * (cb[c] - ca[c]);
            }
            return out;
        }
    }
    last.color.premultiplied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgba(255, 0, 0, 1.0);
    const WHITE: Rgba = Rgba::rgba(255, 255, 255, 1.0);

    fn solid(color: Rgba) -> [ColorStop; 2] {
        [ColorStop::new(0.0, color), ColorStop::new(1.0, color)]
    }

    #[test]
    fn test_fit_to_display_resizes_and_clears() {
        let mut s = Surface::new(4, 4);
        s.fill_radial_layer((2.0, 2.0), 3.0, &solid(RED));
        assert!(s.premultiplied_at(2, 2)[3] > 0.0);

        s.set_display_size(6, 3);
        assert_eq!((s.width(), s.height()), (4, 4));
        s.set_composite(CompositeMode::Multiply);
        s.fit_to_display();
        assert_eq!((s.width(), s.height()), (6, 3));
        assert_eq!(s.pixels().len(), 18);
        assert!(s.pixels().iter().all(|p| *p == [0.0; 4]));
        assert_eq!(s.composite(), CompositeMode::SourceOver);
    }

    #[test]
    fn test_radial_layer_stays_inside_radius() {
        let mut s = Surface::new(20, 20);
        s.fill_radial_layer((10.0, 10.0), 4.0, &solid(RED));
        assert_eq!(s.color_at(10, 10), RED);
        assert_eq!(s.premultiplied_at(0, 0), [0.0; 4]);
        assert_eq!(s.premultiplied_at(10, 16), [0.0; 4]);
    }

    #[test]
    fn test_gradient_fades_to_edge() {
        let mut s = Surface::new(41, 1);
        let stops = [
            ColorStop::new(0.0, RED),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ];
        s.fill_radial_layer((20.5, 0.5), 20.0, &stops);
        let center = s.premultiplied_at(20, 0)[3];
        let mid = s.premultiplied_at(30, 0)[3];
        let edge = s.premultiplied_at(40, 0)[3];
        assert!((center - 1.0).abs() < 1e-6);
        assert!(center > mid && mid > edge);
        assert!((mid - 0.5).abs() < 0.01);
        // Premultiplied interpolation keeps the hue while fading
        assert_eq!(s.color_at(30, 0).r, 255);
        assert_eq!(s.color_at(30, 0).g, 0);
    }

    #[test]
    fn test_multiply_over_transparent_is_source() {
        let mut s = Surface::new(3, 3);
        s.set_composite(CompositeMode::Multiply);
        let half_red = Rgba::rgba(255, 0, 0, 0.5);
        s.fill_radial_layer((1.5, 1.5), 1.0, &solid(half_red));
        let px = s.premultiplied_at(1, 1);
        assert!((px[0] - 0.5).abs() < 1e-6);
        assert!((px[3] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_multiply_darkens_overlap() {
        let mut s = Surface::new(3, 3);
        s.fill_radial_layer((1.5, 1.5), 1.0, &solid(Rgba::rgba(128, 255, 255, 1.0)));
        s.set_composite(CompositeMode::Multiply);
        s.fill_radial_layer((1.5, 1.5), 1.0, &solid(Rgba::rgba(255, 128, 255, 1.0)));
        let c = s.color_at(1, 1);
        assert_eq!((c.r, c.g, c.b), (128, 128, 255));

        // Multiplying by white is a no-op
        s.fill_radial_layer((1.5, 1.5), 1.0, &solid(WHITE));
        assert_eq!(s.color_at(1, 1), c);
    }

    #[test]
    fn test_source_over_alpha_accumulates() {
        let mut s = Surface::new(1, 1);
        let half = Rgba::rgba(0, 0, 0, 0.5);
        s.fill_radial_layer((0.5, 0.5), 1.0, &solid(half));
        s.fill_radial_layer((0.5, 0.5), 1.0, &solid(half));
        assert!((s.premultiplied_at(0, 0)[3] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_surface_is_noop() {
        let mut s = Surface::new(0, 0);
        s.fill_radial_layer((0.0, 0.0), 50.0, &solid(RED));
        s.draw_text(0.0, 10.0, "heel: 10", RED);
        assert!(s.pixels().is_empty());
    }

    #[test]
    fn test_draw_text_sits_on_baseline_and_clips() {
        let mut s = Surface::new(30, 20);
        s.draw_text(2.0, 10.0, "-", Rgba::rgba(0, 0, 0, 1.0));
        // '-' is lit on glyph row 3 → y = 10 - 7 + 3
        assert_eq!(s.premultiplied_at(2, 6)[3], 1.0);
        assert_eq!(s.premultiplied_at(6, 6)[3], 1.0);
        assert_eq!(s.premultiplied_at(7, 6)[3], 0.0);

        // Mostly off-surface text must not panic
        s.draw_text(-40.0, -3.0, "toe: 1000", Rgba::rgba(0, 0, 0, 0.7));
        s.draw_text(25.0, 25.0, "ball: 1800", Rgba::rgba(0, 0, 0, 0.7));
    }
}
