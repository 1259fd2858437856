//! Pressure color ramp.
//!
//! Low pressure reads red, medium blue and high green. The ramp never goes
//! fully transparent so an idle sensor still shows up on the foot.

/// An RGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in [0, 1].
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0.0);

    /// Build a color.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Premultiplied channels in [0, 1].
    pub fn premultiplied(self) -> [f32; 4] {
        let a = self.a.clamp(0.0, 1.0) as f32;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }
}

/// Upper edge of the red band.
const RED_BAND_END: f64 = 0.1;
/// Upper edge of the red-to-blue band.
const BLUE_BAND_END: f64 = 0.6;

/// Map a normalized pressure (0.0 to 1.0) to a heatmap color.
///
/// Input outside [0, 1] is clamped; NaN is treated as 0.
pub fn color_for(pressure: f64) -> Rgba {
    let p = if pressure.is_nan() {
        0.0
    } else {
        pressure.clamp(0.0, 1.0)
    };

    if p < RED_BAND_END {
        Rgba::rgba(255, 80, 80, (p * 3.0).max(0.3))
    } else if p < BLUE_BAND_END {
        let f = (p - RED_BAND_END) / 0.5;
        Rgba::rgba(
            channel(255.0 * (1.0 - f) + 80.0 * f),
            channel(80.0 * f),
            channel(80.0 * (1.0 - f) + 255.0 * f),
            0.6 + 0.2 * f,
        )
    } else {
        let f = (p - BLUE_BAND_END) / 0.4;
        Rgba::rgba(
            channel(80.0 * (1.0 - f)),
            channel(80.0 * (1.0 - f) + 200.0 * f),
            channel(255.0 * (1.0 - f) + 80.0 * f),
            0.8 + 0.15 * f,
        )
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    v.floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: u8, b: u8) -> bool {
        (a as i32 - b as i32).abs() <= 1
    }

    #[test]
    fn test_zero_pressure_keeps_floor_alpha() {
        let c = color_for(0.0);
        assert_eq!((c.r, c.g, c.b), (255, 80, 80));
        assert_eq!(c.a, 0.3);
    }

    #[test]
    fn test_full_pressure_is_green_endpoint() {
        let c = color_for(1.0);
        assert_eq!((c.r, c.g, c.b), (0, 200, 80));
        assert!((c.a - 0.95).abs() < 1e-9, "alpha was {}", c.a);
    }

    #[test]
    fn test_channels_and_alpha_in_range() {
        for i in 0..=1000 {
            let c = color_for(i as f64 / 1000.0);
            assert!((0.0..=1.0).contains(&c.a), "alpha {} out of range", c.a);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(color_for(-1.0), color_for(0.0));
        assert_eq!(color_for(2.5), color_for(1.0));
        assert_eq!(color_for(f64::NAN), color_for(0.0));
    }

    #[test]
    fn test_continuous_at_blue_green_boundary() {
        let below = color_for(0.6 - 1e-9);
        let above = color_for(0.6);
        assert!(close(below.r, above.r));
        assert!(close(below.g, above.g));
        assert!(close(below.b, above.b));
        assert!((below.a - above.a).abs() < 1e-6);
    }

    #[test]
    fn test_red_band_boundary() {
        // Red and blue carry over into the transition band; green and alpha
        // step up from the floor-visibility values.
        let below = color_for(0.1 - 1e-9);
        let above = color_for(0.1);
        assert!(close(below.r, above.r));
        assert!(close(below.b, above.b));
        assert_eq!(below.g, 80);
        assert_eq!(above.g, 0);
        assert_eq!(below.a, 0.3);
        assert!((above.a - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_blue_rises_then_falls() {
        let blue: Vec<u8> = [0.0, 0.1, 0.3, 0.6, 0.8, 1.0]
            .iter()
            .map(|&p| color_for(p).b)
            .collect();
        assert!(blue[0] <= blue[2] && blue[2] <= blue[3], "blue should rise: {:?}", blue);
        assert!(blue[3] >= blue[4] && blue[4] >= blue[5], "blue should fall: {:?}", blue);
        assert_eq!(blue[3], 255);
    }

    #[test]
    fn test_green_non_decreasing_above_red_band() {
        let green: Vec<u8> = [0.1, 0.3, 0.6, 0.8, 1.0]
            .iter()
            .map(|&p| color_for(p).g)
            .collect();
        for pair in green.windows(2) {
            assert!(pair[0] <= pair[1], "green decreased: {:?}", green);
        }
    }

    #[test]
    fn test_premultiplied() {
        let px = Rgba::rgba(255, 0, 0, 0.5).premultiplied();
        assert!((px[0] - 0.5).abs() < 1e-6);
        assert_eq!(px[1], 0.0);
        assert!((px[3] - 0.5).abs() < 1e-6);
        assert_eq!(Rgba::TRANSPARENT.premultiplied(), [0.0; 4]);
    }
}
