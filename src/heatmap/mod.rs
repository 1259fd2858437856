//! Plantar pressure heatmap rendering.
//!
//! Each sensor is drawn as three concentric radial layers (a soft halo, the
//! main body and, above the red band, a bright core) blended with multiply
//! compositing so neighbouring glows mix instead of covering each other.

mod color;
mod font;
mod surface;

pub use color::{color_for, Rgba};
pub use surface::{ColorStop, CompositeMode, Surface};

use crate::sensor::{PressureReading, SensorId, SensorLayout, SensorSnapshot};

/// Reading that maps to full-scale pressure. Lower than the 12-bit ADC
/// range so moderate loads already reach the green end of the ramp.
pub const SENSITIVITY_CAP: f64 = 2000.0;
/// Radius of a sensor's body at zero pressure.
pub const BASE_RADIUS: f64 = 35.0;
/// Extra body radius at full pressure.
pub const RADIUS_GROWTH: f64 = 80.0;

const HALO_SCALE: f64 = 1.5;
const CORE_SCALE: f64 = 0.4;
const CORE_THRESHOLD: f64 = 0.1;
const HALO_MIST: Rgba = Rgba::rgba(240, 240, 240, 0.1);
const LABEL_COLOR: Rgba = Rgba::rgba(0, 0, 0, 0.7);
const LABEL_OFFSET_X: f64 = 25.0;
const LABEL_GAP: f64 = 15.0;

/// Normalize a raw reading to [0, 1].
pub fn normalize(reading: PressureReading) -> f64 {
    (reading as f64 / SENSITIVITY_CAP).min(1.0)
}

/// Where and how large one sensor is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorGeometry {
    /// Sensor being drawn.
    pub sensor: SensorId,
    /// Raw reading shown in the label.
    pub reading: PressureReading,
    /// Normalized pressure.
    pub pressure: f64,
    /// Center in surface pixels.
    pub center: (f64, f64),
    /// Radius of the main body layer.
    pub max_radius: f64,
}

impl SensorGeometry {
    /// Halo layer radius.
    pub fn halo_radius(&self) -> f64 {
        self.max_radius * HALO_SCALE
    }

    /// Core layer radius, if the core is drawn at this pressure.
    pub fn core_radius(&self) -> Option<f64> {
        (self.pressure > CORE_THRESHOLD).then(|| self.max_radius * CORE_SCALE)
    }

    /// Label text, e.g. `heel: 1500`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.sensor, self.reading)
    }

    /// Label anchor: left edge and baseline.
    pub fn label_origin(&self) -> (f64, f64) {
        (
            self.center.0 - LABEL_OFFSET_X,
            self.center.1 - self.max_radius - LABEL_GAP,
        )
    }
}

/// Draws snapshots onto a [`Surface`] using a fixed sensor layout.
#[derive(Debug, Clone)]
pub struct HeatmapRenderer {
    layout: SensorLayout,
}

impl HeatmapRenderer {
    /// Create a renderer for the given layout.
    pub fn new(layout: SensorLayout) -> Self {
        Self { layout }
    }

    /// The sensor layout this renderer places sensors with.
    pub fn layout(&self) -> &SensorLayout {
        &self.layout
    }

    /// Resolve a sensor's drawing geometry on a surface of the given size.
    pub fn sensor_geometry(
        &self,
        sensor: SensorId,
        reading: PressureReading,
        width: usize,
        height: usize,
    ) -> SensorGeometry {
        let pressure = normalize(reading);
        SensorGeometry {
            sensor,
            reading,
            pressure,
            center: self.layout.position(sensor).resolve(width, height),
            max_radius: BASE_RADIUS + pressure * RADIUS_GROWTH,
        }
    }

    /// Repaint the whole surface for `snapshot`.
    ///
    /// The surface is resized to its display size and cleared first, so the
    /// output depends only on the snapshot and that size.
    pub fn render(&self, snapshot: &SensorSnapshot, surface: &mut Surface) {
        surface.fit_to_display();
        surface.set_composite(CompositeMode::Multiply);

        let (width, height) = (surface.width(), surface.height());
        for (sensor, reading) in snapshot.iter() {
            let geom = self.sensor_geometry(sensor, reading, width, height);
            draw_sensor(surface, &geom);

            surface.set_composite(CompositeMode::SourceOver);
            let (lx, ly) = geom.label_origin();
            surface.draw_text(lx, ly, &geom.label(), LABEL_COLOR);
            surface.set_composite(CompositeMode::Multiply);
        }

        tracing::debug!(width, height, %snapshot, "heatmap rendered");
    }
}

impl Default for HeatmapRenderer {
    fn default() -> Self {
        Self::new(SensorLayout::default())
    }
}

/// Draw one sensor's layers, outermost first.
fn draw_sensor(surface: &mut Surface, geom: &SensorGeometry) {
    let p = geom.pressure;

    surface.fill_radial_layer(
        geom.center,
        geom.halo_radius(),
        &[
            ColorStop::new(0.0, color_for(p * 0.3)),
            ColorStop::new(0.4, HALO_MIST),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ],
    );

    surface.fill_radial_layer(
        geom.center,
        geom.max_radius,
        &[
            ColorStop::new(0.0, color_for(p)),
            ColorStop::new(0.6, color_for(p * 0.7)),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ],
    );

    if let Some(radius) = geom.core_radius() {
        surface.fill_radial_layer(
            geom.center,
            radius,
            &[
                ColorStop::new(0.0, color_for((p * 1.2).min(1.0))),
                ColorStop::new(1.0, Rgba::TRANSPARENT),
            ],
        );
    }
}
