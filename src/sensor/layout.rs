//! Where the sensors sit on the foot outline.

use super::SensorId;
use crate::error::{PlantarError, Result};

/// A sensor location as percentages of the surface width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorPosition {
    x: f64,
    y: f64,
}

impl SensorPosition {
    /// Create a position; both coordinates must lie in 0-100.
    pub fn new(sensor: SensorId, x: f64, y: f64) -> Result<Self> {
        let valid = |v: f64| (0.0..=100.0).contains(&v);
        if !valid(x) || !valid(y) {
            return Err(PlantarError::invalid_position(sensor.name(), x, y));
        }
        Ok(Self { x, y })
    }

    /// Horizontal position in percent.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical position in percent.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Resolve to surface coordinates.
    pub fn resolve(&self, width: usize, height: usize) -> (f64, f64) {
        (
            self.x * width as f64 / 100.0,
            self.y * height as f64 / 100.0,
        )
    }
}

/// Static placement of all four sensors.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorLayout {
    positions: [SensorPosition; 4],
}

impl SensorLayout {
    /// Position of one sensor.
    pub fn position(&self, id: SensorId) -> SensorPosition {
        self.positions[id.index()]
    }

    /// Build a layout from the defaults with the given overrides applied.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (SensorId, SensorPosition)>,
    {
        let mut layout = Self::default();
        for (id, pos) in overrides {
            layout.positions[id.index()] = pos;
        }
        layout
    }

    /// Parse a `<sensor>=<x>,<y>` override.
    pub fn parse_override(spec: &str) -> Result<(SensorId, SensorPosition)> {
        let (name, coords) = spec
            .split_once('=')
            .ok_or_else(|| PlantarError::position_syntax(spec))?;
        let id: SensorId = name.parse()?;
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| PlantarError::position_syntax(spec))?;
        let x: f64 = x.trim().parse().map_err(|_| PlantarError::position_syntax(spec))?;
        let y: f64 = y.trim().parse().map_err(|_| PlantarError::position_syntax(spec))?;
        Ok((id, SensorPosition::new(id, x, y)?))
    }
}

impl Default for SensorLayout {
    /// Anatomical placement tuned for a 300x600 foot outline.
    fn default() -> Self {
        Self {
            positions: [
                SensorPosition { x: 50.0, y: 85.0 },
                SensorPosition { x: 45.0, y: 55.0 },
                SensorPosition { x: 40.0, y: 28.0 },
                SensorPosition { x: 62.0, y: 20.0 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_positions() {
        let layout = SensorLayout::default();
        assert_eq!(layout.position(SensorId::Heel).x(), 50.0);
        assert_eq!(layout.position(SensorId::Heel).y(), 85.0);
        assert_eq!(layout.position(SensorId::Toe).x(), 62.0);
        assert_eq!(layout.position(SensorId::Toe).y(), 20.0);
    }

    #[test]
    fn test_resolve_scales_with_surface() {
        let pos = SensorPosition::new(SensorId::Arch, 45.0, 55.0).unwrap();
        assert_eq!(pos.resolve(300, 600), (135.0, 330.0));
        assert_eq!(pos.resolve(0, 0), (0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_position_rejected() {
        assert!(SensorPosition::new(SensorId::Ball, 101.0, 50.0).is_err());
        assert!(SensorPosition::new(SensorId::Ball, 50.0, -1.0).is_err());
        assert!(SensorPosition::new(SensorId::Ball, f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_parse_override() {
        let (id, pos) = SensorLayout::parse_override("toe=52,15").unwrap();
        assert_eq!(id, SensorId::Toe);
        assert_eq!((pos.x(), pos.y()), (52.0, 15.0));

        let layout = SensorLayout::with_overrides([(id, pos)]);
        assert_eq!(layout.position(SensorId::Toe), pos);
        assert_eq!(layout.position(SensorId::Heel), SensorLayout::default().position(SensorId::Heel));
    }

    #[test]
    fn test_parse_override_errors() {
        assert!(matches!(
            SensorLayout::parse_override("toe:52,15"),
            Err(PlantarError::PositionSyntax { .. })
        ));
        assert!(matches!(
            SensorLayout::parse_override("knee=10,10"),
            Err(PlantarError::UnknownSensor { .. })
        ));
        assert!(matches!(
            SensorLayout::parse_override("heel=10,abc"),
            Err(PlantarError::PositionSyntax { .. })
        ));
        assert!(matches!(
            SensorLayout::parse_override("heel=10,120"),
            Err(PlantarError::InvalidPosition { .. })
        ));
    }
}
