//! Foot silhouette drawn behind the heatmap.
//!
//! The outline is a union of ellipses in the same percent space the sensor
//! layout uses, so it stays under the sensors at any view size.

/// What lies under a point of the foot view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shade {
    /// Plain paper.
    Paper,
    /// Thin band along the outline.
    Edge,
    /// Inside the foot.
    Sole,
}

/// (center x, center y, radius x, radius y), all in percent.
const PARTS: [(f64, f64, f64, f64); 7] = [
    (50.0, 84.0, 20.0, 11.0), // heel
    (48.0, 58.0, 18.0, 20.0), // midfoot
    (47.0, 30.0, 27.0, 13.0), // forefoot
    (38.0, 12.0, 10.0, 6.0),  // big toe
    (55.0, 14.0, 6.0, 4.0),
    (63.0, 18.0, 6.0, 4.5),
    (73.0, 21.0, 4.0, 3.0),
];

/// Width of the outline band, as a fraction of each ellipse's radius.
const EDGE_BAND: f64 = 0.12;

/// Classify a point given in percent of the view.
pub(crate) fn shade(x: f64, y: f64) -> Shade {
    // Smallest normalized distance to any part: < 1 means inside it
    let d = PARTS
        .iter()
        .map(|&(cx, cy, rx, ry)| {
            let dx = (x - cx) / rx;
            let dy = (y - cy) / ry;
            (dx * dx + dy * dy).sqrt()
        })
        .fold(f64::INFINITY, f64::min);

    if d < 1.0 - EDGE_BAND {
        Shade::Sole
    } else if d < 1.0 {
        Shade::Edge
    } else {
        Shade::Paper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::{SensorId, SensorLayout};

    #[test]
    fn test_default_sensors_sit_on_the_sole() {
        let layout = SensorLayout::default();
        for id in SensorId::ALL {
            let pos = layout.position(id);
            assert_eq!(shade(pos.x(), pos.y()), Shade::Sole, "{} is off the foot", id);
        }
    }

    #[test]
    fn test_corners_are_paper() {
        assert_eq!(shade(0.0, 0.0), Shade::Paper);
        assert_eq!(shade(100.0, 100.0), Shade::Paper);
        assert_eq!(shade(95.0, 50.0), Shade::Paper);
    }

    #[test]
    fn test_outline_band() {
        // Heel bottom edge sits at y = 95
        assert_eq!(shade(50.0, 94.5), Shade::Edge);
        assert_eq!(shade(50.0, 96.0), Shade::Paper);
    }
}
