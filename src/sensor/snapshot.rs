//! The four-sensor reading set.

use super::SensorId;
use std::fmt;

/// Raw sensor sample in ADC units (nominally 0-4095, not enforced).
pub type PressureReading = u32;

/// Readings for all four sensors at one instant.
///
/// Every sensor always has a value; sensors that were not reported read 0.
/// Snapshots are values: changing one sensor produces a new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorSnapshot {
    readings: [PressureReading; 4],
}

impl SensorSnapshot {
    /// All sensors at zero.
    pub const ZERO: SensorSnapshot = SensorSnapshot { readings: [0; 4] };

    /// Build from readings in heel, arch, ball, toe order.
    pub const fn new(heel: PressureReading, arch: PressureReading, ball: PressureReading, toe: PressureReading) -> Self {
        Self {
            readings: [heel, arch, ball, toe],
        }
    }

    /// Build from any subset of sensors. Missing sensors read 0; a sensor
    /// listed twice keeps its last value.
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = (SensorId, PressureReading)>,
    {
        let mut snapshot = Self::ZERO;
        for (id, value) in readings {
            snapshot.readings[id.index()] = value;
        }
        snapshot
    }

    /// Reading for one sensor.
    pub fn get(&self, id: SensorId) -> PressureReading {
        self.readings[id.index()]
    }

    /// A copy of this snapshot with one sensor replaced.
    pub fn with(mut self, id: SensorId, value: PressureReading) -> Self {
        self.readings[id.index()] = value;
        self
    }

    /// Iterate `(sensor, reading)` in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (SensorId, PressureReading)> + '_ {
        SensorId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl fmt::Display for SensorSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", id, value)?;
        }
        Ok(())
    }
}
