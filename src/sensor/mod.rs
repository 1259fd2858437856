//! Sensor identities, readings and placement.
//!
//! An insole carries four pressure sensors. Readings for all four travel
//! together as a [`SensorSnapshot`]; where each one sits on the foot outline
//! is described by a [`SensorLayout`].

mod decode;
mod layout;
mod snapshot;

pub use decode::decode_payload;
pub use layout::{SensorLayout, SensorPosition};
pub use snapshot::{PressureReading, SensorSnapshot};

use crate::error::{PlantarError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the four insole sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorId {
    /// Heel pad.
    Heel,
    /// Medial arch.
    Arch,
    /// Ball of the foot.
    Ball,
    /// Toe area.
    Toe,
}

impl SensorId {
    /// All sensors in draw order.
    pub const ALL: [SensorId; 4] = [SensorId::Heel, SensorId::Arch, SensorId::Ball, SensorId::Toe];

    /// Lowercase sensor name used in labels and on the wire.
    pub fn name(self) -> &'static str {
        match self {
            SensorId::Heel => "heel",
            SensorId::Arch => "arch",
            SensorId::Ball => "ball",
            SensorId::Toe => "toe",
        }
    }

    /// Position of this sensor in [`SensorId::ALL`].
    pub fn index(self) -> usize {
        match self {
            SensorId::Heel => 0,
            SensorId::Arch => 1,
            SensorId::Ball => 2,
            SensorId::Toe => 3,
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensorId {
    type Err = PlantarError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        SensorId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PlantarError::unknown_sensor(trimmed))
    }
}
