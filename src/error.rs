//! Error types for Plantar.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! The rendering pipeline itself never fails; these errors come from the
//! edges (configuration, payload decoding and feed I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Plantar operations.
pub type Result<T> = std::result::Result<T, PlantarError>;

/// Errors that can occur in Plantar.
#[derive(Debug, Error)]
pub enum PlantarError {
    /// Sensor name is not one of heel, arch, ball, toe.
    #[error("Unknown sensor: {name}")]
    UnknownSensor { name: String },

    /// Sensor position outside the 0-100 percent range.
    #[error("Invalid position for {sensor}: ({x}, {y}) must be within 0-100%")]
    InvalidPosition { sensor: String, x: f64, y: f64 },

    /// Malformed `name=x,y` position override.
    #[error("Invalid position spec '{spec}': expected <sensor>=<x>,<y>")]
    PositionSyntax { spec: String },

    /// Notification payload could not be turned into a reading.
    #[error("Cannot decode payload: {reason}")]
    Decode { reason: String },

    /// Failed to open the sensor feed.
    #[error("Failed to open feed: {path}")]
    FeedOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlantarError {
    /// Create an UnknownSensor error.
    pub fn unknown_sensor(name: impl Into<String>) -> Self {
        Self::UnknownSensor { name: name.into() }
    }

    /// Create an InvalidPosition error.
    pub fn invalid_position(sensor: impl Into<String>, x: f64, y: f64) -> Self {
        Self::InvalidPosition {
            sensor: sensor.into(),
            x,
            y,
        }
    }

    /// Create a PositionSyntax error.
    pub fn position_syntax(spec: impl Into<String>) -> Self {
        Self::PositionSyntax { spec: spec.into() }
    }

    /// Create a Decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Create a FeedOpen error.
    pub fn feed_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FeedOpen { path, source }
    }
}
