//! Plantar - a terminal heatmap of plantar pressure from a four-sensor insole.
//!
//! Readings from the heel, arch, ball and toe sensors are drawn as glowing
//! radial blobs over a foot outline. Low pressure reads red, medium blue and
//! high green, and each blob grows with its load.
//!
//! # Features
//!
//! - Three-layer radial rendering per sensor with multiply compositing
//! - Built-in walking, standing and running scenarios
//! - Line-oriented device feed for live notifications
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use plantar::heatmap::{HeatmapRenderer, Surface};
//! use plantar::sensor::SensorSnapshot;
//!
//! let mut surface = Surface::new(0, 0);
//! surface.set_display_size(300, 600);
//! HeatmapRenderer::default().render(&SensorSnapshot::new(1800, 400, 200, 0), &mut surface);
//! assert_eq!(surface.width(), 300);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod feed;
pub mod heatmap;
pub mod sensor;
pub mod state;
pub mod ui;
pub mod util;

pub use error::{PlantarError, Result};
