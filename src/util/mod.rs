//! Utility types.
//!
//! This module provides layout configuration and viewport fitting for the
//! terminal foot view.

mod layout_config;
mod viewport;

pub use layout_config::{BarLayoutConfig, FootViewConfig, LayoutConfig};
pub use viewport::Viewport;
