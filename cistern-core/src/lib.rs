//! Board-agnostic core logic for cistern bar gauges
//!
//! This crate contains everything that does not depend on a specific
//! display controller:
//!
//! - `DrawingSurface` trait the gauge renders through
//! - `Gauge` widget with its incremental (delta-only) redraw
//! - Geometry, palette and color definitions
//! - Configuration type definitions
//!
//! A gauge only ever repaints the band of pixels between the previously
//! rendered fill boundary and the new one, so frequent updates on slow
//! SPI/parallel panels do not flicker.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod surface;

// Re-export key types
pub use color::{Color565, Palette};
pub use config::{GaugeConfig, LabelTooLong, MAX_LABEL_LEN};
pub use gauge::{Gauge, GaugeError};
pub use geometry::GaugeGeometry;
pub use surface::{DrawingSurface, SurfaceError};
