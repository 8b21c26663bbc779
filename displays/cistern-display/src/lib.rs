//! embedded-graphics backend for cistern gauges
//!
//! This crate provides `GraphicsSurface`, an implementation of
//! `cistern_core::DrawingSurface` for any `DrawTarget<Color = Rgb565>`.
//!
//! # Architecture
//!
//! Display driver crates (ILI9341, ST7789, SSD1351, ...) expose their panel
//! as an embedded-graphics `DrawTarget`. Wrapping that target in a
//! `GraphicsSurface` lets gauges render to it without knowing anything about
//! the controller or the bus:
//!
//! ```ignore
//! let mut surface = GraphicsSurface::new(display, &FONT_6X10);
//! let mut gauge = Gauge::new(GaugeGeometry::default());
//! gauge.place(&mut surface, 0, 0, "Coolant", Palette::default())?;
//! gauge.update(&mut surface, 0.42)?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod surface;

// Re-export key types
pub use surface::{to_rgb565, GraphicsSurface};
