//! Configuration type definitions
//!
//! A `GaugeConfig` bundles everything needed to place a gauge except its
//! screen position. With the `serde` feature enabled it can be embedded in
//! a larger board configuration.

use heapless::String;

use crate::color::Palette;
use crate::geometry::GaugeGeometry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default label capacity in bytes
pub const MAX_LABEL_LEN: usize = 32;

/// Label does not fit in the gauge's label capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelTooLong;

/// Gauge configuration
///
/// `N` is the label capacity in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaugeConfig<const N: usize = MAX_LABEL_LEN> {
    /// Bar dimensions
    pub geometry: GaugeGeometry,
    /// Colors
    pub palette: Palette,
    /// Text shown under the bar
    pub label: String<N>,
}

impl GaugeConfig {
    /// Create a config with default geometry and palette
    pub fn new(label: &str) -> Result<Self, LabelTooLong> {
        Self::labeled(label)
    }
}

impl<const N: usize> GaugeConfig<N> {
    /// Create a config with a custom label capacity
    pub fn labeled(label: &str) -> Result<Self, LabelTooLong> {
        Ok(Self {
            label: label_from_str(label)?,
            geometry: GaugeGeometry::default(),
            palette: Palette::default(),
        })
    }

    /// Replace the geometry
    pub fn with_geometry(mut self, geometry: GaugeGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Replace the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Copy `text` into a label of capacity `N`
pub fn label_from_str<const N: usize>(text: &str) -> Result<String<N>, LabelTooLong> {
    let mut label = String::new();
    label.push_str(text).map_err(|_| LabelTooLong)?;
    Ok(label)
}
