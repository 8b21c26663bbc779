//! Gauge geometry
//!
//! Size of a bar independent of where it sits on screen. A geometry never
//! changes after construction, so one value can be shared by every gauge
//! that has the same dimensions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Border inset on each side of the bar, in pixels
pub const BORDER_INSET: i32 = 2;

/// Total inset across both sides
pub const TOTAL_INSET: i32 = 2 * BORDER_INSET;

/// Gap between the bottom of the bar and the label, in pixels
pub const LABEL_GAP: i32 = 2;

/// Default bar width
pub const DEFAULT_WIDTH: i32 = 50;

/// Default bar height
pub const DEFAULT_HEIGHT: i32 = 215;

/// Default left margin
pub const DEFAULT_MARGIN: i32 = 5;

/// Bar dimensions
///
/// Preconditions (not checked): `width > TOTAL_INSET`, `height > TOTAL_INSET`
/// and `margin >= 0`. Rendering with a geometry that violates them draws
/// nothing useful but does not panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaugeGeometry {
    /// Outline width in pixels
    width: i32,
    /// Outline height in pixels
    height: i32,
    /// Horizontal offset of the outline from the gauge origin
    margin: i32,
}

impl Default for GaugeGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MARGIN)
    }
}

impl GaugeGeometry {
    /// Create a new geometry
    pub const fn new(width: i32, height: i32, margin: i32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Get the outline width
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Get the outline height
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get the horizontal offset of the outline from the gauge origin
    pub const fn margin(&self) -> i32 {
        self.margin
    }

    /// Width of the fillable region inside the border
    pub const fn inner_width(&self) -> i32 {
        self.width - TOTAL_INSET
    }

    /// Height of the fillable region inside the border
    pub const fn inner_height(&self) -> i32 {
        self.height - TOTAL_INSET
    }

    /// Unfilled pixel rows above the fill boundary for `level`
    ///
    /// Level 0 maps to the full inner height and level 1 to zero. The
    /// fractional part is truncated toward zero.
    pub fn pixel_height(&self, level: f32) -> i32 {
        let inner = self.inner_height() as f32;
        (inner - inner * level) as i32
    }

    /// X coordinate of the fill region for a gauge placed at `origin_x`
    pub const fn fill_x(&self, origin_x: i32) -> i32 {
        origin_x + self.margin + BORDER_INSET
    }

    /// Y coordinate of the top of the fill region for a gauge at `origin_y`
    pub const fn fill_y(&self, origin_y: i32) -> i32 {
        origin_y + BORDER_INSET
    }

    /// Text cursor for a label `text_width` pixels wide, centered under the bar
    pub const fn label_origin(&self, origin: (i32, i32), text_width: i32) -> (i32, i32) {
        (
            origin.0 + self.width / 2 - text_width / 2,
            origin.1 + self.height + LABEL_GAP,
        )
    }
}
