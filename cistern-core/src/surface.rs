//! Drawing surface trait
//!
//! Defines the pixel-output interface a gauge renders through. Controller
//! init, bus I/O and fonts all live behind an implementation of this trait.

use crate::color::Color565;

/// Drawing surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Communication error with the display
    Communication,
    /// Rectangle lies entirely outside the drawable area
    InvalidCoordinates,
}

/// Drawing surface trait
///
/// Coordinates are screen pixels with the origin at the top-left corner.
/// Implementations must perform writes in the order they are issued.
pub trait DrawingSurface {
    /// Draw an unfilled rectangle border
    fn draw_outline_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError>;

    /// Fill a solid rectangle
    ///
    /// A rectangle with `width <= 0` or `height <= 0` draws nothing and
    /// returns `Ok(())`. The gauge's delta formula produces such rectangles
    /// when the old and new fill boundaries coincide. A rectangle with area
    /// that misses the surface entirely may be rejected with
    /// `SurfaceError::InvalidCoordinates`.
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError>;

    /// Move the text cursor (top-left of the next glyph)
    fn set_text_cursor(&mut self, x: i32, y: i32);

    /// Draw text at the current cursor
    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Width in pixels `text` would occupy if drawn
    fn measure_text_width(&self, text: &str) -> i32;
}

impl<T: DrawingSurface + ?Sized> DrawingSurface for &mut T {
    fn draw_outline_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        (**self).draw_outline_rect(x, y, width, height, color)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn set_text_cursor(&mut self, x: i32, y: i32) {
        (**self).set_text_cursor(x, y)
    }

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        (**self).draw_text(text)
    }

    fn measure_text_width(&self, text: &str) -> i32 {
        (**self).measure_text_width(text)
    }
}
