//! Bar gauge widget
//!
//! Renders a level in [0, 1] as a vertical bar that fills bottom-up.
//!
//! The gauge never repaints the whole bar on update. It remembers the last
//! rendered level and paints only the band between the old and the new fill
//! boundary: with the fill color when the level grows, with the background
//! color when it shrinks. Each update costs at most one `fill_rect`.

use heapless::String;

use crate::color::{Color565, Palette};
use crate::config::{label_from_str, GaugeConfig, LabelTooLong, MAX_LABEL_LEN};
use crate::geometry::GaugeGeometry;
use crate::surface::{DrawingSurface, SurfaceError};

/// Gauge placement errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GaugeError {
    /// The drawing surface failed
    Surface(SurfaceError),
    /// Label does not fit in the gauge's label capacity
    LabelTooLong,
}

impl From<SurfaceError> for GaugeError {
    fn from(err: SurfaceError) -> Self {
        Self::Surface(err)
    }
}

impl From<LabelTooLong> for GaugeError {
    fn from(_: LabelTooLong) -> Self {
        Self::LabelTooLong
    }
}

/// A single on-screen bar gauge
///
/// The gauge does not own the surface it draws on; a surface is passed to
/// every drawing call, so several gauges can share one display.
///
/// `N` is the label capacity in bytes.
#[derive(Debug, Clone)]
pub struct Gauge<const N: usize = MAX_LABEL_LEN> {
    geometry: GaugeGeometry,
    /// Top-left anchor in screen pixels
    origin: (i32, i32),
    label: String<N>,
    palette: Palette,
    /// Clamped level currently shown on screen
    last_level: f32,
    placed: bool,
}

impl Gauge {
    /// Create an unplaced gauge with the default label capacity
    pub fn new(geometry: GaugeGeometry) -> Self {
        Self::with_geometry(geometry)
    }
}

impl<const N: usize> Gauge<N> {
    /// Create an unplaced gauge with the default palette and no label
    pub fn with_geometry(geometry: GaugeGeometry) -> Self {
        Self {
            geometry,
            origin: (0, 0),
            label: String::new(),
            palette: Palette::default(),
            last_level: 0.0,
            placed: false,
        }
    }

    /// Create an unplaced gauge from a stored configuration
    pub fn from_config(config: GaugeConfig<N>) -> Self {
        Self {
            label: config.label,
            palette: config.palette,
            ..Self::with_geometry(config.geometry)
        }
    }

    /// Position the gauge, set its label and colors, and draw its frame
    ///
    /// May be called again to move or restyle the gauge. The last level is
    /// kept; call [`Gauge::repaint`] afterwards to restore the fill at the
    /// new position.
    ///
    /// A label longer than `N` bytes is rejected before anything is stored
    /// or drawn.
    pub fn place<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
        label: &str,
        palette: Palette,
    ) -> Result<(), GaugeError> {
        self.label = label_from_str(label)?;
        self.palette = palette;
        self.place_configured(surface, x, y)?;
        Ok(())
    }

    /// Position the gauge using its current label and palette, then draw its frame
    pub fn place_configured<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        x: i32,
        y: i32,
    ) -> Result<(), SurfaceError> {
        self.origin = (x, y);
        self.placed = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("gauge '{}' placed at ({}, {})", self.label.as_str(), x, y);

        self.draw(surface)
    }

    /// Draw the outline and label
    ///
    /// The fill is not redrawn; it only exists as pixels on the surface.
    pub fn draw<S: DrawingSurface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        let (x, y) = self.origin;
        surface.draw_outline_rect(
            x + self.geometry.margin(),
            y,
            self.geometry.width(),
            self.geometry.height(),
            self.palette.outline,
        )?;

        let text_width = surface.measure_text_width(&self.label);
        let (cursor_x, cursor_y) = self.geometry.label_origin(self.origin, text_width);
        surface.set_text_cursor(cursor_x, cursor_y);
        surface.draw_text(&self.label)
    }

    /// Draw the outline and label, then rebuild the fill from the last level
    ///
    /// Use after the surface was cleared or the gauge moved.
    pub fn repaint<S: DrawingSurface>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        self.draw(surface)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("gauge repaint at level {}", self.last_level);

        self.fill_band(surface, 0, 0, self.palette.background)?;
        if self.last_level > 0.0 {
            let top = self.geometry.pixel_height(self.last_level);
            self.fill_band(surface, top, top, self.palette.fill)?;
        }

        Ok(())
    }

    /// Show a new level, repainting only the pixels that changed
    ///
    /// The level is clamped to [0, 1]. If the clamped value equals the level
    /// already on screen nothing is drawn. NaN is ignored. On a surface error
    /// the stored level is left unchanged.
    pub fn update<S: DrawingSurface>(
        &mut self,
        surface: &mut S,
        level: f32,
    ) -> Result<(), SurfaceError> {
        if level.is_nan() {
            return Ok(());
        }

        let level = level.clamp(0.0, 1.0);

        // Exact comparison: repeated identical samples must cost nothing.
        if level == self.last_level {
            return Ok(());
        }

        let previous = self.last_level;
        if level < previous {
            let y_offset = self.geometry.pixel_height(previous);
            let delta_span = self.geometry.pixel_height(previous - level);
            self.fill_band(surface, y_offset, delta_span, self.palette.background)?;
        } else {
            let y_offset = self.geometry.pixel_height(level);
            let delta_span = self.geometry.pixel_height(level - previous);
            self.fill_band(surface, y_offset, delta_span, self.palette.fill)?;
        }

        self.last_level = level;
        Ok(())
    }

    /// Fill the inner region starting `y_offset` rows below its top, `delta_span`
    /// rows shorter than the full inner height
    fn fill_band<S: DrawingSurface>(
        &self,
        surface: &mut S,
        y_offset: i32,
        delta_span: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        let (x, y) = self.origin;
        let height = self.geometry.inner_height() - delta_span;

        #[cfg(feature = "defmt")]
        defmt::trace!("gauge fill y+{} h={} color={}", y_offset, height, color);

        surface.fill_rect(
            self.geometry.fill_x(x),
            self.geometry.fill_y(y) + y_offset,
            self.geometry.inner_width(),
            height,
            color,
        )
    }

    /// Level currently shown, in [0, 1]
    pub fn level(&self) -> f32 {
        self.last_level
    }

    /// Top-left anchor in screen pixels
    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    /// Text shown under the bar
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Colors used for outline, fill and background
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Bar dimensions
    pub fn geometry(&self) -> &GaugeGeometry {
        &self.geometry
    }

    /// Whether `place` has been called
    pub fn is_placed(&self) -> bool {
        self.placed
    }
}
