//! Drawing surface over an embedded-graphics draw target

use cistern_core::{Color565, DrawingSurface, SurfaceError};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text};

/// Convert a packed gauge color to an embedded-graphics color
pub fn to_rgb565(color: Color565) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

/// `DrawingSurface` backed by an embedded-graphics `DrawTarget`
///
/// Text is drawn with a monospace font, top-left anchored at the cursor.
pub struct GraphicsSurface<'f, D> {
    target: D,
    font: &'f MonoFont<'f>,
    text_color: Rgb565,
    cursor: Point,
}

impl<'f, D> GraphicsSurface<'f, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Wrap a draw target, drawing labels in white
    pub fn new(target: D, font: &'f MonoFont<'f>) -> Self {
        Self {
            target,
            font,
            text_color: Rgb565::WHITE,
            cursor: Point::zero(),
        }
    }

    /// Set the label text color
    pub fn with_text_color(mut self, color: Color565) -> Self {
        self.text_color = to_rgb565(color);
        self
    }

    /// Get access to the underlying draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Release the draw target
    pub fn into_inner(self) -> D {
        self.target
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

/// Rectangle for the given corner and size, or `None` if it has no area
fn rect(x: i32, y: i32, width: i32, height: i32) -> Option<Rectangle> {
    if width <= 0 || height <= 0 {
        return None;
    }
    Some(Rectangle::new(
        Point::new(x, y),
        Size::new(width as u32, height as u32),
    ))
}

/// Reject rectangles that do not touch the target at all
fn check_on_target<D: Dimensions>(target: &D, bounds: &Rectangle) -> Result<(), SurfaceError> {
    if bounds.intersection(&target.bounding_box()).is_zero_sized() {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "rectangle at ({}, {}) is off the display",
            bounds.top_left.x,
            bounds.top_left.y
        );
        return Err(SurfaceError::InvalidCoordinates);
    }
    Ok(())
}

fn draw_failed<E>(_err: E) -> SurfaceError {
    #[cfg(feature = "defmt")]
    defmt::warn!("draw target error");

    SurfaceError::Communication
}

impl<'f, D> DrawingSurface for GraphicsSurface<'f, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_outline_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        let Some(bounds) = rect(x, y, width, height) else {
            return Ok(());
        };
        check_on_target(&self.target, &bounds)?;
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(to_rgb565(color))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        bounds
            .into_styled(style)
            .draw(&mut self.target)
            .map_err(draw_failed)
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        let Some(bounds) = rect(x, y, width, height) else {
            return Ok(());
        };
        check_on_target(&self.target, &bounds)?;
        self.target
            .fill_solid(&bounds, to_rgb565(color))
            .map_err(draw_failed)
    }

    fn set_text_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn draw_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        let style = MonoTextStyle::new(self.font, self.text_color);
        self.cursor = Text::with_baseline(text, self.cursor, style, Baseline::Top)
            .draw(&mut self.target)
            .map_err(draw_failed)?;
        Ok(())
    }

    fn measure_text_width(&self, text: &str) -> i32 {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return 0;
        }
        let advance = self.font.character_size.width + self.font.character_spacing;
        (chars * advance - self.font.character_spacing) as i32
    }
}
