//! Property tests for incremental gauge rendering

use cistern_core::{Color565, DrawingSurface, Gauge, GaugeGeometry, Palette, SurfaceError};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fill {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: Color565,
}

#[derive(Default)]
struct FillLog {
    fills: Vec<Fill>,
}

impl DrawingSurface for FillLog {
    fn draw_outline_rect(
        &mut self,
        _x: i32,
        _y: i32,
        _width: i32,
        _height: i32,
        _color: Color565,
    ) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color565,
    ) -> Result<(), SurfaceError> {
        self.fills.push(Fill {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }

    fn set_text_cursor(&mut self, _x: i32, _y: i32) {}

    fn draw_text(&mut self, _text: &str) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn measure_text_width(&self, text: &str) -> i32 {
        text.len() as i32 * 6
    }
}

fn geometry_strategy() -> impl Strategy<Value = GaugeGeometry> {
    (8i32..120, 8i32..320, 0i32..10).prop_map(|(w, h, m)| GaugeGeometry::new(w, h, m))
}

proptest! {
    #[test]
    fn fill_column_is_invariant(
        geometry in geometry_strategy(),
        origin in (-50i32..400, -50i32..400),
        levels in prop::collection::vec(-0.5f32..1.5, 1..40),
    ) {
        let mut surface = FillLog::default();
        let mut gauge = Gauge::new(geometry);
        gauge.place(&mut surface, origin.0, origin.1, "P", Palette::default()).unwrap();

        for level in levels {
            gauge.update(&mut surface, level).unwrap();
        }

        for fill in &surface.fills {
            prop_assert_eq!(fill.x, origin.0 + geometry.margin() + 2);
            prop_assert_eq!(fill.width, geometry.width() - 4);
        }
    }

    #[test]
    fn fill_stays_within_inner_rows(
        geometry in geometry_strategy(),
        levels in prop::collection::vec(-0.5f32..1.5, 1..40),
    ) {
        let mut surface = FillLog::default();
        let mut gauge = Gauge::new(geometry);
        gauge.place(&mut surface, 0, 0, "P", Palette::default()).unwrap();

        for level in levels {
            gauge.update(&mut surface, level).unwrap();
        }

        let top = 2;
        let bottom = 2 + geometry.inner_height();
        for fill in surface.fills.iter().filter(|f| f.height > 0) {
            prop_assert!(fill.y >= top);
            prop_assert!(fill.y + fill.height <= bottom + 1);
        }
    }

    #[test]
    fn level_is_always_clamped(
        levels in prop::collection::vec(-10.0f32..10.0, 1..40),
    ) {
        let mut surface = FillLog::default();
        let mut gauge = Gauge::new(GaugeGeometry::default());
        gauge.place(&mut surface, 0, 0, "P", Palette::default()).unwrap();

        for level in levels {
            gauge.update(&mut surface, level).unwrap();
            prop_assert_eq!(gauge.level(), level.clamp(0.0, 1.0));
        }
    }

    #[test]
    fn repeated_update_is_free(level in -2.0f32..2.0) {
        let mut surface = FillLog::default();
        let mut gauge = Gauge::new(GaugeGeometry::default());
        gauge.place(&mut surface, 0, 0, "P", Palette::default()).unwrap();

        gauge.update(&mut surface, level).unwrap();
        let after_first = surface.fills.len();
        prop_assert!(after_first <= 1);

        gauge.update(&mut surface, level).unwrap();
        prop_assert_eq!(surface.fills.len(), after_first);
    }

    #[test]
    fn direction_selects_color(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        prop_assume!(a != b && a != 0.0);

        let palette = Palette::with_fill(Color565::GREEN);
        let mut surface = FillLog::default();
        let mut gauge = Gauge::new(GaugeGeometry::default());
        gauge.place(&mut surface, 0, 0, "P", palette).unwrap();

        gauge.update(&mut surface, a).unwrap();
        gauge.update(&mut surface, b).unwrap();

        let last = surface.fills.last().unwrap();
        if b < a {
            prop_assert_eq!(last.color, palette.background);
        } else {
            prop_assert_eq!(last.color, palette.fill);
        }
    }
}
