//! Color definitions
//!
//! Colors are carried as opaque 16-bit RGB565 values. How a value maps to
//! panel pixels is up to the `DrawingSurface` implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packed RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color565(pub u16);

impl Color565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels into RGB565, dropping the low bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r = ((r as u16) >> 3) << 11;
        let g = ((g as u16) >> 2) << 5;
        let b = (b as u16) >> 3;
        Self(r | g | b)
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn r(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn g(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

/// Colors used by a single gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Bar outline
    pub outline: Color565,
    /// Filled portion of the bar
    pub fill: Color565,
    /// Empty portion of the bar
    pub background: Color565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            outline: Color565::WHITE,
            fill: Color565::WHITE,
            background: Color565::BLACK,
        }
    }
}

impl Palette {
    /// Palette with the default outline and background and a custom fill
    pub fn with_fill(fill: Color565) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }
}
