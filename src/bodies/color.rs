#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Display color of a body. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel, 0-1
    pub r: f32,

    /// Green channel, 0-1
    pub g: f32,

    /// Blue channel, 0-1
    pub b: f32,
}

impl Color {
    /// Creates a new color from its channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black, the default
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// White
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Pure red
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Pure green
    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Pure blue
    pub const fn blue() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Red plus green
    pub const fn yellow() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }

    /// Returns a color from a hue in `[0, 1)` at full saturation and value.
    ///
    /// Handy for cycling through a rainbow of bricks or invaders.
    pub fn from_hue(hue: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let x = 1.0 - (h % 2.0 - 1.0).abs();
        match h as u32 {
            0 => Self::new(1.0, x, 0.0),
            1 => Self::new(x, 1.0, 0.0),
            2 => Self::new(0.0, 1.0, x),
            3 => Self::new(0.0, x, 1.0),
            4 => Self::new(x, 0.0, 1.0),
            _ => Self::new(1.0, 0.0, x),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}
