//! Film Tile

use crate::spectrum::*;

/// A horizontal band of scanlines `[y0, y1)` rendered by one worker.
#[derive(Clone, Debug, PartialEq)]
pub struct FilmTile {
    /// Width in pixels.
    width: usize,

    /// First scanline (inclusive).
    y0: usize,

    /// Last scanline (exclusive).
    y1: usize,

    /// Pixels of the band in screen order.
    pixels: Vec<Color>,
}

impl FilmTile {
    /// Create a new `FilmTile`.
    ///
    /// * `width` - Width in pixels.
    /// * `y0`    - First scanline (inclusive).
    /// * `y1`    - Last scanline (exclusive).
    /// * `fill`  - Initial color of every pixel.
    pub fn new(width: usize, y0: usize, y1: usize, fill: Color) -> Self {
        debug_assert!(y0 <= y1);
        Self {
            width,
            y0,
            y1,
            pixels: vec![fill; width * (y1 - y0)],
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the first scanline.
    pub fn y0(&self) -> usize {
        self.y0
    }

    /// Returns the scanline after the last one.
    pub fn y1(&self) -> usize {
        self.y1
    }

    /// Returns the pixels of the band.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Stores the color of a pixel.
    ///
    /// * `x`     - Screen x-coordinate.
    /// * `y`     - Screen y-coordinate; must lie within the band.
    /// * `color` - The color.
    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(y >= self.y0 && y < self.y1 && x < self.width);
        self.pixels[(y - self.y0) * self.width + x] = color;
    }
}
