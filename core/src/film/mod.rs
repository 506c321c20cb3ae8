//! Film

use crate::spectrum::*;

mod film_tile;

// Re-export.
pub use film_tile::*;

/// Stores the colors of one rendered frame in screen order, row by row with
/// the origin at the top left.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,

    /// Stores the image pixels.
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new `Film` filled with the given color.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    /// * `fill`   - Initial color of every pixel.
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the pixel at given screen coordinates.
    ///
    /// * `x` - Screen x-coordinate.
    /// * `y` - Screen y-coordinate.
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Copies a rendered tile into the film.
    ///
    /// * `tile` - The tile to merge.
    pub fn merge_film_tile(&mut self, tile: &FilmTile) {
        debug_assert!(tile.width() == self.width);
        debug_assert!(tile.y1() <= self.height);

        let start = tile.y0() * self.width;
        let end = tile.y1() * self.width;
        self.pixels[start..end].copy_from_slice(tile.pixels());
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_band_only() {
        let mut film = Film::new(3, 4, Color::BLACK);

        let mut tile = FilmTile::new(3, 1, 3, Color::BLACK);
        for y in 1..3 {
            for x in 0..3 {
                tile.set(x, y, Color::RED);
            }
        }
        film.merge_film_tile(&tile);

        for x in 0..3 {
            assert_eq!(film.get(x, 0), Color::BLACK);
            assert_eq!(film.get(x, 1), Color::RED);
            assert_eq!(film.get(x, 2), Color::RED);
            assert_eq!(film.get(x, 3), Color::BLACK);
        }
    }

    #[test]
    fn unset_tile_pixels_keep_fill_color() {
        let mut film = Film::new(2, 1, Color::WHITE);
        let mut tile = FilmTile::new(2, 0, 1, Color::BLACK);
        tile.set(1, 0, Color::new(1, 2, 3, 4));
        film.merge_film_tile(&tile);
        assert_eq!(film.get(0, 0), Color::BLACK);
        assert_eq!(film.get(0, 0).a, 255);
        assert_eq!(film.get(1, 0), Color::new(1, 2, 3, 4));
    }
}
