//! In-memory display surface

use super::DisplaySurface;
use crate::spectrum::*;

/// A headless surface that keeps every committed frame as RGBA bytes.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,

    /// Pixels presented since the last commit.
    back_buffer: Vec<u8>,

    /// Committed frames in order.
    frames: Vec<Vec<u8>>,

    /// Close after this many committed frames.
    max_frames: Option<usize>,
}

impl MemorySurface {
    /// Returns a new `MemorySurface` with a transparent black back buffer.
    ///
    /// * `width`      - Width in pixels.
    /// * `height`     - Height in pixels.
    /// * `max_frames` - Close after this many committed frames; `None` to
    ///                  never close.
    pub fn new(width: usize, height: usize, max_frames: Option<usize>) -> Self {
        Self {
            width,
            height,
            back_buffer: vec![0; 4 * width * height],
            frames: vec![],
            max_frames,
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

    /// Returns the committed frames.
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Returns the most recently committed frame.
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(|f| f.as_slice())
    }

    /// Returns a pixel of the most recently committed frame.
    ///
    /// * `x` - Screen x-coordinate.
    /// * `y` - Screen y-coordinate.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let frame = self.last_frame()?;
        let offset = 4 * (y * self.width + x);
        let rgba: [u8; 4] = frame.get(offset..offset + 4)?.try_into().ok()?;
        Some(Color::from(rgba))
    }
}

impl DisplaySurface for MemorySurface {
    fn present_pixel(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        let offset = 4 * (y * self.width + x);
        self.back_buffer[offset..offset + 4].copy_from_slice(&color.to_rgba());
    }

    fn commit_frame(&mut self) -> Result<(), String> {
        self.frames.push(self.back_buffer.clone());
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.max_frames.map_or(false, |max| self.frames.len() >= max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_visible_before_commit() {
        let mut surface = MemorySurface::new(2, 2, None);
        surface.present_pixel(1, 0, Color::RED);
        assert!(surface.frames().is_empty());
        assert_eq!(surface.pixel(1, 0), None);

        surface.commit_frame().unwrap();
        assert_eq!(surface.frames().len(), 1);
        assert_eq!(surface.pixel(1, 0), Some(Color::RED));
        assert_eq!(surface.pixel(0, 0), Some(Color::new(0, 0, 0, 0)));
    }

    #[test]
    fn closes_after_max_frames() {
        let mut surface = MemorySurface::new(1, 1, Some(2));
        assert!(!surface.should_close());
        surface.commit_frame().unwrap();
        assert!(!surface.should_close());
        surface.commit_frame().unwrap();
        assert!(surface.should_close());
    }

    #[test]
    fn unlimited_surface_never_closes() {
        let mut surface = MemorySurface::new(1, 1, None);
        for _ in 0..10 {
            surface.commit_frame().unwrap();
        }
        assert!(!surface.should_close());
    }
}
