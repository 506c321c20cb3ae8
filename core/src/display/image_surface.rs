//! Image file display surface

use super::DisplaySurface;
use crate::image_io::*;
use crate::spectrum::*;

/// A surface that writes every committed frame to an 8-bit image file.
#[derive(Clone, Debug)]
pub struct ImageSurface {
    /// Output file path.
    path: String,

    /// Number the output file per frame instead of overwriting it.
    sequence: bool,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,

    /// Pixels presented since the last commit.
    back_buffer: Vec<u8>,

    /// Number of committed frames.
    frames: usize,

    /// Close after this many committed frames.
    max_frames: usize,
}

impl ImageSurface {
    /// Returns a new `ImageSurface`.
    ///
    /// * `path`       - Output file path.
    /// * `width`      - Width in pixels.
    /// * `height`     - Height in pixels.
    /// * `sequence`   - Number the output file per frame.
    /// * `max_frames` - Close after this many committed frames.
    pub fn new(path: &str, width: usize, height: usize, sequence: bool, max_frames: usize) -> Self {
        Self {
            path: path.to_string(),
            sequence,
            width,
            height,
            back_buffer: vec![0; 4 * width * height],
            frames: 0,
            max_frames,
        }
    }

    /// Returns the path the next committed frame is written to.
    pub fn next_path(&self) -> String {
        if self.sequence {
            sequence_path(&self.path, self.frames)
        } else {
            self.path.clone()
        }
    }
}

impl DisplaySurface for ImageSurface {
    fn present_pixel(&mut self, x: usize, y: usize, color: Color) {
        debug_assert!(x < self.width && y < self.height);
        let offset = 4 * (y * self.width + x);
        self.back_buffer[offset..offset + 4].copy_from_slice(&color.to_rgba());
    }

    fn commit_frame(&mut self) -> Result<(), String> {
        let path = self.next_path();
        write_image(&path, &self.back_buffer, self.width as u32, self.height as u32)?;
        self.frames += 1;
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.frames >= self.max_frames
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_each_frame() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("whitted-surface-{}.png", std::process::id()));
        let path = path.to_string_lossy().into_owned();

        let mut surface = ImageSurface::new(&path, 1, 1, true, 2);
        let mut written = vec![];
        while !surface.should_close() {
            surface.present_pixel(0, 0, Color::GREEN);
            written.push(surface.next_path());
            surface.commit_frame().unwrap();
        }

        assert_eq!(written.len(), 2);
        assert_eq!(written[0], sequence_path(&path, 0));
        assert_eq!(written[1], sequence_path(&path, 1));
        for p in written.iter() {
            let img = image::open(p).unwrap().to_rgba8();
            assert_eq!(img.into_raw(), Color::GREEN.to_rgba().to_vec());
            let _ = std::fs::remove_file(p);
        }
    }

    #[test]
    fn failed_write_is_reported() {
        let mut surface = ImageSurface::new("frame.unknown", 1, 1, false, 1);
        assert!(surface.commit_frame().is_err());
        assert!(!surface.should_close());
    }
}
