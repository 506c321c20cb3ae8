//! Camera

use crate::error::ConfigError;
use crate::geometry::*;
use crate::pbrt::*;
use std::fmt;

/// The eye position. Mutated between frames by a camera controller and
/// copied once at the start of every frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Camera {
    /// World-space position of the eye.
    pub position: Vector3f,
}

impl Camera {
    /// Returns a new camera.
    ///
    /// * `position` - World-space position of the eye.
    pub fn new(position: Vector3f) -> Self {
        Self { position }
    }

    /// Moves the camera.
    ///
    /// * `delta` - Translation to apply.
    pub fn translate(&mut self, delta: &Vector3f) {
        self.position += *delta;
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Camera at {}", self.position)
    }
}

/// The flat image plane in front of the eye.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Width in world units.
    pub width: Float,

    /// Height in world units.
    pub height: Float,

    /// Distance from the eye.
    pub distance: Float,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

/// Largest supported canvas, in pixels (8192x8192).
pub const MAX_CANVAS_PIXELS: usize = 1 << 26;

/// Pinhole projection from canvas pixels to viewport directions.
///
/// Canvas coordinates have their origin at the center of the canvas with y
/// growing upwards. Screen coordinates have their origin at the top left
/// with y growing downwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Canvas width in pixels.
    canvas_width: usize,

    /// Canvas height in pixels.
    canvas_height: usize,

    /// The viewport.
    viewport: Viewport,
}

impl Projection {
    /// Returns a new `Projection`.
    ///
    /// * `canvas_width`  - Canvas width in pixels.
    /// * `canvas_height` - Canvas height in pixels.
    /// * `viewport`      - The viewport.
    pub fn new(
        canvas_width: usize,
        canvas_height: usize,
        viewport: Viewport,
    ) -> Result<Self, ConfigError> {
        let fits = |v: usize| v > 0 && v <= Int::MAX as usize;
        let pixels = canvas_width.checked_mul(canvas_height);
        if !(fits(canvas_width) && fits(canvas_height))
            || pixels.map_or(true, |n| n > MAX_CANVAS_PIXELS)
        {
            return Err(ConfigError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
                max_pixels: MAX_CANVAS_PIXELS,
            });
        }

        let Viewport {
            width,
            height,
            distance,
        } = viewport;
        let positive = |v: Float| v.is_finite() && v > 0.0;
        if !(positive(width) && positive(height) && positive(distance)) {
            return Err(ConfigError::InvalidViewport {
                width,
                height,
                distance,
            });
        }

        Ok(Self {
            canvas_width,
            canvas_height,
            viewport,
        })
    }

    /// Returns the canvas width in pixels.
    pub fn canvas_width(&self) -> usize {
        self.canvas_width
    }

    /// Returns the canvas height in pixels.
    pub fn canvas_height(&self) -> usize {
        self.canvas_height
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Returns the direction through the viewport for a canvas pixel.
    ///
    /// * `px` - Canvas x-coordinate.
    /// * `py` - Canvas y-coordinate.
    pub fn canvas_to_viewport(&self, px: Int, py: Int) -> Vector3f {
        Vector3f::new(
            px as Float * self.viewport.width / self.canvas_width as Float,
            py as Float * self.viewport.height / self.canvas_height as Float,
            self.viewport.distance,
        )
    }

    /// Returns the screen coordinates for a canvas pixel:
    /// `(cw/2 + px, ch/2 - py - 1)`. The result may lie off screen.
    ///
    /// * `px` - Canvas x-coordinate.
    /// * `py` - Canvas y-coordinate.
    pub fn canvas_to_screen(&self, px: Int, py: Int) -> (Int, Int) {
        (self.half_width() + px, self.half_height() - py - 1)
    }

    /// Returns the canvas pixel that lands on a screen pixel. This is the
    /// inverse of `canvas_to_screen()`.
    ///
    /// * `x` - Screen x-coordinate.
    /// * `y` - Screen y-coordinate.
    pub fn screen_to_canvas(&self, x: usize, y: usize) -> (Int, Int) {
        (
            x as Int - self.half_width(),
            self.half_height() - 1 - y as Int,
        )
    }

    /// Returns the primary ray for a screen pixel.
    ///
    /// * `camera` - The camera snapshot for the frame.
    /// * `x`      - Screen x-coordinate.
    /// * `y`      - Screen y-coordinate.
    pub fn generate_ray(&self, camera: &Camera, x: usize, y: usize) -> Ray {
        let (px, py) = self.screen_to_canvas(x, y);
        Ray::unbounded(camera.position, self.canvas_to_viewport(px, py), 1.0)
    }

    fn half_width(&self) -> Int {
        (self.canvas_width / 2) as Int
    }

    fn half_height(&self) -> Int {
        (self.canvas_height / 2) as Int
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn projection(w: usize, h: usize) -> Projection {
        Projection::new(w, h, Viewport::default()).unwrap()
    }

    #[test]
    fn canvas_center_looks_straight_ahead() {
        let p = projection(600, 600);
        assert_eq!(p.canvas_to_viewport(0, 0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(p.canvas_to_viewport(300, -150), Vector3f::new(0.5, -0.25, 1.0));
    }

    #[test]
    fn canvas_to_screen_flips_y() {
        let p = projection(600, 600);
        assert_eq!(p.canvas_to_screen(0, 0), (300, 299));
        assert_eq!(p.canvas_to_screen(-300, 299), (0, 0));
        assert_eq!(p.canvas_to_screen(299, -300), (599, 599));
    }

    #[test]
    fn screen_to_canvas_inverts_for_odd_sizes() {
        for (w, h) in [(5, 3), (4, 7), (1, 1), (600, 600)] {
            let p = projection(w, h);
            for (x, y) in iproduct!(0..w, 0..h) {
                let (px, py) = p.screen_to_canvas(x, y);
                assert_eq!(p.canvas_to_screen(px, py), (x as Int, y as Int));
            }
        }
    }

    #[test]
    fn generate_ray_starts_at_camera() {
        let p = projection(600, 600);
        let camera = Camera::new(Vector3f::new(1.0, 2.0, 3.0));
        let ray = p.generate_ray(&camera, 300, 299);
        assert_eq!(ray.o, camera.position);
        assert_eq!(ray.d, Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ray.t_min, 1.0);
        assert_eq!(ray.t_max, INFINITY);
    }

    #[test]
    fn camera_translate() {
        let mut camera = Camera::default();
        camera.translate(&Vector3f::new(0.0, 0.0, 0.5));
        camera.translate(&Vector3f::new(1.0, 0.0, 0.5));
        assert_eq!(camera.position, Vector3f::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn invalid_canvas_is_rejected() {
        assert_eq!(
            Projection::new(0, 10, Viewport::default()),
            Err(ConfigError::InvalidCanvas {
                width: 0,
                height: 10,
                max_pixels: MAX_CANVAS_PIXELS,
            })
        );
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let max = Int::MAX as usize;
        assert!(matches!(
            Projection::new(max, max, Viewport::default()),
            Err(ConfigError::InvalidCanvas { .. })
        ));
        assert!(Projection::new(usize::MAX, 2, Viewport::default()).is_err());
        assert!(Projection::new(8193, 8192, Viewport::default()).is_err());
        assert!(Projection::new(8192, 8192, Viewport::default()).is_ok());
        assert!(Projection::new(MAX_CANVAS_PIXELS, 1, Viewport::default()).is_ok());
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        let viewport = Viewport {
            width: 1.0,
            height: -1.0,
            distance: 1.0,
        };
        assert!(matches!(
            Projection::new(10, 10, viewport),
            Err(ConfigError::InvalidViewport { .. })
        ));

        let viewport = Viewport {
            distance: 0.0,
            ..Viewport::default()
        };
        assert!(Projection::new(10, 10, viewport).is_err());
    }
}
