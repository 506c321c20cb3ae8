//! Display surfaces and camera controllers

use crate::camera::*;
use crate::geometry::*;
use crate::spectrum::*;

mod image_surface;
mod memory;

// Re-export.
pub use image_surface::*;
pub use memory::*;

/// Receives the pixels of completed frames.
pub trait DisplaySurface {
    /// Stores the color of a pixel in the back buffer.
    ///
    /// * `x`     - Screen x-coordinate.
    /// * `y`     - Screen y-coordinate.
    /// * `color` - The color.
    fn present_pixel(&mut self, x: usize, y: usize, color: Color);

    /// Makes the back buffer visible. Called once per presented frame after
    /// every pixel has been presented.
    fn commit_frame(&mut self) -> Result<(), String>;

    /// Returns true when the render loop should stop.
    fn should_close(&self) -> bool;
}

/// Moves the camera between frames.
pub trait CameraController {
    /// Updates the camera before a frame is rendered.
    ///
    /// * `camera` - The camera to update.
    fn poll_input(&mut self, camera: &mut Camera);
}

/// A controller that never moves the camera.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticController;

impl CameraController for StaticController {
    fn poll_input(&mut self, _camera: &mut Camera) {}
}

/// A controller that translates the camera by a fixed step every frame
/// after the first one.
#[derive(Copy, Clone, Debug)]
pub struct ScriptedController {
    /// Translation applied per frame.
    step: Vector3f,

    /// Number of times `poll_input()` was called.
    polls: usize,
}

impl ScriptedController {
    /// Returns a new `ScriptedController`.
    ///
    /// * `step` - Translation applied per frame.
    pub fn new(step: Vector3f) -> Self {
        Self { step, polls: 0 }
    }
}

impl CameraController for ScriptedController {
    fn poll_input(&mut self, camera: &mut Camera) {
        if self.polls > 0 {
            camera.translate(&self.step);
        }
        self.polls += 1;
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
