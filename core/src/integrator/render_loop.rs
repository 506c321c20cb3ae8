//! Render loop

use super::{FrameDriver, Integrator};
use crate::camera::*;
use crate::display::*;
use crate::scene::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Frame counts reported by `run_render_loop()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames presented and committed to the display surface.
    pub frames_presented: usize,

    /// Frames discarded because of a shutdown request.
    pub frames_abandoned: usize,
}

/// Renders frames until the display surface asks to close or a shutdown is
/// requested. Before every frame the camera controller may move the camera;
/// the frame is then rendered from a snapshot of the camera.
///
/// * `driver`     - Renders individual frames.
/// * `integrator` - Computes the color of each primary ray.
/// * `scene`      - The scene.
/// * `camera`     - The camera.
/// * `controller` - Moves the camera between frames.
/// * `surface`    - Receives completed frames.
/// * `shutdown`   - Cancellation flag.
pub fn run_render_loop(
    driver: &FrameDriver,
    integrator: &dyn Integrator,
    scene: &Scene,
    camera: &mut Camera,
    controller: &mut dyn CameraController,
    surface: &mut dyn DisplaySurface,
    shutdown: &AtomicBool,
) -> Result<RenderStats, String> {
    let mut stats = RenderStats::default();

    while !surface.should_close() && !shutdown.load(Ordering::Relaxed) {
        controller.poll_input(camera);
        let snapshot = *camera;

        let frame = stats.frames_presented + stats.frames_abandoned + 1;
        info!("Rendering frame {frame}");

        match driver.render_frame(integrator, scene, &snapshot, shutdown)? {
            Some(film) => {
                driver.present(&film, surface);
                surface.commit_frame()?;
                stats.frames_presented += 1;
                info!("Frame {frame} complete");
            }
            None => stats.frames_abandoned += 1,
        }
    }

    Ok(stats)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
