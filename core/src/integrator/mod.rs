//! Integrator

mod common;
mod frame_driver;
mod render_loop;

use crate::geometry::*;
use crate::scene::Scene;
use crate::spectrum::*;

// Re-export.
pub use common::*;
pub use frame_driver::*;
pub use render_loop::*;

/// Integrator interface. Integrators are shared by every render thread so
/// they must not hold per-frame mutable state.
pub trait Integrator: Send + Sync {
    /// Returns the recursion depth budget used for primary rays.
    fn max_depth(&self) -> u32;

    /// Returns the color seen along a given ray.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    /// * `depth` - Remaining recursion depth budget.
    fn li(&self, ray: &Ray, scene: &Scene, depth: u32) -> Color;
}
