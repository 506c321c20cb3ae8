//! Whitted Integrator

use whitted_core::error::*;
use whitted_core::geometry::*;
use whitted_core::integrator::*;
use whitted_core::pbrt::*;
use whitted_core::scene::*;
use whitted_core::spectrum::*;

/// Largest supported recursion depth.
pub const MAX_DEPTH_LIMIT: u32 = 16;

/// Default recursion depth.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Validates a configured recursion depth.
///
/// * `depth` - The configured depth.
pub fn validate_max_depth(depth: i64) -> Result<u32, ConfigError> {
    match u32::try_from(depth) {
        Ok(d) if d <= MAX_DEPTH_LIMIT => Ok(d),
        _ => Err(ConfigError::InvalidDepth {
            depth,
            limit: MAX_DEPTH_LIMIT,
        }),
    }
}

/// Implements Whitted's ray tracing algorithm: local shading with hard
/// shadows plus recursive mirror reflection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WhittedIntegrator {
    /// Maximum recursion depth.
    max_depth: u32,
}

impl WhittedIntegrator {
    /// Create a new `WhittedIntegrator`.
    ///
    /// * `max_depth` - Maximum recursion depth.
    pub fn new(max_depth: u32) -> Result<Self, ConfigError> {
        let max_depth = validate_max_depth(max_depth as i64)?;
        Ok(Self { max_depth })
    }

    /// Trace rays for specular reflection.
    ///
    /// * `p`     - The surface point.
    /// * `n`     - The surface normal.
    /// * `v`     - Vector from the surface point towards the viewer.
    /// * `scene` - The scene.
    /// * `depth` - Remaining recursion depth budget.
    fn specular_reflect(
        &self,
        p: &Vector3f,
        n: &Vector3f,
        v: &Vector3f,
        scene: &Scene,
        depth: u32,
    ) -> Color {
        let ray = Ray::unbounded(*p, v.reflect(n), SHADOW_EPSILON);
        self.li(&ray, scene, depth)
    }
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Integrator for WhittedIntegrator {
    /// Returns the maximum recursion depth.
    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Returns the color seen along a given ray.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    /// * `depth` - Remaining recursion depth budget.
    fn li(&self, ray: &Ray, scene: &Scene, depth: u32) -> Color {
        // Find closest ray intersection or return background.
        let Intersection { sphere, t } = match scene.closest_intersection(ray) {
            Some(hit) => hit,
            None => return scene.background(),
        };

        let p = ray.at(t);
        if p.has_nans() {
            error!("Not-a-number hit point for ray {ray} at t = {t}. Using background.");
            return scene.background();
        }

        // Compute local color.
        let n = sphere.normal_at(&p);
        let v = -ray.d;
        let intensity = compute_lighting(scene, &p, &n, &v, sphere.specular());
        let local = sphere.color().scale(intensity);

        let r = sphere.reflectivity();
        if depth == 0 || r <= 0.0 {
            return local;
        }

        // Blend with the mirror reflection.
        let reflected = self.specular_reflect(&p, &n, &v, scene, depth - 1);
        local.blend(&reflected, r)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
