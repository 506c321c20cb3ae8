//! Common

use crate::geometry::*;
use crate::light::*;
use crate::pbrt::*;
use crate::scene::*;

/// Returns the light intensity arriving at a surface point. The result is
/// additive across lights in scene order and is not clamped.
///
/// Point and directional lights are tested for occlusion first; an occluded
/// light contributes nothing. Terms whose vectors have zero length are
/// skipped.
///
/// * `scene`    - The scene.
/// * `p`        - Surface point.
/// * `n`        - Surface normal at `p`.
/// * `v`        - Vector from `p` towards the viewer.
/// * `specular` - Specular exponent of the surface, if any.
pub fn compute_lighting(
    scene: &Scene,
    p: &Vector3f,
    n: &Vector3f,
    v: &Vector3f,
    specular: Option<u32>,
) -> Float {
    let mut intensity = 0.0;
    let n_len = n.length();
    let v_len = v.length();

    for light in scene.lights() {
        let LightSample { wi, shadow_ray } = match light.sample_li(p) {
            Some(sample) => sample,
            None => {
                intensity += light.intensity();
                continue;
            }
        };

        // A light located at the surface point has no direction.
        let l_len = wi.length();
        if l_len == 0.0 {
            continue;
        }

        if scene.intersect_p(&shadow_ray) {
            continue;
        }

        // Diffuse.
        let n_dot_l = n.dot(&wi);
        if n_len > 0.0 && n_dot_l > 0.0 {
            intensity += light.intensity() * n_dot_l / (n_len * l_len);
        }

        // Specular.
        if let Some(exponent) = specular {
            let r = wi.reflect(n);
            let r_dot_v = r.dot(v);
            let r_len = r.length();
            if r_dot_v > 0.0 && r_len > 0.0 && v_len > 0.0 {
                intensity += light.intensity() * (r_dot_v / (r_len * v_len)).powf(exponent as Float);
            }
        }
    }

    intensity
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
