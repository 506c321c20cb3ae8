//! Scene

use crate::error::ConfigError;
use crate::geometry::*;
use crate::light::*;
use crate::pbrt::*;
use crate::shape::*;
use crate::spectrum::*;

/// The closest ray-sphere intersection found by a scene query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection<'scene> {
    /// The sphere that was hit.
    pub sphere: &'scene Sphere,

    /// Ray parameter of the hit.
    pub t: Float,
}

/// An immutable collection of spheres and lights. A scene is built once and
/// only read while rendering, so it can be shared across render threads
/// without synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Color returned for rays that hit nothing.
    background: Color,

    /// All light sources in the scene.
    lights: Vec<Light>,

    /// All spheres in the scene.
    spheres: Vec<Sphere>,
}

impl Scene {
    /// Creates a new `Scene` after validating every light.
    ///
    /// * `background` - Color returned for rays that hit nothing.
    /// * `lights`     - All light sources in the scene.
    /// * `spheres`    - All spheres in the scene.
    pub fn new(
        background: Color,
        lights: Vec<Light>,
        spheres: Vec<Sphere>,
    ) -> Result<Self, ConfigError> {
        for light in lights.iter() {
            light.validate()?;
        }

        Ok(Self {
            background,
            lights,
            spheres,
        })
    }

    /// Returns the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the lights in declaration order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Returns the spheres in declaration order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Traces the ray into the scene and returns the closest intersection
    /// strictly inside the ray's interval. Ties keep the sphere declared
    /// first.
    ///
    /// * `ray` - The ray to trace.
    pub fn closest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection<'_>> = None;

        for sphere in self.spheres.iter() {
            for t in sphere.intersect(ray).iter() {
                if ray.contains(t) && closest.map_or(true, |c| t < c.t) {
                    closest = Some(Intersection { sphere, t });
                }
            }
        }

        closest
    }

    /// Traces the ray into the scene and returns whether or not any sphere
    /// is hit inside the ray's interval.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.closest_intersection(ray).is_some()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(z: Float, color: Color) -> Sphere {
        Sphere::new(Vector3f::new(0.0, 0.0, z), 1.0, color, -1, 0.0).unwrap()
    }

    fn two_sphere_scene() -> Scene {
        Scene::new(
            Color::WHITE,
            vec![Light::Ambient { intensity: 1.0 }],
            vec![sphere(10.0, Color::BLUE), sphere(4.0, Color::RED)],
        )
        .unwrap()
    }

    #[test]
    fn closest_sphere_wins_regardless_of_order() {
        let scene = two_sphere_scene();
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 1.0);
        let hit = scene.closest_intersection(&ray).unwrap();
        assert_eq!(hit.sphere.color(), Color::RED);
        assert_eq!(hit.t, 3.0);
    }

    #[test]
    fn hits_outside_interval_are_ignored() {
        let scene = two_sphere_scene();

        // Near sphere spans t in [3, 5]; skip it entirely.
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 5.5);
        let hit = scene.closest_intersection(&ray).unwrap();
        assert_eq!(hit.sphere.color(), Color::BLUE);
        assert_eq!(hit.t, 9.0);

        // Bounded before anything.
        let ray = Ray::new(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 0.001, 2.9);
        assert!(scene.closest_intersection(&ray).is_none());
        assert!(!scene.intersect_p(&ray));
    }

    #[test]
    fn ray_from_inside_hits_far_side() {
        let scene = two_sphere_scene();
        let ray = Ray::unbounded(Vector3f::new(0.0, 0.0, 4.0), Vector3f::new(0.0, 0.0, 1.0), 0.001);
        let hit = scene.closest_intersection(&ray).unwrap();
        assert_eq!(hit.sphere.color(), Color::RED);
        assert_eq!(hit.t, 1.0);
    }

    #[test]
    fn miss_returns_none() {
        let scene = two_sphere_scene();
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 1.0, 0.0), 1.0);
        assert!(scene.closest_intersection(&ray).is_none());
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::new(Color::BLACK, vec![], vec![]).unwrap();
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 1.0);
        assert!(!scene.intersect_p(&ray));
        assert_eq!(scene.background(), Color::BLACK);
    }

    #[test]
    fn invalid_light_is_rejected() {
        let result = Scene::new(
            Color::WHITE,
            vec![
                Light::Ambient { intensity: 0.2 },
                Light::Point {
                    intensity: -1.0,
                    position: Vector3f::zero(),
                },
            ],
            vec![],
        );
        assert_eq!(result, Err(ConfigError::InvalidIntensity(-1.0)));
    }
}
