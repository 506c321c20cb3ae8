//! Spheres

use crate::error::ConfigError;
use crate::geometry::*;
use crate::pbrt::*;
use crate::spectrum::*;

/// A sphere with its surface properties. Fields are private so a
/// constructed sphere always satisfies its invariants.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Center of sphere.
    center: Vector3f,

    /// Radius of sphere.
    radius: Float,

    /// Base surface color.
    color: Color,

    /// Specular exponent. `None` disables the specular term.
    specular: Option<u32>,

    /// Fraction of the reflected color blended into the surface color.
    reflectivity: Float,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// * `center`       - Center of sphere.
    /// * `radius`       - Radius of sphere; must be > 0.
    /// * `color`        - Base surface color.
    /// * `specular`     - Specular exponent; -1 disables specular highlights,
    ///                    otherwise must be > 0.
    /// * `reflectivity` - Reflectivity in [0, 1].
    pub fn new(
        center: Vector3f,
        radius: Float,
        color: Color,
        specular: i64,
        reflectivity: Float,
    ) -> Result<Self, ConfigError> {
        if !center.is_finite() {
            return Err(ConfigError::NonFiniteVector("sphere center"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(ConfigError::InvalidReflectivity(reflectivity));
        }
        let specular = match specular {
            -1 => None,
            s if s > 0 && s <= u32::MAX as i64 => Some(s as u32),
            s => return Err(ConfigError::InvalidSpecular(s)),
        };

        Ok(Self {
            center,
            radius,
            color,
            specular,
            reflectivity,
        })
    }

    /// Returns the center.
    pub fn center(&self) -> Vector3f {
        self.center
    }

    /// Returns the radius.
    pub fn radius(&self) -> Float {
        self.radius
    }

    /// Returns the base color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the specular exponent if specular highlights are enabled.
    pub fn specular(&self) -> Option<u32> {
        self.specular
    }

    /// Returns the reflectivity.
    pub fn reflectivity(&self) -> Float {
        self.reflectivity
    }

    /// Returns the outward unit normal at a point on the surface.
    ///
    /// * `p` - Point on the surface.
    pub fn normal_at(&self, p: &Vector3f) -> Vector3f {
        ((*p - self.center) / self.radius).normalize()
    }

    /// Returns the ray parameters where the ray's line crosses the sphere.
    /// The ray's interval is not applied here; callers filter the roots.
    ///
    /// * `ray` - The ray. Direction must be non-zero.
    pub fn intersect(&self, ray: &Ray) -> Roots {
        let co = ray.o - self.center;

        let a = ray.d.dot(&ray.d);
        let b = 2.0 * co.dot(&ray.d);
        let c = co.dot(&co) - self.radius * self.radius;

        solve_quadratic(a, b, c)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    fn unit_sphere_at(z: Float) -> Sphere {
        Sphere::new(Vector3f::new(0.0, 0.0, z), 1.0, Color::RED, -1, 0.0).unwrap()
    }

    #[test]
    fn ray_through_center_hits_twice() {
        let sphere = unit_sphere_at(3.0);
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 1.0);
        let roots = sphere.intersect(&ray);
        assert_eq!(roots.as_slice(), &[4.0, 2.0]);
    }

    #[test]
    fn ray_missing_sphere_has_no_roots() {
        let sphere = unit_sphere_at(3.0);
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 1.0, 0.0), 1.0);
        let roots = sphere.intersect(&ray);
        assert!(roots.is_empty());
        assert!(roots.iter().all(|t| !t.is_nan()));
    }

    #[test]
    fn tangent_ray_has_repeated_root() {
        let sphere = unit_sphere_at(3.0);
        let ray = Ray::unbounded(Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0), 0.0);
        assert_eq!(sphere.intersect(&ray).as_slice(), &[3.0, 3.0]);
    }

    #[test]
    fn roots_scale_with_direction_length() {
        let sphere = unit_sphere_at(3.0);
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 2.0), 0.0);
        assert_eq!(sphere.intersect(&ray).as_slice(), &[2.0, 1.0]);
    }

    #[test]
    fn normal_points_outward() {
        let sphere = Sphere::new(Vector3f::new(0.0, -1.0, 3.0), 2.0, Color::RED, -1, 0.0).unwrap();
        let n = sphere.normal_at(&Vector3f::new(0.0, -1.0, 1.0));
        assert_eq!(n, Vector3f::new(0.0, 0.0, -1.0));
        assert!(approx_eq!(Float, n.length(), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn specular_minus_one_disables_highlights() {
        assert_eq!(unit_sphere_at(0.0).specular(), None);
        let shiny = Sphere::new(Vector3f::zero(), 1.0, Color::RED, 500, 0.2).unwrap();
        assert_eq!(shiny.specular(), Some(500));
        assert_eq!(shiny.reflectivity(), 0.2);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        for r in [0.0, -1.0, Float::NAN, Float::INFINITY] {
            assert!(matches!(
                Sphere::new(Vector3f::zero(), r, Color::RED, -1, 0.0),
                Err(ConfigError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn invalid_reflectivity_is_rejected() {
        for r in [-0.1, 1.1, Float::NAN] {
            assert!(matches!(
                Sphere::new(Vector3f::zero(), 1.0, Color::RED, -1, r),
                Err(ConfigError::InvalidReflectivity(_))
            ));
        }
        assert!(Sphere::new(Vector3f::zero(), 1.0, Color::RED, -1, 1.0).is_ok());
    }

    #[test]
    fn invalid_specular_is_rejected() {
        for s in [0, -2, -500] {
            assert_eq!(
                Sphere::new(Vector3f::zero(), 1.0, Color::RED, s, 0.0),
                Err(ConfigError::InvalidSpecular(s))
            );
        }
    }

    #[test]
    fn non_finite_center_is_rejected() {
        assert_eq!(
            Sphere::new(Vector3f::new(Float::NAN, 0.0, 0.0), 1.0, Color::RED, -1, 0.0),
            Err(ConfigError::NonFiniteVector("sphere center"))
        );
    }
}
