//! Light

use crate::error::ConfigError;
use crate::geometry::*;
use crate::pbrt::*;

/// A light source. Only point and directional lights carry a spatial
/// vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    /// Constant illumination added to every shaded point.
    Ambient {
        /// Intensity.
        intensity: Float,
    },

    /// Isotropic light emitted from a position in the world.
    Point {
        /// Intensity.
        intensity: Float,

        /// World-space position.
        position: Vector3f,
    },

    /// Light arriving from the same direction at every point in space.
    Directional {
        /// Intensity.
        intensity: Float,

        /// Direction pointing towards the light. Need not be normalized.
        direction: Vector3f,
    },
}

/// A ray from a surface point towards a light used for the shadow test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightSample {
    /// Unnormalized vector from the surface point towards the light.
    pub wi: Vector3f,

    /// Shadow ray bounded so that only occluders between the point and the
    /// light are reported.
    pub shadow_ray: Ray,
}

impl Light {
    /// Returns the light's intensity.
    pub fn intensity(&self) -> Float {
        match *self {
            Self::Ambient { intensity }
            | Self::Point { intensity, .. }
            | Self::Directional { intensity, .. } => intensity,
        }
    }

    /// Returns a short name for the light type.
    pub fn get_type(&self) -> &'static str {
        match self {
            Self::Ambient { .. } => "ambient",
            Self::Point { .. } => "point",
            Self::Directional { .. } => "directional",
        }
    }

    /// Checks the light's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intensity = self.intensity();
        if !(intensity.is_finite() && intensity >= 0.0) {
            return Err(ConfigError::InvalidIntensity(intensity));
        }

        match self {
            Self::Ambient { .. } => Ok(()),
            Self::Point { position, .. } if !position.is_finite() => {
                Err(ConfigError::NonFiniteVector("point light position"))
            }
            Self::Directional { direction, .. } if !direction.is_finite() => {
                Err(ConfigError::NonFiniteVector("directional light direction"))
            }
            Self::Directional { direction, .. } if direction.length_squared() == 0.0 => {
                Err(ConfigError::ZeroDirection)
            }
            _ => Ok(()),
        }
    }

    /// Returns the vector towards the light and the shadow ray for a surface
    /// point, or `None` for ambient lights which cannot be occluded.
    ///
    /// Point lights bound the shadow ray at `t = 1` (the light itself) since
    /// the light vector is not normalized; directional lights are unbounded.
    ///
    /// * `p` - Surface point.
    pub fn sample_li(&self, p: &Vector3f) -> Option<LightSample> {
        match *self {
            Self::Ambient { .. } => None,
            Self::Point { position, .. } => {
                let wi = position - *p;
                Some(LightSample {
                    wi,
                    shadow_ray: Ray::new(*p, wi, SHADOW_EPSILON, 1.0),
                })
            }
            Self::Directional { direction, .. } => Some(LightSample {
                wi: direction,
                shadow_ray: Ray::unbounded(*p, direction, SHADOW_EPSILON),
            }),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_has_no_sample() {
        let light = Light::Ambient { intensity: 0.2 };
        assert_eq!(light.sample_li(&Vector3f::zero()), None);
        assert_eq!(light.intensity(), 0.2);
        assert_eq!(light.get_type(), "ambient");
    }

    #[test]
    fn point_light_shadow_ray_stops_at_light() {
        let light = Light::Point {
            intensity: 0.6,
            position: Vector3f::new(2.0, 1.0, 0.0),
        };
        let p = Vector3f::new(0.0, 0.0, 3.0);
        let sample = light.sample_li(&p).unwrap();
        assert_eq!(sample.wi, Vector3f::new(2.0, 1.0, -3.0));
        assert_eq!(sample.shadow_ray.o, p);
        assert_eq!(sample.shadow_ray.t_min, SHADOW_EPSILON);
        assert_eq!(sample.shadow_ray.t_max, 1.0);
        assert_eq!(sample.shadow_ray.at(1.0), Vector3f::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn directional_light_shadow_ray_is_unbounded() {
        let light = Light::Directional {
            intensity: 0.2,
            direction: Vector3f::new(1.0, 4.0, 4.0),
        };
        let sample = light.sample_li(&Vector3f::zero()).unwrap();
        assert_eq!(sample.wi, Vector3f::new(1.0, 4.0, 4.0));
        assert_eq!(sample.shadow_ray.t_max, INFINITY);
    }

    #[test]
    fn negative_intensity_is_rejected() {
        let light = Light::Ambient { intensity: -0.1 };
        assert_eq!(light.validate(), Err(ConfigError::InvalidIntensity(-0.1)));

        let light = Light::Point {
            intensity: Float::NAN,
            position: Vector3f::zero(),
        };
        assert!(matches!(light.validate(), Err(ConfigError::InvalidIntensity(_))));
    }

    #[test]
    fn zero_intensity_is_allowed() {
        assert!(Light::Ambient { intensity: 0.0 }.validate().is_ok());
    }

    #[test]
    fn zero_direction_is_rejected() {
        let light = Light::Directional {
            intensity: 1.0,
            direction: Vector3f::zero(),
        };
        assert_eq!(light.validate(), Err(ConfigError::ZeroDirection));
    }

    #[test]
    fn non_finite_position_is_rejected() {
        let light = Light::Point {
            intensity: 1.0,
            position: Vector3f::new(0.0, Float::INFINITY, 0.0),
        };
        assert_eq!(
            light.validate(),
            Err(ConfigError::NonFiniteVector("point light position"))
        );
    }
}
