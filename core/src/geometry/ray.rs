//! Rays

use super::Vector3f;
use crate::pbrt::{Float, INFINITY};
use std::fmt;

/// A ray restricted to the open parametric interval `(t_min, t_max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Origin.
    pub o: Vector3f,

    /// Direction. Not necessarily normalized.
    pub d: Vector3f,

    /// Exclusive lower bound of the interval.
    pub t_min: Float,

    /// Exclusive upper bound of the interval.
    pub t_max: Float,
}

impl Ray {
    /// Returns a new ray.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_min` - Exclusive lower bound of the interval.
    /// * `t_max` - Exclusive upper bound of the interval.
    pub fn new(o: Vector3f, d: Vector3f, t_min: Float, t_max: Float) -> Self {
        Self { o, d, t_min, t_max }
    }

    /// Returns a ray covering `(t_min, ∞)`.
    ///
    /// * `o`     - Origin.
    /// * `d`     - Direction.
    /// * `t_min` - Exclusive lower bound of the interval.
    pub fn unbounded(o: Vector3f, d: Vector3f, t_min: Float) -> Self {
        Self::new(o, d, t_min, INFINITY)
    }


    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Vector3f {
        self.o + self.d * t
    }

    /// Returns true if `t` lies strictly inside the ray's interval.
    ///
    /// * `t` - Parameter to test.
    pub fn contains(&self, t: Float) -> bool {
        self.t_min < t && t < self.t_max
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[o={}, d={}, t=({}, {})]", self.o, self.d, self.t_min, self.t_max)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_moves_along_direction() {
        let ray = Ray::unbounded(Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 2.0, 0.0), 0.0);
        assert_eq!(ray.at(1.5), Vector3f::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn interval_is_open() {
        let ray = Ray::new(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 1.0, 2.0);
        assert!(!ray.contains(1.0));
        assert!(ray.contains(1.5));
        assert!(!ray.contains(2.0));
        assert!(!ray.contains(INFINITY));
    }

    #[test]
    fn unbounded_excludes_infinity() {
        let ray = Ray::unbounded(Vector3f::zero(), Vector3f::new(0.0, 0.0, 1.0), 1.0);
        assert!(ray.contains(1e300));
        assert!(!ray.contains(INFINITY));
    }
}
