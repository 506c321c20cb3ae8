//! Quadratic equations

use super::Float;

/// The real roots of a quadratic equation. Holds either no roots or exactly
/// two (equal when the discriminant is zero) in the order `(-b + √Δ) / 2a`,
/// `(-b - √Δ) / 2a`. No ordering between them is implied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Roots {
    /// Root storage; only the first `len` entries are meaningful.
    values: [Float; 2],

    /// Number of real roots.
    len: usize,
}

impl Roots {
    /// Returns an empty set of roots.
    pub fn none() -> Self {
        Self {
            values: [0.0; 2],
            len: 0,
        }
    }

    /// Returns a pair of roots.
    ///
    /// * `t1` - First root.
    /// * `t2` - Second root.
    pub fn pair(t1: Float, t2: Float) -> Self {
        Self {
            values: [t1, t2],
            len: 2,
        }
    }

    /// Returns the number of real roots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no real roots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the roots as a slice.
    pub fn as_slice(&self) -> &[Float] {
        &self.values[..self.len]
    }

    /// Returns an iterator over the roots.
    pub fn iter(&self) -> impl Iterator<Item = Float> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Solves `a*t^2 + b*t + c = 0` for real `t`.
///
/// `a` must be non-zero.
///
/// * `a` - Quadratic coefficient.
/// * `b` - Linear coefficient.
/// * `c` - Constant.
pub fn solve_quadratic(a: Float, b: Float, c: Float) -> Roots {
    debug_assert!(a != 0.0);

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || discriminant.is_nan() {
        return Roots::none();
    }

    let root_discriminant = discriminant.sqrt();
    Roots::pair(
        (-b + root_discriminant) / (2.0 * a),
        (-b - root_discriminant) / (2.0 * a),
    )
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn negative_discriminant_has_no_roots() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
        assert_eq!(roots.iter().count(), 0);
    }

    #[test]
    fn zero_discriminant_has_repeated_root() {
        let roots = solve_quadratic(1.0, -2.0, 1.0);
        assert_eq!(roots.as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn roots_are_in_plus_minus_order() {
        // (t - 2)(t - 5) = t^2 - 7t + 10
        let roots = solve_quadratic(1.0, -7.0, 10.0);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots.as_slice(), &[5.0, 2.0]);
    }

    proptest! {
        #[test]
        fn roots_satisfy_equation(
            r1 in -50.0..50.0f64,
            r2 in -50.0..50.0f64,
            a in 0.5..4.0f64,
        ) {
            let b = -a * (r1 + r2);
            let c = a * r1 * r2;
            let roots = solve_quadratic(a, b, c);
            prop_assert_eq!(roots.len(), 2);
            for t in roots.iter() {
                prop_assert!(approx_eq!(Float, a * t * t + b * t + c, 0.0, epsilon = 1e-6));
            }
        }
    }
}
