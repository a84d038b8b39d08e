//! Planar vector type for bob positions and velocities.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector in the pendulum plane. `x` points right, `y` points up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(1.0f32, 1.0);
        let b = Vec2::new(4.0f32, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0f64, -2.0);
        let b = Vec2::new(0.5f64, 4.0);
        assert_eq!(a + b, Vec2::new(1.5, 2.0));
        assert_eq!(a - b, Vec2::new(0.5, -6.0));
        assert_eq!(-a, Vec2::new(-1.0, 2.0));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, -4.0));
    }

    #[test]
    fn finiteness() {
        assert!(Vec2::new(0.0f64, 1.0).is_finite());
        assert!(!Vec2::new(f64::NAN, 1.0).is_finite());
    }
}
