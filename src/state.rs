//! Angular state of the two-link chain.

use crate::float::Float;
use core::ops::Add;

/// The four scalars that fully determine the pendulum: `(θ1, θ1′, θ2, θ2′)`.
///
/// A plain value type. The integrator evaluates derivatives on copies of it,
/// so intermediate RK4 stages never touch the live model.
///
/// The same layout doubles as a derivative `(θ1′, θ1″, θ2′, θ2″)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AngularState<F: Float> {
    pub theta1: F,
    pub omega1: F,
    pub theta2: F,
    pub omega2: F,
}

impl<F: Float> AngularState<F> {
    pub fn new(theta1: F, omega1: F, theta2: F, omega2: F) -> Self {
        AngularState { theta1, omega1, theta2, omega2 }
    }

    /// Both arms at the given angles with zero angular velocity.
    pub fn at_rest(theta1: F, theta2: F) -> Self {
        AngularState::new(theta1, F::zero(), theta2, F::zero())
    }

    /// Multiply every component by `s`.
    pub fn scale(self, s: F) -> Self {
        AngularState {
            theta1: self.theta1 * s,
            omega1: self.omega1 * s,
            theta2: self.theta2 * s,
            omega2: self.omega2 * s,
        }
    }

    /// `self + rate * h`
    pub fn offset(self, rate: Self, h: F) -> Self {
        self + rate.scale(h)
    }

    pub fn is_finite(&self) -> bool {
        self.theta1.is_finite()
            && self.omega1.is_finite()
            && self.theta2.is_finite()
            && self.omega2.is_finite()
    }
}

impl<F: Float> Add for AngularState<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        AngularState {
            theta1: self.theta1 + rhs.theta1,
            omega1: self.omega1 + rhs.omega1,
            theta2: self.theta2 + rhs.theta2,
            omega2: self.omega2 + rhs.omega2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_adds_scaled_rate() {
        let s = AngularState::new(1.0f64, 2.0, 3.0, 4.0);
        let rate = AngularState::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(s.offset(rate, 0.5), AngularState::new(6.0, 12.0, 18.0, 24.0));
        // the receiver was copied, not mutated
        assert_eq!(s, AngularState::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn at_rest_has_zero_velocity() {
        let s = AngularState::at_rest(0.3f32, -0.2);
        assert_eq!(s.omega1, 0.0);
        assert_eq!(s.omega2, 0.0);
    }

    #[test]
    fn non_finite_component_detected() {
        assert!(AngularState::<f64>::default().is_finite());
        assert!(!AngularState::new(0.0, f64::INFINITY, 0.0, 0.0).is_finite());
        assert!(!AngularState::new(0.0, 0.0, 0.0, f64::NAN).is_finite());
    }
}
