//! Point mass state holder for a pendulum bob.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass in the pendulum plane.
///
/// Position and velocity are a cached projection of the owning arm's angular
/// state; the pendulum rewrites them after every change to that state.
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    position: Vec2<F>,
    velocity: Vec2<F>,
    mass: F,
    moment_factor: F,
}

impl<F: Float> PointMass<F> {
    pub fn new(mass: F, moment_factor: F) -> Self {
        PointMass {
            position: Vec2::zero(),
            velocity: Vec2::zero(),
            mass,
            moment_factor,
        }
    }

    pub fn set_position(&mut self, x: F, y: F) {
        self.position = Vec2::new(x, y);
    }

    pub fn set_velocity(&mut self, vx: F, vy: F) {
        self.velocity = Vec2::new(vx, vy);
    }

    pub fn position(&self) -> Vec2<F> { self.position }
    pub fn velocity(&self) -> Vec2<F> { self.velocity }
    pub fn mass(&self) -> F { self.mass }
    pub fn moment_factor(&self) -> F { self.moment_factor }

    /// Moment of inertia about the body's own center: `mass * moment_factor`.
    pub fn moment_about_center(&self) -> F {
        self.mass * self.moment_factor
    }

    /// Distance of the point from the coordinate origin.
    pub fn distance_from_origin(&self) -> F {
        self.position.length()
    }

    /// Magnitude of the velocity.
    pub fn speed(&self) -> F {
        self.velocity.length()
    }

    /// `½·m·|v|²`
    pub fn translational_energy(&self) -> F {
        F::half() * self.mass * self.velocity.length_sq()
    }

    /// `½·I·ω²` with `ω = speed / distance_from_origin`.
    ///
    /// Zero whenever the moment factor is zero, which is always the case for
    /// pendulum bobs. With a positive moment factor the point must not sit on
    /// the origin.
    pub fn rotational_energy(&self) -> F {
        let moment = self.moment_about_center();
        if moment == F::zero() {
            return F::zero();
        }
        let dist_sq = self.position.length_sq();
        debug_assert!(dist_sq > F::zero(), "rotational energy queried at the origin");
        // ω² directly; the sign of ω drops out.
        let omega_sq = self.velocity.length_sq() / dist_sq;
        F::half() * moment * omega_sq
    }

    /// Translational plus rotational energy.
    pub fn kinetic_energy(&self) -> F {
        self.translational_energy() + self.rotational_energy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translational_energy_matches_half_m_v_squared() {
        let mut bob = PointMass::new(2.0f64, 0.0);
        bob.set_velocity(3.0, 4.0);
        assert!((bob.translational_energy() - 25.0).abs() < 1e-12);
        assert!((bob.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn point_bob_has_no_rotational_energy_even_at_origin() {
        let mut bob = PointMass::new(2.0f64, 0.0);
        bob.set_velocity(1.0, 0.0);
        assert_eq!(bob.rotational_energy(), 0.0);
        assert_eq!(bob.kinetic_energy(), bob.translational_energy());
    }

    #[test]
    fn rotational_energy_uses_angular_speed_about_origin() {
        // I = 2 * 0.5 = 1, ω = 2 / 1 = 2, E = ½·1·4 = 2
        let mut body = PointMass::new(2.0f64, 0.5);
        body.set_position(0.0, -1.0);
        body.set_velocity(2.0, 0.0);
        assert!((body.moment_about_center() - 1.0).abs() < 1e-12);
        assert!((body.rotational_energy() - 2.0).abs() < 1e-12);
        assert!((body.kinetic_energy() - (4.0 + 2.0)).abs() < 1e-12);
    }

    #[test]
    fn setters_overwrite_unconditionally() {
        let mut bob = PointMass::new(1.0f32, 0.0);
        bob.set_position(1.0, 2.0);
        bob.set_position(-3.0, 0.5);
        bob.set_velocity(7.0, 7.0);
        assert_eq!(bob.position(), Vec2::new(-3.0, 0.5));
        assert_eq!(bob.velocity(), Vec2::new(7.0, 7.0));
        assert!((bob.distance_from_origin() - libm::sqrtf(9.25)).abs() < 1e-6);
    }
}
