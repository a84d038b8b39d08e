//! Equations of motion and kinematics of the two-link chain.
//!
//! Everything here is a pure function of a [`PendulumConfig`] and an
//! [`AngularState`]. Angles are measured from the downward vertical with the
//! pivot at the origin.

use crate::config::PendulumConfig;
use crate::float::Float;
use crate::state::AngularState;
use crate::vec::Vec2;

/// Cartesian position and velocity of one bob.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BobKinematics<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
}

/// Angular accelerations `(θ1″, θ2″)` from the closed-form Lagrangian
/// equations for two point masses on massless rods.
pub fn angular_accelerations<F: Float>(
    config: &PendulumConfig<F>,
    state: &AngularState<F>,
) -> (F, F) {
    let two = F::two();
    let PendulumConfig { mass1: m1, mass2: m2, length1: l1, length2: l2, gravity: g, .. } =
        *config;
    let AngularState { theta1: th1, omega1: w1, theta2: th2, omega2: w2 } = *state;

    let delta = th1 - th2;
    let shared = two * m1 + m2 - m2 * (two * delta).cos();
    debug_assert!(shared != F::zero(), "singular mass matrix: non-positive mass");

    let num1 = -g * (two * m1 + m2) * th1.sin()
        - g * m2 * (th1 - two * th2).sin()
        - two * m2 * w2 * w2 * l2 * delta.sin()
        - m2 * w1 * w1 * l1 * (two * delta).sin();
    let alpha1 = num1 / (l1 * shared);

    let num2 = two
        * delta.sin()
        * ((m1 + m2) * w1 * w1 * l1
            + g * (m1 + m2) * th1.cos()
            + m2 * w2 * w2 * l2 * delta.cos());
    let alpha2 = num2 / (l2 * shared);

    (alpha1, alpha2)
}

/// Time derivative of the state: `(θ1′, θ1″, θ2′, θ2″)`.
pub fn derivative<F: Float>(config: &PendulumConfig<F>, state: AngularState<F>) -> AngularState<F> {
    let (alpha1, alpha2) = angular_accelerations(config, &state);
    AngularState::new(state.omega1, alpha1, state.omega2, alpha2)
}

/// Project the angular state onto both bobs' Cartesian positions and velocities.
pub fn cartesian<F: Float>(
    config: &PendulumConfig<F>,
    state: &AngularState<F>,
) -> [BobKinematics<F>; 2] {
    let (sin1, cos1) = (state.theta1.sin(), state.theta1.cos());
    let (sin2, cos2) = (state.theta2.sin(), state.theta2.cos());
    let (l1, l2) = (config.length1, config.length2);

    let p1 = Vec2::new(l1 * sin1, -l1 * cos1);
    let p2 = p1 + Vec2::new(l2 * sin2, -l2 * cos2);

    let v1 = Vec2::new(cos1, sin1).scale(state.omega1 * l1);
    let v2 = v1 + Vec2::new(cos2, sin2).scale(state.omega2 * l2);

    [
        BobKinematics { position: p1, velocity: v1 },
        BobKinematics { position: p2, velocity: v2 },
    ]
}
