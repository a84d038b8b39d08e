//! The double pendulum: two arms, two bobs, one RK4 step at a time.

use core::fmt;

use crate::angle::limit_angle;
use crate::config::PendulumConfig;
use crate::error::PendulumError;
use crate::float::Float;
use crate::integrator::rk4;
use crate::motion::{self, BobKinematics};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point_mass::PointMass;
use crate::state::AngularState;
use crate::vec::Vec2;

/// Selects one of the two arms. `First` hangs from the pivot, `Second` hangs
/// from the first bob.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arm {
    First,
    Second,
}

impl Arm {
    /// 1-based position in the chain.
    pub fn index(self) -> usize {
        match self {
            Arm::First => 1,
            Arm::Second => 2,
        }
    }
}

impl fmt::Display for Arm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arm::First => write!(f, "first"),
            Arm::Second => write!(f, "second"),
        }
    }
}

/// One rigid, massless rod with a bob at its end.
#[derive(Clone, Debug, PartialEq)]
pub struct PendulumArm<F: Float> {
    length: F,
    angle: F,
    angular_velocity: F,
    angular_acceleration: F,
    bob: PointMass<F>,
}

impl<F: Float> PendulumArm<F> {
    fn new(length: F, bob: PointMass<F>) -> Self {
        PendulumArm {
            length,
            angle: F::zero(),
            angular_velocity: F::zero(),
            angular_acceleration: F::zero(),
            bob,
        }
    }

    pub fn length(&self) -> F { self.length }
    /// Angle from the downward vertical, radians.
    pub fn angle(&self) -> F { self.angle }
    pub fn angular_velocity(&self) -> F { self.angular_velocity }
    /// Angular acceleration at the current state, refreshed after every step.
    pub fn angular_acceleration(&self) -> F { self.angular_acceleration }
    pub fn bob(&self) -> &PointMass<F> { &self.bob }

    fn set_kinematics(&mut self, kinematics: BobKinematics<F>) {
        self.bob.set_position(kinematics.position.x, kinematics.position.y);
        self.bob.set_velocity(kinematics.velocity.x, kinematics.velocity.y);
    }
}

/// Potential and kinetic energy readout.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Energy<F: Float> {
    /// Includes the reference offset.
    pub potential: F,
    pub kinetic: F,
}

impl<F: Float> Energy<F> {
    pub fn total(&self) -> F {
        self.potential + self.kinetic
    }
}

/// A frictionless double pendulum integrated with fixed-step RK4.
///
/// The angular state `(θ1, θ1′, θ2, θ2′)` is authoritative. Bob positions,
/// velocities and angular accelerations are recomputed from it whenever it
/// changes, so the model is ready to draw straight after construction.
///
/// ```
/// use double_pendulum::{Arm, DoublePendulum};
///
/// let mut pendulum = DoublePendulum::<f64>::new(core::f64::consts::FRAC_PI_4, 0.0)?;
/// for _ in 0..400 {
///     pendulum.step(0.0025);
/// }
/// let tip = pendulum.position(Arm::Second);
/// assert!(tip.length() <= 2.0 + 1e-9);
/// # Ok::<(), double_pendulum::PendulumError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DoublePendulum<F: Float> {
    first: PendulumArm<F>,
    second: PendulumArm<F>,
    gravity: F,
    potential_offset: F,
    elapsed: F,
}

impl<F: Float> DoublePendulum<F> {
    /// Reference pendulum (unit arms, masses of 2, g = 9.8) released at rest.
    pub fn new(theta1: F, theta2: F) -> Result<Self, PendulumError> {
        Self::with_config(theta1, theta2, &PendulumConfig::new())
    }

    /// Pendulum with custom parameters, released at rest.
    pub fn with_config(
        theta1: F,
        theta2: F,
        config: &PendulumConfig<F>,
    ) -> Result<Self, PendulumError> {
        Self::from_state(AngularState::at_rest(theta1, theta2), config)
    }

    /// Pendulum starting from an arbitrary angular state.
    pub fn from_state(
        state: AngularState<F>,
        config: &PendulumConfig<F>,
    ) -> Result<Self, PendulumError> {
        config.validate()?;
        if !state.is_finite() {
            return Err(PendulumError::NonFiniteState);
        }

        let arm = |which: Arm| {
            PendulumArm::new(
                config.length(which),
                PointMass::new(config.mass(which), config.moment_factor(which)),
            )
        };
        let mut pendulum = DoublePendulum {
            first: arm(Arm::First),
            second: arm(Arm::Second),
            gravity: config.gravity,
            potential_offset: F::zero(),
            elapsed: F::zero(),
        };
        pendulum.commit(state, &mut NoOpStepObserver);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            theta1 = ?pendulum.first.angle,
            theta2 = ?pendulum.second.angle,
            gravity = ?config.gravity,
            "double pendulum created"
        );

        Ok(pendulum)
    }

    /// Advance by one RK4 step of `dt` seconds.
    ///
    /// `dt` should be small next to the natural period (0.0025 s for the
    /// reference pendulum). Nothing here guards against a step so large the
    /// state blows up; use [`try_step`](Self::try_step) for that.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    /// [`step`](Self::step), reporting progress to `observer`.
    pub fn step_observed<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        let next = self.integrate(dt, observer);
        self.commit(next, observer);
        self.elapsed = self.elapsed + dt;
        observer.on_step_complete(self);
    }

    /// Advance by one step, refusing to commit a non-finite result.
    ///
    /// On [`PendulumError::Diverged`] the model keeps its previous state.
    pub fn try_step(&mut self, dt: F) -> Result<(), PendulumError> {
        if !dt.is_finite() {
            return Err(PendulumError::InvalidTimeStep);
        }
        let next = self.integrate(dt, &mut NoOpStepObserver);
        if !next.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::warn!(dt = ?dt, elapsed = ?self.elapsed, "double pendulum diverged");
            return Err(PendulumError::Diverged);
        }
        self.commit(next, &mut NoOpStepObserver);
        self.elapsed = self.elapsed + dt;
        Ok(())
    }

    /// Overwrite the angular state, e.g. to restore a saved simulation.
    pub fn set_angular_state(&mut self, state: AngularState<F>) -> Result<(), PendulumError> {
        if !state.is_finite() {
            return Err(PendulumError::NonFiniteState);
        }
        self.commit(state, &mut NoOpStepObserver);
        Ok(())
    }

    pub fn angular_state(&self) -> AngularState<F> {
        AngularState::new(
            self.first.angle,
            self.first.angular_velocity,
            self.second.angle,
            self.second.angular_velocity,
        )
    }

    /// Physical parameters this pendulum was built with.
    pub fn config(&self) -> PendulumConfig<F> {
        PendulumConfig {
            mass1: self.first.bob.mass(),
            mass2: self.second.bob.mass(),
            length1: self.first.length,
            length2: self.second.length,
            gravity: self.gravity,
            moment_factor1: self.first.bob.moment_factor(),
            moment_factor2: self.second.bob.moment_factor(),
        }
    }

    pub fn arm(&self, arm: Arm) -> &PendulumArm<F> {
        match arm {
            Arm::First => &self.first,
            Arm::Second => &self.second,
        }
    }

    pub fn first(&self) -> &PendulumArm<F> { &self.first }
    pub fn second(&self) -> &PendulumArm<F> { &self.second }

    /// Bob position relative to the pivot; `y` points up.
    pub fn position(&self, arm: Arm) -> Vec2<F> {
        self.arm(arm).bob.position()
    }

    pub fn velocity(&self, arm: Arm) -> Vec2<F> {
        self.arm(arm).bob.velocity()
    }

    pub fn angle(&self, arm: Arm) -> F {
        self.arm(arm).angle
    }

    pub fn angular_velocity(&self, arm: Arm) -> F {
        self.arm(arm).angular_velocity
    }

    pub fn angular_acceleration(&self, arm: Arm) -> F {
        self.arm(arm).angular_acceleration
    }

    pub fn gravity(&self) -> F { self.gravity }

    /// Simulated time accumulated over committed steps.
    pub fn elapsed(&self) -> F { self.elapsed }

    /// Potential (with reference offset) and kinetic energy.
    ///
    /// Each bob's potential is zero at the lowest point it can reach:
    /// `-L1` for the first bob and `-L1 - L2` for the second.
    pub fn energy(&self) -> Energy<F> {
        Energy {
            potential: self.raw_potential_energy() + self.potential_offset,
            kinetic: self.kinetic_energy(),
        }
    }

    /// Kinetic plus potential energy, ignoring the reference offset.
    ///
    /// Only integration error changes this between steps.
    pub fn mechanical_energy(&self) -> F {
        self.raw_potential_energy() + self.kinetic_energy()
    }

    /// Shift the potential energy readout so the current potential reads `value`.
    /// The dynamics are unaffected.
    pub fn set_potential_energy_reference(&mut self, value: F) {
        self.potential_offset = value - self.raw_potential_energy();
    }

    fn kinetic_energy(&self) -> F {
        self.first.bob.kinetic_energy() + self.second.bob.kinetic_energy()
    }

    fn raw_potential_energy(&self) -> F {
        let (l1, l2) = (self.first.length, self.second.length);
        let y1 = self.first.bob.position().y;
        let y2 = self.second.bob.position().y;
        self.gravity * self.first.bob.mass() * (y1 + l1)
            + self.gravity * self.second.bob.mass() * (y2 + l1 + l2)
    }

    /// Run the four RK4 stages on snapshots; the live model is untouched.
    fn integrate<O: StepObserver<F>>(&self, dt: F, observer: &mut O) -> AngularState<F> {
        let config = self.config();
        let mut stage = 0;
        rk4(self.angular_state(), dt, |snapshot| {
            let rate = motion::derivative(&config, snapshot);
            observer.on_stage(stage);
            stage += 1;
            rate
        })
    }

    /// Write a new angular state, wrap the angles, then refresh everything
    /// derived from it.
    fn commit<O: StepObserver<F>>(&mut self, state: AngularState<F>, observer: &mut O) {
        let theta1 = wrap(Arm::First, state.theta1, observer);
        let theta2 = wrap(Arm::Second, state.theta2, observer);

        self.first.angle = theta1;
        self.first.angular_velocity = state.omega1;
        self.second.angle = theta2;
        self.second.angular_velocity = state.omega2;

        self.refresh();
    }

    fn refresh(&mut self) {
        let config = self.config();
        let state = self.angular_state();

        let (alpha1, alpha2) = motion::angular_accelerations(&config, &state);
        self.first.angular_acceleration = alpha1;
        self.second.angular_acceleration = alpha2;

        let [bob1, bob2] = motion::cartesian(&config, &state);
        self.first.set_kinematics(bob1);
        self.second.set_kinematics(bob2);
    }
}

fn wrap<F: Float, O: StepObserver<F>>(arm: Arm, angle: F, observer: &mut O) -> F {
    let wrapped = limit_angle(angle);
    if wrapped != angle && wrapped.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::trace!(%arm, before = ?angle, after = ?wrapped, "angle wrapped");
        observer.on_angle_wrapped(arm, angle, wrapped);
    }
    wrapped
}
