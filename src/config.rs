//! Physical parameters of the double pendulum.

use crate::error::PendulumError;
use crate::float::Float;
use crate::pendulum::Arm;

/// Masses, arm lengths, gravity and moment factors of a double pendulum.
///
/// # Builder Pattern
/// ```
/// use double_pendulum::config::PendulumConfig;
///
/// let config: PendulumConfig<f64> = PendulumConfig::new()
///     .with_masses(1.0, 0.5)
///     .with_lengths(1.2, 0.8)
///     .with_gravity(9.81);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendulumConfig<F: Float> {
    /// Mass of the first (upper) bob. Default: 2.
    pub mass1: F,
    /// Mass of the second (lower) bob. Default: 2.
    pub mass2: F,
    /// Length of the first arm, pivot to first bob. Default: 1.
    pub length1: F,
    /// Length of the second arm, first bob to second bob. Default: 1.
    pub length2: F,
    /// Gravitational acceleration, pointing down. Default: 9.8.
    pub gravity: F,
    /// Moment-of-inertia factor of the first bob. Default: 0 (point mass).
    pub moment_factor1: F,
    /// Moment-of-inertia factor of the second bob. Default: 0 (point mass).
    pub moment_factor2: F,
}

impl<F: Float> PendulumConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        PendulumConfig {
            mass1: F::two(),
            mass2: F::two(),
            length1: F::one(),
            length2: F::one(),
            gravity: F::from_f64(9.8),
            moment_factor1: F::zero(),
            moment_factor2: F::zero(),
        }
    }

    /// Set both bob masses.
    pub fn with_masses(mut self, mass1: F, mass2: F) -> Self {
        self.mass1 = mass1;
        self.mass2 = mass2;
        self
    }

    /// Set both arm lengths.
    pub fn with_lengths(mut self, length1: F, length2: F) -> Self {
        self.length1 = length1;
        self.length2 = length2;
        self
    }

    /// Set the gravitational acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set both moment factors. These only feed the energy readout.
    pub fn with_moment_factors(mut self, moment_factor1: F, moment_factor2: F) -> Self {
        self.moment_factor1 = moment_factor1;
        self.moment_factor2 = moment_factor2;
        self
    }

    pub fn mass(&self, arm: Arm) -> F {
        match arm {
            Arm::First => self.mass1,
            Arm::Second => self.mass2,
        }
    }

    pub fn length(&self, arm: Arm) -> F {
        match arm {
            Arm::First => self.length1,
            Arm::Second => self.length2,
        }
    }

    pub fn moment_factor(&self, arm: Arm) -> F {
        match arm {
            Arm::First => self.moment_factor1,
            Arm::Second => self.moment_factor2,
        }
    }

    /// Check that the parameters describe a physical pendulum.
    ///
    /// Positive masses keep the equation-of-motion denominators away from zero.
    pub fn validate(&self) -> Result<(), PendulumError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        for arm in [Arm::First, Arm::Second] {
            if !positive(self.mass(arm)) {
                return Err(PendulumError::InvalidMass { arm });
            }
            if !positive(self.length(arm)) {
                return Err(PendulumError::InvalidLength { arm });
            }
            let moment = self.moment_factor(arm);
            if !(moment.is_finite() && moment >= F::zero()) {
                return Err(PendulumError::InvalidMomentFactor { arm });
            }
        }
        if !positive(self.gravity) {
            return Err(PendulumError::InvalidGravity);
        }
        Ok(())
    }
}

impl<F: Float> Default for PendulumConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
