//! Error types for pendulum construction and stepping.

use crate::pendulum::Arm;
use thiserror::Error;

/// Errors that can occur when building or advancing a pendulum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PendulumError {
    /// Bob mass must be positive and finite.
    #[error("mass of the {arm} bob must be positive and finite")]
    InvalidMass { arm: Arm },
    /// Arm length must be positive and finite.
    #[error("length of the {arm} arm must be positive and finite")]
    InvalidLength { arm: Arm },
    /// Gravitational acceleration must be positive and finite.
    #[error("gravity must be positive and finite")]
    InvalidGravity,
    /// Moment factor must be non-negative and finite.
    #[error("moment factor of the {arm} bob must be non-negative and finite")]
    InvalidMomentFactor { arm: Arm },
    /// An angle or angular velocity is NaN or infinite.
    #[error("angular state must be finite")]
    NonFiniteState,
    /// Time step is NaN or infinite.
    #[error("time step must be finite")]
    InvalidTimeStep,
    /// The integrator produced a non-finite state; the step was not applied.
    #[error("simulation diverged: step produced a non-finite state")]
    Diverged,
}
