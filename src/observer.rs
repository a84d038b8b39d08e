//! Step observer trait for monitoring pendulum integration.

use crate::float::Float;
use crate::pendulum::{Arm, DoublePendulum};

/// Trait for observing pendulum steps.
///
/// Implement this trait to watch the integrator (e.g., for debugging,
/// energy diagnostics, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver<F: Float> {
    /// Called after each RK4 derivative evaluation, `stage` in `0..4`.
    fn on_stage(&mut self, _stage: usize) {}

    /// Called when an arm's angle was wrapped back into `(-π, π]`.
    fn on_angle_wrapped(&mut self, _arm: Arm, _before: F, _after: F) {}

    /// Called once the new state is committed and all derived values are fresh.
    fn on_step_complete(&mut self, _pendulum: &DoublePendulum<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
