//! Energy drift monitoring.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::pendulum::DoublePendulum;

/// Observer that tracks how far mechanical energy has wandered from its value
/// when monitoring began.
///
/// With no friction and no driving torque, any change in mechanical energy is
/// integration error, so drift is a direct quality signal for the chosen `dt`.
/// Drift is relative to the baseline, or absolute when the baseline is zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyMonitor<F: Float> {
    baseline: F,
    current: F,
    max_drift: F,
    steps: usize,
}

impl<F: Float> EnergyMonitor<F> {
    /// Start monitoring from the pendulum's current mechanical energy.
    pub fn new(pendulum: &DoublePendulum<F>) -> Self {
        let baseline = pendulum.mechanical_energy();
        EnergyMonitor {
            baseline,
            current: baseline,
            max_drift: F::zero(),
            steps: 0,
        }
    }

    pub fn baseline(&self) -> F { self.baseline }
    pub fn current(&self) -> F { self.current }
    /// Completed steps observed so far.
    pub fn steps(&self) -> usize { self.steps }

    /// Drift of the latest observed energy.
    pub fn relative_drift(&self) -> F {
        self.drift_of(self.current)
    }

    /// Largest drift seen over all observed steps.
    pub fn max_relative_drift(&self) -> F {
        self.max_drift
    }

    /// `true` while the worst drift stays within `tolerance`. A non-finite
    /// energy never passes.
    pub fn is_within(&self, tolerance: F) -> bool {
        self.current.is_finite() && self.max_drift <= tolerance
    }

    fn drift_of(&self, energy: F) -> F {
        let scale = self.baseline.abs();
        let delta = (energy - self.baseline).abs();
        if scale == F::zero() { delta } else { delta / scale }
    }
}

impl<F: Float> StepObserver<F> for EnergyMonitor<F> {
    fn on_step_complete(&mut self, pendulum: &DoublePendulum<F>) {
        self.current = pendulum.mechanical_energy();
        self.max_drift = self.max_drift.max(self.drift_of(self.current));
        self.steps += 1;
    }
}
