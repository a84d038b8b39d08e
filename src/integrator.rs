//! Fixed-step fourth-order Runge-Kutta.

use crate::float::Float;
use crate::state::AngularState;

/// Advance `state` by one RK4 step of size `dt`.
///
/// `derivative` is called exactly four times, each time on its own snapshot:
/// `s0`, `s0 + k1·dt/2`, `s0 + k2·dt/2` and `s0 + k3·dt`. Returns
/// `s0 + (k1 + 2·k2 + 2·k3 + k4)·dt/6`; the caller decides when to commit it.
pub fn rk4<F, D>(state: AngularState<F>, dt: F, mut derivative: D) -> AngularState<F>
where
    F: Float,
    D: FnMut(AngularState<F>) -> AngularState<F>,
{
    let half_dt = dt * F::half();

    let k1 = derivative(state);
    let k2 = derivative(state.offset(k1, half_dt));
    let k3 = derivative(state.offset(k2, half_dt));
    let k4 = derivative(state.offset(k3, dt));

    let slope = k1 + k2.scale(F::two()) + k3.scale(F::two()) + k4;
    state.offset(slope, dt / F::from_f64(6.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Harmonic oscillator θ″ = -θ on both slots.
    fn oscillator(s: AngularState<f64>) -> AngularState<f64> {
        AngularState::new(s.omega1, -s.theta1, s.omega2, -s.theta2)
    }

    #[test]
    fn evaluates_derivative_four_times_on_snapshots() {
        let start = AngularState::new(1.0, 0.0, 0.5, 0.0);
        let mut seen = [AngularState::default(); 4];
        let mut calls = 0;
        rk4(start, 0.1, |s| {
            seen[calls] = s;
            calls += 1;
            oscillator(s)
        });
        assert_eq!(calls, 4);
        assert_eq!(seen[0], start);
        // k1 = (0, -1, 0, -0.5), so the second stage sits half a step along it
        assert!((seen[1].omega1 - (-0.05)).abs() < 1e-15);
        assert!((seen[1].theta1 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn fourth_order_accuracy_on_oscillator() {
        let mut state = AngularState::new(1.0, 0.0, 0.0, 1.0);
        let dt = 0.01;
        for _ in 0..628 {
            state = rk4(state, dt, oscillator);
        }
        let t = 6.28f64;
        assert!((state.theta1 - t.cos()).abs() < 1e-8);
        assert!((state.omega1 + t.sin()).abs() < 1e-8);
        assert!((state.theta2 - t.sin()).abs() < 1e-8);
        assert!((state.omega2 - t.cos()).abs() < 1e-8);
    }

    #[test]
    fn zero_step_is_identity() {
        let start = AngularState::new(0.3, -1.0, 2.0, 0.25);
        assert_eq!(rk4(start, 0.0, oscillator), start);
    }
}
