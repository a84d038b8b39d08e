//! Angle normalization.

use crate::float::Float;

/// Map any finite angle into `(-π, π]` by removing whole turns.
///
/// Idempotent: values already in range come back unchanged. Very large inputs
/// lose precision in a single pass, so wrapping repeats until the value stops
/// moving. NaN and infinities come back as NaN.
pub fn limit_angle<F: Float>(angle: F) -> F {
    let pi = F::pi();
    let mut angle = angle;
    loop {
        let wrapped = wrap_once(angle);
        if wrapped == angle || !wrapped.is_finite() {
            angle = wrapped;
            break;
        }
        angle = wrapped;
    }
    if angle == -pi {
        pi
    } else {
        angle
    }
}

fn wrap_once<F: Float>(angle: F) -> F {
    let pi = F::pi();
    let tau = F::tau();
    if angle > pi {
        let n = ((angle + pi) / tau).floor();
        angle - tau * n
    } else if angle < -pi {
        let n = (-(angle - pi) / tau).floor();
        angle + tau * n
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn in_range_unchanged() {
        for angle in [0.0, 0.5, -0.5, PI - 1e-9, -PI + 1e-9, PI] {
            assert_eq!(limit_angle(angle), angle);
        }
    }

    #[test]
    fn removes_whole_turns() {
        assert!((limit_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-12);
        assert!((limit_angle(-2.0 * PI - 0.25) + 0.25).abs() < 1e-12);
        assert!((limit_angle(-7.5) - (-7.5 + 2.0 * PI)).abs() < 1e-12);
        assert!((limit_angle(101.0) - (101.0 - 32.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn odd_multiples_of_pi_land_on_positive_pi() {
        assert_eq!(limit_angle(3.0 * PI), PI);
        assert_eq!(limit_angle(-3.0 * PI), PI);
        assert_eq!(limit_angle(-PI), PI);
    }

    #[test]
    fn idempotent_over_a_sweep() {
        let mut angle = -1.0e6f64;
        while angle < 1.0e6 {
            let once = limit_angle(angle);
            assert!(once > -PI && once <= PI, "{} wrapped to {}", angle, once);
            assert_eq!(limit_angle(once), once);
            angle += 977.123_456;
        }
        for angle in [1.0e20f64, -3.3e15, 7.0e300, f64::MAX, f64::MIN] {
            let once = limit_angle(angle);
            assert!(once > -PI && once <= PI);
            assert_eq!(limit_angle(once), once);
        }
    }

    #[test]
    fn works_in_f32() {
        let wrapped = limit_angle(10.0f32);
        assert!((wrapped - (10.0 - 4.0 * core::f32::consts::PI)).abs() < 1e-5);
        assert_eq!(limit_angle(wrapped), wrapped);
    }

    #[test]
    fn non_finite_becomes_nan() {
        assert!(limit_angle(f64::NAN).is_nan());
        assert!(limit_angle(f64::INFINITY).is_nan());
    }
}
