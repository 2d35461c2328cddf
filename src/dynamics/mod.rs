//! Fixed-step integration of the continuous-state dynamics.

pub mod cartpole;
pub mod pendulum;

pub use cartpole::CartpoleDynamics;
pub use pendulum::PendulumDynamics;

use std::f64::consts::PI;

/// Advance `state` by one step `dt` under control input `u` with the
/// classical fourth-order Runge-Kutta scheme.
///
/// `f` maps `(state, u)` to the state derivative and must be pure; the four
/// stages each evaluate it on a fully materialized intermediate state.
pub fn rk4<const N: usize>(
    f: impl Fn(&[f64; N], f64) -> [f64; N],
    state: &[f64; N],
    u: f64,
    dt: f64,
) -> [f64; N] {
    let k1 = f(state, u);
    let s1 = euler(state, &k1, dt / 2.0);
    let k2 = f(&s1, u);
    let s2 = euler(state, &k2, dt / 2.0);
    let k3 = f(&s2, u);
    let s3 = euler(state, &k3, dt);
    let k4 = f(&s3, u);

    let mut next = *state;
    for i in 0..N {
        next[i] += (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) * dt / 6.0;
    }
    next
}

/// One explicit Euler step `state + derivative * dt`.
fn euler<const N: usize>(state: &[f64; N], derivative: &[f64; N], dt: f64) -> [f64; N] {
    let mut next = *state;
    for i in 0..N {
        next[i] += derivative[i] * dt;
    }
    next
}

/// Normalize an angle into `(-pi, pi]`.
pub fn wrap_angle(theta: f64) -> f64 {
    // rem_euclid keeps the intermediate in [0, 2*pi) for negative inputs.
    let wrapped = (theta + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rk4_exponential_decay() {
        // s' = -s has the closed form s0 * exp(-t).
        let mut s = [1.0];
        let dt = 0.01;
        for _ in 0..100 {
            s = rk4(|s, _| [-s[0]], &s, 0.0, dt);
        }
        assert!((s[0] - (-1.0f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn test_rk4_constant_control_integrates_linearly() {
        // s' = u: after t seconds the state is u * t regardless of step count.
        let mut s = [0.0];
        for _ in 0..50 {
            s = rk4(|_, u| [u], &s, 3.0, 0.1);
        }
        assert!((s[0] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_angle_range() {
        for &theta in &[-10.0, -PI, -0.1, 0.0, 0.1, PI, 10.0, 100.0, -100.0] {
            let wrapped = wrap_angle(theta);
            assert!(
                -PI < wrapped && wrapped <= PI,
                "wrap_angle({}) = {} out of range",
                theta,
                wrapped
            );
        }
    }

    #[test]
    fn test_wrap_angle_fixed_points() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(PI), PI);
        assert_eq!(wrap_angle(-PI), PI);
        assert!((wrap_angle(2.0 * PI)).abs() < 1e-12);
    }
}
