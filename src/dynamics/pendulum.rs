//! Torque-driven single pendulum.

use super::{rk4, wrap_angle};

/// Physical constants of the pendulum. State layout is `[theta, thetadot]`
/// with `theta = 0` upright.
#[derive(Debug, Clone, Copy)]
pub struct PendulumDynamics {
    pub gravity: f64,
    pub length: f64,
    pub mass: f64,
}

impl PendulumDynamics {
    /// State derivative `[thetadot, thetaddot]` under torque `u`.
    pub fn derivative(&self, s: &[f64; 2], u: f64) -> [f64; 2] {
        let theta = s[0];
        let thetadot = s[1];

        let thetaddot =
            self.gravity / self.length * theta.sin() + u / (self.mass * self.length.powi(2));
        [thetadot, thetaddot]
    }

    /// One RK4 step of length `dt` under torque `u`, with the angle
    /// renormalized into `(-pi, pi]`.
    pub fn step(&self, s: &[f64; 2], u: f64, dt: f64) -> [f64; 2] {
        let mut next = rk4(|s, u| self.derivative(s, u), s, u, dt);
        next[0] = wrap_angle(next[0]);
        next
    }
}
