//! Nonlinear pendulum-on-cart equations of motion.

use super::{rk4, wrap_angle};

/// Physical constants of the cart-pole system.
///
/// State layout is `[x, theta, xdot, thetadot]` with `theta = 0` upright and
/// `theta = pi` hanging straight down.
#[derive(Debug, Clone, Copy)]
pub struct CartpoleDynamics {
    pub gravity: f64,
    pub cart_mass: f64,
    pub pole_mass: f64,
    pub pole_length: f64,
}

impl CartpoleDynamics {
    /// State derivative `[xdot, thetadot, xddot, thetaddot]` under force `u`.
    pub fn derivative(&self, s: &[f64; 4], u: f64) -> [f64; 4] {
        let theta = s[1];
        let xdot = s[2];
        let thetadot = s[3];

        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        let g = self.gravity;
        let m = self.pole_mass;
        let l = self.pole_length;
        let ml = m * l;
        let total_mass = self.cart_mass + m;

        let xddot = (4.0 * u / 3.0 + 4.0 * ml * thetadot.powi(2) * sin_theta / 3.0
            - m * g * (2.0 * theta).sin() / 2.0)
            / (4.0 * total_mass - m * cos_theta.powi(2));
        let thetaddot = (total_mass * g * sin_theta
            - ml * thetadot.powi(2) * sin_theta * cos_theta
            - u * cos_theta)
            / (4.0 * total_mass * l / 3.0 - ml * cos_theta.powi(2));

        [xdot, thetadot, xddot, thetaddot]
    }

    /// One RK4 step of length `dt` under force `u`, with the pole angle
    /// renormalized into `(-pi, pi]`.
    pub fn step(&self, s: &[f64; 4], u: f64, dt: f64) -> [f64; 4] {
        let mut next = rk4(|s, u| self.derivative(s, u), s, u, dt);
        next[1] = wrap_angle(next[1]);
        next
    }
}
