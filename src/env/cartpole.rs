//! Cart-pole swing-up task on continuous dynamics.

use std::f64::consts::PI;

use super::Environment;
use crate::config::Config;
use crate::discretize::{Dimension, StateSpace};
use crate::dynamics::CartpoleDynamics;
use crate::error::{Result, TabulaError};

const INIT_STATE: [f64; 4] = [0.0, PI, 0.0, 0.0]; // pole hanging down
const DEAD_REWARD: f64 = -2.0;
const DISPLACEMENT_PENALTY: f64 = 0.001;

/// Pole-on-cart environment. State is `(x, theta, xdot, thetadot)`,
/// discretized per-dimension into a composite table index. The episode never
/// terminates on its own; it runs until the step budget is exhausted.
pub struct Cartpole {
    actions: [f64; 2],
    dynamics: CartpoleDynamics,
    space: StateSpace,
    x_threshold: f64,
    dt: f64,
    state: [f64; 4],
}

impl Cartpole {
    pub fn from_config(config: &Config) -> Result<Self> {
        let actions = [
            config.get_f64("ENV_ACTION_LEFT")?,
            config.get_f64("ENV_ACTION_RIGHT")?,
        ];

        let dynamics = CartpoleDynamics {
            gravity: config.get_f64("ENV_G")?,
            cart_mass: config.get_f64("ENV_CART_MASS")?,
            pole_mass: config.get_f64("ENV_POLE_MASS")?,
            pole_length: config.get_f64("ENV_POLE_LENGTH")?,
        };

        let x_upper = config.get_f64("ENV_X_RIGHT")?;
        let space = StateSpace::new(vec![
            Dimension::new(
                config.get_f64("ENV_X_LEFT")?,
                x_upper,
                super::bin_count(config, "ENV_X_SPACE")?,
            ),
            Dimension::new(
                config.get_f64("ENV_THETA_LEFT")?,
                config.get_f64("ENV_THETA_RIGHT")?,
                super::bin_count(config, "ENV_THETA_SPACE")?,
            ),
            Dimension::new(
                config.get_f64("ENV_XDOT_LEFT")?,
                config.get_f64("ENV_XDOT_RIGHT")?,
                super::bin_count(config, "ENV_XDOT_SPACE")?,
            ),
            Dimension::new(
                config.get_f64("ENV_THETADOT_LEFT")?,
                config.get_f64("ENV_THETADOT_RIGHT")?,
                super::bin_count(config, "ENV_THETADOT_SPACE")?,
            ),
        ]);

        let fps = config.get_f64("ENV_FPS")?;

        Ok(Cartpole {
            actions,
            dynamics,
            space,
            x_threshold: x_upper,
            dt: 1.0 / fps,
            state: INIT_STATE,
        })
    }
}

impl Environment for Cartpole {
    fn state_count(&self) -> usize {
        self.space.len()
    }

    fn action_count(&self) -> usize {
        self.actions.len()
    }

    fn state_index(&self) -> usize {
        self.space.index_of(&self.state)
    }

    fn reward(&self) -> f64 {
        let x = self.state[0];
        if x.abs() > self.x_threshold {
            return DEAD_REWARD;
        }
        let theta = self.state[1];
        -theta.abs() + PI / 2.0 - DISPLACEMENT_PENALTY * x.abs()
    }

    fn info(&self) -> String {
        self.state
            .iter()
            .map(|v| format!("{:.15}", v))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn reset(&mut self) {
        self.state = INIT_STATE;
    }

    fn step(&mut self, action: usize) -> Result<()> {
        let u = *self
            .actions
            .get(action)
            .ok_or(TabulaError::InvalidAction {
                action,
                action_count: self.actions.len(),
            })?;
        self.state = self.dynamics.step(&self.state, u, self.dt);
        Ok(())
    }

    fn is_done(&self) -> bool {
        false
    }

    fn is_success(&self) -> bool {
        false
    }
}
