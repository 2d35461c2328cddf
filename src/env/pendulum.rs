//! Pendulum swing-up task on continuous dynamics.

use std::f64::consts::PI;

use super::Environment;
use crate::config::Config;
use crate::discretize::{Dimension, StateSpace};
use crate::dynamics::PendulumDynamics;
use crate::error::{Result, TabulaError};

const INIT_STATE: [f64; 2] = [PI, 0.0]; // hanging down

/// Torque-driven pendulum. State is `(theta, thetadot)`; like
/// [`Cartpole`](super::Cartpole) the episode only ends when the step budget
/// runs out.
pub struct Pendulum {
    actions: [f64; 2],
    dynamics: PendulumDynamics,
    space: StateSpace,
    dt: f64,
    state: [f64; 2],
}

impl Pendulum {
    pub fn from_config(config: &Config) -> Result<Self> {
        let actions = [
            config.get_f64("ENV_ACTION_LEFT")?,
            config.get_f64("ENV_ACTION_RIGHT")?,
        ];

        let dynamics = PendulumDynamics {
            gravity: config.get_f64("ENV_G")?,
            length: config.get_f64("ENV_LENGTH")?,
            mass: config.get_f64("ENV_MASS")?,
        };

        let space = StateSpace::new(vec![
            Dimension::new(
                config.get_f64("ENV_THETA_LEFT")?,
                config.get_f64("ENV_THETA_RIGHT")?,
                super::bin_count(config, "ENV_THETA_SPACE")?,
            ),
            Dimension::new(
                config.get_f64("ENV_THETADOT_LEFT")?,
                config.get_f64("ENV_THETADOT_RIGHT")?,
                super::bin_count(config, "ENV_THETADOT_SPACE")?,
            ),
        ]);

        let fps = config.get_f64("ENV_FPS")?;

        Ok(Pendulum {
            actions,
            dynamics,
            space,
            dt: 1.0 / fps,
            state: INIT_STATE,
        })
    }
}

impl Environment for Pendulum {
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
        -self.state[0].abs() + PI / 2.0
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
