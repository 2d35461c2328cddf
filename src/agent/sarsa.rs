//! On-policy temporal-difference control.

use super::{Agent, EpsGreedy};
use crate::config::Config;
use crate::error::Result;
use crate::table::QTable;

/// Sarsa: the update target uses the value of the action actually selected at
/// the next state.
pub struct Sarsa {
    alpha: f64,
    gamma: f64,
    policy: EpsGreedy,
}

impl Sarsa {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Sarsa {
            alpha: config.get_f64("AGENT_ALPHA")?,
            gamma: config.get_f64("AGENT_GAMMA")?,
            policy: EpsGreedy::from_config(config)?,
        })
    }

    pub fn seeded(alpha: f64, gamma: f64, epsilon: f64, seed: u64) -> Self {
        Sarsa {
            alpha,
            gamma,
            policy: EpsGreedy::seeded(epsilon, seed),
        }
    }
}

impl Agent for Sarsa {
    fn select_action(&mut self, table: &QTable, state: usize) -> usize {
        self.policy.select(table, state)
    }

    fn learn(&self, table: &mut QTable, s1: usize, a1: usize, r: f64, s2: usize, a2: usize) {
        let target = r + self.gamma * table.get(s2, a2);
        let updated = (1.0 - self.alpha) * table.get(s1, a1) + self.alpha * target;
        table.set(s1, a1, updated);
    }

    fn fix(&mut self) {
        self.alpha = 0.0;
        self.policy.epsilon = 0.0;
    }
}
