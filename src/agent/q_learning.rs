//! Off-policy temporal-difference control.

use super::{Agent, EpsGreedy};
use crate::config::Config;
use crate::error::Result;
use crate::table::QTable;

/// Q-learning: the update target uses the best value at the next state,
/// regardless of which action is actually taken there.
pub struct QLearning {
    alpha: f64,
    gamma: f64,
    policy: EpsGreedy,
}

impl QLearning {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(QLearning {
            alpha: config.get_f64("AGENT_ALPHA")?,
            gamma: config.get_f64("AGENT_GAMMA")?,
            policy: EpsGreedy::from_config(config)?,
        })
    }

    pub fn seeded(alpha: f64, gamma: f64, epsilon: f64, seed: u64) -> Self {
        QLearning {
            alpha,
            gamma,
            policy: EpsGreedy::seeded(epsilon, seed),
        }
    }
}

impl Agent for QLearning {
    fn select_action(&mut self, table: &QTable, state: usize) -> usize {
        self.policy.select(table, state)
    }

    fn learn(&self, table: &mut QTable, s1: usize, a1: usize, r: f64, s2: usize, _a2: usize) {
        let target = r + self.gamma * table.max(s2);
        let updated = (1.0 - self.alpha) * table.get(s1, a1) + self.alpha * target;
        table.set(s1, a1, updated);
    }

    fn fix(&mut self) {
        self.alpha = 0.0;
        self.policy.epsilon = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_uses_next_state_max() {
        let mut table = QTable::new(0.0, 2, 2);
        table.set(0, 0, 4.0);
        table.set(1, 0, 2.0);
        table.set(1, 1, 5.0);

        let agent = QLearning::seeded(0.5, 0.9, 0.0, 0);
        // a2 = 0 is deliberately not the argmax at s2; Q-learning ignores it.
        agent.learn(&mut table, 0, 0, 1.0, 1, 0);

        // (1 - 0.5) * 4.0 + 0.5 * (1.0 + 0.9 * 5.0) = 2.0 + 2.75
        assert!((table.get(0, 0) - 4.75).abs() < 1e-12);
    }

    #[test]
    fn test_fix_makes_learn_identity() {
        let mut table = QTable::new(3.0, 2, 2);
        let mut agent = QLearning::seeded(0.5, 0.9, 0.3, 0);
        agent.fix();
        agent.fix(); // idempotent

        agent.learn(&mut table, 0, 0, 100.0, 1, 1);
        for s in 0..2 {
            for a in 0..2 {
                assert_eq!(table.get(s, a), 3.0);
            }
        }
    }

    #[test]
    fn test_fixed_agent_selects_strict_argmax() {
        let mut table = QTable::new(0.0, 1, 3);
        table.set(0, 1, 2.0);

        let mut agent = QLearning::seeded(0.1, 0.9, 1.0, 42);
        agent.fix();
        for _ in 0..20 {
            assert_eq!(agent.select_action(&table, 0), 1);
        }
    }
}
