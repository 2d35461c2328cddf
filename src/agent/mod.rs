//! Tabular learning agents.

pub mod q_learning;
pub mod sarsa;

pub use q_learning::QLearning;
pub use sarsa::Sarsa;

use ndarray::ArrayView1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::{Result, TabulaError};
use crate::table::QTable;

/// A tabular agent: picks actions over a [`QTable`] and updates it in place.
pub trait Agent {
    /// Epsilon-greedy selection of the next action index at `state`.
    fn select_action(&mut self, table: &QTable, state: usize) -> usize;

    /// One temporal-difference update of `table[s1][a1]` from the transition
    /// `(s1, a1) -> r -> (s2, a2)`.
    fn learn(&self, table: &mut QTable, s1: usize, a1: usize, r: f64, s2: usize, a2: usize);

    /// Freeze the agent: alpha and epsilon drop to zero, permanently. After
    /// this, `select_action` is the pure greedy policy and `learn` leaves the
    /// table unchanged.
    fn fix(&mut self);
}

/// Construct the agent named by `AGENT_NAME`.
pub fn from_config(config: &Config) -> Result<Box<dyn Agent>> {
    let name = config.get("AGENT_NAME")?;
    match name {
        "Q-learning" => Ok(Box::new(QLearning::from_config(config)?)),
        "Sarsa" => Ok(Box::new(Sarsa::from_config(config)?)),
        other => Err(TabulaError::UnknownAgent(other.to_string())),
    }
}

/// Shared epsilon-greedy machinery: the exploration rate and the injectable,
/// seedable random source behind it.
pub(crate) struct EpsGreedy {
    pub epsilon: f64,
    rng: StdRng,
}

impl EpsGreedy {
    pub fn from_config(config: &Config) -> Result<Self> {
        let epsilon = config.get_f64("AGENT_EPSILON")?;
        let rng = match config.get_opt("AGENT_SEED") {
            Some(raw) => {
                let seed: u64 = raw
                    .parse()
                    .map_err(|_| TabulaError::invalid_value("AGENT_SEED", raw, "a u64 seed"))?;
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Ok(EpsGreedy { epsilon, rng })
    }

    pub fn seeded(epsilon: f64, seed: u64) -> Self {
        EpsGreedy {
            epsilon,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random action with probability epsilon, greedy otherwise.
    pub fn select(&mut self, table: &QTable, state: usize) -> usize {
        if self.rng.gen::<f64>() < self.epsilon {
            self.rng.gen_range(0..table.action_count())
        } else {
            argmax(table.row(state))
        }
    }
}

/// Index of the greatest value, first index winning ties: the incumbent is
/// replaced only on a strictly greater value.
pub(crate) fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best = 0;
    for (i, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = i;
        }
    }
    best
}
