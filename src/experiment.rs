//! The training / evaluation loop.

use std::fs::File;
use std::io::{BufWriter, Write};

use tracing::{debug, info};

use crate::agent::Agent;
use crate::config::Config;
use crate::env::Environment;
use crate::error::Result;
use crate::history::History;
use crate::table::QTable;

/// Drives one agent against one environment, owning the value table.
///
/// The run is a fixed progression: training episodes (with an early stop on a
/// success streak), one frozen evaluation episode, then artifact persistence.
pub struct Experiment {
    max_episode: usize,
    max_step: usize,
    max_succeeded_episode: usize,

    agent: Box<dyn Agent>,
    env: Box<dyn Environment>,

    table: QTable,

    success_count: usize,
    returns: Vec<f64>,
    eval_history: History,

    qtable_path: String,
    history_path: String,
    returns_path: String,
}

impl Experiment {
    pub fn from_config(
        config: &Config,
        agent: Box<dyn Agent>,
        env: Box<dyn Environment>,
    ) -> Result<Self> {
        let max_episode = config.get_usize("EXPERIMENT_MAX_EPISODE")?;
        let max_step = config.get_usize("EXPERIMENT_MAX_STEP")?;
        let max_succeeded_episode = config.get_usize("EXPERIMENT_MAX_SUCCEEDED_EPISODE")?;

        let table = match config.get_opt("QTABLE_LOAD_PATH") {
            Some(path) => {
                info!(path, "restoring value table");
                QTable::load(path, env.state_count(), env.action_count())?
            }
            None => QTable::new(
                config.get_f64("QTABLE_INIT_QVALUE")?,
                env.state_count(),
                env.action_count(),
            ),
        };

        Ok(Experiment {
            max_episode,
            max_step,
            max_succeeded_episode,
            agent,
            env,
            table,
            success_count: 0,
            returns: Vec::new(),
            eval_history: History::new(),
            qtable_path: config.get("QTABLE_PATH")?.to_string(),
            history_path: config.get("HISTORY_PATH")?.to_string(),
            returns_path: config.get("RETURNS_PATH")?.to_string(),
        })
    }

    /// Train for up to the configured episode budget, stopping early once the
    /// environment reports enough consecutive successful episodes.
    pub fn run(&mut self) -> Result<()> {
        info!(
            max_episode = self.max_episode,
            max_step = self.max_step,
            "training"
        );

        for episode in 0..self.max_episode {
            let (history, succeeded) = self.run_episode()?;
            if succeeded {
                self.success_count += 1;
            } else {
                self.success_count = 0;
            }

            let episode_return = history.total_reward();
            self.returns.push(episode_return);
            debug!(episode, episode_return, succeeded, "episode finished");

            if self.success_count >= self.max_succeeded_episode {
                info!(
                    episode,
                    streak = self.success_count,
                    "success streak reached, stopping training early"
                );
                break;
            }
        }

        info!(episodes = self.returns.len(), "training finished");
        Ok(())
    }

    /// Freeze the agent and run one more episode, keeping its full history.
    ///
    /// `learn` is still invoked each step for control-flow parity with
    /// training; at alpha = 0 it no longer changes the table.
    pub fn evaluate(&mut self) -> Result<&History> {
        self.agent.fix();
        let (history, succeeded) = self.run_episode()?;
        info!(steps = history.len(), succeeded, "evaluation episode finished");
        self.eval_history = history;
        Ok(&self.eval_history)
    }

    /// One episode: reset, then step/select/learn until termination or the
    /// step budget. Appends one history record per completed step.
    fn run_episode(&mut self) -> Result<(History, bool)> {
        let mut history = History::new();

        self.env.reset();

        let mut s1 = self.env.state_index();
        let mut a1 = self.agent.select_action(&self.table, s1);

        for _ in 0..self.max_step {
            self.env.step(a1)?;
            let s2 = self.env.state_index();
            let r = self.env.reward();
            let info = self.env.info();
            let a2 = self.agent.select_action(&self.table, s2);

            self.agent.learn(&mut self.table, s1, a1, r, s2, a2);
            history.push(a1, s2, r, &info);

            if self.env.is_done() {
                break;
            }

            s1 = s2;
            a1 = a2;
        }

        Ok((history, self.env.is_success()))
    }

    /// Persist returns, the evaluation history and the value table.
    pub fn save(&self) -> Result<()> {
        self.save_returns()?;
        self.eval_history.save(&self.history_path)?;
        self.table.save(&self.qtable_path)?;
        info!(
            returns = self.returns_path.as_str(),
            history = self.history_path.as_str(),
            qtable = self.qtable_path.as_str(),
            "artifacts written"
        );
        Ok(())
    }

    fn save_returns(&self) -> Result<()> {
        let file = File::create(&self.returns_path)?;
        let mut writer = BufWriter::new(file);
        for episode_return in &self.returns {
            writeln!(writer, "{:.15}", episode_return)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Per-episode returns recorded so far, one entry per completed episode.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    pub fn table(&self) -> &QTable {
        &self.table
    }

    pub fn eval_history(&self) -> &History {
        &self.eval_history
    }
}
