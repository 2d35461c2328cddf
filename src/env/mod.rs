//! Simulated environments.
//!
//! Every environment exposes the same contract over dense integer state and
//! action indices; the experiment loop drives them through a single trait
//! object chosen once from configuration.

pub mod cartpole;
pub mod maze;
pub mod pendulum;

pub use cartpole::Cartpole;
pub use maze::Maze;
pub use pendulum::Pendulum;

use crate::config::Config;
use crate::error::{Result, TabulaError};

/// A single-instance, deterministic simulated task.
pub trait Environment {
    /// Size of the discrete state index space.
    fn state_count(&self) -> usize;

    /// Number of available actions.
    fn action_count(&self) -> usize;

    /// Dense index of the current state.
    fn state_index(&self) -> usize;

    /// Reward for being in the current state.
    fn reward(&self) -> f64;

    /// Human-readable description of the internal state.
    fn info(&self) -> String;

    /// Restore the initial state.
    fn reset(&mut self);

    /// Advance one step under `action`.
    ///
    /// An action index outside `[0, action_count)` is a defect in the caller
    /// and reported as [`TabulaError::InvalidAction`].
    fn step(&mut self, action: usize) -> Result<()>;

    /// Whether the episode has terminated.
    fn is_done(&self) -> bool;

    /// Whether the episode terminated in the goal state.
    fn is_success(&self) -> bool;
}

/// Read a `*_SPACE` bin count, rejecting anything below the minimum the
/// digitizer supports. Caught at construction so a bad config aborts before
/// any simulation runs.
pub(crate) fn bin_count(config: &Config, key: &str) -> Result<usize> {
    let bins = config.get_usize(key)?;
    if bins < 3 {
        return Err(TabulaError::invalid_value(
            key,
            bins.to_string(),
            "a bin count of at least 3",
        ));
    }
    Ok(bins)
}

/// Construct the environment named by `ENV_NAME`.
pub fn from_config(config: &Config) -> Result<Box<dyn Environment>> {
    let name = config.get("ENV_NAME")?;
    match name {
        "Maze" => Ok(Box::new(Maze::from_config(config)?)),
        "Cartpole" => Ok(Box::new(Cartpole::from_config(config)?)),
        "Pendulum" => Ok(Box::new(Pendulum::from_config(config)?)),
        other => Err(TabulaError::UnknownEnvironment(other.to_string())),
    }
}
