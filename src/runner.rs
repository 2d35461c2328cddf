//! One-shot batch run: configuration in, artifacts out.

use std::path::Path;

use tracing::info;

use crate::agent;
use crate::config::Config;
use crate::env;
use crate::error::Result;
use crate::experiment::Experiment;

/// Execute a full run from a configuration file: build the agent and
/// environment it names, train, evaluate once frozen, and persist returns,
/// history and value table. Any failure aborts the whole run.
pub fn run(config_path: impl AsRef<Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<()> {
    let agent = agent::from_config(config)?;
    let env = env::from_config(config)?;
    info!(
        agent = config.get("AGENT_NAME")?,
        env = config.get("ENV_NAME")?,
        "run configured"
    );

    let mut experiment = Experiment::from_config(config, agent, env)?;
    experiment.run()?;
    experiment.evaluate()?;
    experiment.save()?;

    Ok(())
}
