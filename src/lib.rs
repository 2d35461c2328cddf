//! # Tabula - Tabular Reinforcement Learning Harness
//!
//! Tabula trains a tabular action-value function against one of several
//! simulated environments and records learning progress plus a final
//! evaluation trajectory.
//!
//! ## Key pieces
//!
//! - **Environments**: a discrete maze and continuous-state cartpole /
//!   pendulum tasks integrated with fixed-step RK4 and discretized into
//!   dense table indices
//! - **Agents**: Q-learning (off-policy) and Sarsa (on-policy) with
//!   epsilon-greedy exploration over a seedable random source
//! - **Experiment loop**: episode-by-episode orchestration with a
//!   success-streak early stop and a frozen evaluation episode
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tabula::config::Config;
//!
//! let config = Config::load("run.conf").unwrap();
//! tabula::runner::run_with_config(&config).unwrap();
//! ```
//!
//! Everything is single-threaded and synchronous: one run is a one-shot
//! batch job that either completes or aborts on the first error.
//!
//! ## Module Organization
//!
//! - [`agent`] - Q-learning / Sarsa agents and the [`agent::Agent`] trait
//! - [`config`] - `key=value` run-configuration files
//! - [`discretize`] - continuous-to-index bucketing and composite state indices
//! - [`dynamics`] - RK4 integration of the cartpole / pendulum dynamics
//! - [`env`] - maze / cartpole / pendulum environments
//! - [`error`] - error types and result handling
//! - [`experiment`] - the training and evaluation loop
//! - [`history`] - per-step trajectory recording
//! - [`runner`] - config-to-artifacts batch entry point
//! - [`table`] - the dense action-value table

pub mod agent;
pub mod config;
pub mod discretize;
pub mod dynamics;
pub mod env;
pub mod error;
pub mod experiment;
pub mod history;
pub mod runner;
pub mod table;
