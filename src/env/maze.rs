//! Grid-world maze task.

use std::fs;
use std::path::Path;

use super::Environment;
use crate::config::Config;
use crate::error::{Result, TabulaError};

const WALL: char = '#';

type Position = (isize, isize);

/// A finite grid of open and wall cells. The agent starts at `(1, 1)`, the
/// goal is `(height - 2, width - 2)`, and stepping into a wall or off the
/// grid ends the episode.
pub struct Maze {
    goal_reward: f64,
    dead_reward: f64,
    default_reward: f64,

    height: usize,
    width: usize,
    grid: Vec<Vec<char>>,

    start: Position,
    goal: Position,

    pos: Position,
}

impl Maze {
    pub fn from_config(config: &Config) -> Result<Self> {
        Maze::from_layout_file(
            config.get("ENV_MAZE_PATH")?,
            config.get_f64("ENV_GOAL_REWARD")?,
            config.get_f64("ENV_DEAD_REWARD")?,
            config.get_f64("ENV_DEFAULT_REWARD")?,
        )
    }

    /// Parse a layout string: one row per line, `#` is a wall, any other
    /// character is open floor. Dimensions come from the line count and line
    /// length.
    pub fn new(
        layout: &str,
        goal_reward: f64,
        dead_reward: f64,
        default_reward: f64,
    ) -> Result<Self> {
        let grid: Vec<Vec<char>> = layout
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let height = grid.len();
        if height < 3 {
            return Err(TabulaError::InvalidLayout(format!(
                "needs at least 3 rows, got {}",
                height
            )));
        }
        let width = grid[0].len();
        if width < 3 {
            return Err(TabulaError::InvalidLayout(format!(
                "needs at least 3 columns, got {}",
                width
            )));
        }
        if let Some(row) = grid.iter().find(|row| row.len() != width) {
            return Err(TabulaError::InvalidLayout(format!(
                "ragged row of length {} (expected {})",
                row.len(),
                width
            )));
        }

        let start = (1, 1);
        let goal = (height as isize - 2, width as isize - 2);

        Ok(Maze {
            goal_reward,
            dead_reward,
            default_reward,
            height,
            width,
            grid,
            start,
            goal,
            pos: start,
        })
    }

    /// Load a layout file and build the maze with the given rewards.
    pub fn from_layout_file(
        path: impl AsRef<Path>,
        goal_reward: f64,
        dead_reward: f64,
        default_reward: f64,
    ) -> Result<Self> {
        let layout = fs::read_to_string(path)?;
        Maze::new(&layout, goal_reward, dead_reward, default_reward)
    }

    fn is_goal(&self, pos: Position) -> bool {
        pos == self.goal
    }

    fn is_inside(&self, pos: Position) -> bool {
        0 <= pos.0 && pos.0 < self.height as isize && 0 <= pos.1 && pos.1 < self.width as isize
    }

    fn is_wall(&self, pos: Position) -> bool {
        self.is_inside(pos) && self.grid[pos.0 as usize][pos.1 as usize] == WALL
    }
}

impl Environment for Maze {
    fn state_count(&self) -> usize {
        self.height * self.width
    }

    fn action_count(&self) -> usize {
        4
    }

    fn state_index(&self) -> usize {
        // Off-grid positions are terminal; clamp them to the nearest cell so
        // the index stays inside the table.
        let row = self.pos.0.clamp(0, self.height as isize - 1) as usize;
        let col = self.pos.1.clamp(0, self.width as isize - 1) as usize;
        row * self.width + col
    }

    fn reward(&self) -> f64 {
        if self.is_goal(self.pos) {
            self.goal_reward
        } else if !self.is_inside(self.pos) || self.is_wall(self.pos) {
            self.dead_reward
        } else {
            self.default_reward
        }
    }

    fn info(&self) -> String {
        format!("{},{}", self.pos.0, self.pos.1)
    }

    fn reset(&mut self) {
        self.pos = self.start;
    }

    fn step(&mut self, action: usize) -> Result<()> {
        let (row, col) = self.pos;
        self.pos = match action {
            0 => (row - 1, col),
            1 => (row + 1, col),
            2 => (row, col - 1),
            3 => (row, col + 1),
            _ => {
                return Err(TabulaError::InvalidAction {
                    action,
                    action_count: self.action_count(),
                })
            }
        };
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.is_goal(self.pos) || !self.is_inside(self.pos) || self.is_wall(self.pos)
    }

    fn is_success(&self) -> bool {
        self.is_goal(self.pos)
    }
}
