//! Per-episode step trace.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// One recorded environment transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub action: usize,
    pub state_index: usize,
    pub reward: f64,
    pub info: String,
}

/// Append-only sequence of the transitions of a single episode, cleared at
/// every episode start and never merged across episodes.
#[derive(Debug, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    pub fn new() -> Self {
        History { records: Vec::new() }
    }

    pub fn push(&mut self, action: usize, state_index: usize, reward: f64, info: &str) {
        self.records.push(Record {
            action,
            state_index,
            reward,
            info: info.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sum of the recorded rewards (the episode return).
    pub fn total_reward(&self) -> f64 {
        self.records.iter().map(|rec| rec.reward).sum()
    }

    /// Write one tab-separated line per record, in append order, with the
    /// reward at fixed 15-digit precision.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for rec in &self.records {
            writeln!(
                writer,
                "{}\t{}\t{:.15}\t{}",
                rec.action, rec.state_index, rec.reward, rec.info
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}
