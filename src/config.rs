//! Run-configuration files: one `KEY=value` pair per line.
//!
//! The core never reads ambient state; a [`Config`] is parsed once at startup
//! and passed by reference into every component constructor.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TabulaError};

/// An opaque key → string mapping with typed accessors.
pub struct Config {
    entries: HashMap<String, String>,
}

impl Config {
    /// Load a configuration file. Blank lines are skipped; any other line
    /// must contain exactly one `=`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut entries = HashMap::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('=').collect();
            if fields.len() != 2 {
                return Err(TabulaError::ConfigParse { line: line.to_string() });
            }
            entries.insert(fields[0].to_string(), fields[1].to_string());
        }

        Ok(Config { entries })
    }

    /// Build a configuration from in-memory pairs. Used by tests.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Config {
            entries: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| TabulaError::MissingKey(key.to_string()))
    }

    /// Value for `key` if present, without an error on absence.
    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Result<f64> {
        self.parse(key, "a float")
    }

    pub fn get_usize(&self, key: &str) -> Result<usize> {
        self.parse(key, "a non-negative integer")
    }

    fn parse<T: FromStr>(&self, key: &str, expected: &'static str) -> Result<T> {
        let raw = self.get(key)?;
        raw.parse()
            .map_err(|_| TabulaError::invalid_value(key, raw, expected))
    }
}
