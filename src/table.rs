//! Dense action-value table.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Result, TabulaError};

/// Format version of the serialized table blob. Bumped on any layout change;
/// load rejects blobs written with a different version.
const TABLE_FORMAT_VERSION: u32 = 1;

/// A `state_count x action_count` table of action-value estimates.
///
/// The table is sized once at construction and never resized. It is owned by
/// the experiment and mutated only through an agent's learning update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    format_version: u32,
    state_count: usize,
    action_count: usize,
    values: Array2<f64>,
}

impl QTable {
    /// Create a table with every entry set to `init_q`.
    pub fn new(init_q: f64, state_count: usize, action_count: usize) -> Self {
        QTable {
            format_version: TABLE_FORMAT_VERSION,
            state_count,
            action_count,
            values: Array2::from_elem((state_count, action_count), init_q),
        }
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn action_count(&self) -> usize {
        self.action_count
    }

    pub fn get(&self, state: usize, action: usize) -> f64 {
        self.values[[state, action]]
    }

    pub fn set(&mut self, state: usize, action: usize, value: f64) {
        self.values[[state, action]] = value;
    }

    /// The full action-value row for `state`.
    pub fn row(&self, state: usize) -> ArrayView1<'_, f64> {
        self.values.row(state)
    }

    /// Maximum action value at `state`, recomputed over the full row.
    pub fn max(&self, state: usize) -> f64 {
        self.values
            .row(state)
            .iter()
            .fold(f64::NEG_INFINITY, |m, &v| m.max(v))
    }

    /// Serialize the table to `path` as a versioned binary blob.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    /// Restore a table previously written by [`QTable::save`].
    ///
    /// The blob must carry the current format version and match the expected
    /// dimensions; anything else is a serialization error, not a silent
    /// reshape.
    pub fn load(
        path: impl AsRef<Path>,
        state_count: usize,
        action_count: usize,
    ) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let table: QTable = bincode::deserialize_from(reader)?;

        if table.format_version != TABLE_FORMAT_VERSION {
            return Err(TabulaError::SerializationError(format!(
                "table format version {} (expected {})",
                table.format_version, TABLE_FORMAT_VERSION
            )));
        }
        if table.state_count != state_count || table.action_count != action_count {
            return Err(TabulaError::SerializationError(format!(
                "table shape {}x{} does not match environment {}x{}",
                table.state_count, table.action_count, state_count, action_count
            )));
        }
        if table.values.dim() != (state_count, action_count) {
            return Err(TabulaError::SerializationError(
                "table header does not match stored values".to_string(),
            ));
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_table_is_constant() {
        let table = QTable::new(10000.0, 6, 4);
        assert_eq!(table.state_count(), 6);
        assert_eq!(table.action_count(), 4);
        for s in 0..6 {
            for a in 0..4 {
                assert_eq!(table.get(s, a), 10000.0);
            }
        }
    }

    #[test]
    fn test_max_over_full_row() {
        let mut table = QTable::new(0.0, 2, 3);
        table.set(1, 0, 2.0);
        table.set(1, 1, 5.0);
        table.set(1, 2, -1.0);
        assert_eq!(table.max(1), 5.0);
        assert_eq!(table.max(0), 0.0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qtable.bin");

        let mut table = QTable::new(1.5, 3, 2);
        table.set(2, 1, -0.25);
        table.save(&path).unwrap();

        let restored = QTable::load(&path, 3, 2).unwrap();
        assert_eq!(restored.get(2, 1), -0.25);
        assert_eq!(restored.get(0, 0), 1.5);
    }

    #[test]
    fn test_load_rejects_other_format_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qtable.bin");

        // Serialize a blob claiming a future format version; load must refuse
        // it rather than reinterpret the layout.
        let mut table = QTable::new(0.0, 3, 2);
        table.format_version = TABLE_FORMAT_VERSION + 1;
        table.save(&path).unwrap();

        match QTable::load(&path, 3, 2) {
            Err(TabulaError::SerializationError(msg)) => {
                assert!(msg.contains("format version"), "unexpected message: {}", msg)
            }
            other => panic!("expected SerializationError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_rejects_shape_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qtable.bin");

        QTable::new(0.0, 3, 2).save(&path).unwrap();
        assert!(matches!(
            QTable::load(&path, 4, 2),
            Err(TabulaError::SerializationError(_))
        ));
    }
}
