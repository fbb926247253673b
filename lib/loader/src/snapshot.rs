//! Combined bincode snapshot of catalog and matrix.
//!
//! A single artifact the pipeline can hand over instead of two JSON
//! files. Writes go to a temp file first, then an atomic rename.

use crate::{LoadError, Result};
use serde::{Deserialize, Serialize};
use simrec_core::{ItemRecord, Recommender, SimilarityMatrix};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct SnapshotData {
    pub records: Vec<ItemRecord>,
    /// Nested rows rather than the validated matrix type: validation
    /// happens on read, so a stale or hand-edited snapshot still goes
    /// through the same checks as JSON artifacts.
    pub matrix: Vec<Vec<f32>>,
}

/// Write a snapshot atomically (temp file + rename).
pub fn write_snapshot<P: AsRef<Path>>(path: P, snapshot: &SnapshotData) -> Result<()> {
    let path = path.as_ref();
    let data = bincode::serialize(snapshot)
        .map_err(|e| LoadError::Snapshot(format!("encode failed: {e}")))?;

    let temp = path.with_extension("tmp");
    fs::write(&temp, &data)?;
    fs::rename(&temp, path)?;

    info!(items = snapshot.records.len(), path = %path.display(), "snapshot written");
    Ok(())
}

pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<SnapshotData> {
    let data = fs::read(path.as_ref())?;
    bincode::deserialize(&data)
        .map_err(|e| LoadError::Snapshot(format!("decode failed: {e}")))
}

/// Read a snapshot and build a validated [`Recommender`] from it.
pub fn load_from_snapshot<P: AsRef<Path>>(path: P) -> Result<Recommender> {
    let snapshot = read_snapshot(path)?;
    let matrix = SimilarityMatrix::from_rows(snapshot.matrix)?;
    crate::artifacts::build_recommender(snapshot.records, matrix)
}
