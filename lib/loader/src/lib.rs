//! # simrec Loader
//!
//! Load boundary for simrec: reads the two artifacts produced by the
//! offline data-preparation pipeline (a tabular catalog and a dense
//! similarity matrix) and turns them into an immutable
//! [`Recommender`](simrec_core::Recommender) handle.
//!
//! Two on-disk forms are supported:
//!
//! - Plain JSON artifacts: a catalog array and a nested-array matrix,
//!   loaded separately ([`load_recommender`]).
//! - A combined bincode snapshot written atomically
//!   ([`write_snapshot`] / [`load_from_snapshot`]).
//!
//! All catalog/matrix invariants are enforced here, at load time:
//! matrix shape, matrix-vs-catalog size, and title uniqueness are fatal
//! errors, never deferred to query time.

pub mod artifacts;
pub mod snapshot;

pub use artifacts::{load_catalog, load_matrix, load_recommender};
pub use snapshot::{load_from_snapshot, read_snapshot, write_snapshot, SnapshotData};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Core(#[from] simrec_core::Error),
}
