//! # simrec
//!
//! A similarity-matrix title recommender.
//!
//! Given a catalog of items and a precomputed pairwise similarity
//! matrix, simrec resolves a query title, ranks every other item by its
//! similarity score, and returns the top-K results enriched with catalog
//! attributes. Finished result lists can be filtered by category and
//! re-sorted by similarity, rating, or popularity.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use simrec::prelude::*;
//!
//! // Load the two artifacts produced by the offline pipeline
//! let engine = simrec_loader::load_recommender("catalog.json", "matrix.json")?;
//!
//! // Query
//! let results = engine.recommend("Cowboy Bebop", 5)?;
//!
//! // Post-process
//! let wanted = vec!["Drama".to_string()];
//! let filtered = filter_by_categories(&results, &wanted);
//! let by_rating = sort_results(&filtered, SortMode::Rating);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - `simrec-core` - Catalog store, similarity matrix, ranking engine,
//!   filter and sort post-processing
//! - `simrec-loader` - Load boundary: JSON artifacts or a combined
//!   bincode snapshot, with all invariants checked at load time
//!
//! ## Design
//!
//! Everything queried at runtime is immutable after load: the
//! [`Recommender`] handle is `Send + Sync` with no interior mutability,
//! so it can be shared behind an `Arc` across concurrent callers without
//! locking. An unknown query title is the recoverable
//! [`Error::TitleNotFound`]; malformed artifacts fail at load, never at
//! query time.

// Re-export core types
pub use simrec_core::{
    filter_by_categories, parse_categories, sort_results, CatalogStore, Error, Item, ItemRecord,
    Recommendation, Recommender, Result, SimilarityMatrix, SortMode, CATEGORY_DELIMITER,
};

// Re-export loader
pub use simrec_loader::{
    load_catalog, load_from_snapshot, load_matrix, load_recommender, read_snapshot,
    write_snapshot, LoadError, SnapshotData,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        filter_by_categories, sort_results, CatalogStore, Error, Item, ItemRecord, LoadError,
        Recommendation, Recommender, Result, SimilarityMatrix, SortMode,
    };
}
