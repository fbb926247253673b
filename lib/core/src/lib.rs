//! # simrec Core
//!
//! Core library for the simrec recommendation engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`CatalogStore`] - Read-only indexed access to item attributes
//! - [`SimilarityMatrix`] - Dense precomputed pairwise similarity scores
//! - [`Recommender`] - Title-based top-K ranking over a matrix row
//! - [`filter_by_categories`] / [`sort_results`] - Post-processing of
//!   finished result lists
//!
//! ## Example
//!
//! ```rust
//! use simrec_core::{CatalogStore, ItemRecord, Recommender, SimilarityMatrix};
//! use std::sync::Arc;
//!
//! let records = vec![
//!     ItemRecord {
//!         title: "Alpha".to_string(),
//!         categories: "Action, Drama".to_string(),
//!         rating: Some(8.2),
//!         popularity: 120.0,
//!         description: String::new(),
//!         image_ref: String::new(),
//!         detail_url: String::new(),
//!     },
//!     ItemRecord {
//!         title: "Beta".to_string(),
//!         categories: "Drama".to_string(),
//!         rating: None,
//!         popularity: 45.0,
//!         description: String::new(),
//!         image_ref: String::new(),
//!         detail_url: String::new(),
//!     },
//! ];
//!
//! let catalog = Arc::new(CatalogStore::from_records(records));
//! let matrix = SimilarityMatrix::from_rows(vec![
//!     vec![1.0, 0.7],
//!     vec![0.7, 1.0],
//! ]).unwrap();
//!
//! let engine = Recommender::new(catalog, matrix).unwrap();
//! let results = engine.recommend("alpha", 5).unwrap();
//! assert_eq!(results[0].title, "Beta");
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod matrix;
pub mod rank;

pub use catalog::{parse_categories, CatalogStore, Item, ItemRecord, CATEGORY_DELIMITER};
pub use engine::{Recommendation, Recommender};
pub use error::{Error, Result};
pub use filter::filter_by_categories;
pub use matrix::SimilarityMatrix;
pub use rank::{sort_results, SortMode};
