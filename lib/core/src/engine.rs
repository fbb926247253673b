//! Recommendation engine
//!
//! Ranks catalog items against a query title by reading the query's row
//! in the precomputed similarity matrix. Filtering and re-sorting of the
//! produced results live in [`crate::filter`] and [`crate::rank`]; they
//! are deliberately not fused into `recommend`.

use crate::catalog::{CatalogStore, Item};
use crate::matrix::SimilarityMatrix;
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;

/// One ranked recommendation, enriched from the catalog.
///
/// Carries `popularity`, `rating`, and `score` directly so re-sorting
/// never has to resolve the item again by title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub categories: Vec<String>,
    pub rating: Option<f32>,
    pub popularity: f32,
    pub description: String,
    pub image_ref: String,
    pub detail_url: String,
    /// Similarity of this item to the query, from the matrix row.
    pub score: f32,
}

impl Recommendation {
    fn from_item(item: &Item, score: f32) -> Self {
        Self {
            title: item.title.clone(),
            categories: item.categories.clone(),
            rating: item.rating,
            popularity: item.popularity,
            description: item.description.clone(),
            image_ref: item.image_ref.clone(),
            detail_url: item.detail_url.clone(),
            score,
        }
    }
}

/// Immutable recommendation handle over a catalog and its similarity
/// matrix.
///
/// All queries take `&self` and touch no interior mutability, so a
/// `Recommender` wrapped in an `Arc` can serve concurrent callers
/// without coordination.
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<CatalogStore>,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Bind a catalog to its similarity matrix.
    ///
    /// Fails with [`Error::MatrixSizeMismatch`] if the matrix was not
    /// built over exactly this catalog.
    pub fn new(catalog: Arc<CatalogStore>, matrix: SimilarityMatrix) -> Result<Self> {
        if matrix.len() != catalog.len() {
            return Err(Error::MatrixSizeMismatch {
                matrix_len: matrix.len(),
                catalog_len: catalog.len(),
            });
        }
        Ok(Self { catalog, matrix })
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Top `top_n` items most similar to `title`, best first.
    ///
    /// The query title is resolved case-insensitively; an unknown title
    /// is the recoverable [`Error::TitleNotFound`]. Candidates are the
    /// full matrix row sorted by score descending (ties resolve by
    /// ascending identifier via stable sort). The top-ranked entry is
    /// dropped unconditionally on the assumption that an item is its own
    /// best match; a row where the query item is not rank-0 would drop a
    /// real neighbor instead.
    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Vec<Recommendation>> {
        let item = self.catalog.get_by_title(title)?;
        let row = self.matrix.row(item.id);

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        ranked.sort_by_key(|&(_, score)| Reverse(OrderedFloat(score)));

        Ok(ranked
            .into_iter()
            .skip(1)
            .take(top_n)
            .map(|(id, score)| Recommendation::from_item(self.catalog.get_by_id(id), score))
            .collect())
    }
}
