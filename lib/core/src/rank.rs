//! Re-sort modes for finished recommendation lists.
//!
//! These are total orders over the already-filtered, already-truncated
//! list; they never re-expand the candidate pool.

use crate::engine::Recommendation;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// How to order a recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Similarity score descending — the order `recommend` produced.
    #[default]
    Similarity,
    /// Rating descending; an absent rating sorts as 0.0.
    Rating,
    /// Popularity descending, using the popularity carried on each
    /// result.
    Popularity,
}

/// Return `results` re-sorted by `mode`. Stable: equal keys keep their
/// relative input order.
pub fn sort_results(results: &[Recommendation], mode: SortMode) -> Vec<Recommendation> {
    let mut sorted = results.to_vec();
    match mode {
        SortMode::Similarity => {
            sorted.sort_by_key(|r| Reverse(OrderedFloat(r.score)));
        }
        SortMode::Rating => {
            sorted.sort_by_key(|r| Reverse(OrderedFloat(r.rating.unwrap_or(0.0))));
        }
        SortMode::Popularity => {
            sorted.sort_by_key(|r| Reverse(OrderedFloat(r.popularity)));
        }
    }
    sorted
}
