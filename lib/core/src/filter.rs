// Post-hoc category filtering of finished recommendation lists.
use crate::engine::Recommendation;

/// Keep only results whose categories intersect `wanted`.
///
/// Order-preserving: the output is always a subsequence of `results`.
/// An empty `wanted` set means no filtering.
pub fn filter_by_categories(results: &[Recommendation], wanted: &[String]) -> Vec<Recommendation> {
    if wanted.is_empty() {
        return results.to_vec();
    }
    results
        .iter()
        .filter(|rec| rec.categories.iter().any(|c| wanted.contains(c)))
        .cloned()
        .collect()
}
