//! Plain JSON artifact loading.

use crate::Result;
use simrec_core::{CatalogStore, ItemRecord, Recommender, SimilarityMatrix};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Load catalog records from a JSON array file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<ItemRecord>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let records: Vec<ItemRecord> = serde_json::from_reader(reader)?;
    debug!(count = records.len(), path = %path.as_ref().display(), "catalog loaded");
    Ok(records)
}

/// Load a similarity matrix from a JSON nested-array file.
///
/// Row shape is validated by [`SimilarityMatrix::from_rows`]; a ragged
/// row fails the load.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SimilarityMatrix> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let rows: Vec<Vec<f32>> = serde_json::from_reader(reader)?;
    let matrix = SimilarityMatrix::from_rows(rows)?;
    debug!(rows = matrix.len(), path = %path.as_ref().display(), "similarity matrix loaded");
    Ok(matrix)
}

/// One-shot load: catalog + matrix -> validated [`Recommender`].
///
/// Fails if the matrix is not square, its size does not match the
/// catalog, or two catalog rows share a lowercased title.
pub fn load_recommender<P: AsRef<Path>, Q: AsRef<Path>>(
    catalog_path: P,
    matrix_path: Q,
) -> Result<Recommender> {
    let records = load_catalog(catalog_path)?;
    let matrix = load_matrix(matrix_path)?;
    build_recommender(records, matrix)
}

pub(crate) fn build_recommender(
    records: Vec<ItemRecord>,
    matrix: SimilarityMatrix,
) -> Result<Recommender> {
    let catalog = CatalogStore::from_records(records);
    catalog.check_unique_titles()?;
    let engine = Recommender::new(Arc::new(catalog), matrix)?;
    info!(items = engine.catalog().len(), "recommender initialized");
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadError;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const CATALOG_JSON: &str = r#"[
        {"title": "Alpha", "categories": "Action, Drama", "rating": 8.2,
         "popularity": 120.0, "description": "d", "image_ref": "i", "detail_url": "u"},
        {"title": "Beta", "categories": "Drama", "popularity": 45.0}
    ]"#;

    #[test]
    fn test_load_catalog_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "catalog.json", CATALOG_JSON);
        let records = load_catalog(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rating, Some(8.2));
        // Missing optional fields default.
        assert_eq!(records[1].rating, None);
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn test_load_recommender_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_file(&dir, "catalog.json", CATALOG_JSON);
        let matrix = write_file(&dir, "matrix.json", "[[1.0, 0.7], [0.7, 1.0]]");
        let engine = load_recommender(&catalog, &matrix).unwrap();
        let results = engine.recommend("Alpha", 5).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Beta");
    }

    #[test]
    fn test_ragged_matrix_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_file(&dir, "catalog.json", CATALOG_JSON);
        let matrix = write_file(&dir, "matrix.json", "[[1.0, 0.7], [0.7]]");
        let err = load_recommender(&catalog, &matrix).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Core(simrec_core::Error::InvalidMatrixRow { .. })
        ));
    }

    #[test]
    fn test_size_mismatch_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_file(&dir, "catalog.json", CATALOG_JSON);
        let matrix = write_file(&dir, "matrix.json", "[[1.0]]");
        let err = load_recommender(&catalog, &matrix).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Core(simrec_core::Error::MatrixSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_duplicate_titles_fail_load() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = write_file(
            &dir,
            "catalog.json",
            r#"[{"title": "Same", "popularity": 1.0},
                {"title": "same", "popularity": 2.0}]"#,
        );
        let matrix = write_file(&dir, "matrix.json", "[[1.0, 0.5], [0.5, 1.0]]");
        let err = load_recommender(&catalog, &matrix).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Core(simrec_core::Error::DuplicateTitle(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "catalog.json", "not json");
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }
}
