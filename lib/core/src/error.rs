use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Duplicate title in catalog: {0}")]
    DuplicateTitle(String),

    #[error("Invalid similarity matrix: row {row} has {actual} columns, expected {expected}")]
    InvalidMatrixRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Similarity matrix has {matrix_len} rows but catalog has {catalog_len} items")]
    MatrixSizeMismatch {
        matrix_len: usize,
        catalog_len: usize,
    },
}
