//! Error types for catalog loading and carousel navigation.

use std::io;
use thiserror::Error;

/// Errors that can occur when loading a product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog file is not valid JSON for the expected layout
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog has no products
    #[error("Catalog is empty")]
    Empty,

    /// Two products share an id
    #[error("Duplicate product id: {0}")]
    DuplicateId(u32),

    /// Accent color is not `#RRGGBB`
    #[error("Invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// Errors returned by carousel navigation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one entry
    #[error("Carousel has no entries")]
    EmptyCatalog,

    /// Selected index is outside the catalog
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
