//! Error types for the bookshelf catalog

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors reported by catalog operations
///
/// Every failure is local to a single call: the catalog is left exactly
/// as it was before the failing operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The name is empty or longer than the accepted maximum.
    #[error("Invalid book name {0:?}: must be 1 to 20 characters")]
    InvalidName(String),

    /// A book with this name is already in the catalog.
    #[error("Book already in catalog: {0}")]
    AlreadyExists(String),

    /// No book with this name was ever added.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The label is not one of the allowed genres.
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),
}
