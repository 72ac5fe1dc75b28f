//! Bookshelf
//!
//! This crate provides a small in-memory book catalog. Books are keyed by
//! name, genres are assigned from a fixed allowed list, and a favorites
//! subset can be maintained alongside. Queries filter the catalog by
//! genre or by child-suitability (genres outside the age-restricted set).
//!
//! The catalog is a plain synchronous data structure: no I/O, no
//! persistence, no locking. Embedders needing concurrent access must
//! serialize it externally.

pub mod catalog;
pub mod error;
pub mod genre;

pub use catalog::{Catalog, MAX_NAME_LEN};
pub use error::{CatalogError, Result};
pub use genre::Genre;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_smoke() {
        let mut catalog = Catalog::new();
        catalog.add_new_book("Dune").unwrap();
        catalog.set_book_genre("Dune", Genre::Fantasy).unwrap();
        assert_eq!(catalog.get_book_genre("Dune").unwrap(), Some(Genre::Fantasy));
    }
}
