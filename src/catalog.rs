//! The catalog store: the name-to-genre mapping plus the favorites subset

use crate::error::{CatalogError, Result};
use crate::genre::Genre;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Maximum accepted book name length, in characters (inclusive)
pub const MAX_NAME_LEN: usize = 20;

/// An in-memory book catalog
///
/// Books are keyed by name. Each entry carries an optional genre
/// (`None` until one is assigned), and a subset of the books can be
/// marked as favorites. The catalog exclusively owns both structures;
/// queries hand out views, never mutable access.
///
/// Iteration order over books and favorites is the sorted name order,
/// so query results are deterministic within a process run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    books: BTreeMap<String, Option<Genre>>,
    favorites: BTreeSet<String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book with no genre assigned
    ///
    /// The name must be non-empty and at most [`MAX_NAME_LEN`] characters
    /// (characters, not bytes, so Cyrillic names count correctly).
    /// Adding a name that is already present fails with
    /// [`CatalogError::AlreadyExists`] and leaves the existing entry,
    /// including its genre, untouched.
    pub fn add_new_book(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let chars = name.chars().count();
        if chars == 0 || chars > MAX_NAME_LEN {
            tracing::warn!("Rejected book name of {} characters: {:?}", chars, name);
            return Err(CatalogError::InvalidName(name));
        }
        if self.books.contains_key(&name) {
            return Err(CatalogError::AlreadyExists(name));
        }
        tracing::debug!("Added book: {:?}", name);
        self.books.insert(name, None);
        Ok(())
    }

    /// Assign a genre to an existing book
    ///
    /// Fails with [`CatalogError::NotFound`] if the book was never added.
    /// Invalid genre labels cannot reach this method; they are rejected
    /// when parsing via [`Genre::from_str`](std::str::FromStr), which
    /// leaves the stored genre unchanged.
    pub fn set_book_genre(&mut self, name: &str, genre: Genre) -> Result<()> {
        let slot = self
            .books
            .get_mut(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?;
        *slot = Some(genre);
        tracing::debug!("Set genre of {:?} to {}", name, genre);
        Ok(())
    }

    /// Get the genre of a book, `None` if no genre was assigned yet
    ///
    /// Fails with [`CatalogError::NotFound`] if the book was never added.
    pub fn get_book_genre(&self, name: &str) -> Result<Option<Genre>> {
        self.books
            .get(name)
            .copied()
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Read-only view of the full name-to-genre mapping
    pub fn get_books_genre(&self) -> &BTreeMap<String, Option<Genre>> {
        &self.books
    }

    /// Names of all books whose assigned genre equals `genre`
    pub fn get_books_with_specific_genre(&self, genre: Genre) -> Vec<&str> {
        self.books
            .iter()
            .filter(|(_, stored)| **stored == Some(genre))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Names of all books suitable for children
    ///
    /// A book qualifies only if it has a genre assigned and that genre is
    /// not age-restricted. Books with no genre are excluded.
    pub fn get_books_for_children(&self) -> Vec<&str> {
        self.books
            .iter()
            .filter(|(_, stored)| matches!(stored, Some(genre) if !genre.is_age_restricted()))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Mark an existing book as a favorite
    ///
    /// Idempotent: marking an already-favorite book again has no effect.
    /// Fails with [`CatalogError::NotFound`] if the book was never added.
    pub fn add_book_in_favorites(&mut self, name: &str) -> Result<()> {
        if !self.books.contains_key(name) {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        if self.favorites.insert(name.to_string()) {
            tracing::debug!("Added favorite: {:?}", name);
        }
        Ok(())
    }

    /// Remove a book from the favorites
    ///
    /// Returns whether the book was a favorite. Removing an absent name
    /// is a no-op, never an error.
    pub fn delete_book_from_favorites(&mut self, name: &str) -> bool {
        let removed = self.favorites.remove(name);
        if removed {
            tracing::debug!("Removed favorite: {:?}", name);
        }
        removed
    }

    /// Names of all favorite books, in sorted order
    pub fn get_list_of_favorites_books(&self) -> Vec<&str> {
        self.favorites.iter().map(String::as_str).collect()
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the catalog holds no books
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Whether a book with this name was added
    pub fn contains_book(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    /// Whether this book is currently a favorite
    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorites.contains(name)
    }
}
