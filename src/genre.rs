//! The closed genre enumeration and its age-restricted subset

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A book genre drawn from the catalog's fixed allowed list
///
/// The set of valid genres is closed: anything outside [`Genre::ALL`]
/// fails to parse and can never be stored in a catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Genre {
    Fantasy,
    Horror,
    Detective,
    Cartoons,
    Comedy,
}

impl Genre {
    /// Every valid genre, in canonical order
    pub const ALL: [Genre; 5] = [
        Genre::Fantasy,
        Genre::Horror,
        Genre::Detective,
        Genre::Cartoons,
        Genre::Comedy,
    ];

    /// Genres excluded from the children-safe query
    pub const AGE_RESTRICTED: [Genre; 2] = [Genre::Horror, Genre::Detective];

    /// Whether this genre is in the age-restricted subset
    pub fn is_age_restricted(self) -> bool {
        Self::AGE_RESTRICTED.contains(&self)
    }

    /// Canonical label for this genre
    pub fn label(self) -> &'static str {
        match self {
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Detective => "Detective",
            Genre::Cartoons => "Cartoons",
            Genre::Comedy => "Comedy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Genre {
    type Err = CatalogError;

    /// Parse a canonical label; any other string is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.label() == s)
            .ok_or_else(|| CatalogError::UnknownGenre(s.to_string()))
    }
}
