use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{CatalogError, CatalogResult};

/// A film that can be scheduled into showtimes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub duration_minutes: u32,
    pub rating: String,
    /// Free-form label, no fixed taxonomy
    pub genre: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, duration_minutes: u32, rating: impl Into<String>) -> CatalogResult<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(CatalogError::InvalidMovie("title must not be empty".to_string()));
        }
        if duration_minutes == 0 {
            return Err(CatalogError::InvalidMovie(format!("{} has zero duration", title)));
        }

        Ok(Self {
            title,
            duration_minutes,
            rating: rating.into(),
            genre: None,
        })
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Case-insensitive genre match; movies without a genre never match
    pub fn matches_genre(&self, genre: &str) -> bool {
        self.genre
            .as_deref()
            .is_some_and(|g| g.to_lowercase() == genre.to_lowercase())
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Movie: {} ({} min), Rating: {}", self.title, self.duration_minutes, self.rating)
    }
}
