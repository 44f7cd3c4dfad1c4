// Book model and the caller-supplied draft it is built from.
//
// Responsibilities
// - Hold the stored shape of a record, including the server-assigned id,
//   timestamps and version token.
// - Validate drafts before they reach the store.
// - Derive the key used for duplicate detection at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::books::core::version::VersionToken;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: VersionToken,
}

impl Book {
    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::of(&self.title, &self.authors)
    }
}

/// What a caller may supply on create and update. The id, timestamps and
/// version are assigned by the store, never taken from a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("at least one author is required")]
    NoAuthors,

    #[error("author entries must not be empty")]
    EmptyAuthor,
}

impl BookDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.authors.is_empty() {
            return Err(DraftError::NoAuthors);
        }
        if self.authors.iter().any(|author| author.trim().is_empty()) {
            return Err(DraftError::EmptyAuthor);
        }
        Ok(())
    }

    pub fn catalog_key(&self) -> CatalogKey {
        CatalogKey::of(&self.title, &self.authors)
    }
}

/// Derived identity used for duplicate detection: case-folded title plus the
/// author sequence in order. Two books with the same authors in a different
/// order are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogKey {
    title: String,
    authors: Vec<String>,
}

impl CatalogKey {
    pub fn of(title: &str, authors: &[String]) -> Self {
        Self {
            title: title.to_lowercase(),
            authors: authors.iter().map(|author| author.to_lowercase()).collect(),
        }
    }
}
