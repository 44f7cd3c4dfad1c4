// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the catalog storage capability as a trait so the core stays
//   independent of any concrete backend.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::books::core::book::{Book, BookDraft};
use crate::modules::books::core::precondition::PreconditionError;
use crate::modules::books::core::version::VersionToken;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("book with specified id: {id} was not found")]
    NotFound { id: Uuid },

    #[error("book already exists with id: {id}")]
    AlreadyExists { id: Uuid },

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Exclusive owner of durable book state and the authoritative version token
/// per id. Implementations must make the version comparison and the mutation
/// a single atomic step per id, so two concurrent mutations can never both
/// pass validation against the same token.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Assign a fresh id and initial version token, rejecting drafts whose
    /// catalog key collides with a live record. No precondition applies.
    async fn create(&self, draft: BookDraft) -> Result<Book, CatalogError>;

    async fn get(&self, id: Uuid) -> Result<Book, CatalogError>;

    async fn list(&self) -> Result<Vec<Book>, CatalogError>;

    /// Apply the draft to the record if the supplied token matches the
    /// current one, issuing a new version token. A rejected update leaves the
    /// stored record untouched.
    async fn update(
        &self,
        id: Uuid,
        supplied: Option<&VersionToken>,
        draft: BookDraft,
    ) -> Result<Book, CatalogError>;

    /// Remove the record if the supplied token matches the current one.
    async fn delete(&self, id: Uuid, supplied: Option<&VersionToken>)
    -> Result<(), CatalogError>;
}
