// Operation-level facade over the catalog store.
//
// Responsibilities
// - Validate drafts before they reach the store.
// - Translate store outcomes into the externally observable error taxonomy.
//
// Boundaries
// - No transport concerns. Inbound adapters map these outcomes to status
//   codes and bodies.

use std::sync::Arc;
use uuid::Uuid;

use crate::modules::books::application::errors::BookServiceError;
use crate::modules::books::core::book::{Book, BookDraft};
use crate::modules::books::core::ports::CatalogStore;
use crate::modules::books::core::version::VersionToken;

pub struct BookService<TCatalog>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
{
    catalog: Arc<TCatalog>,
}

impl<TCatalog> BookService<TCatalog>
where
    TCatalog: CatalogStore + Send + Sync + 'static,
{
    pub fn new(catalog: Arc<TCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn create(&self, draft: BookDraft) -> Result<Book, BookServiceError> {
        draft
            .validate()
            .map_err(|err| BookServiceError::Validation(err.to_string()))?;
        let book = self.catalog.create(draft).await?;
        tracing::info!(id = %book.id, title = %book.title, "book created");
        Ok(book)
    }

    pub async fn get(&self, id: Uuid) -> Result<Book, BookServiceError> {
        Ok(self.catalog.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Book>, BookServiceError> {
        Ok(self.catalog.list().await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        supplied: Option<VersionToken>,
        draft: BookDraft,
    ) -> Result<Book, BookServiceError> {
        draft
            .validate()
            .map_err(|err| BookServiceError::Validation(err.to_string()))?;
        let book = self.catalog.update(id, supplied.as_ref(), draft).await?;
        tracing::info!(id = %book.id, "book updated");
        Ok(book)
    }

    pub async fn delete(
        &self,
        id: Uuid,
        supplied: Option<VersionToken>,
    ) -> Result<(), BookServiceError> {
        self.catalog.delete(id, supplied.as_ref()).await?;
        tracing::info!(%id, "book deleted");
        Ok(())
    }
}
