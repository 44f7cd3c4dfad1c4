// In memory implementation of the CatalogStore port.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Store books in a sharded concurrent map keyed by id, so mutations of
//   unrelated ids never contend.
// - Enforce the version precondition and the mutation as one atomic step per
//   id by holding the record's shard guard across both.
// - Serialize creations against each other so the duplicate scan and the
//   insert cannot interleave with another creation.

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::books::core::book::{Book, BookDraft};
use crate::modules::books::core::ports::{CatalogError, CatalogStore};
use crate::modules::books::core::precondition::ensure_current;
use crate::modules::books::core::version::VersionToken;

pub struct InMemoryCatalog {
    books: DashMap<Uuid, Book>,
    create_gate: Mutex<()>,
    offline: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            create_gate: Mutex::new(()),
            offline: false,
        }
    }

    /// Make every operation fail with a backend error, to exercise failure
    /// paths in tests. Only callable before the catalog is shared.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), CatalogError> {
        if self.offline {
            return Err(CatalogError::Backend("catalog offline".into()));
        }
        Ok(())
    }

    fn find_by_catalog_key(&self, draft: &BookDraft) -> Option<Uuid> {
        let key = draft.catalog_key();
        self.books
            .iter()
            .find_map(|entry| (entry.value().catalog_key() == key).then_some(*entry.key()))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn create(&self, draft: BookDraft) -> Result<Book, CatalogError> {
        self.ensure_online()?;
        let _gate = self.create_gate.lock().await;
        if let Some(id) = self.find_by_catalog_key(&draft) {
            return Err(CatalogError::AlreadyExists { id });
        }
        let now = Utc::now();
        let book = Book {
            id: Uuid::now_v7(),
            title: draft.title,
            authors: draft.authors,
            year: draft.year,
            comment: draft.comment,
            created_at: now,
            updated_at: now,
            version: VersionToken::fresh(),
        };
        self.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn get(&self, id: Uuid) -> Result<Book, CatalogError> {
        self.ensure_online()?;
        self.books
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(CatalogError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Book>, CatalogError> {
        self.ensure_online()?;
        Ok(self
            .books
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        supplied: Option<&VersionToken>,
        draft: BookDraft,
    ) -> Result<Book, CatalogError> {
        self.ensure_online()?;
        // The shard write guard stays held from the version check through the
        // mutation, so no other mutation of this id can interleave.
        let Some(mut entry) = self.books.get_mut(&id) else {
            return Err(CatalogError::NotFound { id });
        };
        let book = entry.value_mut();
        ensure_current(supplied, &book.version)?;
        book.title = draft.title;
        book.authors = draft.authors;
        book.year = draft.year;
        book.comment = draft.comment;
        book.updated_at = Utc::now();
        book.version = VersionToken::fresh();
        Ok(book.clone())
    }

    async fn delete(
        &self,
        id: Uuid,
        supplied: Option<&VersionToken>,
    ) -> Result<(), CatalogError> {
        self.ensure_online()?;
        match self.books.entry(id) {
            Entry::Occupied(entry) => {
                ensure_current(supplied, &entry.get().version)?;
                entry.remove();
                Ok(())
            }
            Entry::Vacant(_) => Err(CatalogError::NotFound { id }),
        }
    }
}
