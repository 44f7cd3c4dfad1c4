use std::sync::Arc;

use crate::modules::books::adapters::outbound::in_memory_catalog::InMemoryCatalog;
use crate::modules::books::application::book_service::BookService;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService<InMemoryCatalog>>,
}
