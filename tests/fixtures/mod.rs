// Shared test fixture for book drafts, hydrated from a JSON file so the
// canonical payload is identical across test crates.

use std::fs;

use library_service::modules::books::core::book::BookDraft;

pub struct BookDraftBuilder {
    inner: BookDraft,
}

impl BookDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./tests/fixtures/books/gatsby.json").unwrap();
        let inner: BookDraft = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn authors(mut self, v: Vec<String>) -> Self {
        self.inner.authors = v;
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn comment(mut self, v: impl Into<String>) -> Self {
        self.inner.comment = Some(v.into());
        self
    }

    pub fn build(self) -> BookDraft {
        self.inner
    }
}

/// Build the canonical, valid draft used across the flow tests.
pub fn make_gatsby_draft() -> BookDraft {
    BookDraftBuilder::new().build()
}
