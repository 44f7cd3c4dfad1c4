use thiserror::Error;
use uuid::Uuid;

use crate::modules::books::core::ports::CatalogError;
use crate::modules::books::core::precondition::PreconditionError;

/// Stable numeric codes carried in error response bodies, so callers can
/// assert on the kind of failure instead of message text.
pub const CODE_JSON_PARSE: i32 = 1000;
pub const CODE_BOOK_NOT_FOUND: i32 = 1001;
pub const CODE_BOOK_ALREADY_EXISTS: i32 = 1002;
pub const CODE_INVALID_IF_MATCH: i32 = 1003;
pub const CODE_INVALID_PAYLOAD: i32 = 1004;
pub const CODE_INTERNAL: i32 = 1005;

#[derive(Debug, Error)]
pub enum BookServiceError {
    #[error("book already exists with id: {id}")]
    Duplicate { id: Uuid },

    #[error("book with specified id: {id} was not found")]
    NotFound { id: Uuid },

    #[error(transparent)]
    Conflict(PreconditionError),

    #[error("invalid book payload: {0}")]
    Validation(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl BookServiceError {
    pub fn code(&self) -> i32 {
        match self {
            Self::Duplicate { .. } => CODE_BOOK_ALREADY_EXISTS,
            Self::NotFound { .. } => CODE_BOOK_NOT_FOUND,
            Self::Conflict(_) => CODE_INVALID_IF_MATCH,
            Self::Validation(_) => CODE_INVALID_PAYLOAD,
            Self::Unexpected(_) => CODE_INTERNAL,
        }
    }
}

impl From<CatalogError> for BookServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::AlreadyExists { id } => Self::Duplicate { id },
            CatalogError::NotFound { id } => Self::NotFound { id },
            CatalogError::Precondition(precondition) => Self::Conflict(precondition),
            CatalogError::Backend(message) => Self::Unexpected(message),
        }
    }
}
