// Shared HTTP plumbing for the inbound book handlers.
//
// Responsibilities
// - Map service errors to the wire contract: status code plus a JSON body
//   with a stable numeric code and a message.
// - Read the If-Match header carrying the client's version token.

use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::modules::books::application::errors::{BookServiceError, CODE_JSON_PARSE};
use crate::modules::books::core::version::VersionToken;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    pub message: String,
}

pub fn error_response(err: BookServiceError) -> Response {
    let status = match &err {
        BookServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        BookServiceError::Duplicate { .. }
        | BookServiceError::Conflict(_)
        | BookServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        BookServiceError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "book operation failed");
    } else {
        tracing::warn!(error = %err, "book operation rejected");
    }
    let body = ErrorBody {
        code: err.code(),
        message: err.to_string(),
    };
    (status, Json(body)).into_response()
}

pub fn json_rejection_response() -> Response {
    let body = ErrorBody {
        code: CODE_JSON_PARSE,
        message: "an error was encountered when parsing the JSON request body".to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// The If-Match value is treated as an opaque token. A header that is absent
/// or not valid UTF-8 yields no token, which mutations reject downstream.
pub fn if_match_token(headers: &HeaderMap) -> Option<VersionToken> {
    headers
        .get(header::IF_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(VersionToken::from)
}
