use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::books::adapters::inbound::http::{error_response, json_rejection_response};
use crate::modules::books::core::book::BookDraft;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateBookBody {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateBookBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return json_rejection_response(),
    };

    let draft = BookDraft {
        title: body.title,
        authors: body.authors,
        year: body.year,
        comment: body.comment,
    };

    match state.books.create(draft).await {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(err) => error_response(err),
    }
}
