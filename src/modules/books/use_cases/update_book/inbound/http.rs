use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::books::adapters::inbound::http::{
    error_response, if_match_token, json_rejection_response,
};
use crate::modules::books::core::book::BookDraft;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateBookBody {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Result<Json<UpdateBookBody>, JsonRejection>,
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

    match state.books.update(id, if_match_token(&headers), draft).await {
        Ok(book) => Json(book).into_response(),
        Err(err) => error_response(err),
    }
}
