use axum::{Json, extract::Path, extract::State, response::IntoResponse};
use uuid::Uuid;

use crate::modules::books::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.books.get(id).await {
        Ok(book) => Json(book).into_response(),
        Err(err) => error_response(err),
    }
}
