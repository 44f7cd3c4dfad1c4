use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::books::adapters::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.books.list().await {
        Ok(books) => Json(books).into_response(),
        Err(err) => error_response(err),
    }
}
