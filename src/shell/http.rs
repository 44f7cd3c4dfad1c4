use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::books::use_cases::create_book::inbound::http as create_http;
use crate::modules::books::use_cases::delete_book::inbound::http as delete_http;
use crate::modules::books::use_cases::get_book::inbound::http as get_http;
use crate::modules::books::use_cases::list_books::inbound::http as list_http;
use crate::modules::books::use_cases::update_book::inbound::http as update_http;
use crate::shell::state::AppState;

async fn status() -> &'static str {
    "OK"
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/books", get(list_http::handle).post(create_http::handle))
        .route(
            "/books/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
