// Scenario tests against the real router, end to end over in-process HTTP:
// the create/update/conflict/delete walk-through and the duplicate rejection,
// asserting on the exact status codes of the wire contract.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use library_service::modules::books::adapters::outbound::in_memory_catalog::InMemoryCatalog;
use library_service::modules::books::application::book_service::BookService;
use library_service::shell::http::router;
use library_service::shell::state::AppState;

fn make_app() -> Router {
    let state = AppState {
        books: Arc::new(BookService::new(Arc::new(InMemoryCatalog::new()))),
    };
    router(state)
}

fn gatsby_json() -> String {
    std::fs::read_to_string("./tests/fixtures/books/gatsby.json").unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn post_books(body: String) -> Request<Body> {
    Request::post("/books")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn put_book(id: &str, token: &str, body: String) -> Request<Body> {
    Request::put(format!("/books/{id}"))
        .header("content-type", "application/json")
        .header("if-match", token)
        .body(Body::from(body))
        .unwrap()
}

fn delete_book(id: &str, token: &str) -> Request<Body> {
    Request::delete(format!("/books/{id}"))
        .header("if-match", token)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn it_should_walk_a_book_through_create_update_conflict_and_delete() {
    let app = make_app();

    // Create: server assigns id and the first version token.
    let (status, created) = send(&app, post_books(gatsby_json())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id missing").to_string();
    let v1 = created["version"].as_str().expect("version missing").to_string();
    assert_eq!(created["year"], 1925);

    // Update with the current token: new year, new token.
    let updated_body = gatsby_json().replace("1925", "1945");
    let (status, updated) = send(&app, put_book(&id, &v1, updated_body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["year"], 1945);
    let v2 = updated["version"].as_str().expect("version missing").to_string();
    assert_ne!(v2, v1);

    // The old token is stale now.
    let (status, _) = send(&app, put_book(&id, &v1, updated_body.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A token altered by a single character is just as stale.
    let mut altered = v2.clone();
    let replacement = if altered.starts_with('0') { "1" } else { "0" };
    altered.replace_range(0..1, replacement);
    let (status, _) = send(&app, put_book(&id, &altered, updated_body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Delete with the stale token is rejected, with the current one it lands.
    let (status, _) = send(&app, delete_book(&id, &v1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = send(&app, delete_book(&id, &v2)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    // Gone for good.
    let (status, _) = send(
        &app,
        Request::get(format!("/books/{id}")).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn it_should_reject_creating_the_same_book_twice() {
    let app = make_app();

    let (status, _) = send(&app, post_books(gatsby_json())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_books(gatsby_json())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap_or_default().contains("already exists"));
}

#[tokio::test]
async fn it_should_list_created_books() {
    let app = make_app();

    let (status, _) = send(&app, post_books(gatsby_json())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Request::get("/books").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "The Great Gatsby");
}

#[tokio::test]
async fn it_should_answer_the_status_probe() {
    let app = make_app();
    let response = app
        .oneshot(Request::get("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"OK");
}
