//! Integration tests for the book API.
//!
//! Each test serves the real router on an ephemeral port and talks to it
//! over HTTP.

use bookshelf_engine::{Book, Store};
use bookshelf_server::{build_app, AppState};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Serve the app over `store` and return its base URL.
async fn spawn_app(store: Store) -> String {
    let state = AppState::new(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, build_app(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

fn shelf() -> Store {
    Store::with_books(vec![
        Book::new("Dune").with_author("Frank Herbert"),
        Book::new("Neuromancer").with_rating(8.0),
        Book::new("Hyperion").with_read(true),
        Book::new("Solaris").with_tags(["classic"]),
    ])
    .unwrap()
}

async fn get_json(url: &str) -> (StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

fn listed_ids(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|entry| entry.as_object().unwrap().keys().next().unwrap().clone())
        .collect()
}

// ============================================================================
// Root & Health
// ============================================================================

#[tokio::test]
async fn root_returns_greeting() {
    let base = spawn_app(Store::new()).await;

    let (status, body) = get_json(&format!("{base}/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"root": "this is root"}));
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_app(Store::new()).await;

    let (status, body) = get_json(&format!("{base}/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_defaults_to_three() {
    let base = spawn_app(shelf()).await;

    let (status, body) = get_json(&format!("{base}/books")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed_ids(&body), vec!["1", "2", "3"]);
    assert_eq!(body[0]["1"]["name"], "Dune");
    assert_eq!(body[0]["1"]["author"], "Frank Herbert");
    assert_eq!(body[0]["1"]["rating"], Value::Null);
}

#[tokio::test]
async fn list_honours_limit() {
    let base = spawn_app(shelf()).await;

    let (_, body) = get_json(&format!("{base}/books?limit=1")).await;
    assert_eq!(listed_ids(&body), vec!["1"]);

    let (_, body) = get_json(&format!("{base}/books?limit=0")).await;
    assert_eq!(body, json!([]));

    let (_, body) = get_json(&format!("{base}/books?limit=9")).await;
    assert_eq!(listed_ids(&body), vec!["1", "2", "3", "4"]);
}

#[tokio::test]
async fn list_rejects_malformed_limit() {
    let base = spawn_app(shelf()).await;

    for limit in ["10", "x", "-1"] {
        let (status, body) = get_json(&format!("{base}/books?limit={limit}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "limit={limit}");
        assert!(body["error"].is_string());
    }
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn get_existing_book() {
    let base = spawn_app(shelf()).await;

    let (status, body) = get_json(&format!("{base}/books/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "Neuromancer", "author": null, "rating": 8.0, "read": null, "tags": null})
    );
}

#[tokio::test]
async fn get_missing_book_is_404() {
    let base = spawn_app(Store::new()).await;

    let (status, body) = get_json(&format!("{base}/books/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "could not find book with id 999");
}

#[tokio::test]
async fn get_rejects_out_of_range_ids() {
    let base = spawn_app(shelf()).await;

    for id in ["1001", "0", "-3", "abc"] {
        let (status, _) = get_json(&format!("{base}/books/{id}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id={id}");
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_books_assigns_sequential_ids() {
    let base = spawn_app(Store::new()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/books"))
        .json(&json!([
            {"name": "Dune", "rating": 9},
            {"name": "Emma", "tags": ["classic", "romance"]}
        ]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.text().await.unwrap().is_empty());

    let (_, body) = get_json(&format!("{base}/books")).await;
    assert_eq!(listed_ids(&body), vec!["1", "2"]);
    assert_eq!(body[1]["2"]["tags"], json!(["classic", "romance"]));
}

#[tokio::test]
async fn create_empty_list_is_400() {
    let base = spawn_app(Store::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/books"))
        .json(&json!([]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "book list should not be empty");
}

#[tokio::test]
async fn create_rejects_invalid_books() {
    let base = spawn_app(Store::new()).await;
    let client = reqwest::Client::new();

    for payload in [
        json!([{"rating": 11}]),
        json!([{"rating": -1}]),
        json!([{"read": "yes"}]),
        json!({"name": "not a list"}),
    ] {
        let response = client
            .post(format!("{base}/books"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{payload}");
    }

    let (_, body) = get_json(&format!("{base}/books")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_accepts_rating_bounds() {
    let base = spawn_app(Store::new()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/books"))
        .json(&json!([{"rating": 0}, {"rating": 10}]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_merges_partial_fields() {
    let base = spawn_app(Store::with_books(vec![Book::new("Dune")]).unwrap()).await;

    let response = reqwest::Client::new()
        .put(format!("{base}/book/1"))
        .json(&json!({"rating": 9}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"1": {"name": "Dune", "author": null, "rating": 9.0, "read": null, "tags": null}})
    );

    let (_, stored) = get_json(&format!("{base}/books/1")).await;
    assert_eq!(stored, body["1"]);
}

#[tokio::test]
async fn update_with_null_clears_field() {
    let base = spawn_app(shelf()).await;

    let response = reqwest::Client::new()
        .put(format!("{base}/book/1"))
        .json(&json!({"author": null}))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["1"]["name"], "Dune");
    assert_eq!(body["1"]["author"], Value::Null);
}

#[tokio::test]
async fn update_with_empty_body_is_noop() {
    let base = spawn_app(shelf()).await;
    let (_, before) = get_json(&format!("{base}/books/4")).await;

    let response = reqwest::Client::new()
        .put(format!("{base}/book/4"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["4"], before);
}

#[tokio::test]
async fn update_errors() {
    let base = spawn_app(shelf()).await;
    let client = reqwest::Client::new();

    let missing = client
        .put(format!("{base}/book/77"))
        .json(&json!({"rating": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let out_of_range = client
        .put(format!("{base}/book/1"))
        .json(&json!({"rating": 10.5}))
        .send()
        .await
        .unwrap();
    assert_eq!(out_of_range.status(), StatusCode::BAD_REQUEST);

    let bad_id = client
        .put(format!("{base}/book/5000"))
        .json(&json!({"rating": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_id.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_then_get_is_404() {
    let base = spawn_app(shelf()).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/books/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, _) = get_json(&format!("{base}/books/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let again = client
        .delete(format!("{base}/books/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let base = spawn_app(shelf()).await;
    let client = reqwest::Client::new();

    client
        .delete(format!("{base}/books/4"))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/books"))
        .json(&json!([{"name": "Foundation"}]))
        .send()
        .await
        .unwrap();

    let (_, body) = get_json(&format!("{base}/books?limit=9")).await;
    assert_eq!(listed_ids(&body), vec!["1", "2", "3", "5"]);
    assert_eq!(body[3]["5"]["name"], "Foundation");
}
