//! Book endpoint routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use bookshelf_engine::{Book, BookPatch};

use crate::error::Result;
use crate::extract::{BookIdPath, ListLimit};
use crate::handlers::{self, BookEntry};
use crate::AppState;

/// Create book routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_handler).post(create_handler))
        .route("/books/{id}", get(get_handler).delete(delete_handler))
        .route("/book/{id}", put(update_handler))
}

/// GET /books - List the first `limit` books.
async fn list_handler(
    State(state): State<AppState>,
    ListLimit(limit): ListLimit,
) -> Json<Vec<BookEntry>> {
    let store = state.store.read().await;
    Json(handlers::list_books(&store, limit))
}

/// GET /books/{id} - Fetch one book.
async fn get_handler(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<Json<Book>> {
    let store = state.store.read().await;
    Ok(Json(handlers::get_book(&store, id)?))
}

/// POST /books - Add a batch of books.
async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<Vec<Book>>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(books) = body?;
    let mut store = state.store.write().await;
    handlers::add_books(&mut store, books)?;
    Ok(StatusCode::CREATED)
}

/// PUT /book/{id} - Partially update a book.
async fn update_handler(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
    body: std::result::Result<Json<BookPatch>, JsonRejection>,
) -> Result<Json<BookEntry>> {
    let Json(patch) = body?;
    let mut store = state.store.write().await;
    Ok(Json(handlers::update_book(&mut store, id, patch)?))
}

/// DELETE /books/{id} - Remove a book.
async fn delete_handler(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<StatusCode> {
    let mut store = state.store.write().await;
    handlers::delete_book(&mut store, id)?;
    Ok(StatusCode::OK)
}
