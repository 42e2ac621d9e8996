//! Bookshelf Server - HTTP CRUD API over the in-memory book store.
//!
//! The router and application state live here so integration tests can
//! build the exact app the binary serves.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod seed;

use crate::config::Config;
use axum::Router;
use bookshelf_engine::Store;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handle to the book store.
pub type SharedStore = Arc<RwLock<Store>>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Build state from configuration, seeding the store when enabled.
    pub fn from_config(config: &Config) -> bookshelf_engine::error::Result<Self> {
        let store = if config.seed_books {
            Store::with_books(seed::seed_books())?
        } else {
            Store::new()
        };
        Ok(Self::new(store))
    }
}

/// Build the application router with all middleware attached.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
