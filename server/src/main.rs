//! Bookshelf Server binary.
//!
//! Loads configuration, seeds the store and serves the book API.

use bookshelf_server::config::Config;
use bookshelf_server::{build_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Bookshelf Server on {}:{}", config.host, config.port);

    // Build application state
    let state = AppState::from_config(&config)?;
    {
        let store = state.store.read().await;
        tracing::info!(books = store.len(), seeded = config.seed_books, "Store ready");
    }

    let app = build_app(state);

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
