use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use library_service::modules::books::adapters::outbound::in_memory_catalog::InMemoryCatalog;
use library_service::modules::books::application::book_service::BookService;
use library_service::shell::config::Config;
use library_service::shell::http::router;
use library_service::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let catalog = Arc::new(InMemoryCatalog::new());
    let books = Arc::new(BookService::new(catalog));
    let state = AppState { books };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host, config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
