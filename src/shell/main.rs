use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use shopping_list::modules::items::adapters::outbound::item_repository_in_memory::InMemoryItemRepository;
use shopping_list::modules::items::application::item_store::ItemStore;
use shopping_list::shell::config::Config;
use shopping_list::shell::http::router;
use shopping_list::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to read configuration")?;

    // In-memory deps for now
    let repository = Arc::new(InMemoryItemRepository::new());
    let state = AppState::new(Arc::new(ItemStore::new(repository)));
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server is running on port {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
