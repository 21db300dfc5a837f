use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use activities::shared::infrastructure::activity_store::in_memory::InMemoryActivityStore;
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    // In-memory directory, reseeded on every start
    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::new(store), &config.static_dir);

    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    tracing::info!(
        address = %listener.local_addr()?,
        static_dir = %config.static_dir.display(),
        "activities API listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
