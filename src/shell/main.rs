use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use task_tracker::shared::core::clock::SystemClock;
use task_tracker::shared::infrastructure::store::TableStore;
use task_tracker::shared::infrastructure::store::in_memory::InMemoryStore;
use task_tracker::shared::infrastructure::store::postgrest::PostgrestStore;
use task_tracker::shell::config::{Config, StoreConfig};
use task_tracker::shell::http::router;
use task_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn TableStore> = match config.store {
        StoreConfig::Postgrest { url, service_key } => {
            tracing::info!(%url, "using hosted store");
            Arc::new(PostgrestStore::new(url, service_key))
        }
        StoreConfig::InMemory => {
            tracing::warn!(
                "SUPABASE_URL or SUPABASE_SERVICE_KEY missing, using the in-memory store"
            );
            Arc::new(InMemoryStore::new())
        }
    };

    let app = router(AppState::new(store, Arc::new(SystemClock)));

    tracing::info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
