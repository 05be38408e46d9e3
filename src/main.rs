use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use users_api::{
    InMemoryStorage, PostgresStorage, UsersService, api::build_app, config::CONFIG,
    infrastructure::storage::postgres::connect_pool,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!(config = ?*CONFIG, "loaded configuration");

    let service = match CONFIG.database_url.as_deref() {
        Some(url) => {
            let pool = connect_pool(&CONFIG, url)?;
            UsersService::new(PostgresStorage::new(pool))
        }
        None => {
            warn!("no database configured, serving in-memory demo users");
            UsersService::new(InMemoryStorage::demo())
        }
    };
    let app = build_app(Arc::new(service), &CONFIG);

    let listener = tokio::net::TcpListener::bind((CONFIG.host.as_str(), CONFIG.port)).await?;
    let addr = listener.local_addr()?;
    info!("Server is running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
