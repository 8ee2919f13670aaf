//! Service entry-point: loads settings, prepares the store and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::inbound::http::health::HealthState;
use bookshelf::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use bookshelf::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(bind_addr);

    if let Some(url) = settings.database_url() {
        let pool = connect(url, settings.pool_max_size()).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}

/// Apply pending migrations and open the connection pool.
async fn connect(url: &str, max_size: u32) -> std::io::Result<DbPool> {
    let migration_url = url.to_owned();
    let applied = web::block(move || run_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?
        .map_err(|e| {
            error!(error = %e, "schema setup failed");
            std::io::Error::other(e)
        })?;
    info!(applied, "schema ready");

    DbPool::new(PoolConfig::new(url).with_max_size(max_size))
        .await
        .map_err(|e| {
            error!(error = %e, "database pool setup failed");
            std::io::Error::other(e)
        })
}
