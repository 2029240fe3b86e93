use anyhow::Result;
use charged_up::api::create_routes;
use charged_up::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.is_production() && config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("database ready");

    let app = create_routes(pool, &config.jwt_secret);

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        environment = %config.environment,
        "Charged Up server listening on http://{}",
        config.server_address()
    );
    info!("Health check available at http://{}/api/health", config.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
