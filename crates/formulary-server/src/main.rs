//! Formulary Server - Main entry point

use anyhow::Result;
use formulary_common::logging::{init_logging, LogConfig};
use tracing::info;

use formulary_server::{api, config::Config, db};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::builder()
        .log_file_prefix("formulary-server".to_string())
        .filter_directives(
            "formulary_server=debug,tower_http=debug,axum=trace,sqlx=info".to_string(),
        )
        .build();

    // Environment variables take precedence over the built-in defaults
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    init_logging(&log_config)?;

    info!("Starting Formulary Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let pool = db::create_pool(&config.database).await?;
    info!("Database connection pool established");

    api::serve(config, pool).await?;

    info!("Server shut down gracefully");

    Ok(())
}
