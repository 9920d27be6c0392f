//! # Customer Directory Main Entry Point
//!
//! Loads configuration, initializes telemetry and the database pool, runs
//! pending migrations, and starts the server.

use customer_directory::{config::ConfigLoader, db::init_pool, server::run_server, telemetry};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::new().load()?;

    telemetry::init_tracing(&config)?;

    if let Ok(redacted_json) = config.redacted_json() {
        tracing::info!(config = %redacted_json, "loaded configuration");
    }

    let db = init_pool(&config).await?;

    Migrator::up(&db, None).await?;

    run_server(config, db).await
}
