//! Migrate command - applies pending database migrations

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging;
use crate::infrastructure::migrations::{user_migrations, PostgresMigrator};

/// Apply all pending migrations and report the resulting schema version
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let database_url = config
        .database_url()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for migrations"))?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&database_url)
        .await?;

    let migrator = PostgresMigrator::new(pool);
    migrator.run_all(&user_migrations()).await?;

    let version = migrator.current_version().await?;
    info!("Schema at version {:?}", version);

    Ok(())
}
