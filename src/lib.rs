//! User Service
//!
//! A CRUD API for user accounts with:
//! - Field validation and normalization before every write
//! - Argon2 password hashing
//! - PostgreSQL persistence with an in-memory fallback
//! - A uniform JSON response envelope

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

use api::state::AppState;
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};

/// Create the application state with all services initialized
///
/// Connects to PostgreSQL when a database URL is configured; otherwise the
/// service runs against the in-memory store and loses data on restart.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    match config.database_url() {
        Some(database_url) => {
            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            let repository = Arc::new(PostgresUserRepository::new(pool));
            let service = Arc::new(UserService::new(repository, hasher));

            Ok(AppState::new(service))
        }
        None => {
            warn!("No database URL configured, using in-memory storage");

            let repository = Arc::new(InMemoryUserRepository::new());
            let service = Arc::new(UserService::new(repository, hasher));

            Ok(AppState::new(service))
        }
    }
}
