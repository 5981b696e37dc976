use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // User CRUD under the API prefix
        .nest("/api", users::create_users_router())
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
