//! User CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use super::state::AppState;
use super::types::{ApiError, ApiResponse, Json};
use crate::domain::user::{Role, UserStatus};
use crate::domain::{DomainError, User};

/// Incoming user representation for create and update
///
/// `password` defaults to empty so update requests can omit it to keep the
/// stored one. Omitted or empty-string role and status fall back to the
/// store defaults.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<Role>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<UserStatus>,
}

/// Treat `""` the same as an absent field, so clients sending empty
/// enumerated fields get the defaults instead of a parse rejection
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl UserPayload {
    fn into_user(self) -> User {
        User::new(self.name, self.email, self.password, self.role, self.status)
    }
}

/// Create the user routes
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| DomainError::invalid_id("Invalid ID format").into())
}

async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = state.user_service.list().await?;

    Ok(Json(ApiResponse::success(
        "Users retrieved successfully",
        users,
    )))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let user = state.user_service.get(id).await?;

    Ok(Json(ApiResponse::success(
        "User retrieved successfully",
        user,
    )))
}

async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_service.create(payload.into_user()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;

    let mut user = payload.into_user();
    user.set_id(id);

    let user = state.user_service.update(user).await?;

    Ok(Json(ApiResponse::success(
        "User updated successfully",
        user,
    )))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    state.user_service.delete(id).await?;

    Ok(Json(ApiResponse::<()>::message_only(
        "User deleted successfully",
    )))
}
