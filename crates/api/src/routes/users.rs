//! User route handlers (relational store).

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};

use multibase_core::{Email, UserId};

use super::MessageResponse;
use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// Create the user routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/{id}", get(get_user).delete(delete_user))
        .route("/{id}/restore", patch(restore_user))
}

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A user as rendered to callers. The password column never leaves the
/// server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Response body for the restore endpoint.
///
/// Restore never fails over HTTP: a missing user is reported inside a 200
/// body as `{"error": ...}` instead of a 404. Asymmetric with every other
/// endpoint, and kept that way on purpose.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RestoreResponse {
    Restored { message: String },
    Missing { error: String },
}

/// Create a new user.
///
/// # Errors
///
/// Returns 400 if the email is malformed or already registered.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let email = Email::parse(&body.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    let user = UserRepository::new(state.pool())
        .create(&body.name, &email, &body.password)
        .await?;

    Ok(Json(user.into()))
}

/// List all active users.
///
/// # Errors
///
/// Returns 500 if the database query fails.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = UserRepository::new(state.pool()).list_active().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Get a single active user by id.
///
/// # Errors
///
/// Returns 404 if the user does not exist or is soft-deleted.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserRepository::new(state.pool())
        .get_active(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".to_owned()))?;

    Ok(Json(user.into()))
}

/// Soft-delete a user.
///
/// # Errors
///
/// Returns 404 if no user with that id exists (active or not).
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    UserRepository::new(state.pool())
        .soft_delete(UserId::new(id))
        .await?;

    Ok(Json(MessageResponse::new("user soft-deleted")))
}

/// Restore a soft-deleted user.
///
/// # Errors
///
/// Returns 500 only on database failure; a missing user is a 200 with an
/// error body.
pub async fn restore_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestoreResponse>, AppError> {
    let restored = UserRepository::new(state.pool())
        .restore(UserId::new(id))
        .await?;

    let response = if restored {
        RestoreResponse::Restored {
            message: "user restored".to_owned(),
        }
    } else {
        RestoreResponse::Missing {
            error: "user not found".to_owned(),
        }
    };

    Ok(Json(response))
}
