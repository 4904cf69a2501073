/// User endpoints
///
/// This module provides the user half of the CRUD surface:
/// - List users (with their tasks attached)
/// - Create user
/// - Rename user
/// - Delete user (cascades to the user's tasks)
///
/// # Endpoints
///
/// - `GET /users` - List all users with tasks
/// - `POST /users` - Create a new user
/// - `PUT /users/:id` - Rename a user
/// - `DELETE /users/:id` - Delete a user and their tasks

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::user::{CreateUser, UpdateUser, User, UserWithTasks};
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name (required, non-empty, unique)
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// Update user request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name (required, non-empty, unique)
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

/// List all users
///
/// # Endpoint
///
/// ```text
/// GET /users
/// ```
///
/// # Response
///
/// `200 OK` with every user and their tasks eagerly attached:
///
/// ```json
/// [
///   { "id": 1, "name": "alice", "tasks": [ { "id": 1, "title": "buy milk", "completed": false, "user_id": 1 } ] }
/// ]
/// ```
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserWithTasks>>> {
    let users = User::list_with_tasks(&state.db).await?;
    Ok(Json(users))
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "name": "alice" }
/// ```
///
/// # Response
///
/// `201 Created` with the new user and an empty task list.
///
/// # Errors
///
/// - `400 Bad Request`: name missing or empty
/// - `409 Conflict`: a user with this name already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserWithTasks>)> {
    req.validate()?;
    let name = req.name.ok_or_else(|| ApiError::missing_field("name"))?;

    // No pre-read for duplicates: the unique index decides, so concurrent
    // creates with the same name cannot both win.
    let user = User::create(&state.db, CreateUser { name }).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserWithTasks {
            id: user.id,
            name: user.name,
            tasks: Vec::new(),
        }),
    ))
}

/// Rename a user
///
/// Task relationships are unaffected by the rename.
///
/// # Endpoint
///
/// ```text
/// PUT /users/:id
/// Content-Type: application/json
///
/// { "name": "alicia" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: name missing or empty
/// - `404 Not Found`: no user with this id
/// - `409 Conflict`: the new name belongs to another user
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    req.validate()?;
    let name = req.name.ok_or_else(|| ApiError::missing_field("name"))?;

    let user = User::rename(&state.db, id, UpdateUser { name })
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Delete a user
///
/// Removes the user and, through the store's cascade, all of their tasks
/// in one operation.
///
/// # Endpoint
///
/// ```text
/// DELETE /users/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = User::delete(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
