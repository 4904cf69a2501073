/// Task endpoints, scoped under a user
///
/// Every route is keyed by the owning user's id; update and delete are
/// additionally keyed by the task id, and the pair must match for the
/// operation to touch anything. A task that exists but belongs to a
/// different user answers exactly like a missing one.
///
/// # Endpoints
///
/// - `GET /users/:id/tasks` - List a user's tasks
/// - `POST /users/:id/tasks` - Create a task for a user
/// - `PUT /users/:id/tasks/:task_id` - Update a user's task
/// - `DELETE /users/:id/tasks/:task_id` - Delete a user's task

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
use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};
use taskboard_shared::models::user::User;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title (required, non-empty)
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
}

/// Update task request
///
/// Partial: at least one field must be supplied; the other keeps its
/// current value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New title (non-empty when supplied)
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

/// List a user's tasks
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn list_tasks(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let tasks = Task::list_for_user(&state.db, user_id).await?;
    Ok(Json(tasks))
}

/// Create a task for a user
///
/// The new task starts with `completed` set to false.
///
/// # Endpoint
///
/// ```text
/// POST /users/:id/tasks
/// Content-Type: application/json
///
/// { "title": "buy milk" }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
/// - `400 Bad Request`: title missing or empty
pub async fn create_task(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    // The parent is checked before the payload: a request against a
    // missing user is Not-Found even when the title is also bad.
    if !User::exists(&state.db, user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    req.validate()?;
    let title = req.title.ok_or_else(|| ApiError::missing_field("title"))?;

    let task = Task::create_for_user(&state.db, user_id, CreateTask { title }).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a user's task
///
/// Accepts a partial update of `title` and/or `completed`; at least one
/// must be supplied. Unspecified fields are left unchanged.
///
/// # Errors
///
/// - `400 Bad Request`: neither title nor completed supplied, or an empty
///   title
/// - `404 Not Found`: no task with this id belongs to this user
pub async fn update_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    req.validate()?;

    let update = UpdateTask {
        title: req.title,
        completed: req.completed,
    };
    if update.is_empty() {
        return Err(ApiError::BadRequest(
            "No update data provided (title or completed)".to_string(),
        ));
    }

    let task = Task::update_for_user(&state.db, user_id, task_id, update)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found for this user".to_string()))?;

    Ok(Json(task))
}

/// Delete a user's task
///
/// # Errors
///
/// - `404 Not Found`: no task with this id belongs to this user
pub async fn delete_task(
    State(state): State<AppState>,
    Path((user_id, task_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    let deleted = Task::delete_for_user(&state.db, user_id, task_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Task not found for this user".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
