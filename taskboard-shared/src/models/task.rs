/// Task model and database operations
///
/// Tasks always belong to exactly one user. Every operation that mutates
/// or removes a task is keyed by the `(user_id, task_id)` pair, so a task
/// can never be reached through a user that does not own it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id        INTEGER PRIMARY KEY AUTOINCREMENT,
///     title     TEXT NOT NULL,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id   INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::task::{CreateTask, Task, UpdateTask};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example(user_id: i64) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create_for_user(&pool, user_id, CreateTask {
///     title: "buy milk".to_string(),
/// })
/// .await?;
///
/// // Mark it done, leaving the title untouched
/// Task::update_for_user(&pool, user_id, task.id, UpdateTask {
///     title: None,
///     completed: Some(true),
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model representing a single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (auto-assigned)
    pub id: i64,

    /// Task title
    pub title: String,

    /// Completion flag, false on creation
    pub completed: bool,

    /// ID of the owning user
    pub user_id: i64,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (must be non-empty)
    pub title: String,
}

/// Input for partially updating an existing task
///
/// Fields left as None keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title
    pub title: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

impl UpdateTask {
    /// Returns true when no field is set for update
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

impl Task {
    /// Creates a new task owned by the given user
    ///
    /// The completion flag always starts false. The caller is responsible
    /// for checking that the user exists; an insert against a missing user
    /// surfaces as a foreign-key violation.
    pub async fn create_for_user(
        pool: &SqlitePool,
        user_id: i64,
        data: CreateTask,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, completed, user_id)
            VALUES (?1, FALSE, ?2)
            RETURNING id, title, completed, user_id
            "#,
        )
        .bind(data.title)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks owned by the given user, in insertion order
    pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, completed, user_id
            FROM tasks
            WHERE user_id = ?1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Partially updates a task identified by `(user_id, task_id)`
    ///
    /// Fields left as None keep their current value; the update applies
    /// all supplied fields in one statement or none at all. The ownership
    /// check is part of the WHERE clause: a task belonging to a different
    /// user is indistinguishable from a missing one.
    ///
    /// # Returns
    ///
    /// The updated task, or None if no task with this ID belongs to this
    /// user
    pub async fn update_for_user(
        pool: &SqlitePool,
        user_id: i64,
        task_id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = COALESCE(?1, title),
                completed = COALESCE(?2, completed)
            WHERE id = ?3 AND user_id = ?4
            RETURNING id, title, completed, user_id
            "#,
        )
        .bind(data.title)
        .bind(data.completed)
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Deletes a task identified by `(user_id, task_id)`
    ///
    /// # Returns
    ///
    /// True if the task was deleted, false if no task with this ID belongs
    /// to this user
    pub async fn delete_for_user(
        pool: &SqlitePool,
        user_id: i64,
        task_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1 AND user_id = ?2")
            .bind(task_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default_is_empty() {
        let update = UpdateTask::default();
        assert!(update.is_empty());
        assert!(update.title.is_none());
        assert!(update.completed.is_none());
    }

    #[test]
    fn test_update_task_with_any_field_is_not_empty() {
        let update = UpdateTask {
            title: Some("new title".to_string()),
            completed: None,
        };
        assert!(!update.is_empty());

        let update = UpdateTask {
            title: None,
            completed: Some(true),
        };
        assert!(!update.is_empty());
    }

    // Integration tests for database operations are in tests/model_tests.rs
}
