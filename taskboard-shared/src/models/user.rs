/// User model and database operations
///
/// Users are the owning side of the User/Task relationship. A user's name
/// is unique across all users, enforced by the unique index on
/// `users.name` rather than an in-process check, so two concurrent creates
/// with the same name race only inside the store and exactly one wins.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id   INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::models::user::{CreateUser, User};
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let user = User::create(&pool, CreateUser { name: "alice".to_string() }).await?;
/// println!("Created user: {}", user.id);
///
/// // Listing attaches each user's tasks eagerly
/// let everyone = User::list_with_tasks(&pool).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::task::Task;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::HashMap;

/// User model representing a task owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (auto-assigned)
    pub id: i64,

    /// Display name, unique across all users
    pub name: String,
}

/// A user together with all of their tasks
///
/// This is the shape returned by the user listing, where tasks are
/// attached eagerly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithTasks {
    /// Unique user ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// All tasks owned by this user, in insertion order
    pub tasks: Vec<Task>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (must be non-empty and unique)
    pub name: String,
}

/// Input for renaming an existing user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name (must be non-empty and unique)
    pub name: String,
}

impl User {
    /// Creates a new user
    ///
    /// The insert goes straight to the store; a duplicate name surfaces as
    /// the database's unique-constraint violation instead of a
    /// check-then-write read.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name)
            VALUES (?1)
            RETURNING id, name
            "#,
        )
        .bind(data.name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether a user with the given ID exists
    ///
    /// Used by the task operations to turn a missing parent into a
    /// Not-Found before touching the tasks table.
    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.is_some())
    }

    /// Lists all users with their tasks eagerly attached
    ///
    /// Two queries: one for the users, one for all tasks, grouped in
    /// memory. Users and tasks both come back in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn list_with_tasks(pool: &SqlitePool) -> Result<Vec<UserWithTasks>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;

        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, completed, user_id FROM tasks ORDER BY id",
        )
        .fetch_all(pool)
        .await?;

        let mut tasks_by_user: HashMap<i64, Vec<Task>> = HashMap::new();
        for task in tasks {
            tasks_by_user.entry(task.user_id).or_default().push(task);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let tasks = tasks_by_user.remove(&user.id).unwrap_or_default();
                UserWithTasks {
                    id: user.id,
                    name: user.name,
                    tasks,
                }
            })
            .collect())
    }

    /// Renames an existing user
    ///
    /// Task ownership is unaffected. Renaming a user to their current name
    /// is a no-op that still succeeds.
    ///
    /// # Returns
    ///
    /// The updated user if found, None if no user has this ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new name belongs to another user (unique constraint violation)
    /// - Database connection fails
    pub async fn rename(
        pool: &SqlitePool,
        id: i64,
        data: UpdateUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = ?1
            WHERE id = ?2
            RETURNING id, name
            "#,
        )
        .bind(data.name)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Deletes a user and, through the foreign-key cascade, all of their
    /// tasks
    ///
    /// A single DELETE statement; the store removes the dependent task
    /// rows in the same operation, so no orphaned tasks can be observed.
    ///
    /// # Returns
    ///
    /// True if the user was deleted, false if no user has this ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
