/// Database schema bootstrap
///
/// The schema is created automatically on first run; there is no separate
/// migration tooling. `init_schema` is idempotent and safe to call on
/// every startup.
///
/// # Tables
///
/// - `users`: `id` (autoincrement), `name` (unique, non-empty by
///   application contract)
/// - `tasks`: `id` (autoincrement), `title`, `completed` (defaults false),
///   `user_id` (foreign key with `ON DELETE CASCADE`)
///
/// Uniqueness of `users.name` and the cascade on `tasks.user_id` are
/// enforced by the store itself, so concurrent requests race only inside
/// the database rather than against an in-process check.
///
/// # Example
///
/// ```no_run
/// use taskboard_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskboard_shared::db::schema::init_schema;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: "sqlite://taskboard.db".to_string(),
///     ..Default::default()
/// })
/// .await?;
///
/// init_schema(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::{debug, info};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
)
"#;

const CREATE_TASKS: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    title     TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    user_id   INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
)
"#;

const CREATE_TASKS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)";

/// Creates all tables and indexes if they do not exist yet
///
/// # Errors
///
/// Returns an error if a DDL statement fails or the database connection
/// is lost.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Ensuring database schema");

    sqlx::query(CREATE_USERS).execute(pool).await?;
    debug!("users table ready");

    sqlx::query(CREATE_TASKS).execute(pool).await?;
    sqlx::query(CREATE_TASKS_USER_INDEX).execute(pool).await?;
    debug!("tasks table ready");

    info!("Database schema is up to date");
    Ok(())
}
