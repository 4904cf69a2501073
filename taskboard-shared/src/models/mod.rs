/// Database models for Taskboard
///
/// This module contains the two persisted entities and their CRUD
/// operations.
///
/// # Models
///
/// - `user`: Users, each owning zero or more tasks
/// - `task`: Tasks, always belonging to exactly one user
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
/// println!("Created user {}", user.id);
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
