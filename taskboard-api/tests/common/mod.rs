/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database with the schema applied
/// - Router construction with test configuration
/// - Seed helpers for users and tasks
/// - Request/response helpers

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use sqlx::SqlitePool;
use taskboard_api::app::{build_router, AppState};
use taskboard_api::config::{ApiConfig, Config, DatabaseConfig};
use taskboard_shared::db::pool::create_pool;
use taskboard_shared::db::schema::init_schema;
use taskboard_shared::models::task::{CreateTask, Task};
use taskboard_shared::models::user::{CreateUser, User};

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    ///
    /// The pool is pinned to one connection so every request sees the same
    /// in-memory database.
    pub async fn new() -> anyhow::Result<Self> {
        let db = create_pool(taskboard_shared::db::pool::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Default::default()
        })
        .await?;

        init_schema(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Helper to create a test user directly through the model layer
pub async fn create_test_user(ctx: &TestContext, name: &str) -> anyhow::Result<User> {
    let user = User::create(
        &ctx.db,
        CreateUser {
            name: name.to_string(),
        },
    )
    .await?;

    Ok(user)
}

/// Helper to create a test task directly through the model layer
pub async fn create_test_task(ctx: &TestContext, user_id: i64, title: &str) -> anyhow::Result<Task> {
    let task = Task::create_for_user(
        &ctx.db,
        user_id,
        CreateTask {
            title: title.to_string(),
        },
    )
    .await?;

    Ok(task)
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a body-less request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
