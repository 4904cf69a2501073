/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Liveness banner and health check endpoints
/// - `users`: User CRUD endpoints
/// - `tasks`: Per-user task CRUD endpoints

pub mod health;
pub mod tasks;
pub mod users;
