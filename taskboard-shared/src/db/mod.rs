/// Database layer
///
/// This module provides SQLite connection pool management and schema
/// bootstrap:
///
/// - `pool`: Connection pool creation, health check, graceful close
/// - `schema`: Table creation on first run

pub mod pool;
pub mod schema;
