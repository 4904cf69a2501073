//! # Taskboard Shared Library
//!
//! This crate contains the data layer shared by the Taskboard API server:
//! connection pool management, schema bootstrap, and the User/Task models
//! with their CRUD operations.
//!
//! ## Module Organization
//!
//! - `db`: SQLite pool and schema bootstrap
//! - `models`: Database models and data structures

pub mod db;
pub mod models;

/// Current version of the taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
