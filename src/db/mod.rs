//! SQLite document store for match and user records.
//!
//! This module provides:
//! - Database initialization and migrations
//! - SQLite pragma configuration
//! - Repository layer for match and user documents

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
