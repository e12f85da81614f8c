//! Repository layer for the document store.
//!
//! Methods are organized across submodules by document kind:
//! - `matches.rs` - match documents (innings logs, live overlay)
//! - `users.rs` - user records used for display-name resolution

mod matches;
mod users;

use sqlx::sqlite::SqlitePool;

/// Repository for document store operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Decode a stored JSON document, surfacing failures as a sqlx decode error.
fn decode_document<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T, sqlx::Error> {
    serde_json::from_str(raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

fn encode_document<T: serde::Serialize>(value: &T) -> Result<String, sqlx::Error> {
    serde_json::to_string(value)
        .map_err(|e| sqlx::Error::Protocol(format!("failed to encode document: {}", e)))
}
