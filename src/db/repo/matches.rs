//! Match document operations.

use super::{decode_document, encode_document, Repository};
use crate::domain::{Match, MatchId, MatchStatus};
use sqlx::Row;
use tracing::warn;

impl Repository {
    /// Insert or replace a match document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be encoded or the write fails.
    pub async fn upsert_match(&self, m: &Match) -> Result<(), sqlx::Error> {
        let document = encode_document(m)?;
        sqlx::query(
            r#"
            INSERT INTO matches (id, status, document, updated_ms)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                status = excluded.status,
                document = excluded.document,
                updated_ms = excluded.updated_ms
            "#,
        )
        .bind(m.id.as_str())
        .bind(m.status.as_str())
        .bind(document)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Fetch one match document by id.
    ///
    /// # Errors
    /// Returns `sqlx::Error::Decode` if the stored document is malformed.
    pub async fn get_match(&self, id: &MatchId) -> Result<Option<Match>, sqlx::Error> {
        let row = sqlx::query("SELECT document FROM matches WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(self.pool())
            .await?;

        row.map(|r| decode_document::<Match>(&r.get::<String, _>("document")))
            .transpose()
    }

    /// List matches, most recently updated first, optionally filtered by status.
    ///
    /// Malformed documents are skipped with a warning.
    pub async fn list_matches(
        &self,
        status: Option<MatchStatus>,
    ) -> Result<Vec<Match>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, document
            FROM matches
            WHERE (? IS NULL OR status = ?)
            ORDER BY updated_ms DESC, id ASC
            "#,
        )
        .bind(status.map(|s| s.as_str()))
        .bind(status.map(|s| s.as_str()))
        .fetch_all(self.pool())
        .await?;

        let matches = rows
            .iter()
            .filter_map(|row| {
                let id: String = row.get("id");
                let document: String = row.get("document");
                match decode_document::<Match>(&document) {
                    Ok(m) => Some(m),
                    Err(e) => {
                        warn!(match_id = %id, error = %e, "Skipping malformed match document");
                        None
                    }
                }
            })
            .collect();

        Ok(matches)
    }
}
