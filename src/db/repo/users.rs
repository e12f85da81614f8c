//! User record operations.

use super::Repository;
use crate::domain::{PlayerUid, User};
use sqlx::Row;

impl Repository {
    /// Insert or replace a user record.
    pub async fn upsert_user(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (uid, name, username)
            VALUES (?, ?, ?)
            ON CONFLICT(uid) DO UPDATE SET
                name = excluded.name,
                username = excluded.username
            "#,
        )
        .bind(user.uid.as_str())
        .bind(&user.name)
        .bind(&user.username)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Fetch the users among `uids`; unknown uids are simply absent.
    pub async fn query_users(&self, uids: &[PlayerUid]) -> Result<Vec<User>, sqlx::Error> {
        if uids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; uids.len()].join(", ");
        let sql = format!(
            "SELECT uid, name, username FROM users WHERE uid IN ({}) ORDER BY uid ASC",
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for uid in uids {
            query = query.bind(uid.as_str());
        }
        let rows = query.fetch_all(self.pool()).await?;

        Ok(rows
            .iter()
            .map(|row| User {
                uid: PlayerUid::new(row.get::<String, _>("uid")),
                name: row.get("name"),
                username: row.get("username"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{init_db, Repository};
    use crate::domain::{PlayerUid, User};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_upsert_and_query_users() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let repo = Repository::new(init_db(&db_path).await.unwrap());

        repo.upsert_user(&User::new("a", "Asha", "asha")).await.unwrap();
        repo.upsert_user(&User::new("b", "Bilal", "bk")).await.unwrap();
        repo.upsert_user(&User::new("a", "Asha Rao", "asha")).await.unwrap();

        let users = repo
            .query_users(&[PlayerUid::from("a"), PlayerUid::from("zz")])
            .await
            .unwrap();
        assert_eq!(users, vec![User::new("a", "Asha Rao", "asha")]);
        assert!(repo.query_users(&[]).await.unwrap().is_empty());
    }
}
