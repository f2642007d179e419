//! Persistent candidate store on SQLite. Accepted candidates are
//! upserted here; `invite_sent` is the durability checkpoint that keeps
//! retries from re-inviting anyone.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::{CandidateRow, Invitee};

pub mod rejections;

pub struct CandidateStore {
    pool: SqlitePool,
}

impl CandidateStore {
    /// Opens (creating if missing) the store at the given path.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        // Single-process, single-threaded access model: one connection
        // is all the pipeline ever needs.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        info!("Candidate store opened at {}", path.display());
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    /// In-memory store for tests.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS candidates (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                job_title TEXT NOT NULL,
                invite_sent INTEGER NOT NULL DEFAULT 0,
                invited_at TEXT
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Inserts or replaces the candidate record. A replaced row resets
    /// `invite_sent`; the pipeline marks it again in the same pass.
    pub async fn upsert(&self, invitee: &Invitee) -> Result<(), AppError> {
        sqlx::query(
            "INSERT OR REPLACE INTO candidates (id, name, email, job_title) VALUES (?, ?, ?, ?)",
        )
        .bind(&invitee.id)
        .bind(&invitee.name)
        .bind(&invitee.email)
        .bind(&invitee.job_title)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Flips the invite checkpoint. Candidates with this flag set are
    /// skipped as resolved on every later run.
    pub async fn mark_invited(&self, candidate_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE candidates SET invite_sent = 1, invited_at = datetime('now') WHERE id = ?",
        )
        .bind(candidate_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn is_invited(&self, candidate_id: &str) -> Result<bool, AppError> {
        let invited: Option<bool> =
            sqlx::query_scalar("SELECT invite_sent FROM candidates WHERE id = ?")
                .bind(candidate_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(invited.unwrap_or(false))
    }

    /// Full-row accessor for reporting and inspection; the pipeline
    /// itself only consults `is_invited`.
    #[allow(dead_code)]
    pub async fn get(&self, candidate_id: &str) -> Result<Option<CandidateRow>, AppError> {
        let row = sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = ?")
            .bind(candidate_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitee(id: &str) -> Invitee {
        Invitee {
            id: id.to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            job_title: "Rust Engineer".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_defaults_to_not_invited() {
        let store = CandidateStore::in_memory().await.unwrap();
        store.upsert(&invitee("jdoe")).await.unwrap();

        let row = store.get("jdoe").await.unwrap().unwrap();
        assert_eq!(row.name, "Jane Doe");
        assert_eq!(row.email, "jane@example.com");
        assert_eq!(row.job_title, "Rust Engineer");
        assert!(!row.invite_sent);
        assert!(row.invited_at.is_none());
        assert!(!store.is_invited("jdoe").await.unwrap());
    }

    #[tokio::test]
    async fn mark_invited_sets_checkpoint() {
        let store = CandidateStore::in_memory().await.unwrap();
        store.upsert(&invitee("jdoe")).await.unwrap();
        store.mark_invited("jdoe").await.unwrap();

        assert!(store.is_invited("jdoe").await.unwrap());
        let row = store.get("jdoe").await.unwrap().unwrap();
        assert!(row.invite_sent);
        assert!(row.invited_at.is_some());
    }

    #[tokio::test]
    async fn unknown_candidate_is_not_invited() {
        let store = CandidateStore::in_memory().await.unwrap();
        assert!(!store.is_invited("nobody").await.unwrap());
        assert!(store.get("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_existing_row() {
        let store = CandidateStore::in_memory().await.unwrap();
        store.upsert(&invitee("jdoe")).await.unwrap();
        store.mark_invited("jdoe").await.unwrap();

        let updated = Invitee {
            email: "jane.doe@new.example.com".to_string(),
            ..invitee("jdoe")
        };
        store.upsert(&updated).await.unwrap();

        let row = store.get("jdoe").await.unwrap().unwrap();
        assert_eq!(row.email, "jane.doe@new.example.com");
        // INSERT OR REPLACE resets the checkpoint; the pipeline always
        // re-marks in the same pass.
        assert!(!row.invite_sent);
    }
}
