//! Repository for bookmark database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::super::models::CaseRow;
use super::super::DbError;
use crate::model::Case;

/// Repository for bookmark operations
#[derive(Clone)]
pub struct BookmarkRepository {
    pool: PgPool,
}

impl BookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a bookmark for (case, user).
    /// Returns true if the case is now bookmarked, false if the bookmark was removed.
    pub async fn toggle(&self, case_id: i64, user_id: Uuid) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM bookmarks WHERE case_id = $1 AND user_id = $2")
            .bind(case_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let bookmarked = if removed == 0 {
            sqlx::query(
                r#"
                INSERT INTO bookmarks (case_id, user_id)
                VALUES ($1, $2)
                ON CONFLICT (case_id, user_id) DO NOTHING
                "#,
            )
            .bind(case_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
            true
        } else {
            false
        };

        tx.commit().await?;

        tracing::debug!(case_id = %case_id, user_id = %user_id, bookmarked, "Bookmark toggled");

        Ok(bookmarked)
    }

    /// Check if a user has bookmarked a case
    pub async fn exists(&self, case_id: i64, user_id: Uuid) -> Result<bool, DbError> {
        let result: Option<(i32,)> =
            sqlx::query_as("SELECT 1 FROM bookmarks WHERE case_id = $1 AND user_id = $2")
                .bind(case_id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(result.is_some())
    }

    /// List the cases a user has bookmarked, most recently bookmarked first
    pub async fn list_cases(&self, user_id: Uuid) -> Result<Vec<Case>, DbError> {
        let rows: Vec<CaseRow> = sqlx::query_as(
            r#"
            SELECT c.*, COALESCE(v.count, 0) AS view_count
            FROM bookmarks b
            JOIN cases c ON c.id = b.case_id
            LEFT JOIN view_counts v ON v.case_id = c.id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_domain().map_err(DbError::Serialization))
            .collect()
    }
}
