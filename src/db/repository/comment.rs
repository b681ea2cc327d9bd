//! Repository for comment database operations

use sqlx::PgPool;

use super::super::models::CommentRow;
use super::super::DbError;
use crate::model::Comment;

/// Repository for comment operations
#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a comment and return the stored row
    pub async fn insert(
        &self,
        case_id: i64,
        nickname: &str,
        comment: &str,
    ) -> Result<Comment, DbError> {
        let row: CommentRow = sqlx::query_as(
            r#"
            INSERT INTO comments (case_id, nickname, comment)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(case_id)
        .bind(nickname)
        .bind(comment)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(case_id = %case_id, comment_id = %row.id, "Inserted comment");

        Ok(row.into_domain())
    }

    /// List comments on a case, oldest first
    pub async fn list_by_case(&self, case_id: i64) -> Result<Vec<Comment>, DbError> {
        let rows: Vec<CommentRow> =
            sqlx::query_as("SELECT * FROM comments WHERE case_id = $1 ORDER BY created_at ASC")
                .bind(case_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(CommentRow::into_domain).collect())
    }
}
