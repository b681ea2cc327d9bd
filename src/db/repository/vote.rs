//! Repository for vote database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::super::models::{verdict_choice_from_str, verdict_choice_to_string};
use super::super::DbError;
use crate::model::{VerdictChoice, VoteStats};

/// Repository for vote operations
#[derive(Clone)]
pub struct VoteRepository {
    pool: PgPool,
}

impl VoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cast or replace a user's vote on a case.
    ///
    /// Upsert on (case_id, user_id) replaces the original delete-then-insert
    /// sequence, so concurrent casts cannot produce duplicate rows.
    pub async fn cast(
        &self,
        case_id: i64,
        user_id: Uuid,
        choice: VerdictChoice,
    ) -> Result<(), DbError> {
        sqlx::query(
            r#"
            INSERT INTO votes (case_id, user_id, vote)
            VALUES ($1, $2, $3)
            ON CONFLICT (case_id, user_id)
            DO UPDATE SET vote = EXCLUDED.vote, created_at = NOW()
            "#,
        )
        .bind(case_id)
        .bind(user_id)
        .bind(verdict_choice_to_string(&choice))
        .execute(&self.pool)
        .await?;

        tracing::debug!(case_id = %case_id, user_id = %user_id, "Vote cast");

        Ok(())
    }

    /// Tally votes for a case grouped by choice
    pub async fn stats(&self, case_id: i64) -> Result<VoteStats, DbError> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT vote, COUNT(*) FROM votes WHERE case_id = $1 GROUP BY vote")
                .bind(case_id)
                .fetch_all(&self.pool)
                .await?;

        let counts = rows
            .into_iter()
            .map(|(vote, count)| {
                verdict_choice_from_str(&vote)
                    .map(|choice| (choice, count))
                    .map_err(DbError::Serialization)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VoteStats::tally(counts))
    }
}
