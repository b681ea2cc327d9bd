//! Repository for verdict database operations

use sqlx::PgPool;

use super::super::models::{case_status_to_string, verdict_choice_to_string, VerdictRow};
use super::super::DbError;
use crate::model::{CaseStatus, NewVerdict, Verdict};

/// Repository for verdict operations
#[derive(Clone)]
pub struct VerdictRepository {
    pool: PgPool,
}

impl VerdictRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a verdict and mark its case completed in one transaction.
    ///
    /// The UNIQUE constraint on case_id makes this idempotent: if a verdict
    /// already exists for the case, the existing row is returned unchanged.
    pub async fn insert_completing_case(&self, new: &NewVerdict) -> Result<Verdict, DbError> {
        let mut tx = self.pool.begin().await?;

        let inserted: Option<VerdictRow> = sqlx::query_as(
            r#"
            INSERT INTO verdicts (case_id, verdict, reasoning, legal_basis, ai_comment)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (case_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(new.case_id)
        .bind(verdict_choice_to_string(&new.verdict))
        .bind(&new.reasoning)
        .bind(&new.legal_basis)
        .bind(&new.ai_comment)
        .fetch_optional(&mut *tx)
        .await?;

        let row = match inserted {
            Some(row) => row,
            // Lost the race to a concurrent generation; keep the winner
            None => sqlx::query_as("SELECT * FROM verdicts WHERE case_id = $1")
                .bind(new.case_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::NotFound(new.case_id.to_string()))?,
        };

        sqlx::query("UPDATE cases SET status = $2 WHERE id = $1")
            .bind(new.case_id)
            .bind(case_status_to_string(&CaseStatus::Completed))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(case_id = %new.case_id, "Persisted verdict and completed case");

        row.into_domain().map_err(DbError::Serialization)
    }

    /// Find the verdict for a case, if one exists
    pub async fn find_by_case_id(&self, case_id: i64) -> Result<Option<Verdict>, DbError> {
        let row: Option<VerdictRow> = sqlx::query_as("SELECT * FROM verdicts WHERE case_id = $1")
            .bind(case_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_domain().map_err(DbError::Serialization))
            .transpose()
    }
}
