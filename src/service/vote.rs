//! Vote service with per-case tallies

use uuid::Uuid;

use crate::db::repository::{CaseRepository, VoteRepository};
use crate::db::DbError;
use crate::model::{VerdictChoice, VoteStats};

#[derive(Debug, thiserror::Error)]
pub enum VoteServiceError {
    #[error("Case not found: {0}")]
    CaseNotFound(i64),

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

/// Service for casting votes and reading tallies
pub struct VoteService {
    votes: VoteRepository,
    cases: CaseRepository,
}

impl VoteService {
    pub fn new(votes: VoteRepository, cases: CaseRepository) -> Self {
        Self { votes, cases }
    }

    /// Cast or replace the user's vote, returning the updated tally
    pub async fn cast(
        &self,
        case_id: i64,
        user_id: Uuid,
        choice: VerdictChoice,
    ) -> Result<VoteStats, VoteServiceError> {
        self.ensure_case_exists(case_id).await?;
        self.votes.cast(case_id, user_id, choice).await?;
        Ok(self.votes.stats(case_id).await?)
    }

    /// Current tally for a case
    pub async fn stats(&self, case_id: i64) -> Result<VoteStats, VoteServiceError> {
        self.ensure_case_exists(case_id).await?;
        Ok(self.votes.stats(case_id).await?)
    }

    async fn ensure_case_exists(&self, case_id: i64) -> Result<(), VoteServiceError> {
        if !self.cases.exists(case_id).await? {
            return Err(VoteServiceError::CaseNotFound(case_id));
        }
        Ok(())
    }
}
