//! Case service for submission, listing and deletion

use uuid::Uuid;

use crate::db::models::{ListCasesQuery, PaginatedCases};
use crate::db::repository::CaseRepository;
use crate::db::DbError;
use crate::model::{Case, CaseInput};

#[derive(Debug, thiserror::Error)]
pub enum CaseServiceError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("Case {0} does not belong to the requesting user")]
    NotOwner(i64),
}

/// Service for managing cases
pub struct CaseService {
    cases: CaseRepository,
}

impl CaseService {
    pub fn new(cases: CaseRepository) -> Self {
        Self { cases }
    }

    /// Submit a new case. The case starts pending with a zeroed view count;
    /// both writes happen in one transaction.
    pub async fn create(&self, input: CaseInput, user_id: Uuid) -> Result<Case, CaseServiceError> {
        let case = self.cases.create(&input, user_id).await?;
        tracing::info!(case_id = %case.id, user_id = %user_id, "Case submitted");
        Ok(case)
    }

    /// Fetch a case and count the view
    pub async fn get(&self, id: i64) -> Result<Case, CaseServiceError> {
        Ok(self.cases.get_and_touch(id).await?)
    }

    /// List cases with pagination and an optional category filter
    pub async fn list(&self, query: ListCasesQuery) -> Result<PaginatedCases, CaseServiceError> {
        Ok(self.cases.list(query).await?)
    }

    /// Delete a case. Only the submitter may delete it.
    pub async fn delete(&self, id: i64, user_id: Uuid) -> Result<(), CaseServiceError> {
        let case = self.cases.get_by_id(id).await?;

        if case.user_id != user_id {
            return Err(CaseServiceError::NotOwner(id));
        }

        self.cases.delete(id).await?;
        tracing::info!(case_id = %id, user_id = %user_id, "Case deleted");
        Ok(())
    }

    /// List the cases submitted by a user
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Case>, CaseServiceError> {
        Ok(self.cases.list_by_user(user_id).await?)
    }
}
