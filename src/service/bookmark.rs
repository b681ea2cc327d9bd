//! Bookmark service with toggle semantics

use uuid::Uuid;

use crate::db::repository::{BookmarkRepository, CaseRepository};
use crate::db::DbError;
use crate::model::Case;

#[derive(Debug, thiserror::Error)]
pub enum BookmarkServiceError {
    #[error("Case not found: {0}")]
    CaseNotFound(i64),

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

/// Service for managing bookmarks
pub struct BookmarkService {
    bookmarks: BookmarkRepository,
    cases: CaseRepository,
}

impl BookmarkService {
    pub fn new(bookmarks: BookmarkRepository, cases: CaseRepository) -> Self {
        Self { bookmarks, cases }
    }

    /// Toggle the user's bookmark on a case.
    /// Returns true if the case is now bookmarked.
    pub async fn toggle(&self, case_id: i64, user_id: Uuid) -> Result<bool, BookmarkServiceError> {
        if !self.cases.exists(case_id).await? {
            return Err(BookmarkServiceError::CaseNotFound(case_id));
        }

        Ok(self.bookmarks.toggle(case_id, user_id).await?)
    }

    /// Check whether the user has bookmarked a case
    pub async fn is_bookmarked(
        &self,
        case_id: i64,
        user_id: Uuid,
    ) -> Result<bool, BookmarkServiceError> {
        Ok(self.bookmarks.exists(case_id, user_id).await?)
    }

    /// List the cases the user has bookmarked
    pub async fn list_cases(&self, user_id: Uuid) -> Result<Vec<Case>, BookmarkServiceError> {
        Ok(self.bookmarks.list_cases(user_id).await?)
    }
}
