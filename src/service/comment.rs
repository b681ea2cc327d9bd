//! Comment service with push notification dispatch
//!
//! Comment insertion triggers the notification flow; dispatch runs on a
//! spawned task so the HTTP response does not wait on FCM.

use std::sync::Arc;

use crate::db::repository::{CaseRepository, CommentRepository};
use crate::db::DbError;
use crate::model::Comment;
use crate::service::nickname;
use crate::service::push::{PushError, PushService};

#[derive(Debug, thiserror::Error)]
pub enum CommentServiceError {
    #[error("Case not found: {0}")]
    CaseNotFound(i64),

    #[error("Comment text is empty")]
    EmptyComment,

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}

/// Service for juror comments
pub struct CommentService {
    comments: CommentRepository,
    cases: CaseRepository,
    push: Option<Arc<PushService>>,
}

impl CommentService {
    pub fn new(
        comments: CommentRepository,
        cases: CaseRepository,
        push: Option<Arc<PushService>>,
    ) -> Self {
        Self {
            comments,
            cases,
            push,
        }
    }

    /// Add a comment under a freshly generated juror nickname and dispatch
    /// a push notification to the case submitter.
    pub async fn add(&self, case_id: i64, text: &str) -> Result<Comment, CommentServiceError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CommentServiceError::EmptyComment);
        }

        let case = self.cases.get_by_id(case_id).await.map_err(|e| match e {
            DbError::NotFound(_) => CommentServiceError::CaseNotFound(case_id),
            other => CommentServiceError::Db(other),
        })?;

        let nickname = nickname::random_name();
        let comment = self.comments.insert(case_id, &nickname, text).await?;

        if let Some(push) = &self.push {
            let push = Arc::clone(push);
            let comment = comment.clone();
            tokio::spawn(async move {
                match push.notify_comment(&case, &comment).await {
                    Ok(()) => {}
                    Err(PushError::MissingDeviceToken) => {
                        tracing::debug!(case_id = %case.id, "No device token, push skipped");
                    }
                    Err(e) => {
                        tracing::warn!(case_id = %case.id, error = %e, "Push notification failed");
                    }
                }
            });
        }

        Ok(comment)
    }

    /// List comments on a case, oldest first
    pub async fn list(&self, case_id: i64) -> Result<Vec<Comment>, CommentServiceError> {
        if !self.cases.exists(case_id).await? {
            return Err(CommentServiceError::CaseNotFound(case_id));
        }

        Ok(self.comments.list_by_case(case_id).await?)
    }
}
