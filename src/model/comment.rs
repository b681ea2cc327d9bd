//! Comment domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A juror comment on a case
///
/// The nickname is generated per submission and is not tied to any identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: i64,
    pub case_id: i64,
    pub nickname: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
