//! Case domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of a case
///
/// A case starts `pending` and becomes `completed` in the same transaction
/// that persists its verdict. Status is informational only and never gates
/// voting, commenting, or bookmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pending,
    Completed,
}

/// A submitted conflict case
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Case {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// The party bringing the complaint
    pub person_a: String,
    /// The party the complaint is against
    pub person_b: String,
    /// Relationship type (e.g. "dating", "engaged")
    pub relationship: String,
    /// How long the relationship has lasted
    pub duration: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: CaseStatus,
    pub user_id: Uuid,
    /// Device push token for comment notifications, if the submitter opted in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting a new case
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaseInput {
    pub title: String,
    pub description: String,
    pub person_a: String,
    pub person_b: String,
    pub relationship: String,
    pub duration: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub fcm_token: Option<String>,
}
