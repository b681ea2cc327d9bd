//! Verdict domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Who the verdict finds at fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerdictChoice {
    PersonA,
    PersonB,
    Both,
    Neither,
}

/// The model-generated judgment attached 1:1 to a case
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Verdict {
    pub id: i64,
    pub case_id: i64,
    pub verdict: VerdictChoice,
    /// Detailed grounds for the ruling
    pub reasoning: String,
    /// Relationship principles or norms the ruling rests on
    pub legal_basis: String,
    /// Constructive advice and reconciliation suggestions
    pub ai_comment: String,
    pub created_at: DateTime<Utc>,
}

/// A validated verdict ready for persistence
#[derive(Debug, Clone)]
pub struct NewVerdict {
    pub case_id: i64,
    pub verdict: VerdictChoice,
    pub reasoning: String,
    pub legal_basis: String,
    pub ai_comment: String,
}
