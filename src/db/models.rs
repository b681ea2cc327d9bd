//! Database row models and query shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::model::{Case, CaseStatus, Comment, Verdict, VerdictChoice};

/// Database representation of a case, joined with its view count
#[derive(Debug, Clone, FromRow)]
pub struct CaseRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub person_a: String,
    pub person_b: String,
    pub relationship: String,
    pub duration: String,
    pub category: String,
    pub tags: Vec<String>,
    pub status: String,
    pub user_id: Uuid,
    pub fcm_token: Option<String>,
    pub created_at: DateTime<Utc>,
    // Absent on plain RETURNING * (a fresh case has no views yet)
    #[sqlx(default)]
    pub view_count: i64,
}

impl CaseRow {
    /// Convert database row to domain model
    pub fn into_domain(self) -> Result<Case, String> {
        let status = case_status_from_str(&self.status)?;

        Ok(Case {
            id: self.id,
            title: self.title,
            description: self.description,
            person_a: self.person_a,
            person_b: self.person_b,
            relationship: self.relationship,
            duration: self.duration,
            category: self.category,
            tags: self.tags,
            status,
            user_id: self.user_id,
            fcm_token: self.fcm_token,
            view_count: self.view_count,
            created_at: self.created_at,
        })
    }
}

/// Database representation of a verdict
#[derive(Debug, Clone, FromRow)]
pub struct VerdictRow {
    pub id: i64,
    pub case_id: i64,
    pub verdict: String,
    pub reasoning: String,
    pub legal_basis: String,
    pub ai_comment: String,
    pub created_at: DateTime<Utc>,
}

impl VerdictRow {
    pub fn into_domain(self) -> Result<Verdict, String> {
        let verdict = verdict_choice_from_str(&self.verdict)?;

        Ok(Verdict {
            id: self.id,
            case_id: self.case_id,
            verdict,
            reasoning: self.reasoning,
            legal_basis: self.legal_basis,
            ai_comment: self.ai_comment,
            created_at: self.created_at,
        })
    }
}

/// Database representation of a comment
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub case_id: i64,
    pub nickname: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl CommentRow {
    pub fn into_domain(self) -> Comment {
        Comment {
            id: self.id,
            case_id: self.case_id,
            nickname: self.nickname,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Helper to convert VerdictChoice to string for database storage
pub fn verdict_choice_to_string(choice: &VerdictChoice) -> &'static str {
    match choice {
        VerdictChoice::PersonA => "person_a",
        VerdictChoice::PersonB => "person_b",
        VerdictChoice::Both => "both",
        VerdictChoice::Neither => "neither",
    }
}

/// Parse a stored verdict choice, rejecting anything outside the enum
pub fn verdict_choice_from_str(value: &str) -> Result<VerdictChoice, String> {
    match value {
        "person_a" => Ok(VerdictChoice::PersonA),
        "person_b" => Ok(VerdictChoice::PersonB),
        "both" => Ok(VerdictChoice::Both),
        "neither" => Ok(VerdictChoice::Neither),
        other => Err(format!("Invalid verdict choice: {}", other)),
    }
}

/// Helper to convert CaseStatus to string for database storage
pub fn case_status_to_string(status: &CaseStatus) -> &'static str {
    match status {
        CaseStatus::Pending => "pending",
        CaseStatus::Completed => "completed",
    }
}

/// Parse a stored case status, rejecting anything outside the enum
pub fn case_status_from_str(value: &str) -> Result<CaseStatus, String> {
    match value {
        "pending" => Ok(CaseStatus::Pending),
        "completed" => Ok(CaseStatus::Completed),
        other => Err(format!("Invalid case status: {}", other)),
    }
}

/// Query parameters for listing cases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCasesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
}

/// Paginated response for cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedCases {
    pub cases: Vec<Case>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: i64,
    pub total_pages: u32,
}

/// Ceiling division used for pagination
pub fn total_pages(total_count: i64, page_size: u32) -> u32 {
    ((total_count as f64) / (page_size as f64)).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_choice_round_trip() {
        for choice in [
            VerdictChoice::PersonA,
            VerdictChoice::PersonB,
            VerdictChoice::Both,
            VerdictChoice::Neither,
        ] {
            let s = verdict_choice_to_string(&choice);
            assert_eq!(verdict_choice_from_str(s).unwrap(), choice);
        }
    }

    #[test]
    fn test_verdict_choice_rejects_unknown() {
        assert!(verdict_choice_from_str("somebody_else").is_err());
        assert!(verdict_choice_from_str("").is_err());
    }

    #[test]
    fn test_case_status_round_trip() {
        for status in [CaseStatus::Pending, CaseStatus::Completed] {
            let s = case_status_to_string(&status);
            assert_eq!(case_status_from_str(s).unwrap(), status);
        }
        assert!(case_status_from_str("archived").is_err());
    }

    #[test]
    fn test_case_row_rejects_unknown_status() {
        let row = CaseRow {
            id: 1,
            title: "t".to_string(),
            description: "d".to_string(),
            person_a: "a".to_string(),
            person_b: "b".to_string(),
            relationship: "dating".to_string(),
            duration: "1y".to_string(),
            category: "promise".to_string(),
            tags: vec![],
            status: "archived".to_string(),
            user_id: Uuid::new_v4(),
            fcm_token: None,
            created_at: Utc::now(),
            view_count: 0,
        };

        assert!(row.into_domain().is_err());
    }

    #[test]
    fn test_total_pages_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(1, 100), 1);
    }
}
