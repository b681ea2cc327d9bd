//! Error types for verdict generation

use thiserror::Error;

use crate::db::DbError;

/// Error type for verdict generation and lookup
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VerdictError {
    #[error("Case not found: {0}")]
    CaseNotFound(i64),

    #[error("No verdict exists for case: {0}")]
    VerdictNotFound(i64),

    #[error("LLM verdict generation failed: {0}")]
    GenerationFailed(String),

    #[error("Generated verdict failed validation: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    Db(#[from] DbError),
}
