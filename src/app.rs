//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repository::{
    BookmarkRepository, CaseRepository, CommentRepository, VerdictRepository, VoteRepository,
};
use crate::model::Config;
use crate::service::{
    BookmarkService, CaseService, CommentService, LlmClient, PushService, VerdictService,
    VoteService,
};

/// Errors that can occur during application startup
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Application state containing all services and shared resources
///
/// This struct centralizes service initialization and makes it easy to inject
/// dependencies into Actix-web handlers.
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,
    /// Whether push notifications are configured
    pub push_enabled: bool,
    /// Case submission, listing and deletion
    pub case_service: CaseService,
    /// AI verdict generation pipeline
    pub verdict_service: VerdictService,
    /// Voting and tallies
    pub vote_service: VoteService,
    /// Bookmark toggling
    pub bookmark_service: BookmarkService,
    /// Juror comments and push dispatch
    pub comment_service: CommentService,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. Database connection and schema initialization
    /// 2. LLM client initialization (requires OPENAI_API_KEY)
    /// 3. Push service initialization (optional)
    /// 4. Service dependency graph construction
    pub async fn new(config: Config) -> Result<Self, AppError> {
        // Initialize PostgreSQL database
        let db_pool = crate::db::create_pool()
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        // Initialize database schema
        crate::db::init_schema(&db_pool)
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        // Create shared LLM client (required)
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| AppError::MissingConfig("OPENAI_API_KEY"))?;

        let llm_client = LlmClient::new(&api_key)
            .map_err(|_| AppError::InvalidConfig("Invalid OPENAI_API_KEY"))?;

        // Initialize push service (optional - will log warning if misconfigured)
        let push_service = match PushService::from_config(&config.push) {
            Ok(Some(service)) => Some(Arc::new(service)),
            Ok(None) => {
                tracing::info!("Push credentials not configured, running without push");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Push service unavailable, running without push");
                None
            }
        };
        let push_enabled = push_service.is_some();

        // Repositories over the shared pool
        let case_repository = CaseRepository::new(db_pool.clone());
        let verdict_repository = VerdictRepository::new(db_pool.clone());
        let vote_repository = VoteRepository::new(db_pool.clone());
        let bookmark_repository = BookmarkRepository::new(db_pool.clone());
        let comment_repository = CommentRepository::new(db_pool.clone());

        // Build service dependency graph
        let case_service = CaseService::new(case_repository.clone());
        let verdict_service = VerdictService::new(
            case_repository.clone(),
            verdict_repository,
            llm_client,
        );
        let vote_service = VoteService::new(vote_repository, case_repository.clone());
        let bookmark_service = BookmarkService::new(bookmark_repository, case_repository.clone());
        let comment_service =
            CommentService::new(comment_repository, case_repository, push_service);

        Ok(Self {
            db_pool,
            push_enabled,
            case_service,
            verdict_service,
            vote_service,
            bookmark_service,
            comment_service,
        })
    }
}
