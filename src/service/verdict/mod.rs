//! Verdict generation service using LLM
//!
//! Runs the full pipeline: fetch case, build prompt, extract a structured
//! verdict, validate it, persist it and complete the case.

use rig::client::CompletionClient;
use rig::providers::openai;

use crate::db::repository::{CaseRepository, VerdictRepository};
use crate::db::DbError;
use crate::model::{ExtractedVerdict, NewVerdict, Verdict};
use crate::service::llm::LlmClient;
use crate::service::verdict::prompts::{build_verdict_prompt, VERDICT_SYSTEM_PROMPT};
use crate::service::verdict::validation::validate_extracted_verdict;

/// Environment variable for the verdict model (defaults to GPT-4O if not set)
const ENV_VERDICT_MODEL: &str = "VERDICT_MODEL";

/// Default model for verdict generation
const DEFAULT_MODEL: &str = openai::GPT_4O;

pub mod error;
pub mod prompts;
pub mod validation;

pub use error::VerdictError;

/// Service for generating and retrieving case verdicts
pub struct VerdictService {
    cases: CaseRepository,
    verdicts: VerdictRepository,
    llm_client: LlmClient,
    model: String,
}

impl VerdictService {
    /// Creates a new verdict service
    ///
    /// Uses a shared LLM client passed from startup.
    /// Optionally uses VERDICT_MODEL env var (defaults to gpt-4o)
    pub fn new(cases: CaseRepository, verdicts: VerdictRepository, llm_client: LlmClient) -> Self {
        let model = std::env::var(ENV_VERDICT_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(model = %model, "Verdict service initialized");

        Self {
            cases,
            verdicts,
            llm_client,
            model,
        }
    }

    /// Generate a verdict for a case and persist it.
    ///
    /// Idempotent: if the case already has a verdict, it is returned without
    /// a second model call. There is no retry on model failure; the error
    /// surfaces to the caller.
    pub async fn generate_for_case(&self, case_id: i64) -> Result<Verdict, VerdictError> {
        let case = self.cases.get_by_id(case_id).await.map_err(|e| match e {
            DbError::NotFound(_) => VerdictError::CaseNotFound(case_id),
            other => VerdictError::Db(other),
        })?;

        if let Some(existing) = self.verdicts.find_by_case_id(case_id).await? {
            tracing::info!(case_id = %case_id, "Verdict already exists, skipping generation");
            return Ok(existing);
        }

        let start_time = std::time::Instant::now();

        tracing::debug!(
            case_id = %case_id,
            model = %self.model,
            "Initiating OpenAI API call for verdict generation"
        );

        let prompt = build_verdict_prompt(&case);
        let prompt_length = prompt.len();

        let extractor = self
            .llm_client
            .openai_client()
            .extractor::<ExtractedVerdict>(&self.model)
            .preamble(VERDICT_SYSTEM_PROMPT)
            .build();

        let extracted = match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    case_id = %case_id,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "OpenAI API call for verdict generation completed successfully"
                );
                result
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    case_id = %case_id,
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for verdict generation failed"
                );
                return Err(VerdictError::GenerationFailed(e.to_string()));
            }
        };

        let validation = validate_extracted_verdict(&extracted);
        for warning in &validation.warnings {
            tracing::warn!(case_id = %case_id, warning = %warning, "Verdict validation warning");
        }
        if !validation.is_valid {
            return Err(VerdictError::ValidationFailed(validation.errors.join("; ")));
        }

        let verdict = self
            .verdicts
            .insert_completing_case(&NewVerdict {
                case_id,
                verdict: extracted.verdict.into(),
                reasoning: extracted.reasoning,
                legal_basis: extracted.legal_basis,
                ai_comment: extracted.ai_comment,
            })
            .await?;

        tracing::info!(
            case_id = %case_id,
            verdict = ?verdict.verdict,
            "Verdict persisted, case completed"
        );

        Ok(verdict)
    }

    /// Fetch the persisted verdict for a case
    pub async fn get_for_case(&self, case_id: i64) -> Result<Verdict, VerdictError> {
        self.verdicts
            .find_by_case_id(case_id)
            .await?
            .ok_or(VerdictError::VerdictNotFound(case_id))
    }
}
