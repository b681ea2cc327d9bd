//! LLM-extractable verdict structure
//!
//! Defines the strict JSON shape the model must produce. Extraction into
//! these types replaces trusting raw response text: an out-of-enum verdict
//! or malformed shape fails at the boundary instead of being persisted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::VerdictChoice;

/// Verdict object extracted from the model response
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedVerdict {
    pub verdict: ExtractedVerdictChoice,

    #[schemars(description = "Detailed explanation of the grounds for the ruling")]
    pub reasoning: String,

    #[schemars(description = "The relationship principles or norms applied to reach the ruling")]
    pub legal_basis: String,

    #[schemars(description = "Constructive advice and suggestions for reconciliation")]
    pub ai_comment: String,
}

/// Enumerated verdict values the model may return
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExtractedVerdictChoice {
    PersonA,
    PersonB,
    Both,
    Neither,
}

impl From<ExtractedVerdictChoice> for VerdictChoice {
    fn from(choice: ExtractedVerdictChoice) -> Self {
        match choice {
            ExtractedVerdictChoice::PersonA => VerdictChoice::PersonA,
            ExtractedVerdictChoice::PersonB => VerdictChoice::PersonB,
            ExtractedVerdictChoice::Both => VerdictChoice::Both,
            ExtractedVerdictChoice::Neither => VerdictChoice::Neither,
        }
    }
}
