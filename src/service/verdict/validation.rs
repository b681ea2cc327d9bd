//! Validation logic for LLM-extracted verdicts
//!
//! The verdict choice is already constrained by the extraction schema; this
//! checks that the free-text fields actually carry a ruling.

use crate::model::ExtractedVerdict;

/// Minimum length below which a text field is flagged as suspiciously short
const SHORT_TEXT_THRESHOLD: usize = 40;

/// Result of verdict validation
#[derive(Debug)]
pub struct VerdictValidationResult {
    /// Whether the verdict passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl VerdictValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate an extracted verdict for completeness
///
/// Checks:
/// 1. reasoning, legal_basis and ai_comment are non-empty (error)
/// 2. each text field carries enough detail to be useful (warning)
pub fn validate_extracted_verdict(verdict: &ExtractedVerdict) -> VerdictValidationResult {
    let mut result = VerdictValidationResult::valid();

    let fields = [
        ("reasoning", &verdict.reasoning),
        ("legal_basis", &verdict.legal_basis),
        ("ai_comment", &verdict.ai_comment),
    ];

    for (name, value) in fields {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            result.add_error(format!("Verdict field '{}' is empty", name));
        } else if trimmed.chars().count() < SHORT_TEXT_THRESHOLD {
            result.add_warning(format!(
                "Verdict field '{}' is very short ({} chars) - may lack detail",
                name,
                trimmed.chars().count()
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExtractedVerdictChoice;

    fn full_verdict() -> ExtractedVerdict {
        ExtractedVerdict {
            verdict: ExtractedVerdictChoice::PersonA,
            reasoning: "The respondent cancelled a birthday dinner promise for a gaming session, \
                        prioritizing an adjustable plan over a significant commitment."
                .to_string(),
            legal_basis: "Breach of the promise-keeping duty between partners and the principle \
                          of respecting significant anniversaries."
                .to_string(),
            ai_comment: "An honest conversation about expectations and priorities would help; \
                         keep communication clear around important commitments."
                .to_string(),
        }
    }

    #[test]
    fn test_valid_verdict() {
        let result = validate_extracted_verdict(&full_verdict());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_reasoning_is_error() {
        let mut verdict = full_verdict();
        verdict.reasoning = "   ".to_string();

        let result = validate_extracted_verdict(&verdict);

        assert!(!result.is_valid);
        assert!(result.errors[0].contains("reasoning"));
    }

    #[test]
    fn test_all_fields_empty() {
        let mut verdict = full_verdict();
        verdict.reasoning = String::new();
        verdict.legal_basis = String::new();
        verdict.ai_comment = String::new();

        let result = validate_extracted_verdict(&verdict);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_short_text_is_warning_only() {
        let mut verdict = full_verdict();
        verdict.ai_comment = "Talk it out.".to_string();

        let result = validate_extracted_verdict(&verdict);

        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("ai_comment")));
    }
}
