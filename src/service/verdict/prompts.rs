//! Prompts for verdict generation

use crate::model::Case;

/// System prompt establishing the AI judge persona and output contract
pub const VERDICT_SYSTEM_PROMPT: &str = r#"You are an AI judge who analyzes romantic conflict situations and delivers objective verdicts.
You combine legal principles with expertise in relationship psychology.

Your task: analyze the provided conflict, weigh each party's position fairly,
and rule on whose position is more justified.

Method:
1. Identify the core issue: define the root cause and the main points of contention.
2. Separate facts from claims: distinguish objective facts from subjective assertions.
3. Apply principles: trust, respect, communication and promise-keeping within the relationship.
4. Balance: consider both sides fairly.

You must:
- Keep a professional and objective tone
- Explain any legal terminology in plain language
- Avoid personal bias and cultural assumptions
- Note when the provided information is insufficient to rule confidently
- Frame the verdict constructively, not as blame

The verdict field must be exactly one of: person_a, person_b, both, neither.
person_a is the complainant, person_b is the respondent.

Your output must be structured JSON only and conform to the requested schema."#;

/// Build the user prompt from a case record
pub fn build_verdict_prompt(case: &Case) -> String {
    format!(
        r#"Rule on the following case.

## Case Title
{title}

## Conflict Description
{description}

## Parties
- Complainant (person_a): {person_a}
- Respondent (person_b): {person_b}
- Relationship: {relationship}
- Relationship duration: {duration}
- Category: {category}

Provide the verdict, detailed reasoning, the relationship principles applied
(legal_basis), and constructive advice for reconciliation (ai_comment).

Output JSON only."#,
        title = case.title,
        description = case.description,
        person_a = case.person_a,
        person_b = case.person_b,
        relationship = case.relationship,
        duration = case.duration,
        category = case.category,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn birthday_case() -> Case {
        Case {
            id: 1,
            title: "생일 약속 취소".to_string(),
            description: "남자친구가 제 생일 저녁 약속을 게임 일정 때문에 취소했어요.".to_string(),
            person_a: "수진".to_string(),
            person_b: "민호".to_string(),
            relationship: "연인".to_string(),
            duration: "2년".to_string(),
            category: "약속".to_string(),
            tags: vec!["생일".to_string()],
            status: CaseStatus::Pending,
            user_id: Uuid::new_v4(),
            fcm_token: None,
            view_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_prompt_embeds_case_fields() {
        let case = birthday_case();
        let prompt = build_verdict_prompt(&case);

        assert!(prompt.contains("생일 약속 취소"));
        assert!(prompt.contains(&case.description));
        assert!(prompt.contains("수진"));
        assert!(prompt.contains("민호"));
        assert!(prompt.contains("연인"));
        assert!(prompt.contains("2년"));
        assert!(prompt.contains("약속"));
    }

    #[test]
    fn test_system_prompt_names_enumerated_choices() {
        for choice in ["person_a", "person_b", "both", "neither"] {
            assert!(VERDICT_SYSTEM_PROMPT.contains(choice));
        }
    }
}
