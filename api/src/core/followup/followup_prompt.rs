//! Renders the two-part prompt for a validated request.

use ai_llm_service::ChatPrompt;

use crate::core::followup::followup_input::FollowupInput;

/// Fixed system instruction for the interview co-pilot.
pub const SYSTEM_PROMPT: &str = "You are an interview co-pilot. Given the original question and the candidate's answer, \
return ONE concise, specific, open-ended follow-up (≤20 words). \
Do not restate the original question. Avoid yes/no, leading, or unsafe content. \
Return ONLY the question text, with no preamble, quotes, or explanation.";

const NOT_AVAILABLE: &str = "N/A";

/// Builds the system + user prompt. Total over any validated input.
pub fn build_prompt(input: &FollowupInput) -> ChatPrompt {
    ChatPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: user_content(input),
    }
}

fn user_content(input: &FollowupInput) -> String {
    format!(
        "Context:\n\
         - Role: {role}\n\
         - Interview type(s): {types}\n\n\
         Original question:\n{question}\n\n\
         Candidate answer:\n{answer}\n\n\
         Return ONLY the follow-up question.",
        role = role_label(input.role.as_deref()),
        types = interview_types_label(input.interview_type.as_deref()),
        question = input.question,
        answer = input.answer,
    )
}

/// Role or `N/A` when absent or empty.
pub fn role_label(role: Option<&str>) -> &str {
    match role {
        Some(r) if !r.is_empty() => r,
        _ => NOT_AVAILABLE,
    }
}

/// Comma-joined interview types, or `N/A` when absent or empty.
pub fn interview_types_label(types: Option<&[String]>) -> String {
    let joined = types.map(|t| t.join(", ")).unwrap_or_default();
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(role: Option<&str>, types: Option<Vec<&str>>) -> FollowupInput {
        FollowupInput::validate(
            "  Tell me about a challenge.  ",
            "  I fixed a flaky deploy pipeline.  ",
            role.map(str::to_string),
            types.map(|t| t.into_iter().map(str::to_string).collect()),
        )
        .unwrap()
    }

    #[test]
    fn renders_full_user_prompt() {
        let p = build_prompt(&input(
            Some("Backend Engineer"),
            Some(vec!["technical", "behavioral"]),
        ));
        assert_eq!(p.system, SYSTEM_PROMPT);
        assert_eq!(
            p.user,
            "Context:\n\
             - Role: Backend Engineer\n\
             - Interview type(s): technical, behavioral\n\n\
             Original question:\nTell me about a challenge.\n\n\
             Candidate answer:\nI fixed a flaky deploy pipeline.\n\n\
             Return ONLY the follow-up question."
        );
    }

    #[test]
    fn missing_context_renders_not_available() {
        let p = build_prompt(&input(None, None));
        assert!(p.user.contains("- Role: N/A\n"));
        assert!(p.user.contains("- Interview type(s): N/A\n"));
    }

    #[test]
    fn empty_interview_types_render_not_available() {
        let p = build_prompt(&input(Some(""), Some(vec![])));
        assert!(p.user.contains("- Role: N/A\n"));
        assert!(p.user.contains("- Interview type(s): N/A\n"));
    }

    #[test]
    fn trimmed_text_has_no_surrounding_whitespace() {
        let p = build_prompt(&input(None, None));
        assert!(p.user.contains("\nTell me about a challenge.\n"));
        assert!(!p.user.contains("  Tell me about a challenge."));
        assert!(!p.user.contains("pipeline.  "));
    }

    #[test]
    fn system_prompt_asks_for_question_only() {
        assert!(SYSTEM_PROMPT.contains("ONE concise, specific, open-ended follow-up"));
        assert!(SYSTEM_PROMPT.contains("≤20 words"));
        assert!(SYSTEM_PROMPT.contains("Return ONLY the question text"));
    }
}
