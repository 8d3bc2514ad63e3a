//! Prompt construction for FPV questions.
//!
//! The completion call always sends exactly two turns: the fixed expert
//! instruction (optionally listing curated documents) and one user turn
//! carrying the question and the search context.

pub const FPV_SYSTEM_PROMPT: &str = "You are an FPV drone expert helping pilots troubleshoot, configure, and tune their drones.
Rules:
- Ask for more information, if the user is not specific
- Prefer trusted FPV resources provided.
- If none found, say so and suggest where to look.
- Explain step-by-step in clear language.
- Cite sources (PDF name or URL).
- Never invent or guess pinouts, firmware targets, or tuning values.";

/// Build the system instruction, appending curated documents the model may cite.
pub fn build_system_prompt(documents: &[String]) -> String {
    if documents.is_empty() {
        return FPV_SYSTEM_PROMPT.to_string();
    }

    let listing = documents
        .iter()
        .map(|doc| format!("- {}", doc))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\nCurated documents you may cite:\n{}", FPV_SYSTEM_PROMPT, listing)
}

pub fn build_user_turn(question: &str, context: &str) -> String {
    format!("Question: {}\n\nContext:\n{}", question, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_turn_labels_question_and_context() {
        let turn = build_user_turn("best failsafe?", "(no web resources found)");
        assert_eq!(turn, "Question: best failsafe?\n\nContext:\n(no web resources found)");
    }

    #[test]
    fn system_prompt_forbids_invented_values() {
        let prompt = build_system_prompt(&[]);
        assert_eq!(prompt, FPV_SYSTEM_PROMPT);
        assert!(prompt.contains("Never invent or guess pinouts"));
        assert!(prompt.contains("Cite sources"));
    }

    #[test]
    fn documents_are_listed_after_the_rules() {
        let prompt = build_system_prompt(&["SpeedyBee F405 V4 manual.pdf".to_string()]);
        assert!(prompt.starts_with(FPV_SYSTEM_PROMPT));
        assert!(prompt.ends_with("- SpeedyBee F405 V4 manual.pdf"));
    }
}
