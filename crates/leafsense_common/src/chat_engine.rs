//! Chat response composer
//!
//! Turns a free-text question plus a disease context into a fully formed
//! answer from the knowledge base. Pure and deterministic: same inputs,
//! byte-identical output. Unresolvable disease ids fall back to the
//! `healthy` record and unmatched questions to a summary answer, so this
//! never fails.

use crate::disease_db::{get_disease_info, Severity};
use crate::intent::{classify, matches_greeting, matches_prevention, IntentCategory};

/// A composed chat answer ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub answer: String,
}

/// Render items as a 1-based numbered list, one per line
fn format_list(items: &[&str]) -> String {
    if items.is_empty() {
        return "No specific items to list.".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn severity_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => {
            "This condition is generally not serious and can be easily managed with basic care."
        }
        Severity::Medium => {
            "This is a moderate concern that requires attention. With proper treatment, your plants should recover well."
        }
        Severity::High => {
            "This is a serious condition that requires immediate action. Without treatment, it can spread quickly and cause significant crop damage."
        }
    }
}

/// Compose an answer for `question` in the context of `disease_id`.
///
/// Greeting wins over every other intent. For a healthy context only the
/// prevention intent is answered specifically; everything else gets the
/// generic healthy message. For an unhealthy context the intent groups are
/// tested in their fixed order, with a summary fallback.
pub fn compose_response(disease_id: &str, question: &str) -> ChatReply {
    let info = get_disease_info(disease_id);
    let question = question.to_lowercase();

    if matches_greeting(&question) {
        let tail = if info.is_healthy() {
            "Your plant looks healthy! Feel free to ask me any questions about plant care."
                .to_string()
        } else {
            format!(
                "I detected {} in your plant. Ask me about the causes, treatments, or prevention measures.",
                info.display_name
            )
        };
        return ChatReply {
            answer: format!("Hello! I'm LeafSense AI, your digital crop doctor. {}", tail),
        };
    }

    if info.is_healthy() {
        if matches_prevention(&question) {
            return ChatReply {
                answer: format!(
                    "Great news - your plant is healthy! Here are tips to keep it that way:\n\n{}",
                    format_list(info.prevention)
                ),
            };
        }
        return ChatReply {
            answer: "Your plant appears healthy! Keep up the good care. I recommend regular monitoring, proper watering, and good air circulation to maintain plant health. Feel free to scan another leaf if you notice any changes.".to_string(),
        };
    }

    let answer = match classify(&question) {
        IntentCategory::Cause => format!(
            "{} is typically caused by:\n\n{}\n\n{}",
            info.display_name,
            format_list(info.causes),
            info.description
        ),
        IntentCategory::Treatment => format!(
            "Here are recommended treatments for {}:\n\n{}\n\nAct quickly for best results.",
            info.display_name,
            format_list(info.treatments)
        ),
        IntentCategory::Prevention => format!(
            "To prevent {} in the future:\n\n{}",
            info.display_name,
            format_list(info.prevention)
        ),
        IntentCategory::Severity => format!(
            "{} severity level: {}\n\n{}",
            info.display_name,
            info.severity.label(),
            severity_message(info.severity)
        ),
        IntentCategory::Symptom => format!(
            "Common symptoms of {}:\n\n{}",
            info.display_name,
            format_list(info.symptoms)
        ),
        IntentCategory::Greeting | IntentCategory::Summary => format!(
            "I detected {} in your plant. Here's a summary:\n\n{}\n\nYou can ask me about:\n- Why this happened\n- How to treat it\n- How to prevent it\n- How serious it is",
            info.display_name,
            info.description
        ),
    };

    ChatReply { answer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_wins_over_other_intents() {
        // Treatment keywords present, but the greeting anchor fires first
        let reply = compose_response("early_blight", "hello, how do I treat this?");
        assert!(reply.answer.starts_with("Hello! I'm LeafSense AI"));
        assert!(reply.answer.contains("Early Blight"));
    }

    #[test]
    fn test_greeting_healthy_variant() {
        let reply = compose_response("healthy", "hi");
        assert!(reply.answer.contains("Your plant looks healthy!"));
    }

    #[test]
    fn test_healthy_prevention_lists_tips() {
        let reply = compose_response("healthy", "how do I prevent disease?");
        assert!(reply.answer.contains("Great news"));
        assert!(reply.answer.contains("1. Regular monitoring"));
        assert!(reply.answer.contains("3. Good air circulation"));
    }

    #[test]
    fn test_healthy_other_intents_get_generic_message() {
        let expected = "Your plant appears healthy! Keep up the good care. I recommend regular monitoring, proper watering, and good air circulation to maintain plant health. Feel free to scan another leaf if you notice any changes.";
        for q in ["what causes disease?", "what should I do to treat it?", "what are the symptoms?", ""] {
            // no prevention keyword in any of these
            assert_eq!(compose_response("healthy", q).answer, expected);
        }
    }

    #[test]
    fn test_cause_answer_contains_list_and_description() {
        let reply = compose_response("late_blight", "why did this happen?");
        assert!(reply.answer.contains("Late Blight is typically caused by:"));
        assert!(reply.answer.contains("1. Oomycete pathogen (Phytophthora infestans)"));
        assert!(reply.answer.contains("Phytophthora infestans that can destroy"));
    }

    #[test]
    fn test_treatment_answer_for_rust() {
        let reply = compose_response("rust", "What should I do to treat this?");
        assert!(reply.answer.contains("1. Apply sulfur-based fungicide"));
        assert!(reply.answer.contains("Act quickly for best results."));
        // no cause or prevention copy leaks in
        assert!(!reply.answer.contains("Puccinia"));
        assert!(!reply.answer.contains("Space plants adequately"));
    }

    #[test]
    fn test_severity_answer_keyed_by_tier() {
        let reply = compose_response("late_blight", "is this serious?");
        assert!(reply.answer.contains("severity level: HIGH"));
        assert!(reply.answer.contains("requires immediate action"));

        let reply = compose_response("early_blight", "is this serious?");
        assert!(reply.answer.contains("severity level: MEDIUM"));
        assert!(reply.answer.contains("moderate concern"));
    }

    #[test]
    fn test_symptom_answer() {
        let reply = compose_response("early_blight", "what are the symptoms?");
        assert!(reply.answer.contains("Common symptoms of Early Blight:"));
        assert!(reply.answer.contains("2. Yellow halos around spots"));
    }

    #[test]
    fn test_unmatched_question_gets_summary() {
        let reply = compose_response("rust", "tell me more");
        assert!(reply.answer.contains("Here's a summary:"));
        assert!(reply.answer.contains("- Why this happened"));
        assert!(reply.answer.contains("- How serious it is"));
    }

    #[test]
    fn test_unknown_disease_behaves_like_healthy() {
        let q = "what are the symptoms?";
        assert_eq!(
            compose_response("not_in_the_kb", q),
            compose_response("healthy", q)
        );
    }

    #[test]
    fn test_deterministic_output() {
        let a = compose_response("early_blight", "how do I fix this?");
        let b = compose_response("early_blight", "how do I fix this?");
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_list_numbering() {
        assert_eq!(format_list(&["a", "b"]), "1. a\n2. b");
        assert_eq!(format_list(&[]), "No specific items to list.");
    }
}
