//! Intent classification for chat questions
//!
//! Ordered regex pattern groups evaluated top-to-bottom with
//! first-match-wins semantics. The order is load-bearing: keyword
//! coverage overlaps between groups (e.g. "help" belongs to Treatment
//! and must win before Prevention is tested).

use once_cell::sync::Lazy;
use regex::Regex;

/// Topic a chat question is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentCategory {
    Greeting,
    Cause,
    Treatment,
    Prevention,
    Severity,
    Symptom,
    /// No pattern matched; caller falls back to a summary answer
    Summary,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("static intent pattern"))
        .collect()
}

static GREETING_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&["^(hi|hello|hey|greetings)"]));

static CAUSE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "why.*happen",
        "what.*cause",
        "why.*disease",
        "how.*get",
        "reason",
    ])
});

static TREATMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        "what.*do",
        "how.*treat",
        "treatment",
        "cure",
        "fix",
        "help",
        "remedy",
        "medicine",
    ])
});

static PREVENTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&["prevent", "avoid", "stop.*from", "protect", "future"])
});

static SEVERITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&["serious", "severe", "bad", "dangerous", "worried", "concern"])
});

static SYMPTOM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&["symptom", "sign", "look.*like", "identify", "recognize"])
});

fn matches_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// Greeting check, tested before every other intent
pub fn matches_greeting(question: &str) -> bool {
    matches_any(question, GREETING_PATTERNS.as_slice())
}

/// Prevention check used on its own by the healthy branch
pub fn matches_prevention(question: &str) -> bool {
    matches_any(question, PREVENTION_PATTERNS.as_slice())
}

/// Classify a question about an unhealthy disease context.
///
/// Greeting is not tested here; callers handle it first via
/// [`matches_greeting`]. Unmatched questions classify as `Summary`.
pub fn classify(question: &str) -> IntentCategory {
    let groups: [(&[Regex], IntentCategory); 5] = [
        (CAUSE_PATTERNS.as_slice(), IntentCategory::Cause),
        (TREATMENT_PATTERNS.as_slice(), IntentCategory::Treatment),
        (PREVENTION_PATTERNS.as_slice(), IntentCategory::Prevention),
        (SEVERITY_PATTERNS.as_slice(), IntentCategory::Severity),
        (SYMPTOM_PATTERNS.as_slice(), IntentCategory::Symptom),
    ];

    for (patterns, category) in groups {
        if matches_any(question, patterns) {
            return category;
        }
    }
    IntentCategory::Summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_anchored_at_start() {
        assert!(matches_greeting("hello there"));
        assert!(matches_greeting("Hey, what causes this?"));
        assert!(!matches_greeting("I want to say hello later"));
    }

    #[test]
    fn test_cause_intent() {
        assert_eq!(classify("why did this happen?"), IntentCategory::Cause);
        assert_eq!(classify("what is the cause?"), IntentCategory::Cause);
        assert_eq!(classify("how did my plant get this"), IntentCategory::Cause);
    }

    #[test]
    fn test_treatment_before_prevention() {
        // "help" is a treatment keyword even when "protect" would also match
        assert_eq!(
            classify("help me protect my crop"),
            IntentCategory::Treatment
        );
        assert_eq!(classify("is there a cure"), IntentCategory::Treatment);
    }

    #[test]
    fn test_prevention_intent() {
        assert_eq!(classify("how to prevent this"), IntentCategory::Prevention);
        assert_eq!(
            classify("stop it from spreading"),
            IntentCategory::Prevention
        );
    }

    #[test]
    fn test_severity_intent() {
        assert_eq!(classify("is this serious?"), IntentCategory::Severity);
        assert_eq!(classify("I am worried"), IntentCategory::Severity);
    }

    #[test]
    fn test_symptom_intent() {
        assert_eq!(classify("what are the symptoms"), IntentCategory::Symptom);
        assert_eq!(
            classify("how can I identify this?"),
            IntentCategory::Symptom
        );
    }

    #[test]
    fn test_overlapping_keywords_resolve_by_order() {
        // "what does it look like" hits the treatment group's "what.*do"
        // before the symptom group is ever tested
        assert_eq!(
            classify("what does it look like"),
            IntentCategory::Treatment
        );
    }

    #[test]
    fn test_unmatched_falls_back_to_summary() {
        assert_eq!(classify(""), IntentCategory::Summary);
        assert_eq!(classify("tell me about tomatoes"), IntentCategory::Summary);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("WHAT CAUSES THIS"), IntentCategory::Cause);
        assert_eq!(classify("TREATMENT?"), IntentCategory::Treatment);
    }
}
