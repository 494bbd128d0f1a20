//! Deterministic keyword heuristics used when the classifier port fails.
//!
//! These are pure functions of their inputs.

use intake_core::models::category::Category;
use intake_core::models::screening::Classification;
use intake_core::models::symptom::Symptom;

/// Substrings that mark an answer as affirmative.
pub const POSITIVE_INDICATORS: [&str; 6] = ["yes", "yeah", "definitely", "i have", "i do", "i am"];

/// Severity and confidence assigned to keyword-extracted symptoms.
const KEYWORD_SEVERITY: f64 = 0.5;
const KEYWORD_CONFIDENCE: f64 = 0.3;

/// Classify an answer by substring search for [`POSITIVE_INDICATORS`].
///
/// Never returns `Ambiguous`: anything without an indicator is `Negative`.
pub fn keyword_classification(answer: &str) -> Classification {
    let lowered = answer.to_lowercase();
    if POSITIVE_INDICATORS.iter().any(|w| lowered.contains(w)) {
        Classification::Positive
    } else {
        Classification::Negative
    }
}

/// The first five words of `criterion` longer than four characters,
/// lower-cased with surrounding punctuation stripped.
pub fn criterion_keywords(criterion: &str) -> Vec<String> {
    criterion
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| w.chars().count() > 4)
        .take(5)
        .collect()
}

/// A criterion is met when any of its keywords appears in `symptom_text`.
pub fn criterion_met_by_overlap(criterion: &str, symptom_text: &str) -> bool {
    criterion_keywords(criterion)
        .iter()
        .any(|k| symptom_text.contains(k.as_str()))
}

/// One symptom per category keyword found in `text`, named after the
/// keyword.
pub fn keyword_symptoms(text: &str, keywords: &[(Category, Vec<String>)]) -> Vec<Symptom> {
    let lowered = text.to_lowercase();
    let mut found: Vec<Symptom> = Vec::new();
    for (category, words) in keywords {
        for word in words {
            if lowered.contains(word.as_str()) && !found.iter().any(|s| &s.name == word) {
                found.push(Symptom::new(
                    word.clone(),
                    category.as_str(),
                    KEYWORD_SEVERITY,
                    KEYWORD_CONFIDENCE,
                ));
            }
        }
    }
    found
}
