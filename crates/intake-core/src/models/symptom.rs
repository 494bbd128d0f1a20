use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One unit of symptom evidence extracted from the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub name: String,
    pub category: String,
    /// 0–1.
    pub severity: f64,
    /// 0–1.
    pub confidence: f64,
    /// How many times the symptom has been mentioned in the session.
    #[serde(default = "default_mentions")]
    pub mentions: u32,
}

fn default_mentions() -> u32 {
    1
}

impl Symptom {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        severity: f64,
        confidence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            severity: severity.clamp(0.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            mentions: 1,
        }
    }
}

/// Merge `incoming` into `symptoms` keyed by name: an existing entry gets its
/// mention count incremented and its severity and confidence overwritten;
/// otherwise the symptom is appended.
pub fn upsert_symptom(symptoms: &mut Vec<Symptom>, incoming: Symptom) {
    if let Some(existing) = symptoms.iter_mut().find(|s| s.name == incoming.name) {
        existing.mentions = existing.mentions.saturating_add(1);
        existing.severity = incoming.severity;
        existing.confidence = incoming.confidence;
    } else {
        symptoms.push(Symptom {
            mentions: incoming.mentions.max(1),
            ..incoming
        });
    }
}

/// Lower-cased symptom names joined by spaces, used for substring matching.
pub fn symptom_text(symptoms: &[Symptom]) -> String {
    symptoms
        .iter()
        .map(|s| s.name.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
