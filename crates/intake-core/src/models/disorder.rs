use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

/// A DSM-style disorder definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisorderDefinition {
    pub disorder_id: String,
    pub disorder_name: String,
    pub category: Category,
    pub criteria: Vec<Criterion>,
    /// When unset, see [`DisorderDefinition::required_count`].
    pub minimum_criteria_count: Option<usize>,
    /// Keywords that must appear in the symptom set before the disorder is
    /// considered a candidate. `None` admits the disorder unconditionally.
    pub core_symptoms: Option<CoreSymptoms>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Criterion {
    pub criterion_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoreSymptoms {
    pub any_of: Vec<String>,
    pub threshold: usize,
}

impl DisorderDefinition {
    /// Number of met criteria needed for a diagnosis.
    ///
    /// Falls back to `max(1, criteria / 2)` (floor) when no minimum is set.
    pub fn required_count(&self) -> usize {
        self.minimum_criteria_count
            .unwrap_or_else(|| (self.criteria.len() / 2).max(1))
    }

    pub fn total_criteria(&self) -> usize {
        self.criteria.len()
    }
}

impl Criterion {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            criterion_id: id.into(),
            text: text.into(),
        }
    }
}
