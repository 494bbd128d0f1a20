use serde::{Deserialize, Serialize};

use intake_core::models::category::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisConfig {
    /// Categories kept from the category screen.
    pub top_categories: usize,
    /// Candidates evaluated per run.
    pub max_candidates: usize,
    /// Evaluated when no disorder survives candidate filtering.
    pub fallback_disorder: String,
    /// Returned by the category screen when no symptom matches a keyword.
    pub fallback_categories: Vec<Category>,
}

impl Default for DiagnosisConfig {
    fn default() -> Self {
        Self {
            top_categories: 2,
            max_candidates: 3,
            fallback_disorder: "MDD".to_string(),
            fallback_categories: vec![Category::Mood],
        }
    }
}
