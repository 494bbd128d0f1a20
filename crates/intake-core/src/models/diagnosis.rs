use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::Category;
use super::recommendation::Recommendation;

/// Severity tier derived from the met-criteria ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// `>= 0.8` severe, `>= 0.6` moderate, otherwise mild.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 0.8 {
            Self::Severe
        } else if ratio >= 0.6 {
            Self::Moderate
        } else {
            Self::Mild
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// The evaluation of one disorder against a symptom set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisResult {
    pub disorder_id: String,
    pub disorder_name: String,
    pub category: Category,
    pub met_count: usize,
    pub required_count: usize,
    pub total_criteria: usize,
    /// `met_count / total_criteria`, 0 when there are no criteria.
    pub confidence: f64,
    pub severity: Severity,
    pub met_criteria_ids: Vec<String>,
    pub diagnosis_met: bool,
    /// Set only by report synthesis.
    #[serde(default)]
    pub is_primary: bool,
}

/// Per-disorder outcome. A missing definition is a value, not an error, so
/// one unknown id never aborts a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisOutcome {
    Evaluated(DiagnosisResult),
    NotFound { disorder_id: String },
}

impl DiagnosisOutcome {
    pub fn result(&self) -> Option<&DiagnosisResult> {
        match self {
            Self::Evaluated(r) => Some(r),
            Self::NotFound { .. } => None,
        }
    }
}

/// Score for one category from the category screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
}

/// Output of the category screen: the selected categories in rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScreen {
    pub categories: Vec<Category>,
    pub scores: Vec<CategoryScore>,
    /// Top category's share of the total matched score, 0.5 for the default.
    pub confidence: f64,
}

/// The structured output of one diagnosis pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisReport {
    pub id: Uuid,
    pub generated_at: jiff::Timestamp,
    pub categories: CategoryScreen,
    pub candidates: Vec<String>,
    /// Every evaluated disorder, confirmed ones first by confidence.
    pub diagnoses: Vec<DiagnosisResult>,
    pub primary: Option<DiagnosisResult>,
    /// Confirmed diagnoses other than the primary.
    pub differentials: Vec<DiagnosisResult>,
    pub not_found: Vec<String>,
    pub conditions_met: bool,
    /// Rendered narrative.
    pub report: String,
    pub recommendations: Vec<Recommendation>,
}
