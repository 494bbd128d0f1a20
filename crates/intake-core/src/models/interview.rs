use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Interview phases in the only order they may occur.
///
/// The derived `Ord` follows declaration order, so `a < b` means `a` comes
/// earlier in the interview.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InterviewPhase {
    /// Open-ended questions about the presenting concern.
    Overview,
    /// Short yes/no items that decide which modules to deploy.
    Screening,
    /// Module question lists for the positively screened modules.
    DeepDive,
    /// Onset, duration, and functional impact.
    Timeline,
    /// Terminal. Ready for diagnosis.
    Summary,
}

impl InterviewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Screening => "screening",
            Self::DeepDive => "deep_dive",
            Self::Timeline => "timeline",
            Self::Summary => "summary",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Summary)
    }
}

impl fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterviewPhase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Self::Overview),
            "screening" => Ok(Self::Screening),
            "deep_dive" => Ok(Self::DeepDive),
            "timeline" => Ok(Self::Timeline),
            "summary" => Ok(Self::Summary),
            other => Err(CoreError::UnknownPhase(other.to_string())),
        }
    }
}

/// The persisted state of one interview session.
///
/// `asked_questions` and `skipped_items` are append-only. Once an id is in
/// `asked_questions` it is never added to `skipped_items`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterviewState {
    pub session_id: String,
    pub patient_id: String,
    pub phase: InterviewPhase,

    /// Module ids with at least one positive screen, in discovery order.
    #[serde(default)]
    pub positive_screens: Vec<String>,
    #[serde(default)]
    pub negative_screens: Vec<String>,
    /// Screening item id → score in [0, 1].
    #[serde(default)]
    pub screening_scores: BTreeMap<String, f64>,

    #[serde(default)]
    pub deployed_modules: Vec<String>,
    pub current_module: Option<String>,
    /// Module id → index of the next question to serve.
    #[serde(default)]
    pub module_progress: BTreeMap<String, usize>,

    #[serde(default)]
    pub asked_questions: Vec<String>,
    #[serde(default)]
    pub skipped_items: Vec<String>,
    pub current_question_id: Option<String>,

    /// Seed screening items served during SCREENING.
    #[serde(default)]
    pub priority_items: Vec<String>,
    #[serde(default)]
    pub priority_modules: Vec<String>,

    /// Question id → most recent raw answer.
    #[serde(default)]
    pub responses: BTreeMap<String, String>,

    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl InterviewState {
    pub fn new(session_id: impl Into<String>, patient_id: impl Into<String>) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            session_id: session_id.into(),
            patient_id: patient_id.into(),
            phase: InterviewPhase::Overview,
            positive_screens: Vec::new(),
            negative_screens: Vec::new(),
            screening_scores: BTreeMap::new(),
            deployed_modules: Vec::new(),
            current_module: None,
            module_progress: BTreeMap::new(),
            asked_questions: Vec::new(),
            skipped_items: Vec::new(),
            current_question_id: None,
            priority_items: Vec::new(),
            priority_modules: Vec::new(),
            responses: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Move to `next` if it is later than the current phase. Returns whether
    /// the phase changed; a request to move backward or stay is ignored.
    pub fn advance_to(&mut self, next: InterviewPhase) -> bool {
        if next > self.phase {
            self.phase = next;
            true
        } else {
            false
        }
    }

    pub fn is_asked(&self, id: &str) -> bool {
        self.asked_questions.iter().any(|q| q == id)
    }

    pub fn is_skipped(&self, id: &str) -> bool {
        self.skipped_items.iter().any(|q| q == id)
    }

    pub fn mark_asked(&mut self, id: &str) {
        if !self.is_asked(id) {
            self.asked_questions.push(id.to_string());
        }
    }

    /// Append `id` to `skipped_items`. Returns false when the id was already
    /// skipped or has already been asked.
    pub fn mark_skipped(&mut self, id: &str) -> bool {
        if self.is_skipped(id) || self.is_asked(id) {
            return false;
        }
        self.skipped_items.push(id.to_string());
        true
    }

    pub fn add_positive_screen(&mut self, module_id: &str) {
        if !self.positive_screens.iter().any(|m| m == module_id) {
            self.positive_screens.push(module_id.to_string());
        }
    }

    pub fn add_negative_screen(&mut self, module_id: &str) {
        if !self.negative_screens.iter().any(|m| m == module_id) {
            self.negative_screens.push(module_id.to_string());
        }
    }

    pub fn module_index(&self, module_id: &str) -> usize {
        self.module_progress.get(module_id).copied().unwrap_or(0)
    }

    /// Record `index` as the next question for `module_id`. Indices never
    /// move backward.
    pub fn set_module_index(&mut self, module_id: &str, index: usize) {
        let entry = self.module_progress.entry(module_id.to_string()).or_insert(0);
        if index > *entry {
            *entry = index;
        }
    }

    pub fn is_deployed(&self, module_id: &str) -> bool {
        self.deployed_modules.iter().any(|m| m == module_id)
    }

    pub fn mark_deployed(&mut self, module_id: &str) {
        if !self.is_deployed(module_id) {
            self.deployed_modules.push(module_id.to_string());
        }
        if self.current_module.as_deref() == Some(module_id) {
            self.current_module = None;
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = jiff::Timestamp::now();
    }
}
