use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::interview::InterviewPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepAction {
    AskQuestion,
    Transition,
    Complete,
}

/// Position within a deep-dive module, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModuleProgress {
    pub current: usize,
    pub total: usize,
}

/// What the caller should do next in an interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NextStep {
    pub phase: InterviewPhase,
    pub action: StepAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ModuleProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_assessed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_screens: Option<Vec<String>>,
    #[serde(default)]
    pub ready_for_diagnosis: bool,
}

impl NextStep {
    pub fn ask(phase: InterviewPhase, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            phase,
            action: StepAction::AskQuestion,
            question_id: Some(id.into()),
            question_text: Some(text.into()),
            module_id: None,
            progress: None,
            modules_assessed: None,
            positive_screens: None,
            ready_for_diagnosis: false,
        }
    }

    pub fn with_module(mut self, module_id: impl Into<String>, progress: ModuleProgress) -> Self {
        self.module_id = Some(module_id.into());
        self.progress = Some(progress);
        self
    }

    /// The phase just changed to `phase`; call again for its first question.
    pub fn transition(phase: InterviewPhase) -> Self {
        Self {
            phase,
            action: StepAction::Transition,
            question_id: None,
            question_text: None,
            module_id: None,
            progress: None,
            modules_assessed: None,
            positive_screens: None,
            ready_for_diagnosis: phase.is_terminal(),
        }
    }

    pub fn complete(modules_assessed: Vec<String>, positive_screens: Vec<String>) -> Self {
        Self {
            phase: InterviewPhase::Summary,
            action: StepAction::Complete,
            question_id: None,
            question_text: None,
            module_id: None,
            progress: None,
            modules_assessed: Some(modules_assessed),
            positive_screens: Some(positive_screens),
            ready_for_diagnosis: true,
        }
    }
}
